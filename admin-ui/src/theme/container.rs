use iced::widget::container::{transparent, Catalog, Style, StyleFn};
use iced::{Background, Border};

use super::{Theme, RADIUS};

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(transparent)
    }

    fn style(&self, class: &Self::Class<'_>) -> Style {
        class(self)
    }
}

fn filled(color: iced::Color) -> Style {
    Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

pub fn page(theme: &Theme) -> Style {
    filled(theme.colors.page)
}

pub fn divider(theme: &Theme) -> Style {
    filled(theme.colors.divider)
}

/// Dimmed layer drawn over the page while a dialog is open.
pub fn backdrop(theme: &Theme) -> Style {
    filled(theme.colors.backdrop)
}

pub fn dialog(theme: &Theme) -> Style {
    let c = &theme.colors.dialog;
    Style {
        border: Border {
            radius: RADIUS.into(),
            width: 1.0,
            color: c.border,
        },
        ..filled(c.background)
    }
}
