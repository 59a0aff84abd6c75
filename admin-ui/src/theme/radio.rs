use iced::{
    widget::radio::{Catalog, Status, Style, StyleFn},
    Background,
};

use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

/// The ring takes the dot color under the cursor.
pub fn primary(theme: &Theme, status: Status) -> Style {
    let c = &theme.colors.radio;
    Style {
        background: Background::Color(theme.colors.page),
        dot_color: c.dot,
        border_width: 1.0,
        border_color: match status {
            Status::Hovered { .. } => c.dot,
            Status::Active { .. } => c.ring,
        },
        text_color: Some(c.label),
    }
}
