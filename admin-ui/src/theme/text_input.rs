use iced::{
    widget::text_input::{Catalog, Status, Style, StyleFn},
    Background, Border, Color,
};

use super::{palette::InputColors, Theme, RADIUS};

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    text_input(&theme.colors.inputs.normal, status)
}

/// Used while the field carries an error.
pub fn invalid(theme: &Theme, status: Status) -> Style {
    text_input(&theme.colors.inputs.invalid, status)
}

fn text_input(c: &InputColors, status: Status) -> Style {
    let border = match status {
        Status::Focused { .. } => c.focused_border,
        _ => c.border,
    };
    let value = match status {
        Status::Disabled => Color { a: 0.4, ..c.value },
        _ => c.value,
    };
    Style {
        background: Background::Color(c.background),
        border: Border {
            radius: RADIUS.into(),
            width: 1.0,
            color: border,
        },
        icon: c.placeholder,
        placeholder: c.placeholder,
        value,
        selection: c.selection,
    }
}
