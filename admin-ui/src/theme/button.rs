use iced::widget::button::{Catalog, Status, Style, StyleFn};
use iced::{Background, Border, Color};

use super::palette::{ButtonColors, ButtonState};
use super::{Theme, RADIUS};

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
    button(&theme.colors.buttons.primary, status)
}

pub fn secondary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.secondary, status)
}

pub fn ghost(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.ghost, status)
}

fn from_state(s: &ButtonState) -> Style {
    Style {
        background: Some(Background::Color(s.background)),
        text_color: s.text,
        border: s
            .border
            .map(|color| Border {
                radius: RADIUS.into(),
                width: 1.0,
                color,
            })
            .unwrap_or(Border {
                radius: RADIUS.into(),
                ..Default::default()
            }),
        ..Default::default()
    }
}

fn button(c: &ButtonColors, status: Status) -> Style {
    match status {
        Status::Active => from_state(&c.rest),
        Status::Hovered | Status::Pressed => from_state(&c.hover),
        Status::Disabled => {
            let rest = from_state(&c.rest);
            Style {
                text_color: Color {
                    a: 0.4,
                    ..rest.text_color
                },
                ..rest
            }
        }
    }
}
