use iced::{alignment::Horizontal, Alignment, Length};

use crate::{component::text, theme, widget::*};

pub fn primary<'a, T: 'a>(label: &'a str) -> Button<'a, T> {
    centered(text::label(label)).style(theme::button::primary)
}

pub fn secondary<'a, T: 'a>(label: &'a str) -> Button<'a, T> {
    centered(text::body(label)).style(theme::button::secondary)
}

/// Borderless button, used for the dialog close cross.
pub fn ghost<'a, T: 'a>(label: &'a str) -> Button<'a, T> {
    centered(text::body(label)).style(theme::button::ghost)
}

fn centered<'a, T: 'a>(label: Text<'a>) -> Button<'a, T> {
    Button::new(
        Container::new(label.align_x(Alignment::Center))
            .align_x(Horizontal::Center)
            .width(Length::Fill)
            .padding(5),
    )
}
