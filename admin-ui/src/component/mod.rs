pub mod button;
pub mod form;
pub mod text;

use iced::{widget::Space, Length};

use crate::{theme, widget::*};

/// One pixel horizontal rule between list rows.
pub fn divider<'a, T: 'a>() -> Container<'a, T> {
    Container::new(Space::with_height(Length::Fixed(1.0)))
        .style(theme::container::divider)
        .width(Length::Fill)
}

/// Bordered card holding a dialog's content.
pub fn dialog<'a, T: 'a>(content: impl Into<Element<'a, T>>) -> Container<'a, T> {
    Container::new(content)
        .padding(15)
        .style(theme::container::dialog)
}
