use iced::widget::{center, mouse_area, opaque, stack};

use crate::{theme, widget::*};

/// Lays `content` over `base`, dimming the base layer and capturing every
/// event that reaches it. Pressing the backdrop produces the `on_blur`
/// message, if any.
pub struct Modal<'a, Message> {
    base: Element<'a, Message>,
    content: Element<'a, Message>,
    on_blur: Option<Message>,
}

impl<'a, Message> Modal<'a, Message> {
    pub fn new(
        base: impl Into<Element<'a, Message>>,
        content: impl Into<Element<'a, Message>>,
    ) -> Self {
        Self {
            base: base.into(),
            content: content.into(),
            on_blur: None,
        }
    }

    pub fn on_blur(mut self, message: Option<Message>) -> Self {
        self.on_blur = message;
        self
    }
}

impl<'a, Message: Clone + 'a> From<Modal<'a, Message>> for Element<'a, Message> {
    fn from(modal: Modal<'a, Message>) -> Element<'a, Message> {
        let backdrop = center(opaque(modal.content)).style(theme::container::backdrop);
        let backdrop = if let Some(message) = modal.on_blur {
            mouse_area(backdrop).on_press(message)
        } else {
            mouse_area(backdrop)
        };
        stack![modal.base, opaque(backdrop)].into()
    }
}
