use iced::widget::text_input;
use iced::Length;

use crate::{component::text, theme, widget::*};

/// A text input with an optional error caption rendered below it.
pub struct Form<'a, Message> {
    input: TextInput<'a, Message>,
    error: Option<&'a str>,
}

impl<'a, Message: 'a> Form<'a, Message>
where
    Message: Clone,
{
    /// Creates a new [`Form`].
    ///
    /// It expects:
    /// - a placeholder
    /// - the current value
    /// - a function that produces a message when the [`Form`] changes
    pub fn new<F>(placeholder: &str, value: &str, on_change: F) -> Self
    where
        F: 'a + Fn(String) -> Message,
    {
        Self {
            input: TextInput::new(placeholder, value).on_input(on_change),
            error: None,
        }
    }

    /// Sets the error message displayed under the input. The input is drawn
    /// with the invalid style while an error is set.
    pub fn maybe_error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    /// Sets the message produced when the user presses Enter in the input.
    pub fn on_submit(mut self, message: Message) -> Self {
        self.input = self.input.on_submit(message);
        self
    }

    pub fn id(mut self, id: text_input::Id) -> Self {
        self.input = self.input.id(id);
        self
    }

    /// Sets the padding of the [`Form`].
    pub fn padding(mut self, units: u16) -> Self {
        self.input = self.input.padding(units);
        self
    }

    /// Sets the [`Form`] with a text size
    pub fn size(mut self, size: u16) -> Self {
        self.input = self.input.size(size);
        self
    }
}

impl<'a, Message: 'a + Clone> From<Form<'a, Message>> for Element<'a, Message> {
    fn from(form: Form<'a, Message>) -> Element<'a, Message> {
        let invalid = form.error.is_some();
        Container::new(
            Column::new()
                .push(if invalid {
                    form.input.style(theme::text_input::invalid)
                } else {
                    form.input
                })
                .push_maybe(
                    form.error
                        .map(|message| text::caption(message).style(theme::text::danger)),
                )
                .width(Length::Fill)
                .spacing(5),
        )
        .width(Length::Fill)
        .into()
    }
}
