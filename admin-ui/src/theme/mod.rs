pub mod button;
pub mod container;
pub mod palette;
pub mod radio;
pub mod text_input;

/// Corner radius shared by buttons, inputs and the dialog card.
pub const RADIUS: f32 = 6.0;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Theme {
    pub colors: palette::Palette,
}

impl iced::application::DefaultStyle for Theme {
    fn default_style(&self) -> iced::application::Appearance {
        iced::application::Appearance {
            background_color: self.colors.page,
            text_color: self.colors.text.normal,
        }
    }
}

pub mod text {
    use iced::widget::text::{Catalog, Style, StyleFn};

    use super::Theme;

    impl Catalog for Theme {
        type Class<'a> = StyleFn<'a, Self>;

        fn default<'a>() -> Self::Class<'a> {
            Box::new(|_: &Theme| Style { color: None })
        }

        fn style(&self, class: &Self::Class<'_>) -> Style {
            class(self)
        }
    }

    pub fn muted(theme: &Theme) -> Style {
        Style {
            color: Some(theme.colors.text.muted),
        }
    }

    pub fn accent(theme: &Theme) -> Style {
        Style {
            color: Some(theme.colors.text.accent),
        }
    }

    pub fn danger(theme: &Theme) -> Style {
        Style {
            color: Some(theme.colors.text.danger),
        }
    }
}
