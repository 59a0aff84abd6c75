use iced::Color;

use crate::color;

/// Every color the console draws with, grouped by the widget using it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub page: Color,
    pub divider: Color,
    pub backdrop: Color,
    pub text: TextColors,
    pub buttons: Buttons,
    pub inputs: Inputs,
    pub radio: RadioColors,
    pub dialog: DialogColors,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextColors {
    pub normal: Color,
    pub muted: Color,
    pub accent: Color,
    pub danger: Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: ButtonColors,
    pub secondary: ButtonColors,
    pub ghost: ButtonColors,
}

/// Button colors at rest and under the cursor. A pressed button keeps its
/// hover colors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonColors {
    pub rest: ButtonState,
    pub hover: ButtonState,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonState {
    pub background: Color,
    pub text: Color,
    pub border: Option<Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Inputs {
    pub normal: InputColors,
    pub invalid: InputColors,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InputColors {
    pub background: Color,
    pub border: Color,
    pub focused_border: Color,
    pub placeholder: Color,
    pub value: Color,
    pub selection: Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RadioColors {
    pub dot: Color,
    pub ring: Color,
    pub label: Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DialogColors {
    pub background: Color,
    pub border: Color,
}

impl Default for Palette {
    fn default() -> Self {
        let field = InputColors {
            background: color::INK,
            border: color::EDGE,
            focused_border: color::TEAL,
            placeholder: color::MUTED,
            value: color::PAPER,
            selection: color::TEAL_DEEP,
        };

        Self {
            page: color::INK,
            divider: color::PANEL,
            backdrop: color::BACKDROP,
            text: TextColors {
                normal: color::PAPER,
                muted: color::MUTED,
                accent: color::TEAL,
                danger: color::CORAL,
            },
            buttons: Buttons {
                primary: ButtonColors {
                    rest: ButtonState {
                        background: color::TEAL,
                        text: color::INK,
                        border: None,
                    },
                    hover: ButtonState {
                        background: color::TEAL_DEEP,
                        text: color::INK,
                        border: None,
                    },
                },
                secondary: ButtonColors {
                    rest: ButtonState {
                        background: color::TRANSPARENT,
                        text: color::PAPER,
                        border: Some(color::EDGE),
                    },
                    hover: ButtonState {
                        background: color::TRANSPARENT,
                        text: color::TEAL,
                        border: Some(color::TEAL),
                    },
                },
                ghost: ButtonColors {
                    rest: ButtonState {
                        background: color::TRANSPARENT,
                        text: color::MUTED,
                        border: None,
                    },
                    hover: ButtonState {
                        background: color::TRANSPARENT,
                        text: color::PAPER,
                        border: None,
                    },
                },
            },
            inputs: Inputs {
                normal: field,
                invalid: InputColors {
                    border: color::CORAL,
                    focused_border: color::CORAL,
                    ..field
                },
            },
            radio: RadioColors {
                dot: color::TEAL,
                ring: color::EDGE,
                label: color::PAPER,
            },
            dialog: DialogColors {
                background: color::PANEL,
                border: color::EDGE,
            },
        }
    }
}
