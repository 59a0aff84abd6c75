use std::fmt::Display;

use iced::{advanced::text::Shaping, Font};

use crate::{font, widget::Text};

pub const TITLE_SIZE: u16 = 22;
pub const BODY_SIZE: u16 = 16;
pub const SMALL_SIZE: u16 = 13;
pub const CAPTION_SIZE: u16 = 12;

fn styled<'a>(content: impl Display, font: Font, size: u16) -> Text<'a> {
    Text::new(content.to_string())
        .shaping(Shaping::Advanced)
        .font(font)
        .size(size)
}

/// Screen and dialog titles.
pub fn title<'a>(content: impl Display) -> Text<'a> {
    styled(content, font::SEMIBOLD, TITLE_SIZE)
}

/// Field labels, user names and button captions.
pub fn label<'a>(content: impl Display) -> Text<'a> {
    styled(content, font::MEDIUM, BODY_SIZE)
}

pub fn body<'a>(content: impl Display) -> Text<'a> {
    styled(content, font::REGULAR, BODY_SIZE)
}

pub fn small<'a>(content: impl Display) -> Text<'a> {
    styled(content, font::REGULAR, SMALL_SIZE)
}

pub fn caption<'a>(content: impl Display) -> Text<'a> {
    styled(content, font::REGULAR, CAPTION_SIZE)
}
