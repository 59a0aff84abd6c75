use iced::Color;

macro_rules! hex {
    ($hex:literal) => {
        Color::from_rgb(
            (($hex >> 16) & 0xFF) as f32 / 255.0,
            (($hex >> 8) & 0xFF) as f32 / 255.0,
            ($hex & 0xFF) as f32 / 255.0,
        )
    };
}

pub const TRANSPARENT: Color = Color::TRANSPARENT;

/// Page background.
pub const INK: Color = hex!(0x101418);
/// Dialog surface and row dividers.
pub const PANEL: Color = hex!(0x1A1F26);
pub const EDGE: Color = hex!(0x2C333D);
pub const MUTED: Color = hex!(0x8A94A3);
pub const PAPER: Color = hex!(0xE6EAF0);

pub const TEAL: Color = hex!(0x2BB3A3);
pub const TEAL_DEEP: Color = hex!(0x1F8C7F);
pub const CORAL: Color = hex!(0xE5564B);

pub const BACKDROP: Color = Color::from_rgba(0.04, 0.05, 0.06, 0.75);
