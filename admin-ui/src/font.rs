use iced::{
    font::{Family, Stretch, Style, Weight},
    Font,
};

// No font files are bundled, the platform sans-serif is used at every weight.
const fn sans(weight: Weight) -> Font {
    Font {
        family: Family::SansSerif,
        weight,
        stretch: Stretch::Normal,
        style: Style::Normal,
    }
}

pub const SEMIBOLD: Font = sans(Weight::Semibold);
pub const MEDIUM: Font = sans(Weight::Medium);
pub const REGULAR: Font = sans(Weight::Normal);
