//! UNO character property constants.
//!
//! The accessibility layer exposes these enum ordinals as decimal strings in
//! the text attributes of a run (e.g. `CharPosture:2;`).

/// `com.sun.star.awt.FontWeight` — font weight constants.
///
/// Weights are floats in percent of normal; anything above normal reads as bold.
pub mod font_weight {
    /// Normal weight.
    pub const NORMAL: f64 = 100.0;
}

/// `com.sun.star.awt.FontSlant` — font slant (posture) constants.
pub mod font_slant {
    /// Italic.
    pub const ITALIC: i16 = 2;
}

/// `com.sun.star.awt.FontUnderline` — underline style constants.
pub mod font_underline {
    pub const NONE: i16 = 0;
    /// Wave underline; spelling errors are only ever drawn with this style.
    pub const WAVE: i16 = 10;
}

/// `com.sun.star.awt.FontStrikeout` — strikethrough constants.
pub mod font_strikeout {
    pub const SINGLE: i16 = 1;
}

/// Sentinel used by `CharColor`/`CharBackColor` for the automatic color.
pub const COLOR_AUTO: i64 = -1;
