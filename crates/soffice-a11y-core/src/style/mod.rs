//! Character styling types
//!
//! - [`Rgb`] - Colors reported for text runs
//! - [`uno`] - UNO enum ordinals for character properties

mod color;
pub mod uno;

pub use color::Rgb;
