//! Color representation

use crate::error::{Error, Result};
use crate::style::uno::COLOR_AUTO;
use std::fmt;
use std::str::FromStr;

/// An opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create an RGB color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a color as the accessibility layer reports it
    ///
    /// Accepted forms:
    /// - `#rrggbb` and `#rgb`
    /// - `rgb(r, g, b)` with decimal components
    /// - a decimal UNO color long (`0xRRGGBB`); `-1` (automatic) is rejected
    pub fn from_string(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || Error::InvalidColor(s.to_string());

        if let Some(hex) = s.strip_prefix('#') {
            return Self::from_hex(hex).ok_or_else(invalid);
        }

        if let Some(body) = s
            .strip_prefix("rgb(")
            .or_else(|| s.strip_prefix("RGB("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let mut parts = body.split(',').map(|p| p.trim().parse::<u8>());
            return match (parts.next(), parts.next(), parts.next(), parts.next()) {
                (Some(Ok(r)), Some(Ok(g)), Some(Ok(b)), None) => Ok(Self { r, g, b }),
                _ => Err(invalid()),
            };
        }

        let value: i64 = s.parse().map_err(|_| invalid())?;
        if value == COLOR_AUTO || !(0..=0xFF_FFFF).contains(&value) {
            return Err(invalid());
        }
        Ok(Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        })
    }

    /// Create from a hex string without the `#` prefix ("FF0000" or "F00")
    pub fn from_hex(hex: &str) -> Option<Self> {
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self { r, g, b })
            }
            3 => {
                let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
                Some(Self {
                    r: digit(0)?,
                    g: digit(1)?,
                    b: digit(2)?,
                })
            }
            _ => None,
        }
    }

    /// Convert to hex string (without # prefix)
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}
