//! Derivation of a [`FormatField`] from raw run attributes.
//!
//! Every rule reads its own source key and is skipped on its own when that key
//! is absent or malformed. A bad value in one property never blocks the others.

use ahash::AHashMap;

use super::attribs::RawAttributes;
use super::field::{Decoration, FormatField, TextPosition};
use crate::style::uno::{font_slant, font_strikeout, font_underline, font_weight};
use crate::style::Rgb;

/// Source attribute names used by the office suite
pub mod keys {
    pub const CHAR_ESCAPEMENT: &str = "CharEscapement";
    pub const CHAR_FONT_NAME: &str = "CharFontName";
    pub const CHAR_HEIGHT: &str = "CharHeight";
    pub const CHAR_POSTURE: &str = "CharPosture";
    pub const CHAR_STRIKEOUT: &str = "CharStrikeout";
    pub const CHAR_UNDERLINE: &str = "CharUnderline";
    pub const CHAR_WEIGHT: &str = "CharWeight";
    pub const CHAR_COLOR: &str = "CharColor";
    pub const CHAR_BACK_COLOR: &str = "CharBackColor";
    pub const HEADING_LEVEL: &str = "heading-level";
    pub const NUMBERING: &str = "Numbering";
    pub const NUMBERING_PREFIX: &str = "NumberingPrefix";
    pub const BULLET_CHAR: &str = "BulletChar";
}

/// List numbering of the paragraph a run belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberingInfo {
    /// Rendered number, e.g. "1." or "a)"
    pub prefix: Option<String>,
    /// Bullet character for unnumbered lists
    pub bullet_char: Option<String>,
}

impl NumberingInfo {
    /// Read numbering from the nested `Numbering` attribute group
    pub fn from_group(group: &AHashMap<String, String>) -> Self {
        Self {
            prefix: group.get(keys::NUMBERING_PREFIX).cloned(),
            bullet_char: group.get(keys::BULLET_CHAR).cloned(),
        }
    }

    /// The text spoken before the list item: the prefix, else the bullet
    pub fn line_prefix(&self) -> Option<&str> {
        fn non_empty(s: &Option<String>) -> Option<&str> {
            s.as_deref().filter(|s| !s.is_empty())
        }
        non_empty(&self.prefix).or_else(|| non_empty(&self.bullet_char))
    }
}

/// Per-offset facts that are not part of the run's own attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseContext {
    /// The offset is the first one of its paragraph
    pub is_first_offset_of_paragraph: bool,
    /// The text object has keyboard focus
    pub has_focus: bool,
    /// Page number at the caret, as exposed by the document
    pub document_page_number: Option<String>,
    /// Line number at the caret, as exposed by the document
    pub document_line_number: Option<String>,
    /// The offset lies inside a hyperlink
    pub hyperlink_present_at_offset: bool,
    /// Numbering supplied by the caller; falls back to the `Numbering` attribute
    pub numbering: Option<NumberingInfo>,
}

/// Derive the formatting of a run from its raw attributes
///
/// # Examples
/// ```
/// use soffice_a11y_core::format::{parse, ParseContext, RawAttributes, TextPosition};
///
/// let raw = RawAttributes::parse("CharEscapement:-33;CharWeight:150;");
/// let field = parse(&raw, &ParseContext::default());
/// assert_eq!(field.text_position, Some(TextPosition::Sub));
/// assert_eq!(field.bold, Some(true));
/// ```
pub fn parse(raw: &RawAttributes, ctx: &ParseContext) -> FormatField {
    let mut field = FormatField::new();

    if let Some(escapement) = number::<i32>(raw, keys::CHAR_ESCAPEMENT) {
        field.text_position = Some(TextPosition::from_escapement(escapement));
    }

    if let Some(name) = raw.text(keys::CHAR_FONT_NAME) {
        field.font_name = Some(name.to_string());
    }

    if let Some(height) = raw.text(keys::CHAR_HEIGHT) {
        let height = height.trim();
        match height.parse::<f64>() {
            Ok(value) if value.is_finite() => field.font_size = Some(format!("{height}pt")),
            _ => skipped(keys::CHAR_HEIGHT, height),
        }
    }

    if let Some(posture) = number::<i16>(raw, keys::CHAR_POSTURE) {
        field.italic = Some(posture == font_slant::ITALIC);
    }

    if let Some(strikeout) = number::<i16>(raw, keys::CHAR_STRIKEOUT) {
        field.strikethrough = Some(strikeout == font_strikeout::SINGLE);
    }

    if let Some(underline) = number::<i16>(raw, keys::CHAR_UNDERLINE) {
        field.decoration = Some(if underline == font_underline::WAVE {
            Decoration::InvalidSpelling
        } else {
            Decoration::Underline(underline != font_underline::NONE)
        });
    }

    if let Some(weight) = number::<f64>(raw, keys::CHAR_WEIGHT) {
        if weight > font_weight::NORMAL {
            field.bold = Some(true);
        }
    }

    field.color = color(raw, keys::CHAR_COLOR);
    field.background_color = color(raw, keys::CHAR_BACK_COLOR);

    if let Some(level) = number::<u32>(raw, keys::HEADING_LEVEL) {
        field.heading_level = Some(level);
    }

    if ctx.hyperlink_present_at_offset {
        field.link = Some(true);
    }

    if ctx.is_first_offset_of_paragraph {
        let from_attrs = raw.group(keys::NUMBERING).map(NumberingInfo::from_group);
        let numbering = ctx.numbering.as_ref().or(from_attrs.as_ref());
        field.line_prefix = numbering.and_then(NumberingInfo::line_prefix).map(str::to_string);
    }

    if ctx.has_focus {
        field.page_number = ctx.document_page_number.clone();
        field.line_number = ctx.document_line_number.clone();
    }

    field
}

fn number<T: std::str::FromStr>(raw: &RawAttributes, key: &str) -> Option<T> {
    let value = raw.text(key)?.trim();
    match value.parse::<T>() {
        Ok(n) => Some(n),
        Err(_) => {
            skipped(key, value);
            None
        }
    }
}

fn color(raw: &RawAttributes, key: &str) -> Option<Rgb> {
    let value = raw.text(key).filter(|v| !v.trim().is_empty())?;
    match Rgb::from_string(value) {
        Ok(rgb) => Some(rgb),
        Err(err) => {
            tracing::trace!("{key}: {err}");
            None
        }
    }
}

fn skipped(key: &str, value: &str) {
    tracing::trace!("ignoring malformed {key} value {value:?}");
}
