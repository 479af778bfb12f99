//! Formatting records for text runs

use crate::style::Rgb;
use std::fmt;
use std::str::FromStr;

/// The closed set of formatting attributes a run can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FormatKey {
    FontName,
    FontSize,
    Bold,
    Italic,
    Underline,
    InvalidSpelling,
    Strikethrough,
    TextPosition,
    Color,
    BackgroundColor,
    Link,
    LinePrefix,
    PageNumber,
    LineNumber,
    HeadingLevel,
}

impl FormatKey {
    /// Every key, in reporting order
    pub const ALL: [FormatKey; 15] = [
        FormatKey::FontName,
        FormatKey::FontSize,
        FormatKey::Bold,
        FormatKey::Italic,
        FormatKey::Underline,
        FormatKey::InvalidSpelling,
        FormatKey::Strikethrough,
        FormatKey::TextPosition,
        FormatKey::Color,
        FormatKey::BackgroundColor,
        FormatKey::Link,
        FormatKey::LinePrefix,
        FormatKey::PageNumber,
        FormatKey::LineNumber,
        FormatKey::HeadingLevel,
    ];

    /// The attribute name the screen reader expects
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatKey::FontName => "font-name",
            FormatKey::FontSize => "font-size",
            FormatKey::Bold => "bold",
            FormatKey::Italic => "italic",
            FormatKey::Underline => "underline",
            FormatKey::InvalidSpelling => "invalid-spelling",
            FormatKey::Strikethrough => "strikethrough",
            FormatKey::TextPosition => "text-position",
            FormatKey::Color => "color",
            FormatKey::BackgroundColor => "background-color",
            FormatKey::Link => "link",
            FormatKey::LinePrefix => "line-prefix",
            FormatKey::PageNumber => "page-number",
            FormatKey::LineNumber => "line-number",
            FormatKey::HeadingLevel => "heading-level",
        }
    }
}

impl fmt::Display for FormatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or(())
    }
}

/// Vertical position of text relative to the baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TextPosition {
    Baseline,
    Sub,
    Super,
}

impl TextPosition {
    /// Classify a character escapement (percent of font height)
    pub fn from_escapement(escapement: i32) -> Self {
        match escapement.signum() {
            -1 => TextPosition::Sub,
            1 => TextPosition::Super,
            _ => TextPosition::Baseline,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TextPosition::Baseline => "baseline",
            TextPosition::Sub => "sub",
            TextPosition::Super => "super",
        }
    }
}

/// Underline state of a run
///
/// Spelling errors are drawn as a wave underline, so a run reports either an
/// underline or a spelling error, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decoration {
    Underline(bool),
    InvalidSpelling,
}

/// A single formatting value
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FormatValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Color(Rgb),
    TextPosition(TextPosition),
}

impl FormatValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FormatValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormatValue::Text(s) => Some(s),
            FormatValue::TextPosition(p) => Some(p.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for FormatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatValue::Text(s) => f.write_str(s),
            FormatValue::Number(n) => write!(f, "{n}"),
            FormatValue::Bool(b) => write!(f, "{b}"),
            FormatValue::Color(c) => write!(f, "{c}"),
            FormatValue::TextPosition(p) => f.write_str(p.as_str()),
        }
    }
}

/// Formatting of one run of text
///
/// Absent fields mean "not reported", which is different from `false`:
/// `bold` is only ever reported as `true`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatField {
    pub font_name: Option<String>,
    /// Font size with its unit, e.g. "12pt"
    pub font_size: Option<String>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub decoration: Option<Decoration>,
    pub strikethrough: Option<bool>,
    pub text_position: Option<TextPosition>,
    pub color: Option<Rgb>,
    pub background_color: Option<Rgb>,
    pub link: Option<bool>,
    /// List item prefix, only on the first offset of a paragraph
    pub line_prefix: Option<String>,
    pub page_number: Option<String>,
    pub line_number: Option<String>,
    pub heading_level: Option<u32>,
}

impl FormatField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up one attribute by key
    pub fn get(&self, key: FormatKey) -> Option<FormatValue> {
        let text = |s: &Option<String>| s.clone().map(FormatValue::Text);
        match key {
            FormatKey::FontName => text(&self.font_name),
            FormatKey::FontSize => text(&self.font_size),
            FormatKey::Bold => self.bold.map(FormatValue::Bool),
            FormatKey::Italic => self.italic.map(FormatValue::Bool),
            FormatKey::Underline => match self.decoration {
                Some(Decoration::Underline(on)) => Some(FormatValue::Bool(on)),
                _ => None,
            },
            FormatKey::InvalidSpelling => match self.decoration {
                Some(Decoration::InvalidSpelling) => Some(FormatValue::Bool(true)),
                _ => None,
            },
            FormatKey::Strikethrough => self.strikethrough.map(FormatValue::Bool),
            FormatKey::TextPosition => self.text_position.map(FormatValue::TextPosition),
            FormatKey::Color => self.color.map(FormatValue::Color),
            FormatKey::BackgroundColor => self.background_color.map(FormatValue::Color),
            FormatKey::Link => self.link.map(FormatValue::Bool),
            FormatKey::LinePrefix => text(&self.line_prefix),
            FormatKey::PageNumber => text(&self.page_number),
            FormatKey::LineNumber => text(&self.line_number),
            FormatKey::HeadingLevel => self.heading_level.map(|l| FormatValue::Number(l as f64)),
        }
    }

    /// Whether an attribute is reported
    pub fn contains(&self, key: FormatKey) -> bool {
        self.get(key).is_some()
    }

    /// All reported attributes, in [`FormatKey::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (FormatKey, FormatValue)> + '_ {
        FormatKey::ALL
            .iter()
            .filter_map(move |key| self.get(*key).map(|value| (*key, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}
