//! Text formatting: attribute strings, runs and the derived formatting record
//!
//! - [`split_attributes`] - Parse an IAccessible2 attribute string
//! - [`parse`] - Derive a [`FormatField`] from raw attributes
//! - [`AttributeRun`] - A formatted span of text

mod attribs;
mod field;
mod parser;
mod run;

pub use attribs::{split_attributes, AttrValue, RawAttributes};
pub use field::{Decoration, FormatField, FormatKey, FormatValue, TextPosition};
pub use parser::{keys, parse, NumberingInfo, ParseContext};
pub use run::AttributeRun;
