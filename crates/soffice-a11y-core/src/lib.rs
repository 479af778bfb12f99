//! # soffice-a11y-core
//!
//! Pure data transformations used to adapt the LibreOffice accessibility tree
//! for a screen reader.
//!
//! - [`CellCoordinate`] - Decode cell labels such as "AB23" into row and column
//! - [`format::parse`] - Turn raw text attributes into a [`FormatField`]
//! - [`Rgb`] - Colors reported for text runs
//!
//! ## Example
//!
//! ```rust
//! use soffice_a11y_core::format::{parse, ParseContext, RawAttributes};
//! use soffice_a11y_core::CellCoordinate;
//!
//! let coord: CellCoordinate = "AA1".parse().unwrap();
//! assert_eq!((coord.row, coord.column), (1, 27));
//!
//! let raw = RawAttributes::parse("CharFontName:Liberation Sans;CharHeight:12;CharUnderline:10;");
//! let field = parse(&raw, &ParseContext::default());
//! assert_eq!(field.font_size.as_deref(), Some("12pt"));
//! ```

pub mod cell;
pub mod error;
pub mod format;
pub mod style;

pub use cell::{decode_or_unknown, CellCoordinate};
pub use error::{Error, Result};
pub use format::{AttributeRun, Decoration, FormatField, FormatKey, FormatValue, TextPosition};
pub use style::Rgb;
