//! Formatted text of office-suite text objects.
//!
//! [`SymphonyText`] wraps an [`AccessibleText`] source and resolves the
//! formatting of the run at an offset. It also covers two gaps in what the
//! office suite reports:
//!
//! - offsets with an empty attribute string, handled per [`EmptyRunPolicy`]
//! - empty lines, which expose no characters at all and would otherwise never
//!   have their list prefix fetched

use soffice_a11y_core::format::{parse, AttributeRun, FormatField, ParseContext, RawAttributes};

use crate::config::{AdapterConfig, EmptyRunPolicy};
use crate::error::Result;

/// Object attribute carrying the outline level of a heading paragraph
pub const HEADING_LEVEL: &str = "heading-level";
/// Document attribute carrying the page number at the caret
pub const PAGE_NUMBER: &str = "page-number";
/// Document attribute carrying the line number at the caret
pub const LINE_NUMBER: &str = "line-number";

/// The accessible text interface of an object
pub trait AccessibleText {
    /// Attribute string of the run containing `offset`, with the run's bounds
    fn attributes(&self, offset: usize) -> Result<(usize, usize, String)>;

    /// Index of the hyperlink at `offset`, or `None` outside any link
    fn hyperlink_index(&self, offset: usize) -> Result<Option<usize>>;

    /// Bounds of the line containing `offset`
    fn line_offsets(&self, offset: usize) -> Result<(usize, usize)>;

    /// Number of characters in the text
    fn story_length(&self) -> Result<usize>;
}

/// Document-level facts needed while resolving a run
#[derive(Debug, Clone, Default)]
pub struct DocumentState {
    /// The text object has focus
    pub has_focus: bool,
    /// Attributes of the root document object, when it can be reached cheaply
    pub document_attributes: Option<RawAttributes>,
}

impl DocumentState {
    fn document_text(&self, key: &str) -> Option<String> {
        self.document_attributes
            .as_ref()
            .and_then(|attrs| attrs.text(key))
            .map(str::to_string)
    }
}

/// Outline position of a heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionInfo {
    pub level: u32,
}

/// Position info from an object's attributes
///
/// Returns `None` when the object is not a heading, leaving the generic
/// position info in place.
pub fn position_info(object_attributes: &RawAttributes) -> Option<PositionInfo> {
    let level = object_attributes.text(HEADING_LEVEL)?;
    match level.trim().parse() {
        Ok(level) => Some(PositionInfo { level }),
        Err(_) => {
            tracing::trace!("ignoring malformed heading level {level:?}");
            None
        }
    }
}

/// Text of an office-suite object
#[derive(Debug)]
pub struct SymphonyText<T> {
    source: T,
    config: AdapterConfig,
}

impl<T: AccessibleText> SymphonyText<T> {
    pub fn new(source: T) -> Self {
        Self::with_config(source, AdapterConfig::default())
    }

    pub fn with_config(source: T, config: AdapterConfig) -> Self {
        Self { source, config }
    }

    pub fn source(&self) -> &T {
        &self.source
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Resolve the formatted run containing `offset`
    ///
    /// If the source cannot report attributes, an unformatted run over
    /// `fallback` is returned instead. An empty range from either source is
    /// widened to cover the one character at its start.
    pub fn format_run(
        &self,
        offset: usize,
        fallback: (usize, usize),
        doc: &DocumentState,
    ) -> Result<AttributeRun> {
        let (start, end, mut attribs) = match self.source.attributes(offset) {
            Ok(run) => run,
            Err(err) => {
                tracing::debug!("could not get attributes at offset {offset}: {err}");
                let (start, end) = at_least_one_unit(fallback.0, fallback.1);
                return Ok(AttributeRun::new(start, end, FormatField::new())?);
            }
        };

        if attribs.is_empty() && offset > 0 && self.config.empty_run_policy == EmptyRunPolicy::ReusePrevious {
            match self.source.attributes(offset - 1) {
                Ok((_, _, previous)) => attribs = previous,
                Err(err) => tracing::trace!("no attributes before offset {offset}: {err}"),
            }
        }

        let raw = RawAttributes::parse(&attribs);

        // A hyperlink is assumed to cover the whole run.
        let hyperlink_present_at_offset = match self.source.hyperlink_index(offset) {
            Ok(index) => index.is_some(),
            Err(err) => {
                tracing::trace!("hyperlink lookup failed at offset {offset}: {err}");
                false
            }
        };

        let ctx = ParseContext {
            is_first_offset_of_paragraph: offset == 0,
            has_focus: doc.has_focus,
            document_page_number: doc.document_text(PAGE_NUMBER),
            document_line_number: doc.document_text(LINE_NUMBER),
            hyperlink_present_at_offset,
            numbering: None,
        };
        let formatting = parse(&raw, &ctx);

        let (start, end) = at_least_one_unit(start, end);
        Ok(AttributeRun::new(start, end, formatting)?)
    }

    /// Bounds of the line containing `offset`
    ///
    /// An empty text reports its only line as one character long so that the
    /// list prefix of an empty list item is still spoken.
    pub fn line_offsets(&self, offset: usize) -> Result<(usize, usize)> {
        let (start, end) = self.source.line_offsets(offset)?;
        if self.config.pad_empty_first_line && offset == 0 && start == 0 && end == 0 {
            return Ok((0, 1));
        }
        Ok((start, end))
    }

    /// Length of the text, counting the character added by [`line_offsets`](Self::line_offsets)
    pub fn story_length(&self) -> Result<usize> {
        let len = self.source.story_length()?;
        if self.config.pad_empty_first_line {
            Ok(len.max(1))
        } else {
            Ok(len)
        }
    }
}

fn at_least_one_unit(start: usize, end: usize) -> (usize, usize) {
    if end <= start {
        (start, start + 1)
    } else {
        (start, end)
    }
}
