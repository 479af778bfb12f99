//! Run resolution against an in-memory text source.

use pretty_assertions::assert_eq;
use soffice_a11y_core::format::{Decoration, FormatField, FormatKey, RawAttributes};
use soffice_a11y_core::Rgb;
use soffice_a11y::text::{AccessibleText, DocumentState, SymphonyText};
use soffice_a11y::{AdapterConfig, AdapterError, EmptyRunPolicy, Result};

/// A text object with fixed attribute runs
#[derive(Default)]
struct FakeText {
    runs: Vec<(usize, usize, &'static str)>,
    links: Vec<(usize, usize)>,
    broken_offsets: Vec<usize>,
    links_broken: bool,
    lines: Vec<(usize, usize)>,
    length: usize,
}

impl AccessibleText for FakeText {
    fn attributes(&self, offset: usize) -> Result<(usize, usize, String)> {
        if self.broken_offsets.contains(&offset) {
            return Err(AdapterError::call_failed("attributes"));
        }
        self.runs
            .iter()
            .find(|(start, end, _)| (*start..*end).contains(&offset) || (*start == *end && *start == offset))
            .map(|(start, end, attrs)| (*start, *end, attrs.to_string()))
            .ok_or_else(|| AdapterError::call_failed(format!("no run at {offset}")))
    }

    fn hyperlink_index(&self, offset: usize) -> Result<Option<usize>> {
        if self.links_broken {
            return Err(AdapterError::call_failed("hyperlinkIndex"));
        }
        Ok(self
            .links
            .iter()
            .position(|(start, end)| (*start..*end).contains(&offset)))
    }

    fn line_offsets(&self, offset: usize) -> Result<(usize, usize)> {
        self.lines
            .iter()
            .copied()
            .find(|(start, end)| (*start..=*end).contains(&offset))
            .ok_or_else(|| AdapterError::call_failed("no line"))
    }

    fn story_length(&self) -> Result<usize> {
        Ok(self.length)
    }
}

fn paragraph() -> FakeText {
    FakeText {
        runs: vec![
            (0, 5, "CharFontName:Liberation Serif;CharHeight:12;CharWeight:150;Numbering:NumberingPrefix=1.,BulletChar=;"),
            (5, 6, ""),
            (6, 11, "CharPosture:2;CharUnderline:10;CharColor:#FF0000;"),
        ],
        links: vec![(6, 11)],
        lines: vec![(0, 11)],
        length: 11,
        ..Default::default()
    }
}

#[test]
fn test_first_run_gets_list_prefix() {
    let text = SymphonyText::new(paragraph());
    let run = text.format_run(0, (0, 11), &DocumentState::default()).unwrap();

    assert_eq!(run.range(), 0..5);
    let field = run.formatting();
    assert_eq!(field.font_name.as_deref(), Some("Liberation Serif"));
    assert_eq!(field.font_size.as_deref(), Some("12pt"));
    assert_eq!(field.bold, Some(true));
    assert_eq!(field.line_prefix.as_deref(), Some("1."));
    assert_eq!(field.link, None);
}

#[test]
fn test_prefix_only_on_first_offset() {
    let text = SymphonyText::new(paragraph());
    let run = text.format_run(3, (0, 11), &DocumentState::default()).unwrap();
    assert_eq!(run.formatting().line_prefix, None);
    assert_eq!(run.formatting().bold, Some(true));
}

#[test]
fn test_empty_run_reuses_previous_attributes() {
    let text = SymphonyText::new(paragraph());
    let run = text.format_run(5, (0, 11), &DocumentState::default()).unwrap();
    assert_eq!(run.range(), 5..6);
    assert_eq!(run.formatting().bold, Some(true));
    assert_eq!(run.formatting().font_name.as_deref(), Some("Liberation Serif"));
}

#[test]
fn test_empty_run_kept_when_configured() {
    let config = AdapterConfig {
        empty_run_policy: EmptyRunPolicy::Keep,
        ..Default::default()
    };
    let text = SymphonyText::with_config(paragraph(), config);
    let run = text.format_run(5, (0, 11), &DocumentState::default()).unwrap();
    assert_eq!(run.formatting(), &FormatField::new());
}

#[test]
fn test_link_and_spelling_run() {
    let text = SymphonyText::new(paragraph());
    let run = text.format_run(7, (0, 11), &DocumentState::default()).unwrap();
    let field = run.formatting();
    assert_eq!(field.link, Some(true));
    assert_eq!(field.italic, Some(true));
    assert_eq!(field.decoration, Some(Decoration::InvalidSpelling));
    assert!(!field.contains(FormatKey::Underline));
    assert_eq!(field.color, Some(Rgb::RED));
}

#[test]
fn test_failed_hyperlink_lookup_means_no_link() {
    let text = SymphonyText::new(FakeText {
        links_broken: true,
        ..paragraph()
    });
    let run = text.format_run(7, (0, 11), &DocumentState::default()).unwrap();
    assert_eq!(run.formatting().link, None);
}

#[test]
fn test_source_error_gives_unformatted_fallback() {
    let text = SymphonyText::new(FakeText {
        broken_offsets: vec![2],
        ..paragraph()
    });
    let run = text.format_run(2, (0, 11), &DocumentState::default()).unwrap();
    assert_eq!(run.range(), 0..11);
    assert!(run.formatting().is_empty());

    // An empty fallback still yields a one-character run.
    let run = text.format_run(2, (4, 4), &DocumentState::default()).unwrap();
    assert_eq!(run.range(), 4..5);
    assert!(run.formatting().is_empty());
}

#[test]
fn test_zero_length_run_at_end_of_text_is_widened() {
    let text = SymphonyText::new(FakeText {
        runs: vec![(0, 11, "CharHeight:12;"), (11, 11, "CharWeight:150;")],
        lines: vec![(0, 11)],
        length: 11,
        ..Default::default()
    });
    let run = text.format_run(11, (11, 11), &DocumentState::default()).unwrap();
    assert_eq!(run.range(), 11..12);
    assert_eq!(run.formatting().bold, Some(true));
}

#[test]
fn test_page_and_line_numbers_need_focus() {
    let text = SymphonyText::new(paragraph());
    let mut doc = DocumentState {
        has_focus: false,
        document_attributes: Some(RawAttributes::parse("page-number:4;line-number:12;")),
    };

    let run = text.format_run(3, (0, 11), &doc).unwrap();
    assert_eq!(run.formatting().page_number, None);

    doc.has_focus = true;
    let run = text.format_run(3, (0, 11), &doc).unwrap();
    assert_eq!(run.formatting().page_number.as_deref(), Some("4"));
    assert_eq!(run.formatting().line_number.as_deref(), Some("12"));

    doc.document_attributes = None;
    let run = text.format_run(3, (0, 11), &doc).unwrap();
    assert_eq!(run.formatting().page_number, None);
}

fn empty_list_item() -> FakeText {
    FakeText {
        runs: vec![(0, 0, "Numbering:NumberingPrefix=,BulletChar=•;")],
        lines: vec![(0, 0)],
        length: 0,
        ..Default::default()
    }
}

#[test]
fn test_empty_line_is_padded() {
    let text = SymphonyText::new(empty_list_item());
    assert_eq!(text.line_offsets(0).unwrap(), (0, 1));
    assert_eq!(text.story_length().unwrap(), 1);

    let run = text.format_run(0, (0, 1), &DocumentState::default()).unwrap();
    assert_eq!(run.range(), 0..1);
    assert_eq!(run.formatting().line_prefix.as_deref(), Some("•"));
}

#[test]
fn test_empty_line_unpadded_when_disabled() {
    let config = AdapterConfig {
        pad_empty_first_line: false,
        ..Default::default()
    };
    let text = SymphonyText::with_config(empty_list_item(), config);
    assert_eq!(text.line_offsets(0).unwrap(), (0, 0));
    assert_eq!(text.story_length().unwrap(), 0);

    // Line padding is off, but the run itself is never empty.
    let run = text.format_run(0, (0, 1), &DocumentState::default()).unwrap();
    assert_eq!(run.range(), 0..1);
    assert_eq!(run.formatting().line_prefix.as_deref(), Some("•"));
}
