//! Table and table cell behaviors.
//!
//! Cells reached through the Java Access Bridge carry their coordinates in
//! their name ("Cell B3 "); IAccessible2 cells use the bare label ("B3") as
//! their name. Either way the label is decoded into row and column numbers,
//! with 0 meaning unknown.

use soffice_a11y_core::format::RawAttributes;
use soffice_a11y_core::decode_or_unknown;

use crate::config::AdapterConfig;
use crate::error::Result;
use crate::object::{State, States};

/// Object attribute holding the formula of a spreadsheet cell
pub const FORMULA: &str = "Formula";

/// The coordinate label inside a JAB cell name such as `"Cell B3 "`
pub fn jab_cell_coords_text(name: &str) -> Option<&str> {
    let bytes = name.as_bytes();
    if !name.starts_with("Cell") || bytes.len() < 2 || !bytes[bytes.len() - 2].is_ascii_digit() {
        return None;
    }
    name.get(5..name.len() - 1)
}

/// A table cell reached through the Java Access Bridge
#[derive(Debug, Clone, Default)]
pub struct JabTableCell {
    /// Name as reported, e.g. `"Cell A1 "`
    pub raw_name: Option<String>,
    pub raw_value: Option<String>,
    /// Full text of the cell, used when it reports no value
    pub text: Option<String>,
    pub raw_states: States,
}

impl JabTableCell {
    /// The name, hidden when it only repeats the coordinates
    pub fn name(&self) -> Option<&str> {
        let name = self.raw_name.as_deref()?;
        match jab_cell_coords_text(name) {
            Some(_) => None,
            None => Some(name),
        }
    }

    pub fn coords_text(&self) -> Option<&str> {
        self.raw_name.as_deref().and_then(jab_cell_coords_text)
    }

    pub fn value(&self) -> Option<&str> {
        match self.raw_value.as_deref() {
            Some(value) if !value.is_empty() => Some(value),
            _ => self.text.as_deref(),
        }
    }

    /// Every cell reports itself editable; that is dropped.
    pub fn states(&self) -> States {
        let mut states = self.raw_states.clone();
        states.remove(State::Editable);
        states
    }

    pub fn row_number(&self) -> u32 {
        decode_or_unknown(self.coords_text().unwrap_or_default()).0
    }

    pub fn column_number(&self) -> u32 {
        decode_or_unknown(self.coords_text().unwrap_or_default()).1
    }
}

/// A table reached through the Java Access Bridge
///
/// Its reported dimensions are unusable, so none are reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct JabTable;

impl JabTable {
    pub fn row_count(&self) -> usize {
        0
    }

    pub fn column_count(&self) -> usize {
        0
    }
}

/// A table cell reached through IAccessible2
#[derive(Debug, Clone, Default)]
pub struct TableCell {
    /// Accessible name, which is the cell label ("B3")
    pub raw_name: Option<String>,
    pub raw_states: States,
    pub object_attributes: RawAttributes,
}

impl TableCell {
    /// Always `None`: the name only repeats the coordinates
    pub fn name(&self) -> Option<&str> {
        None
    }

    pub fn coords_text(&self) -> Option<&str> {
        self.raw_name.as_deref()
    }

    pub fn row_number(&self) -> u32 {
        decode_or_unknown(self.coords_text().unwrap_or_default()).0
    }

    pub fn column_number(&self) -> u32 {
        decode_or_unknown(self.coords_text().unwrap_or_default()).1
    }

    /// States with the office suite's quirks corrected
    ///
    /// - multiline and editable are dropped
    /// - a focused, selectable cell is selected even when not reported so,
    ///   since a single focused cell lacks the selected state
    /// - a cell with a formula gains [`State::HasFormula`]
    pub fn states(&self, config: &AdapterConfig) -> States {
        let mut states = self.raw_states.clone();
        states.remove(State::Multiline);
        states.remove(State::Editable);
        if config.synthesize_selected_state
            && !states.contains(State::Selected)
            && states.contains_all(&[State::Focused, State::Selectable])
        {
            states.insert(State::Selected);
        }
        if self.object_attributes.text(FORMULA).is_some_and(|f| !f.is_empty()) {
            states.insert(State::HasFormula);
        }
        states
    }
}

/// The table selection interface (IAccessibleTable2)
pub trait AccessibleTable2 {
    /// Names of the selected cells, in selection order
    fn selected_cells(&self) -> Result<Vec<String>>;

    /// Number of selected cells
    fn selected_cell_count(&self) -> Result<usize>;
}

/// Number of selected items to report for a table
///
/// A single focused cell counts as zero selected cells, and tables without
/// the selection interface report nothing. Both are reported as 1 so that
/// a redundant "selected" is not announced.
pub fn selected_items_count(table: Option<&dyn AccessibleTable2>) -> usize {
    let Some(table) = table else {
        return 1;
    };
    match table.selected_cell_count() {
        Ok(count) if count > 0 => count,
        Ok(_) => 1,
        Err(err) => {
            tracing::debug!("selected cell count unavailable: {err}");
            1
        }
    }
}

/// Announces multi-cell selections once per distinct range
///
/// Adding cells to a selection raises one event per cell; the tracker keeps
/// the last announced first/last cell so the range is only spoken when it
/// changes.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    last_selection: Option<(String, String)>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A plain selection event: forget the remembered range
    ///
    /// The focus change already announces the new single-cell selection.
    pub fn on_selection(&mut self) {
        self.last_selection = None;
    }

    /// Cells were added, removed or changed within the table
    ///
    /// Returns the message to speak, if any. Assumes a contiguous selection.
    pub fn on_selection_changed(&mut self, selected: &[String]) -> Option<String> {
        let (first, last) = match selected {
            [first, .., last] => (first, last),
            _ => return None,
        };

        let current = (first.clone(), last.clone());
        if self.last_selection.as_ref() == Some(&current) {
            return None;
        }

        let message = format!("selected cells: {first} to {last}");
        self.last_selection = Some(current);
        Some(message)
    }

    /// Query the table and report the selection
    pub fn announce(
        &mut self,
        table: Option<&dyn AccessibleTable2>,
        config: &AdapterConfig,
    ) -> Result<Option<String>> {
        if !config.announce_selection_ranges {
            return Ok(None);
        }
        let Some(table) = table else {
            return Ok(None);
        };
        let selected = table.selected_cells()?;
        Ok(self.on_selection_changed(&selected))
    }

    pub fn last_selection(&self) -> Option<(&str, &str)> {
        self.last_selection
            .as_ref()
            .map(|(first, last)| (first.as_str(), last.as_str()))
    }
}
