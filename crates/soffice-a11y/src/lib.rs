//! Screen reader adaptation of the LibreOffice accessibility tree.
//!
//! The office suite is reachable through IAccessible2 and, in older builds,
//! the Java Access Bridge. Both report roles, states and text attributes with
//! vendor quirks. This crate decides how those objects should be presented:
//! which behaviors to layer over them, which states and names to correct, how
//! to format a run of text, and when to announce a multi-cell selection.
//!
//! The accessibility API itself is reached through the [`AccessibleText`] and
//! [`AccessibleTable2`] traits; the host implements them over its own bindings.
//!
//! # Architecture
//!
//! ```text
//! Screen reader host
//!     └── soffice-a11y (this crate): overlays, states, runs, selection
//!           └── soffice-a11y-core: cell labels, attribute parsing
//! ```
//!
//! # Example
//!
//! ```rust
//! use soffice_a11y::object::{choose_overlays, ObjectInfo, Overlay, Role, Technology};
//! use soffice_a11y::table::SelectionTracker;
//!
//! let cell = ObjectInfo::new(Technology::Ia2, Role::TableCell, "SALFRAME");
//! assert_eq!(choose_overlays(&cell), vec![Overlay::TableCell]);
//!
//! let mut tracker = SelectionTracker::new();
//! let selected = vec!["A1".to_string(), "B2".to_string()];
//! assert_eq!(
//!     tracker.on_selection_changed(&selected).as_deref(),
//!     Some("selected cells: A1 to B2")
//! );
//! ```

pub mod config;
pub mod error;
pub mod object;
pub mod table;
pub mod text;

pub use config::{AdapterConfig, EmptyRunPolicy};
pub use error::{AdapterError, Result};
pub use object::{choose_overlays, normalize_on_init, ObjectInfo, Overlay, Role, State, States};
pub use table::{AccessibleTable2, SelectionTracker};
pub use text::{AccessibleText, DocumentState, SymphonyText};

pub use soffice_a11y_core::{AttributeRun, CellCoordinate, FormatField, FormatKey};
