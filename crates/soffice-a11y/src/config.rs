//! Adapter configuration.

/// What to do with a run whose attribute string is empty
///
/// The office suite reports no attributes for some offsets (typically the
/// position just past a formatting change). Reusing the previous offset's
/// attributes keeps the reported formatting stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EmptyRunPolicy {
    /// Use the attributes of `offset - 1` when `offset > 0`
    #[default]
    ReusePrevious,
    /// Report the run without formatting
    Keep,
}

/// Toggles for the workarounds applied to the office suite's tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AdapterConfig {
    /// Handling of runs without attributes. Default: reuse previous.
    pub empty_run_policy: EmptyRunPolicy,
    /// Report an empty first line as one character long so its list prefix
    /// is still fetched. Default: true.
    pub pad_empty_first_line: bool,
    /// Announce "selected cells: X to Y" for multi-cell selections. Default: true.
    pub announce_selection_ranges: bool,
    /// Mark a focused, selectable cell as selected. Default: true.
    pub synthesize_selected_state: bool,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            empty_run_policy: EmptyRunPolicy::ReusePrevious,
            pad_empty_first_line: true,
            announce_selection_ranges: true,
            synthesize_selected_state: true,
        }
    }
}
