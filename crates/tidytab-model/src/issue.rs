//! Issue records emitted by the cleaning pipeline.
//!
//! Every correction (or detection-only flag) becomes exactly one [`Issue`].
//! Records accumulate in emission order and are serialized once at the end
//! of a run as the issue-log CSV with columns `Row,Column,Issue,Original,Fixed`.

use std::fmt;

/// Marker written in the `Fixed` column when a whole row was dropped.
pub const ROW_REMOVED: &str = "ROW_REMOVED";

/// The closed set of issue kinds the pipeline can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum IssueKind {
    /// A later row shared the primary key of an earlier one and was removed.
    DuplicatePk,
    /// A numeric cell carried an embedded currency symbol before coercion.
    CurrencySymbolRemoved,
    /// A missing numeric cell was filled with the column median.
    MissingNumericFilled,
    /// A value outside the IQR bounds was clamped to the boundary.
    OutlierCapped,
    /// A known-bad categorical spelling was rewritten to its canonical form.
    CategoryNormalised,
    /// A categorical value outside the allowed set; flagged, not changed.
    UnexpectedCategory,
    /// A still-missing cell was filled with its configured default.
    MissingFilled,
}

impl IssueKind {
    /// The label used in the issue-log CSV.
    pub fn label(self) -> &'static str {
        match self {
            IssueKind::DuplicatePk => "Duplicate PK",
            IssueKind::CurrencySymbolRemoved => "Removed $ symbol",
            IssueKind::MissingNumericFilled => "Missing numeric filled",
            IssueKind::OutlierCapped => "Outlier capped (winsor)",
            IssueKind::CategoryNormalised => "Category normalised",
            IssueKind::UnexpectedCategory => "Unexpected category",
            IssueKind::MissingFilled => "Missing filled",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One correction or flag, tied to the original row index of the input file.
///
/// `original` and `fixed` are pre-rendered strings; a detection-only issue
/// leaves `fixed` empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub row: usize,
    pub column: String,
    pub kind: IssueKind,
    pub original: String,
    pub fixed: String,
}

impl Issue {
    pub fn new(
        row: usize,
        column: impl Into<String>,
        kind: IssueKind,
        original: impl Into<String>,
        fixed: impl Into<String>,
    ) -> Self {
        Self {
            row,
            column: column.into(),
            kind,
            original: original.into(),
            fixed: fixed.into(),
        }
    }

    /// Detection-only issue: something flagged but left as-is.
    pub fn flag(
        row: usize,
        column: impl Into<String>,
        kind: IssueKind,
        original: impl Into<String>,
    ) -> Self {
        Self::new(row, column, kind, original, "")
    }
}
