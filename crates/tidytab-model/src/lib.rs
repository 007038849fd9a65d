//! Shared data model for the tidytab cleaning toolkit.

pub mod error;
pub mod issue;
pub mod rules;
pub mod table;

pub use error::{Result, TabError};
pub use issue::{Issue, IssueKind, ROW_REMOVED};
pub use rules::{DefaultValue, RuleSet, DEFAULT_WINSOR_FACTOR};
pub use table::{format_number, CellValue, Row, Table};
