//! CSV input/output collaborators for the tidytab toolkit.

pub mod csv_table;

pub use csv_table::{read_table, write_issues, write_table};
