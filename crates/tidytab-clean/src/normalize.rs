//! Whitespace trimming and blank/sentinel normalization.
//!
//! Runs before every other stage so typed coercion never sees `"N/A"` or
//! padded values. Not logged; the issue log records corrections to data,
//! not token normalization.

use tidytab_model::{CellValue, Table};

/// True for the tokens treated as missing: the empty string and any case
/// variant of `N/A`.
pub fn is_missing_token(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case("n/a")
}

/// Trim every text cell and convert missing tokens to [`CellValue::Missing`].
pub fn normalize_cells(table: &mut Table) {
    for row in &mut table.rows {
        for cell in &mut row.cells {
            if let CellValue::Text(value) = cell {
                let trimmed = value.trim();
                if is_missing_token(trimmed) {
                    *cell = CellValue::Missing;
                } else if trimmed.len() != value.len() {
                    *cell = CellValue::Text(trimmed.to_string());
                }
            }
        }
    }
}
