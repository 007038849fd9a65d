//! Numeric coercion, median fill, and winsorization.
//!
//! Each numeric column goes through four steps in order: currency-symbol
//! detection on the raw text, coercion to floats, median fill of missing
//! values, then IQR clamping. The winsor bounds are computed on the
//! post-fill distribution; see DESIGN.md for the ordering decision.

use tracing::debug;

use tidytab_model::{format_number, CellValue, Issue, IssueKind, RuleSet, Table};

use crate::stats;

/// Coerce one raw text value to a number by stripping every character that
/// is not a digit, decimal point, or minus sign. An empty or unparseable
/// residue becomes missing.
pub fn coerce_numeric(raw: &str) -> CellValue {
    let stripped: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.' || *ch == '-')
        .collect();
    if stripped.is_empty() {
        return CellValue::Missing;
    }
    match stripped.parse::<f64>() {
        // Residue that overflows f64 parses as infinity; a non-finite cell
        // would poison the quartiles, so it degrades to missing like any
        // other unusable residue.
        Ok(value) if value.is_finite() => CellValue::Number(value),
        _ => CellValue::Missing,
    }
}

/// Coerce every text cell of one column in place.
pub fn coerce_column(table: &mut Table, index: usize) {
    for row in &mut table.rows {
        if let Some(cell) = row.cells.get_mut(index) {
            if let CellValue::Text(raw) = cell {
                *cell = coerce_numeric(raw);
            }
        }
    }
}

/// Run the full numeric treatment over every configured numeric column
/// present in the table.
pub fn clean_numeric_columns(table: &mut Table, rules: &RuleSet, issues: &mut Vec<Issue>) {
    for index in 0..table.width() {
        let column = table.columns[index].clone();
        if !rules.is_numeric(&column) {
            continue;
        }

        // Currency symbols are flagged before coercion erases them.
        for row in &table.rows {
            if let Some(raw) = row.cell(index).as_text() {
                if raw.contains('$') {
                    issues.push(Issue::flag(
                        row.source_index,
                        &column,
                        IssueKind::CurrencySymbolRemoved,
                        raw,
                    ));
                }
            }
        }

        coerce_column(table, index);

        if let Some(median) = stats::median(&table.column_numbers(index)) {
            for row in &mut table.rows {
                if let Some(cell) = row.cells.get_mut(index) {
                    if cell.is_missing() {
                        issues.push(Issue::new(
                            row.source_index,
                            &column,
                            IssueKind::MissingNumericFilled,
                            "",
                            format_number(median),
                        ));
                        *cell = CellValue::Number(median);
                    }
                }
            }
        }

        let Some(bounds) = stats::winsor_bounds(&table.column_numbers(index), rules.winsor_factor)
        else {
            continue;
        };
        debug!(
            column = %column,
            lower = bounds.lower,
            upper = bounds.upper,
            "winsor bounds"
        );
        for row in &mut table.rows {
            if let Some(cell) = row.cells.get_mut(index) {
                if let Some(value) = cell.as_number() {
                    let capped = bounds.clamp(value);
                    if capped != value {
                        issues.push(Issue::new(
                            row.source_index,
                            &column,
                            IssueKind::OutlierCapped,
                            format_number(value),
                            format_number(capped),
                        ));
                        *cell = CellValue::Number(capped);
                    }
                }
            }
        }
    }
}
