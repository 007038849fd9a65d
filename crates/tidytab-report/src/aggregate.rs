//! Group statistics, derived ratio columns, and filter views.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use tracing::debug;

use tidytab_clean::{numeric, stats};
use tidytab_model::{CellValue, Result, Row, TabError, Table};

/// A derived ratio column: `name = numerator / denominator`, per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatioSpec {
    pub name: String,
    pub numerator: String,
    pub denominator: String,
}

impl FromStr for RatioSpec {
    type Err = TabError;

    /// Parse `NAME=NUMERATOR/DENOMINATOR`.
    fn from_str(spec: &str) -> Result<Self> {
        let invalid = || TabError::InvalidRatioSpec(spec.to_string());
        let (name, fraction) = spec.split_once('=').ok_or_else(invalid)?;
        let (numerator, denominator) = fraction.split_once('/').ok_or_else(invalid)?;
        if name.trim().is_empty() || numerator.trim().is_empty() || denominator.trim().is_empty() {
            return Err(invalid());
        }
        Ok(Self {
            name: name.trim().to_string(),
            numerator: numerator.trim().to_string(),
            denominator: denominator.trim().to_string(),
        })
    }
}

/// Trim header names and replace each space with an underscore. A run of
/// spaces maps to the same number of underscores, so every header keeps a
/// distinct name.
pub fn normalize_headers(table: &mut Table) {
    for column in &mut table.columns {
        *column = column.trim().replace(' ', "_");
    }
}

/// Remove rows that are exact duplicates of an earlier row across every
/// column. Returns the number of rows removed.
pub fn drop_exact_duplicates(table: &mut Table) -> usize {
    let width = table.width();
    let mut seen = BTreeSet::new();
    let rows = std::mem::take(&mut table.rows);
    let before = rows.len();
    for row in rows {
        let fingerprint: Vec<String> = (0..width).map(|idx| row.cell(idx).render()).collect();
        if seen.insert(fingerprint) {
            table.rows.push(row);
        }
    }
    before - table.height()
}

/// Coerce every configured numeric column present in the table.
pub fn coerce_numeric_columns(table: &mut Table, numeric_columns: &BTreeSet<String>) {
    for index in 0..table.width() {
        if numeric_columns.contains(&table.columns[index]) {
            numeric::coerce_column(table, index);
        }
    }
}

/// Group rows by `group_by` and compute mean/median/min/max for every
/// configured numeric column present. The group key is the first output
/// column; groups are sorted by key.
pub fn group_stats(
    table: &Table,
    group_by: &str,
    numeric_columns: &BTreeSet<String>,
) -> Result<Table> {
    let key_index = table
        .column_index(group_by)
        .ok_or_else(|| TabError::MissingColumn(group_by.to_string()))?;
    let stat_columns: Vec<(usize, &String)> = table
        .columns
        .iter()
        .enumerate()
        .filter(|(_, name)| numeric_columns.contains(*name))
        .collect();

    let mut groups: BTreeMap<String, Vec<&Row>> = BTreeMap::new();
    for row in &table.rows {
        groups
            .entry(row.cell(key_index).render())
            .or_default()
            .push(row);
    }
    debug!(groups = groups.len(), "grouped rows");

    let mut columns = vec![group_by.to_string()];
    for (_, name) in &stat_columns {
        for stat in ["Mean", "Median", "Min", "Max"] {
            columns.push(format!("{name}_{stat}"));
        }
    }
    let mut output = Table::new(columns);
    for (ordinal, (key, rows)) in groups.into_iter().enumerate() {
        let mut cells = vec![CellValue::Text(key)];
        for (index, _) in &stat_columns {
            let values: Vec<f64> = rows
                .iter()
                .filter_map(|row| row.cell(*index).as_number())
                .collect();
            cells.push(number_or_missing(mean(&values)));
            cells.push(number_or_missing(stats::median(&values)));
            cells.push(number_or_missing(
                values.iter().copied().reduce(f64::min),
            ));
            cells.push(number_or_missing(
                values.iter().copied().reduce(f64::max),
            ));
        }
        output.push_row(Row::new(ordinal, cells));
    }
    Ok(output)
}

/// Append the derived ratio column to every row. A zero divisor or a
/// non-numeric operand yields a missing cell, never an error.
pub fn derive_ratio(table: &mut Table, spec: &RatioSpec) -> Result<()> {
    let numerator = table
        .column_index(&spec.numerator)
        .ok_or_else(|| TabError::MissingColumn(spec.numerator.clone()))?;
    let denominator = table
        .column_index(&spec.denominator)
        .ok_or_else(|| TabError::MissingColumn(spec.denominator.clone()))?;
    table.columns.push(spec.name.clone());
    for row in &mut table.rows {
        let cell = match (
            row.cell(numerator).as_number(),
            row.cell(denominator).as_number(),
        ) {
            (Some(_), Some(den)) if den == 0.0 => CellValue::Missing,
            (Some(num), Some(den)) => CellValue::Number(num / den),
            _ => CellValue::Missing,
        };
        row.cells.push(cell);
    }
    Ok(())
}

/// Read-only view of the rows where `column` is strictly negative.
pub fn filter_negative(table: &Table, column: &str) -> Result<Table> {
    let index = table
        .column_index(column)
        .ok_or_else(|| TabError::MissingColumn(column.to_string()))?;
    let mut output = Table::new(table.columns.clone());
    for row in &table.rows {
        if row.cell(index).as_number().is_some_and(|value| value < 0.0) {
            output.push_row(row.clone());
        }
    }
    Ok(output)
}

fn number_or_missing(value: Option<f64>) -> CellValue {
    match value {
        Some(value) => CellValue::Number(value),
        None => CellValue::Missing,
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
