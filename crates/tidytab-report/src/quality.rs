//! Read-only data-quality report.
//!
//! The checker tidies a copy of the table (trim, sentinel normalization,
//! numeric coercion, category fixups) and reports on what it finds, but
//! never writes corrected data. Formatting findings are computed on the
//! raw table, before tidying erases them.

use std::collections::BTreeSet;

use tidytab_clean::{categories, normalize, numeric, stats};
use tidytab_model::{CellValue, RuleSet, Table};

/// How many duplicate row indices the report lists.
const MAX_DUPLICATE_SAMPLES: usize = 5;

/// Per-section finding counts, surfaced in the console summary alongside
/// the report path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionCounts {
    pub duplicate_rows: usize,
    pub missing_values: usize,
    pub inconsistent_categories: usize,
    pub formatting_issues: usize,
    pub numeric_outliers: usize,
}

/// Build the plain-text quality report for `raw` under the given rules.
/// `source_name` appears in the banner.
pub fn quality_report(raw: &Table, rules: &RuleSet, source_name: &str) -> String {
    quality_report_with_counts(raw, rules, source_name).0
}

/// Like [`quality_report`], also returning how many findings each section
/// carries.
pub fn quality_report_with_counts(
    raw: &Table,
    rules: &RuleSet,
    source_name: &str,
) -> (String, SectionCounts) {
    let tidied = tidy_for_inspection(raw, rules);

    let mut lines = Vec::new();
    let mut counts = SectionCounts::default();
    lines.push(format!("DATA QUALITY REPORT: {source_name}"));
    lines.push("=".repeat(60));
    lines.push(String::new());
    counts.duplicate_rows = duplicates_section(&tidied, rules, &mut lines);
    lines.push(String::new());
    counts.missing_values = missing_section(&tidied, &mut lines);
    lines.push(String::new());
    counts.inconsistent_categories = categories_section(&tidied, rules, &mut lines);
    lines.push(String::new());
    counts.formatting_issues = formatting_section(raw, &mut lines);
    lines.push(String::new());
    counts.numeric_outliers = outliers_section(&tidied, rules, &mut lines);
    lines.push(String::new());
    (lines.join("\n"), counts)
}

/// Tidy a copy of the table the way the checker sees it: trim, normalize
/// sentinels, coerce numeric columns, apply category fixups (unlogged).
pub fn tidy_for_inspection(raw: &Table, rules: &RuleSet) -> Table {
    let mut tidied = raw.clone();
    normalize::normalize_cells(&mut tidied);
    for index in 0..tidied.width() {
        if rules.is_numeric(&tidied.columns[index]) {
            numeric::coerce_column(&mut tidied, index);
        }
    }
    let mut scratch = Vec::new();
    categories::harmonize(&mut tidied, rules, &mut scratch);
    tidied
}

fn duplicates_section(table: &Table, rules: &RuleSet, lines: &mut Vec<String>) -> usize {
    let mut seen_rows = BTreeSet::new();
    let mut duplicate_rows = Vec::new();
    for row in &table.rows {
        let fingerprint: Vec<String> = (0..table.width())
            .map(|idx| row.cell(idx).render())
            .collect();
        if !seen_rows.insert(fingerprint) {
            duplicate_rows.push(row.source_index);
        }
    }

    let mut duplicate_keys = 0usize;
    if let Some(key_index) = table.column_index(&rules.primary_key) {
        let mut seen_keys = BTreeSet::new();
        for row in &table.rows {
            let key = row.cell(key_index).render();
            if !key.is_empty() && !seen_keys.insert(key) {
                duplicate_keys += 1;
            }
        }
    }

    lines.push("DUPLICATES".to_string());
    lines.push(format!(
        "  Total duplicate rows       : {}",
        duplicate_rows.len()
    ));
    lines.push(format!(
        "  Duplicate {} values: {}",
        rules.primary_key, duplicate_keys
    ));
    if !duplicate_rows.is_empty() {
        lines.push(format!(
            "  First {MAX_DUPLICATE_SAMPLES} duplicate rows index numbers:"
        ));
        let samples: Vec<String> = duplicate_rows
            .iter()
            .take(MAX_DUPLICATE_SAMPLES)
            .map(|idx| idx.to_string())
            .collect();
        lines.push(format!("    {}", samples.join(", ")));
    }
    duplicate_rows.len()
}

fn missing_section(table: &Table, lines: &mut Vec<String>) -> usize {
    lines.push("MISSING VALUES".to_string());
    let mut total = 0usize;
    for (index, column) in table.columns.iter().enumerate() {
        let count = table
            .column_values(index)
            .filter(|cell| cell.is_missing())
            .count();
        if count > 0 {
            lines.push(format!("  {column:<30}: {count}"));
            total += count;
        }
    }
    total
}

fn categories_section(table: &Table, rules: &RuleSet, lines: &mut Vec<String>) -> usize {
    lines.push("INCONSISTENT CATEGORICAL ENTRIES".to_string());
    let mut total = 0usize;
    for (column, allowed) in &rules.expected_categories {
        let Some(index) = table.column_index(column) else {
            continue;
        };
        let mut bad = BTreeSet::new();
        for cell in table.column_values(index) {
            if let CellValue::Text(value) = cell {
                if !allowed.contains(value.as_str()) {
                    bad.insert(value.clone());
                }
            }
        }
        if !bad.is_empty() {
            total += bad.len();
            let listed: Vec<&String> = bad.iter().collect();
            lines.push(format!("  {column:<30}: {listed:?}"));
        }
    }
    total
}

fn formatting_section(raw: &Table, lines: &mut Vec<String>) -> usize {
    let mut dollar_columns = Vec::new();
    let mut space_columns = Vec::new();
    for (index, column) in raw.columns.iter().enumerate() {
        let mut has_dollar = false;
        let mut has_space = false;
        for cell in raw.column_values(index) {
            if let Some(value) = cell.as_text() {
                has_dollar |= value.contains('$');
                has_space |= value.len() != value.trim().len();
            }
        }
        if has_dollar {
            dollar_columns.push(column.clone());
        }
        if has_space {
            space_columns.push(column.clone());
        }
    }

    lines.push("FORMATTING ISSUES".to_string());
    let mut any = false;
    if !dollar_columns.is_empty() {
        lines.push(format!("  Embedded currency symbols in: {dollar_columns:?}"));
        any = true;
    }
    if !space_columns.is_empty() {
        lines.push(format!("  Leading/trailing spaces in: {space_columns:?}"));
        any = true;
    }
    if !any {
        lines.push("  None".to_string());
    }
    dollar_columns.len() + space_columns.len()
}

fn outliers_section(table: &Table, rules: &RuleSet, lines: &mut Vec<String>) -> usize {
    lines.push("NUMERIC OUTLIERS (IQR rule)".to_string());
    let mut total = 0usize;
    for (index, column) in table.columns.iter().enumerate() {
        if !rules.is_numeric(column) {
            continue;
        }
        let values = table.column_numbers(index);
        let Some(bounds) = stats::winsor_bounds(&values, rules.winsor_factor) else {
            continue;
        };
        let outliers = values
            .iter()
            .filter(|value| !bounds.contains(**value))
            .count();
        if outliers > 0 {
            lines.push(format!("  {column:<30}: {outliers} outliers"));
            total += outliers;
        }
    }
    total
}
