//! Categorical harmonization and validation.

use tidytab_model::{CellValue, Issue, IssueKind, RuleSet, Table};

/// Rewrite known-bad categorical spellings to their canonical form, logging
/// each rewrite as `Category normalised`.
pub fn harmonize(table: &mut Table, rules: &RuleSet, issues: &mut Vec<Issue>) {
    for (column, mapping) in &rules.category_fixups {
        let Some(index) = table.column_index(column) else {
            continue;
        };
        for row in &mut table.rows {
            let Some(cell) = row.cells.get_mut(index) else {
                continue;
            };
            if let CellValue::Text(value) = cell {
                if let Some(canonical) = mapping.get(value.as_str()) {
                    issues.push(Issue::new(
                        row.source_index,
                        column,
                        IssueKind::CategoryNormalised,
                        value.clone(),
                        canonical.clone(),
                    ));
                    *cell = CellValue::Text(canonical.clone());
                }
            }
        }
    }
}

/// Flag values outside the allowed set for each categorical column.
/// Detection only: the value is left as-is in the cleaned output.
pub fn validate(table: &Table, rules: &RuleSet, issues: &mut Vec<Issue>) {
    for (column, allowed) in &rules.expected_categories {
        let Some(index) = table.column_index(column) else {
            continue;
        };
        for row in &table.rows {
            if let CellValue::Text(value) = row.cell(index) {
                if !allowed.contains(value.as_str()) {
                    issues.push(Issue::flag(
                        row.source_index,
                        column,
                        IssueKind::UnexpectedCategory,
                        value.clone(),
                    ));
                }
            }
        }
    }
}
