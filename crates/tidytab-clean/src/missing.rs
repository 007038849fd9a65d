//! Fixed default fills for named columns.
//!
//! Runs last so it only touches cells still missing after the numeric
//! median fill; a numeric column with a configured default is normally
//! already filled by the time this stage sees it.

use tidytab_model::{Issue, IssueKind, RuleSet, Table};

/// Fill still-missing cells with their configured defaults, logging each
/// fill as `Missing filled`.
pub fn apply_defaults(table: &mut Table, rules: &RuleSet, issues: &mut Vec<Issue>) {
    for (column, default) in &rules.missing_defaults {
        let Some(index) = table.column_index(column) else {
            continue;
        };
        let fill = default.to_cell();
        for row in &mut table.rows {
            let Some(cell) = row.cells.get_mut(index) else {
                continue;
            };
            if cell.is_missing() {
                issues.push(Issue::new(
                    row.source_index,
                    column,
                    IssueKind::MissingFilled,
                    "",
                    fill.render(),
                ));
                *cell = fill.clone();
            }
        }
    }
}
