//! Duplicate-row removal keyed on the primary-key column.

use std::collections::BTreeSet;

use tidytab_model::{Issue, IssueKind, Result, TabError, Table, ROW_REMOVED};

/// Remove rows whose primary-key value was already seen, keeping the first
/// occurrence in original order. Rows with a missing key are never treated
/// as duplicates of each other. Each removal is logged as `Duplicate PK`.
pub fn remove_duplicate_keys(
    table: &mut Table,
    primary_key: &str,
    issues: &mut Vec<Issue>,
) -> Result<()> {
    let key_index = table
        .column_index(primary_key)
        .ok_or_else(|| TabError::MissingColumn(primary_key.to_string()))?;
    let mut seen = BTreeSet::new();
    let rows = std::mem::take(&mut table.rows);
    for row in rows {
        let key = row.cell(key_index).render();
        if key.is_empty() || seen.insert(key.clone()) {
            table.rows.push(row);
        } else {
            issues.push(Issue::new(
                row.source_index,
                primary_key,
                IssueKind::DuplicatePk,
                key,
                ROW_REMOVED,
            ));
        }
    }
    Ok(())
}
