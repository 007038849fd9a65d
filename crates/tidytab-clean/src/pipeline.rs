//! The fixed-order cleaning pass.
//!
//! Stage order matters and is part of the contract: trim/sentinel
//! normalization, duplicate removal, numeric treatment (currency flags,
//! coercion, median fill, winsorization), categorical harmonization,
//! categorical validation, default fills. Later stages see the output of
//! earlier ones.

use tracing::{info, info_span};

use tidytab_model::{Issue, Result, RuleSet, Table};

use crate::{categories, dedupe, missing, normalize, numeric};

/// Result of one cleaning pass.
#[derive(Debug)]
pub struct CleanOutcome {
    pub table: Table,
    pub issues: Vec<Issue>,
    pub rows_in: usize,
    pub rows_removed: usize,
}

/// Run the full cleaning pipeline over `table` with the given rules.
///
/// Data-quality findings never fail the pass; the only error is a rule
/// table referencing a primary-key column the table does not have.
pub fn clean(mut table: Table, rules: &RuleSet) -> Result<CleanOutcome> {
    let rows_in = table.height();
    let span = info_span!("clean", rows = rows_in);
    let _guard = span.enter();

    let mut issues = Vec::new();
    normalize::normalize_cells(&mut table);
    dedupe::remove_duplicate_keys(&mut table, &rules.primary_key, &mut issues)?;
    let rows_removed = rows_in - table.height();
    numeric::clean_numeric_columns(&mut table, rules, &mut issues);
    categories::harmonize(&mut table, rules, &mut issues);
    categories::validate(&table, rules, &mut issues);
    missing::apply_defaults(&mut table, rules, &mut issues);

    info!(
        rows_in,
        rows_out = table.height(),
        rows_removed,
        issues = issues.len(),
        "cleaning pass complete"
    );
    Ok(CleanOutcome {
        table,
        issues,
        rows_in,
        rows_removed,
    })
}
