//! End-to-end tests for the cleaning pass.

use tidytab_clean::{clean, CleanOutcome};
use tidytab_model::{CellValue, IssueKind, Row, RuleSet, Table};

fn table_from(columns: &[&str], rows: &[&[&str]]) -> Table {
    let mut table = Table::new(columns.iter().map(|name| (*name).to_string()).collect());
    for (idx, row) in rows.iter().enumerate() {
        table.push_row(Row::new(
            idx,
            row.iter()
                .map(|value| CellValue::Text((*value).to_string()))
                .collect(),
        ));
    }
    table
}

fn salary(outcome: &CleanOutcome, row: usize) -> f64 {
    let idx = outcome.table.column_index("AnnualSalary").expect("column");
    outcome.table.rows[row].cell(idx).as_number().expect("number")
}

/// Fixture mirroring the messy employee extract: a currency-formatted
/// salary, a duplicate key, a missing salary, a bad category, and one
/// extreme value.
fn messy_table() -> Table {
    table_from(
        &[
            "EmployeeNumber",
            "AnnualSalary",
            "PaycheckMethod",
            "TextMessageOptIn",
        ],
        &[
            &["E100", "$52,000", "DirectDeposit", "Yes"],
            &["E101", "51000", "Mail Check", ""],
            &["E100", "50000", "Mail Check", "Yes"],
            &["E102", "", "Direct_Deposit", "No"],
            &["E103", "49000", "Bank Transfer", "Yes"],
            &["E104", "250000", "Mailed Check", "No"],
        ],
    )
}

#[test]
fn full_pass_over_messy_fixture() {
    let rules = RuleSet::employee_turnover();
    let outcome = clean(messy_table(), &rules).expect("clean");

    assert_eq!(outcome.rows_in, 6);
    assert_eq!(outcome.rows_removed, 1);
    assert_eq!(outcome.table.height(), 5);

    // Duplicate E100: first occurrence kept, removal logged against row 2.
    let dupes: Vec<_> = outcome
        .issues
        .iter()
        .filter(|issue| issue.kind == IssueKind::DuplicatePk)
        .collect();
    assert_eq!(dupes.len(), 1);
    assert_eq!(dupes[0].row, 2);
    assert_eq!(dupes[0].original, "E100");
    assert_eq!(dupes[0].fixed, "ROW_REMOVED");

    // "$52,000" was coerced and its currency symbol flagged.
    assert_eq!(salary(&outcome, 0), 52000.0);
    assert!(outcome.issues.iter().any(|issue| {
        issue.kind == IssueKind::CurrencySymbolRemoved
            && issue.row == 0
            && issue.original == "$52,000"
    }));

    // Missing salary filled with the median of {52000, 51000, 49000, 250000}.
    assert_eq!(salary(&outcome, 2), 51500.0);
    assert!(outcome.issues.iter().any(|issue| {
        issue.kind == IssueKind::MissingNumericFilled
            && issue.row == 3
            && issue.fixed == "51500.0"
    }));

    // Post-fill distribution gives Q1=51000, Q3=52000, so the winsor range
    // is [49500, 53500]: both tails get capped.
    assert_eq!(salary(&outcome, 3), 49500.0);
    assert_eq!(salary(&outcome, 4), 53500.0);
    assert!(outcome.issues.iter().any(|issue| {
        issue.kind == IssueKind::OutlierCapped
            && issue.row == 5
            && issue.original == "250000.0"
            && issue.fixed == "53500.0"
    }));

    // Category fixup applied and logged; unexpected value flagged unchanged.
    let paycheck = outcome.table.column_index("PaycheckMethod").expect("column");
    assert_eq!(
        outcome.table.rows[0].cell(paycheck),
        &CellValue::Text("Direct_Deposit".to_string())
    );
    assert!(outcome.issues.iter().any(|issue| {
        issue.kind == IssueKind::CategoryNormalised
            && issue.original == "DirectDeposit"
            && issue.fixed == "Direct_Deposit"
    }));
    assert_eq!(
        outcome.table.rows[3].cell(paycheck),
        &CellValue::Text("Bank Transfer".to_string())
    );
    assert!(outcome.issues.iter().any(|issue| {
        issue.kind == IssueKind::UnexpectedCategory && issue.original == "Bank Transfer"
    }));

    // Opt-in default applied to the blank cell.
    let optin = outcome
        .table
        .column_index("TextMessageOptIn")
        .expect("column");
    assert_eq!(
        outcome.table.rows[1].cell(optin),
        &CellValue::Text("No".to_string())
    );
    assert!(outcome
        .issues
        .iter()
        .any(|issue| issue.kind == IssueKind::MissingFilled && issue.row == 1));
}

#[test]
fn primary_key_unique_after_cleaning() {
    let rules = RuleSet::employee_turnover();
    let outcome = clean(messy_table(), &rules).expect("clean");
    let idx = outcome.table.column_index("EmployeeNumber").expect("column");
    let mut keys: Vec<String> = outcome
        .table
        .column_values(idx)
        .map(CellValue::render)
        .collect();
    keys.sort();
    let before = keys.len();
    keys.dedup();
    assert_eq!(keys.len(), before);
}

#[test]
fn no_fixup_keys_survive_cleaning() {
    let rules = RuleSet::employee_turnover();
    let outcome = clean(messy_table(), &rules).expect("clean");
    let idx = outcome.table.column_index("PaycheckMethod").expect("column");
    for cell in outcome.table.column_values(idx) {
        if let Some(value) = cell.as_text() {
            assert!(!rules.category_fixups["PaycheckMethod"].contains_key(value));
        }
    }
}

#[test]
fn cleaning_is_idempotent() {
    // Same fixture minus the unknown category, which is detection-only and
    // would be re-flagged on every run by design.
    let table = table_from(
        &[
            "EmployeeNumber",
            "AnnualSalary",
            "PaycheckMethod",
            "TextMessageOptIn",
        ],
        &[
            &["E100", "$52,000", "DirectDeposit", "Yes"],
            &["E101", "51000", "Mail Check", ""],
            &["E100", "50000", "Mail Check", "Yes"],
            &["E102", "", "Direct_Deposit", "No"],
            &["E103", "49000", "Mailed Check", "Yes"],
            &["E104", "250000", "Mailed Check", "No"],
        ],
    );
    let rules = RuleSet::employee_turnover();
    let first = clean(table, &rules).expect("first pass");
    assert!(!first.issues.is_empty());

    let second = clean(first.table.clone(), &rules).expect("second pass");
    assert!(second.issues.is_empty(), "issues: {:?}", second.issues);
    assert_eq!(second.table, first.table);
}

#[test]
fn oversized_numeric_residue_degrades_to_missing() {
    // A digit run too long for f64 must not abort the pass; the cell is
    // treated like any other unparseable residue and median-filled.
    let oversized = "9".repeat(320);
    let table = table_from(
        &["EmployeeNumber", "AnnualSalary"],
        &[
            &["E100", oversized.as_str()],
            &["E101", "50000"],
            &["E102", "51000"],
        ],
    );
    let rules = RuleSet::employee_turnover();
    let outcome = clean(table, &rules).expect("clean");

    assert_eq!(salary(&outcome, 0), 50500.0);
    assert!(outcome
        .issues
        .iter()
        .any(|issue| issue.kind == IssueKind::MissingNumericFilled && issue.row == 0));
}

#[test]
fn missing_primary_key_column_fails() {
    let rules = RuleSet::employee_turnover();
    let table = table_from(&["Name"], &[&["Ada"]]);
    assert!(clean(table, &rules).is_err());
}

#[test]
fn empty_table_cleans_to_empty() {
    let rules = RuleSet::employee_turnover();
    let table = table_from(
        &["EmployeeNumber", "AnnualSalary"],
        &[],
    );
    let outcome = clean(table, &rules).expect("clean");
    assert_eq!(outcome.table.height(), 0);
    assert!(outcome.issues.is_empty());
}
