//! Tests for grouping, derived ratios, and filter views.

use std::collections::BTreeSet;
use std::str::FromStr;

use tidytab_model::{CellValue, Row, TabError, Table};
use tidytab_report::{
    coerce_numeric_columns, derive_ratio, drop_exact_duplicates, filter_negative, group_stats,
    normalize_headers, RatioSpec,
};

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

fn numeric_set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

#[test]
fn ratio_spec_parses_and_rejects() {
    let spec = RatioSpec::from_str("DebtToIncome=Total_Long-term_Debt/Total_Revenue")
        .expect("valid spec");
    assert_eq!(spec.name, "DebtToIncome");
    assert_eq!(spec.numerator, "Total_Long-term_Debt");
    assert_eq!(spec.denominator, "Total_Revenue");

    for bad in ["NoEquals", "A=NoSlash", "=X/Y", "A=/Y", "A=X/"] {
        assert!(
            matches!(RatioSpec::from_str(bad), Err(TabError::InvalidRatioSpec(_))),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn headers_normalize_to_underscores() {
    let mut table = table_from(&[" Business State ", "Total  Revenue"], &[]);
    normalize_headers(&mut table);
    // Each inner space becomes its own underscore.
    assert_eq!(table.columns, vec!["Business_State", "Total__Revenue"]);
}

#[test]
fn exact_duplicates_are_dropped_once() {
    let mut table = table_from(
        &["A", "B"],
        &[&["1", "x"], &["1", "x"], &["1", "y"], &["1", "x"]],
    );
    let removed = drop_exact_duplicates(&mut table);
    assert_eq!(removed, 2);
    assert_eq!(table.height(), 2);
    assert_eq!(table.rows[0].source_index, 0);
    assert_eq!(table.rows[1].source_index, 2);
}

#[test]
fn group_stats_per_key_in_sorted_order() {
    let mut table = table_from(
        &["Business_State", "Revenue"],
        &[&["CA", "30"], &["AZ", "10"], &["AZ", "20"]],
    );
    let numeric = numeric_set(&["Revenue"]);
    coerce_numeric_columns(&mut table, &numeric);

    let grouped = group_stats(&table, "Business_State", &numeric).expect("group");
    assert_eq!(
        grouped.columns,
        vec![
            "Business_State",
            "Revenue_Mean",
            "Revenue_Median",
            "Revenue_Min",
            "Revenue_Max",
        ]
    );
    assert_eq!(grouped.height(), 2);

    // AZ sorts first.
    assert_eq!(grouped.rows[0].cell(0), &CellValue::Text("AZ".to_string()));
    assert_eq!(grouped.rows[0].cell(1), &CellValue::Number(15.0));
    assert_eq!(grouped.rows[0].cell(2), &CellValue::Number(15.0));
    assert_eq!(grouped.rows[0].cell(3), &CellValue::Number(10.0));
    assert_eq!(grouped.rows[0].cell(4), &CellValue::Number(20.0));
    assert_eq!(grouped.rows[1].cell(0), &CellValue::Text("CA".to_string()));
    assert_eq!(grouped.rows[1].cell(1), &CellValue::Number(30.0));
}

#[test]
fn group_stats_requires_the_key_column() {
    let table = table_from(&["A"], &[&["1"]]);
    assert!(matches!(
        group_stats(&table, "Missing", &numeric_set(&["A"])),
        Err(TabError::MissingColumn(_))
    ));
}

#[test]
fn ratio_divides_and_leaves_zero_divisor_undefined() {
    let mut table = table_from(
        &["Debt", "Revenue"],
        &[&["50", "100"], &["50", "0"], &["", "100"]],
    );
    let numeric = numeric_set(&["Debt", "Revenue"]);
    coerce_numeric_columns(&mut table, &numeric);

    let spec = RatioSpec::from_str("DebtToIncome=Debt/Revenue").expect("spec");
    derive_ratio(&mut table, &spec).expect("derive");

    assert_eq!(table.columns.last().map(String::as_str), Some("DebtToIncome"));
    assert_eq!(table.rows[0].cell(2), &CellValue::Number(0.5));
    // Zero divisor is undefined, not an error and not infinity.
    assert_eq!(table.rows[1].cell(2), &CellValue::Missing);
    assert_eq!(table.rows[2].cell(2), &CellValue::Missing);
}

#[test]
fn negative_filter_selects_without_mutating() {
    let mut table = table_from(
        &["Id", "Debt_to_Equity"],
        &[&["a", "1.5"], &["b", "-0.2"], &["c", "0"]],
    );
    coerce_numeric_columns(&mut table, &numeric_set(&["Debt_to_Equity"]));

    let negative = filter_negative(&table, "Debt_to_Equity").expect("filter");
    assert_eq!(negative.height(), 1);
    assert_eq!(negative.rows[0].cell(0), &CellValue::Text("b".to_string()));
    // Source table untouched.
    assert_eq!(table.height(), 3);
}
