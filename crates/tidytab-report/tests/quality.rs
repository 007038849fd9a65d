//! Tests for the plain-text quality report.

use tidytab_model::{CellValue, Row, RuleSet, Table};
use tidytab_report::{quality_report, quality_report_with_counts};

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

fn messy_table() -> Table {
    table_from(
        &["EmployeeNumber", "AnnualSalary", "Gender", "PaycheckMethod"],
        &[
            &["E1", "$100", "Male", "DirectDeposit"],
            &["E2", "100", " Female", "Mail Check"],
            &["E2", "100", " Female", "Mail Check"],
            &["E3", "", "Robot", "Mail Check"],
            &["E4", "1000", "Male", "Mail Check"],
        ],
    )
}

#[test]
fn report_carries_all_sections() {
    let rules = RuleSet::employee_turnover();
    let report = quality_report(&messy_table(), &rules, "employee_data.csv");

    assert!(report.starts_with("DATA QUALITY REPORT: employee_data.csv\n"));
    for section in [
        "DUPLICATES",
        "MISSING VALUES",
        "INCONSISTENT CATEGORICAL ENTRIES",
        "FORMATTING ISSUES",
        "NUMERIC OUTLIERS (IQR rule)",
    ] {
        assert!(report.contains(section), "missing section {section}");
    }
}

#[test]
fn report_counts_duplicates_and_missing() {
    let rules = RuleSet::employee_turnover();
    let report = quality_report(&messy_table(), &rules, "employee_data.csv");

    // Row 2 is an exact duplicate of row 1 once tidied.
    assert!(report.contains("Total duplicate rows       : 1"));
    assert!(report.contains("Duplicate EmployeeNumber values: 1"));
    assert!(report.contains("    2"));
    // One blank salary.
    assert!(report.contains("AnnualSalary                  : 1"));
}

#[test]
fn report_flags_categories_formatting_and_outliers() {
    let rules = RuleSet::employee_turnover();
    let report = quality_report(&messy_table(), &rules, "employee_data.csv");

    // "Robot" is not an allowed Gender; "DirectDeposit" is fixed up during
    // tidying and must not be reported.
    assert!(report.contains("Robot"));
    assert!(!report.contains("DirectDeposit"));

    assert!(report.contains("Embedded currency symbols in: [\"AnnualSalary\"]"));
    assert!(report.contains("Leading/trailing spaces in: [\"Gender\"]"));

    // Salaries tidy to {100, 100, 100, 1000}: Q1=100, Q3=325, upper bound
    // 662.5, so the 1000 is the one outlier.
    assert!(report.contains("AnnualSalary                  : 1 outliers"));
}

#[test]
fn section_counts_match_report_body() {
    let rules = RuleSet::employee_turnover();
    let (report, counts) = quality_report_with_counts(&messy_table(), &rules, "employee_data.csv");

    assert_eq!(counts.duplicate_rows, 1);
    // One blank salary.
    assert_eq!(counts.missing_values, 1);
    // "Robot" is the one unexpected Gender value.
    assert_eq!(counts.inconsistent_categories, 1);
    // Currency symbols in AnnualSalary, stray spaces in Gender.
    assert_eq!(counts.formatting_issues, 2);
    assert_eq!(counts.numeric_outliers, 1);
    assert!(report.contains("Total duplicate rows       : 1"));
}

#[test]
fn clean_table_reports_no_formatting_issues() {
    let rules = RuleSet::employee_turnover();
    let table = table_from(
        &["EmployeeNumber", "Gender"],
        &[&["E1", "Male"], &["E2", "Female"]],
    );
    let report = quality_report(&table, &rules, "tidy.csv");
    assert!(report.contains("FORMATTING ISSUES\n  None"));
    assert!(!report.contains("duplicate rows index"));
}
