//! Cleaning rule tables.
//!
//! A [`RuleSet`] carries everything the pipeline needs to know about a
//! dataset: which column is the primary key, which columns are numeric,
//! the allowed value set per categorical column, known-bad spelling fixups,
//! and per-column default fills. The tables are plain data so a rule file
//! can be supplied as JSON; [`RuleSet::employee_turnover`] is the built-in
//! default.

use std::collections::{BTreeMap, BTreeSet};

use crate::table::CellValue;

/// Default IQR multiplier for outlier bounds.
pub const DEFAULT_WINSOR_FACTOR: f64 = 1.5;

/// A default fill value for a column, either numeric or textual.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Number(f64),
    Text(String),
}

impl DefaultValue {
    pub fn to_cell(&self) -> CellValue {
        match self {
            DefaultValue::Number(value) => CellValue::Number(*value),
            DefaultValue::Text(value) => CellValue::Text(value.clone()),
        }
    }
}

/// Static configuration for one dataset shape.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// Column expected to be unique per row; duplicates are removed.
    pub primary_key: String,
    /// Columns coerced to floats and subject to median fill and winsorization.
    pub numeric_columns: BTreeSet<String>,
    /// Allowed value set per categorical column.
    pub expected_categories: BTreeMap<String, BTreeSet<String>>,
    /// Known-bad spelling -> canonical form, per column.
    pub category_fixups: BTreeMap<String, BTreeMap<String, String>>,
    /// Fixed fills applied to cells still missing at the end of the pass.
    pub missing_defaults: BTreeMap<String, DefaultValue>,
    /// IQR multiplier `k` in `[Q1 - k*IQR, Q3 + k*IQR]`.
    pub winsor_factor: f64,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            primary_key: String::new(),
            numeric_columns: BTreeSet::new(),
            expected_categories: BTreeMap::new(),
            category_fixups: BTreeMap::new(),
            missing_defaults: BTreeMap::new(),
            winsor_factor: DEFAULT_WINSOR_FACTOR,
        }
    }
}

fn string_set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

impl RuleSet {
    /// Rule tables for the employee turnover dataset.
    pub fn employee_turnover() -> Self {
        let mut expected_categories = BTreeMap::new();
        expected_categories.insert("Turnover".to_string(), string_set(&["Yes", "No"]));
        expected_categories.insert(
            "Gender".to_string(),
            string_set(&["Male", "Female", "Prefer Not to Answer"]),
        );
        expected_categories.insert(
            "MaritalStatus".to_string(),
            string_set(&["Single", "Married", "Divorced"]),
        );
        expected_categories.insert(
            "CompensationType".to_string(),
            string_set(&["Salary", "Hourly"]),
        );
        expected_categories.insert(
            "PaycheckMethod".to_string(),
            string_set(&["Mail Check", "Mailed Check", "Direct_Deposit"]),
        );
        expected_categories.insert("TextMessageOptIn".to_string(), string_set(&["Yes", "No"]));

        let mut paycheck_fixups = BTreeMap::new();
        paycheck_fixups.insert("DirectDeposit".to_string(), "Direct_Deposit".to_string());
        paycheck_fixups.insert("Direct Deposit".to_string(), "Direct_Deposit".to_string());
        paycheck_fixups.insert("Mail_Check".to_string(), "Mail Check".to_string());
        paycheck_fixups.insert("MailedCheck".to_string(), "Mailed Check".to_string());
        let mut category_fixups = BTreeMap::new();
        category_fixups.insert("PaycheckMethod".to_string(), paycheck_fixups);

        let mut missing_defaults = BTreeMap::new();
        missing_defaults.insert(
            "TextMessageOptIn".to_string(),
            DefaultValue::Text("No".to_string()),
        );
        missing_defaults.insert(
            "NumCompaniesPreviouslyWorked".to_string(),
            DefaultValue::Number(0.0),
        );
        missing_defaults.insert(
            "AnnualProfessionalDevHrs".to_string(),
            DefaultValue::Number(0.0),
        );

        Self {
            primary_key: "EmployeeNumber".to_string(),
            numeric_columns: string_set(&[
                "Age",
                "Tenure",
                "HourlyRate",
                "HoursWeekly",
                "AnnualSalary",
                "DrivingCommuterDistance",
                "NumCompaniesPreviouslyWorked",
                "AnnualProfessionalDevHrs",
            ]),
            expected_categories,
            category_fixups,
            missing_defaults,
            winsor_factor: DEFAULT_WINSOR_FACTOR,
        }
    }

    pub fn is_numeric(&self, column: &str) -> bool {
        self.numeric_columns.contains(column)
    }
}
