//! In-memory table representation.
//!
//! A [`Table`] is an ordered list of rows over a fixed header. Cells are
//! dynamically typed via [`CellValue`] because raw CSV input mixes numbers,
//! text, and several spellings of "missing" in the same column; typing is
//! resolved per column by the cleaning pipeline, not at load time.

use std::fmt;

/// A single cell value.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Number(f64),
    Text(String),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Numeric payload, if this cell holds one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Render the cell the way it appears in CSV output.
    ///
    /// Missing cells render as the empty string. Whole numbers keep one
    /// decimal place (`1200.0`) so cleaned files round-trip the same way
    /// the issue log prints them.
    pub fn render(&self) -> String {
        match self {
            CellValue::Number(value) => format_number(*value),
            CellValue::Text(value) => value.clone(),
            CellValue::Missing => String::new(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Format a float for CSV output: whole values as `x.0`, otherwise the
/// shortest exact representation.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// One table row. `source_index` is the 0-based position of the row in the
/// input file and survives duplicate removal, so issue records can point at
/// the original row.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub source_index: usize,
    pub cells: Vec<CellValue>,
}

impl Row {
    pub fn new(source_index: usize, cells: Vec<CellValue>) -> Self {
        Self {
            source_index,
            cells,
        }
    }

    pub fn cell(&self, index: usize) -> &CellValue {
        self.cells.get(index).unwrap_or(&CellValue::Missing)
    }
}

/// An ordered table with a fixed set of named columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Position of a named column, exact match.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// All values of one column in row order.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &CellValue> {
        self.rows.iter().map(move |row| row.cell(index))
    }

    /// Non-missing numeric payloads of one column, in row order.
    pub fn column_numbers(&self, index: usize) -> Vec<f64> {
        self.column_values(index)
            .filter_map(CellValue::as_number)
            .collect()
    }
}
