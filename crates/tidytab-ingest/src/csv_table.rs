//! CSV collaborators: load a [`Table`] from disk, write tables and issue
//! logs back out.
//!
//! Cells are loaded verbatim: whitespace and currency symbols survive so the
//! quality checker can report formatting problems on the raw data. Only the
//! header row gets a BOM strip. Short records are padded with missing cells
//! to the header width; extra trailing fields are dropped.

use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

use tidytab_model::{CellValue, Issue, Row, Table};

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV file into a [`Table`].
pub fn read_table(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("read header: {}", path.display()))?
        .iter()
        .map(normalize_header)
        .collect();
    let mut table = Table::new(headers);
    for (index, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let mut cells = Vec::with_capacity(table.width());
        for idx in 0..table.width() {
            match record.get(idx) {
                Some(field) => cells.push(CellValue::Text(field.to_string())),
                None => cells.push(CellValue::Missing),
            }
        }
        table.push_row(Row::new(index, cells));
    }
    debug!(
        path = %path.display(),
        rows = table.height(),
        columns = table.width(),
        "loaded csv table"
    );
    Ok(table)
}

/// Write a [`Table`] to a CSV file, header first.
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("write csv: {}", path.display()))?;
    writer
        .write_record(&table.columns)
        .context("write header")?;
    for row in &table.rows {
        let record: Vec<String> = (0..table.width()).map(|idx| row.cell(idx).render()).collect();
        writer.write_record(&record).context("write row")?;
    }
    writer
        .flush()
        .with_context(|| format!("flush csv: {}", path.display()))?;
    Ok(())
}

/// Write the issue log with columns `Row,Column,Issue,Original,Fixed`.
pub fn write_issues(issues: &[Issue], path: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("write issue log: {}", path.display()))?;
    writer
        .write_record(["Row", "Column", "Issue", "Original", "Fixed"])
        .context("write issue header")?;
    for issue in issues {
        writer
            .write_record([
                issue.row.to_string().as_str(),
                issue.column.as_str(),
                issue.kind.label(),
                issue.original.as_str(),
                issue.fixed.as_str(),
            ])
            .context("write issue row")?;
    }
    writer
        .flush()
        .with_context(|| format!("flush issue log: {}", path.display()))?;
    Ok(())
}
