//! Console summaries for finished runs.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::{AnalyzeRun, CheckRun, CleanRun};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn print_clean_summary(run: &CleanRun) {
    println!("Cleaning complete");
    println!("  Cleaned data : {}", run.cleaned_path.display());
    println!("  Issue log    : {}", run.issues_path.display());

    let mut table = Table::new();
    table.set_header(vec![header_cell("Issue"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (kind, count) in &run.issue_counts {
        table.add_row(vec![Cell::new(kind.label()), Cell::new(count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(run.issues_total).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!(
        "  Rows: {} in, {} out ({} duplicate rows removed)",
        run.rows_in, run.rows_out, run.rows_removed
    );
}

pub fn print_check_summary(run: &CheckRun) {
    println!("Report written to {}", run.report_path.display());

    let mut table = Table::new();
    table.set_header(vec![header_cell("Section"), header_cell("Findings")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let counts = &run.counts;
    for (section, count) in [
        ("Duplicate rows", counts.duplicate_rows),
        ("Missing values", counts.missing_values),
        ("Inconsistent categories", counts.inconsistent_categories),
        ("Formatting issues", counts.formatting_issues),
        ("Numeric outliers", counts.numeric_outliers),
    ] {
        table.add_row(vec![Cell::new(section), Cell::new(count)]);
    }
    println!("{table}");
}

pub fn print_analyze_summary(run: &AnalyzeRun) {
    println!("Analysis complete");
    println!("  Grouped stats: {}", run.grouped_path.display());
    println!("  Analysis data: {}", run.analysis_path.display());
    println!(
        "  Groups: {} ({} exact duplicate rows removed)",
        run.groups, run.duplicates_removed
    );
    if let Some((path, count)) = &run.flagged {
        println!("  Negative rows: {count} -> {}", path.display());
    }
}
