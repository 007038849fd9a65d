//! Subcommand implementations.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use tidytab_clean::clean;
use tidytab_ingest::{read_table, write_issues, write_table};
use tidytab_model::{IssueKind, RuleSet};
use tidytab_report::{
    coerce_numeric_columns, derive_ratio, drop_exact_duplicates, filter_negative, group_stats,
    normalize_headers, quality_report_with_counts, RatioSpec, SectionCounts,
};

use crate::cli::{AnalyzeArgs, CheckArgs, CleanArgs};

/// Outcome of `tidytab clean`, consumed by the console summary.
#[derive(Debug)]
pub struct CleanRun {
    pub cleaned_path: PathBuf,
    pub issues_path: PathBuf,
    pub rows_in: usize,
    pub rows_out: usize,
    pub rows_removed: usize,
    pub issue_counts: BTreeMap<IssueKind, usize>,
    pub issues_total: usize,
}

/// Outcome of `tidytab check`.
#[derive(Debug)]
pub struct CheckRun {
    pub report_path: PathBuf,
    pub counts: SectionCounts,
}

/// Outcome of `tidytab analyze`.
#[derive(Debug)]
pub struct AnalyzeRun {
    pub grouped_path: PathBuf,
    pub analysis_path: PathBuf,
    pub flagged: Option<(PathBuf, usize)>,
    pub groups: usize,
    pub duplicates_removed: usize,
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanRun> {
    let span = info_span!("clean_command", input = %args.input.display());
    let _guard = span.enter();

    let rules = load_rules(args.rules.as_deref())?;
    let table = read_table(&args.input)?;
    let outcome = clean(table, &rules).context("cleaning pass")?;

    let output_dir = resolve_output_dir(&args.input, args.output_dir.as_deref())?;
    let stem = file_stem(&args.input);
    let cleaned_path = output_dir.join(format!("{stem}_cleaned.csv"));
    let issues_path = output_dir.join(format!("{stem}_issues.csv"));
    write_table(&outcome.table, &cleaned_path)?;
    write_issues(&outcome.issues, &issues_path)?;

    let mut issue_counts = BTreeMap::new();
    for issue in &outcome.issues {
        *issue_counts.entry(issue.kind).or_insert(0usize) += 1;
    }
    info!(
        cleaned = %cleaned_path.display(),
        issues = %issues_path.display(),
        "outputs written"
    );
    Ok(CleanRun {
        cleaned_path,
        issues_path,
        rows_in: outcome.rows_in,
        rows_out: outcome.table.height(),
        rows_removed: outcome.rows_removed,
        issue_counts,
        issues_total: outcome.issues.len(),
    })
}

pub fn run_check(args: &CheckArgs) -> Result<CheckRun> {
    let span = info_span!("check_command", input = %args.input.display());
    let _guard = span.enter();

    let rules = load_rules(args.rules.as_deref())?;
    let table = read_table(&args.input)?;
    let source_name = args
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.input.display().to_string());
    let (report, counts) = quality_report_with_counts(&table, &rules, &source_name);

    let output_dir = resolve_output_dir(&args.input, args.output_dir.as_deref())?;
    let report_path = output_dir.join(format!("{}_quality_report.txt", file_stem(&args.input)));
    fs::write(&report_path, report)
        .with_context(|| format!("write report: {}", report_path.display()))?;
    info!(report = %report_path.display(), "report written");
    Ok(CheckRun {
        report_path,
        counts,
    })
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalyzeRun> {
    let span = info_span!("analyze_command", input = %args.input.display());
    let _guard = span.enter();

    let rules = load_rules(args.rules.as_deref())?;
    let mut table = read_table(&args.input)?;
    normalize_headers(&mut table);
    let duplicates_removed = drop_exact_duplicates(&mut table);
    coerce_numeric_columns(&mut table, &rules.numeric_columns);
    info!(duplicates_removed, rows = table.height(), "table prepared");

    let grouped = group_stats(&table, &args.group_by, &rules.numeric_columns)
        .context("group statistics")?;
    if let Some(spec) = &args.ratio {
        let spec = RatioSpec::from_str(spec)?;
        derive_ratio(&mut table, &spec).context("derive ratio column")?;
    }

    let output_dir = resolve_output_dir(&args.input, args.output_dir.as_deref())?;
    let stem = file_stem(&args.input);
    let grouped_path = output_dir.join(format!("{stem}_grouped.csv"));
    let analysis_path = output_dir.join(format!("{stem}_analysis.csv"));
    write_table(&grouped, &grouped_path)?;
    write_table(&table, &analysis_path)?;

    let flagged = match &args.flag_negative {
        Some(column) => {
            let negative = filter_negative(&table, column).context("negative filter")?;
            let flagged_path = output_dir.join(format!("{stem}_flagged.csv"));
            write_table(&negative, &flagged_path)?;
            info!(column = %column, rows = negative.height(), "negative rows flagged");
            Some((flagged_path, negative.height()))
        }
        None => None,
    };

    Ok(AnalyzeRun {
        grouped_path,
        analysis_path,
        flagged,
        groups: grouped.height(),
        duplicates_removed,
    })
}

/// Load a rule file, or fall back to the built-in employee-dataset rules.
fn load_rules(path: Option<&Path>) -> Result<RuleSet> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("read rules: {}", path.display()))?;
            let rules = serde_json::from_str(&text)
                .with_context(|| format!("parse rules: {}", path.display()))?;
            Ok(rules)
        }
        None => Ok(RuleSet::employee_turnover()),
    }
}

fn resolve_output_dir(input: &Path, output_dir: Option<&Path>) -> Result<PathBuf> {
    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => input
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    fs::create_dir_all(&dir).with_context(|| format!("create output dir: {}", dir.display()))?;
    Ok(dir)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string())
}
