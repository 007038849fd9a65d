//! Reporting views over tidytab tables: the quality checker and the
//! group/ratio/filter analysis.

pub mod aggregate;
pub mod quality;

pub use aggregate::{
    coerce_numeric_columns, derive_ratio, drop_exact_duplicates, filter_negative, group_stats,
    normalize_headers, RatioSpec,
};
pub use quality::{quality_report, quality_report_with_counts, tidy_for_inspection, SectionCounts};
