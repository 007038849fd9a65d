//! Column-level cleaning pipeline for tabular business/employee records.

pub mod categories;
pub mod dedupe;
pub mod missing;
pub mod normalize;
pub mod numeric;
pub mod pipeline;
pub mod stats;

pub use pipeline::{clean, CleanOutcome};
