//! Quantile statistics for median fill and IQR outlier bounds.
//!
//! Quantiles use linear interpolation between order statistics, matching
//! the convention of mainstream dataframe libraries, so bounds computed
//! here agree with the reference numbers in the test fixtures.

/// Linear-interpolated quantile of `values`; `None` for an empty slice or
/// a `q` outside `[0, 1]`.
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    if lower == upper {
        return Some(sorted[lower]);
    }
    let weight = position - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * weight)
}

pub fn median(values: &[f64]) -> Option<f64> {
    quantile(values, 0.5)
}

/// Clamping range derived from the IQR rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WinsorBounds {
    pub lower: f64,
    pub upper: f64,
}

impl WinsorBounds {
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.lower, self.upper)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// `[Q1 - factor*IQR, Q3 + factor*IQR]` over `values`.
pub fn winsor_bounds(values: &[f64], factor: f64) -> Option<WinsorBounds> {
    let q1 = quantile(values, 0.25)?;
    let q3 = quantile(values, 0.75)?;
    let iqr = q3 - q1;
    let lower = q1 - factor * iqr;
    let upper = q3 + factor * iqr;
    // Non-finite inputs yield NaN or infinite bounds; `f64::clamp` rejects
    // NaN, so only a finite range is usable.
    if !lower.is_finite() || !upper.is_finite() {
        return None;
    }
    Some(WinsorBounds { lower, upper })
}
