//! Property tests for coercion and winsorization.

use proptest::prelude::*;

use tidytab_clean::numeric::coerce_numeric;
use tidytab_clean::stats::{quantile, winsor_bounds};
use tidytab_model::CellValue;

proptest! {
    /// Coercion accepts arbitrary text and only ever yields a finite
    /// number or a missing cell.
    #[test]
    fn coercion_total_over_arbitrary_text(raw in ".{0,40}") {
        match coerce_numeric(&raw) {
            CellValue::Number(value) => prop_assert!(value.is_finite()),
            CellValue::Missing => {}
            CellValue::Text(_) => prop_assert!(false, "coercion must not yield text"),
        }
    }

    /// Every clamped value lands inside the bounds, and untouched values
    /// were already inside.
    #[test]
    fn clamping_respects_bounds(values in prop::collection::vec(-1e6f64..1e6, 1..50)) {
        let bounds = winsor_bounds(&values, 1.5).expect("bounds");
        for value in &values {
            let capped = bounds.clamp(*value);
            prop_assert!(bounds.contains(capped));
            if capped == *value {
                prop_assert!(bounds.contains(*value));
            }
        }
    }

    /// Quartiles are ordered: Q1 <= median <= Q3.
    #[test]
    fn quartiles_are_monotonic(values in prop::collection::vec(-1e6f64..1e6, 1..50)) {
        let q1 = quantile(&values, 0.25).expect("q1");
        let q2 = quantile(&values, 0.5).expect("q2");
        let q3 = quantile(&values, 0.75).expect("q3");
        prop_assert!(q1 <= q2 && q2 <= q3);
    }
}
