//! Per-feature severity thresholds.
//!
//! Each feature partitions its plausible domain into three gap-free,
//! non-overlapping bucket ranges. Values are in the units reported by
//! [`TrackedFeature::unit`]; WBC and platelets are in thousands per µL.

use crate::error::UnclassifiableValue;
use crate::feature::SeverityBucket::{self, Moderate, Normal, Severe};
use crate::feature::TrackedFeature;

/// Bucket a single reading.
///
/// Non-finite readings and readings outside [`plausible_range`] are rejected.
pub fn classify(
    feature: TrackedFeature,
    value: f64,
) -> Result<SeverityBucket, UnclassifiableValue> {
    let (low, high) = plausible_range(feature);
    if !value.is_finite() || value < low || value > high {
        return Err(UnclassifiableValue { feature, value });
    }

    let bucket = match feature {
        TrackedFeature::Hr => heart_rate(value),
        TrackedFeature::Resp => respiratory_rate(value),
        TrackedFeature::O2Sat => oxygen_saturation(value),
        TrackedFeature::Temp => temperature(value),
        TrackedFeature::Map => mean_arterial_pressure(value),
        TrackedFeature::Wbc => white_cell_count(value),
        TrackedFeature::Platelets => platelet_count(value),
        TrackedFeature::Creatinine => creatinine(value),
        TrackedFeature::Glucose => glucose(value),
        TrackedFeature::Lactate => lactate(value),
    };
    Ok(bucket)
}

/// Inclusive range of physiologically plausible readings for a feature.
pub fn plausible_range(feature: TrackedFeature) -> (f64, f64) {
    match feature {
        TrackedFeature::Hr => (0.0, 300.0),
        TrackedFeature::Resp => (0.0, 80.0),
        TrackedFeature::O2Sat => (0.0, 100.0),
        TrackedFeature::Temp => (25.0, 45.0),
        TrackedFeature::Map => (0.0, 250.0),
        TrackedFeature::Wbc => (0.0, 500.0),
        TrackedFeature::Platelets => (0.0, 2000.0),
        TrackedFeature::Creatinine => (0.0, 30.0),
        TrackedFeature::Glucose => (0.0, 2000.0),
        TrackedFeature::Lactate => (0.0, 30.0),
    }
}

// severe <60 | >120, moderate (100,120], normal [60,100]
fn heart_rate(value: f64) -> SeverityBucket {
    match value {
        v if v < 60.0 || v > 120.0 => Severe,
        v if v > 100.0 => Moderate,
        _ => Normal,
    }
}

// severe <10 | >25, moderate [10,12) | (20,25], normal [12,20]
fn respiratory_rate(value: f64) -> SeverityBucket {
    match value {
        v if v < 10.0 || v > 25.0 => Severe,
        v if v < 12.0 || v > 20.0 => Moderate,
        _ => Normal,
    }
}

// severe <90, moderate [90,95), normal >=95
fn oxygen_saturation(value: f64) -> SeverityBucket {
    match value {
        v if v < 90.0 => Severe,
        v if v < 95.0 => Moderate,
        _ => Normal,
    }
}

// severe <35 | >39, moderate [35,36) | [38,39], normal [36,38)
fn temperature(value: f64) -> SeverityBucket {
    match value {
        v if v < 35.0 || v > 39.0 => Severe,
        v if v < 36.0 || v >= 38.0 => Moderate,
        _ => Normal,
    }
}

// severe <60 | >130, moderate [60,70) | [105,130], normal [70,105)
fn mean_arterial_pressure(value: f64) -> SeverityBucket {
    match value {
        v if v < 60.0 || v > 130.0 => Severe,
        v if v < 70.0 || v >= 105.0 => Moderate,
        _ => Normal,
    }
}

// severe <3 | >12, moderate [3,4) | [10,12], normal [4,10)
fn white_cell_count(value: f64) -> SeverityBucket {
    match value {
        v if v < 3.0 || v > 12.0 => Severe,
        v if v < 4.0 || v >= 10.0 => Moderate,
        _ => Normal,
    }
}

// severe <50, moderate [50,100], normal >100
fn platelet_count(value: f64) -> SeverityBucket {
    match value {
        v if v < 50.0 => Severe,
        v if v <= 100.0 => Moderate,
        _ => Normal,
    }
}

// Classified after rounding to one decimal.
// severe >2, moderate [1.2,2], normal <1.2
fn creatinine(value: f64) -> SeverityBucket {
    let rounded = (value * 10.0).round() / 10.0;
    match rounded {
        v if v > 2.0 => Severe,
        v if v >= 1.2 => Moderate,
        _ => Normal,
    }
}

// severe <60 | >200, moderate [140,200], normal [60,140)
fn glucose(value: f64) -> SeverityBucket {
    match value {
        v if v < 60.0 || v > 200.0 => Severe,
        v if v >= 140.0 => Moderate,
        _ => Normal,
    }
}

// severe >4, moderate [2,4], normal <2
fn lactate(value: f64) -> SeverityBucket {
    match value {
        v if v > 4.0 => Severe,
        v if v >= 2.0 => Moderate,
        _ => Normal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_buckets(feature: TrackedFeature, cases: &[(f64, SeverityBucket)]) {
        for &(value, expected) in cases {
            assert_eq!(
                classify(feature, value),
                Ok(expected),
                "{feature} reading {value}"
            );
        }
    }

    #[test]
    fn heart_rate_boundaries() {
        assert_buckets(
            TrackedFeature::Hr,
            &[
                (59.9, Severe),
                (60.0, Normal),
                (100.0, Normal),
                (100.1, Moderate),
                (120.0, Moderate),
                (120.1, Severe),
            ],
        );
    }

    #[test]
    fn respiratory_rate_closes_source_gaps() {
        assert_buckets(
            TrackedFeature::Resp,
            &[
                (9.0, Severe),
                (10.0, Moderate),
                (11.5, Moderate),
                (12.0, Normal),
                (20.0, Normal),
                (20.5, Moderate),
                (25.0, Moderate),
                (26.0, Severe),
            ],
        );
    }

    #[test]
    fn oxygen_saturation_boundaries() {
        assert_buckets(
            TrackedFeature::O2Sat,
            &[
                (89.9, Severe),
                (90.0, Moderate),
                (94.5, Moderate),
                (95.0, Normal),
                (100.0, Normal),
            ],
        );
    }

    #[test]
    fn temperature_boundaries() {
        assert_buckets(
            TrackedFeature::Temp,
            &[
                (34.9, Severe),
                (35.0, Moderate),
                (35.9, Moderate),
                (36.0, Normal),
                (37.95, Normal),
                (38.0, Moderate),
                (39.0, Moderate),
                (39.1, Severe),
            ],
        );
    }

    #[test]
    fn map_seventy_is_normal() {
        assert_buckets(
            TrackedFeature::Map,
            &[
                (59.0, Severe),
                (60.0, Moderate),
                (69.9, Moderate),
                (70.0, Normal),
                (104.9, Normal),
                (105.0, Moderate),
                (130.0, Moderate),
                (131.0, Severe),
            ],
        );
    }

    #[test]
    fn lab_boundaries() {
        assert_buckets(
            TrackedFeature::Wbc,
            &[(2.9, Severe), (3.0, Moderate), (4.0, Normal), (10.0, Moderate), (12.5, Severe)],
        );
        assert_buckets(
            TrackedFeature::Platelets,
            &[(49.0, Severe), (50.0, Moderate), (100.0, Moderate), (100.5, Normal)],
        );
        assert_buckets(
            TrackedFeature::Glucose,
            &[(59.0, Severe), (60.0, Normal), (140.0, Moderate), (200.0, Moderate), (201.0, Severe)],
        );
        assert_buckets(
            TrackedFeature::Lactate,
            &[(1.9, Normal), (2.0, Moderate), (4.0, Moderate), (4.1, Severe)],
        );
    }

    #[test]
    fn creatinine_rounds_half_away_from_zero() {
        assert_buckets(
            TrackedFeature::Creatinine,
            &[
                (0.3, Normal),
                (1.14, Normal),
                (1.15, Moderate),
                (1.16, Moderate),
                (1.25, Moderate),
                (2.0, Moderate),
                (2.04, Moderate),
                (2.049999, Moderate),
                (2.05, Severe),
                (2.1, Severe),
            ],
        );
    }

    #[test]
    fn rejects_non_finite_and_implausible_readings() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -1.0, 301.0] {
            let err = classify(TrackedFeature::Hr, value).unwrap_err();
            assert_eq!(err.feature, TrackedFeature::Hr);
            assert!(err.value.is_nan() || err.value == value);
        }
        assert!(classify(TrackedFeature::O2Sat, 100.5).is_err());
        assert!(classify(TrackedFeature::Temp, 24.0).is_err());
    }
}
