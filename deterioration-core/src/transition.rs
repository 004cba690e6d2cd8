use crate::feature::SeverityBucket;

/// Signed escalation delta between two consecutive buckets of one feature.
///
/// Entering `Severe` from a lower tier scores 3, staying severe 2. `Moderate`
/// scores 1, or 0 when stepping down from severe. Returning to `Normal` from
/// an abnormal tier scores -1.
pub fn transition_score(current: SeverityBucket, previous: SeverityBucket) -> i32 {
    use crate::feature::SeverityBucket::{Moderate, Normal, Severe};

    match (current, previous) {
        (Severe, Severe) => 2,
        (Severe, Moderate | Normal) => 3,
        (Moderate, Severe) => 0,
        (Moderate, Moderate | Normal) => 1,
        (Normal, Normal) => 0,
        (Normal, Moderate | Severe) => -1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::SeverityBucket::{Moderate, Normal, Severe};

    #[test]
    fn full_transition_table() {
        let table = [
            (Normal, Normal, 0),
            (Normal, Moderate, -1),
            (Normal, Severe, -1),
            (Moderate, Normal, 1),
            (Moderate, Moderate, 1),
            (Moderate, Severe, 0),
            (Severe, Normal, 3),
            (Severe, Moderate, 3),
            (Severe, Severe, 2),
        ];
        for (current, previous, expected) in table {
            assert_eq!(
                transition_score(current, previous),
                expected,
                "{previous} -> {current}"
            );
        }
    }

    #[test]
    fn full_recovery_scores_minus_one() {
        assert_eq!(transition_score(Normal, Severe), -1);
    }

    #[test]
    fn direction_matters() {
        assert_ne!(
            transition_score(Severe, Normal),
            transition_score(Normal, Severe)
        );
    }

    #[test]
    fn escalation_from_normal_is_monotonic() {
        let to_severe = transition_score(Severe, Normal);
        let to_moderate = transition_score(Moderate, Normal);
        let stay = transition_score(Normal, Normal);
        assert!(to_severe > to_moderate);
        assert!(to_moderate > stay);
    }
}
