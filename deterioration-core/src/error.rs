use crate::feature::TrackedFeature;

/// A reading that falls outside every bucket of its feature.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("{feature} reading {value} cannot be classified")]
pub struct UnclassifiableValue {
    pub feature: TrackedFeature,
    pub value: f64,
}

/// Why a trajectory could not be scored. No partial output accompanies it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrajectoryError {
    #[error("time step {time_step}: {source}")]
    Unclassifiable {
        time_step: usize,
        #[source]
        source: UnclassifiableValue,
    },
    #[error("time step {time_step} is missing readings for {}", join_features(.missing))]
    IncompleteTimeStep {
        time_step: usize,
        missing: Vec<TrackedFeature>,
    },
}

/// Rejected weight table configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeightError {
    #[error("weight for {feature} must be finite and positive, got {weight}")]
    InvalidWeight { feature: TrackedFeature, weight: f64 },
    #[error("weight table tracks no features")]
    Empty,
    #[error("weight for {0} given more than once")]
    DuplicateFeature(TrackedFeature),
    #[error("cannot read weight table: {0}")]
    Parse(String),
}

fn join_features(features: &[TrackedFeature]) -> String {
    features
        .iter()
        .map(|feature| feature.key())
        .collect::<Vec<_>>()
        .join(", ")
}
