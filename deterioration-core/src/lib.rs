//! Rule-based patient deterioration index.
//!
//! Raw vitals and labs are bucketed per feature ([`classify`]), consecutive
//! buckets are turned into signed escalation deltas ([`transition_score`]) and
//! the weighted deltas are summed into one score per time step
//! ([`score_trajectory`]).

mod classify;
mod error;
mod feature;
mod timeline;
mod trajectory;
mod transition;
mod weights;

pub use classify::{classify, plausible_range};
pub use error::{TrajectoryError, UnclassifiableValue, WeightError};
pub use feature::{SeverityBucket, TrackedFeature};
pub use timeline::{PatientTimeline, TimeStep};
pub use trajectory::{
    score_trajectory, score_trajectory_detailed, FeatureContribution, StepScore, TrajectoryReport,
};
pub use transition::transition_score;
pub use weights::WeightTable;

/// One score per time step, same order as the timeline.
pub type DeteriorationScore = f64;
