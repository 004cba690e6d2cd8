//! Weighted aggregation of transition scores over a patient stay.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::classify::classify;
use crate::error::TrajectoryError;
use crate::feature::{SeverityBucket, TrackedFeature};
use crate::timeline::PatientTimeline;
use crate::transition::transition_score;
use crate::weights::WeightTable;
use crate::DeteriorationScore;

/// How one feature moved the score at one time step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureContribution {
    pub feature: TrackedFeature,
    pub value: f64,
    pub severity: SeverityBucket,
    /// `None` at the first time step.
    pub previous_severity: Option<SeverityBucket>,
    pub transition: i32,
    pub weighted: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepScore {
    pub index: usize,
    pub recorded_at: Option<DateTime<Utc>>,
    pub score: DeteriorationScore,
    pub contributions: Vec<FeatureContribution>,
}

/// Scores for every time step plus the per-feature breakdown behind them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrajectoryReport {
    pub patient_id: Option<String>,
    pub steps: Vec<StepScore>,
}

impl TrajectoryReport {
    pub fn scores(&self) -> Vec<DeteriorationScore> {
        self.steps.iter().map(|step| step.score).collect()
    }

    /// Highest-scoring step; the earliest one wins a tie.
    pub fn peak(&self) -> Option<&StepScore> {
        let mut best: Option<&StepScore> = None;
        for step in &self.steps {
            match best {
                Some(current) if step.score <= current.score => {}
                _ => best = Some(step),
            }
        }
        best
    }
}

/// Deterioration score for each time step of `timeline`, in order.
///
/// The first step has no predecessor and scores 0 for every feature. Every
/// step must carry a reading for each feature in `weights`; a missing or
/// unclassifiable reading fails the whole call.
pub fn score_trajectory(
    timeline: &PatientTimeline,
    weights: &WeightTable,
) -> Result<Vec<DeteriorationScore>, TrajectoryError> {
    score_trajectory_detailed(timeline, weights).map(|report| report.scores())
}

/// Like [`score_trajectory`], keeping the per-feature contributions.
pub fn score_trajectory_detailed(
    timeline: &PatientTimeline,
    weights: &WeightTable,
) -> Result<TrajectoryReport, TrajectoryError> {
    let tracked: Vec<(TrackedFeature, f64)> = weights.iter().collect();
    debug!(
        patient_id = timeline.patient_id.as_deref().unwrap_or("-"),
        steps = timeline.len(),
        features = tracked.len(),
        "scoring trajectory"
    );

    let classified = classify_steps(timeline, &tracked).map_err(|err| {
        warn!(
            patient_id = timeline.patient_id.as_deref().unwrap_or("-"),
            error = %err,
            "trajectory rejected"
        );
        err
    })?;

    let mut steps = Vec::with_capacity(classified.len());
    let mut previous: Option<&[ClassifiedReading]> = None;

    for (index, current) in classified.iter().enumerate() {
        let mut score = 0.0;
        let mut contributions = Vec::with_capacity(current.len());

        for (slot, reading) in current.iter().enumerate() {
            let previous_severity = previous.map(|readings| readings[slot].severity);
            let transition = previous_severity
                .map_or(0, |before| transition_score(reading.severity, before));
            let weighted = f64::from(transition) * reading.weight;
            score += weighted;

            contributions.push(FeatureContribution {
                feature: reading.feature,
                value: reading.value,
                severity: reading.severity,
                previous_severity,
                transition,
                weighted,
            });
        }

        steps.push(StepScore {
            index,
            recorded_at: timeline.steps[index].recorded_at,
            score,
            contributions,
        });
        previous = Some(current.as_slice());
    }

    Ok(TrajectoryReport {
        patient_id: timeline.patient_id.clone(),
        steps,
    })
}

struct ClassifiedReading {
    feature: TrackedFeature,
    value: f64,
    severity: SeverityBucket,
    weight: f64,
}

// Every step is validated before any score is produced.
fn classify_steps(
    timeline: &PatientTimeline,
    tracked: &[(TrackedFeature, f64)],
) -> Result<Vec<Vec<ClassifiedReading>>, TrajectoryError> {
    let mut classified = Vec::with_capacity(timeline.len());

    for (time_step, step) in timeline.steps.iter().enumerate() {
        let mut present = Vec::with_capacity(tracked.len());
        let mut missing = Vec::new();
        for &(feature, weight) in tracked {
            match step.reading(feature) {
                Some(value) => present.push((feature, weight, value)),
                None => missing.push(feature),
            }
        }
        if !missing.is_empty() {
            return Err(TrajectoryError::IncompleteTimeStep { time_step, missing });
        }

        let mut readings = Vec::with_capacity(present.len());
        for (feature, weight, value) in present {
            let severity = classify(feature, value)
                .map_err(|source| TrajectoryError::Unclassifiable { time_step, source })?;
            readings.push(ClassifiedReading {
                feature,
                value,
                severity,
                weight,
            });
        }
        classified.push(readings);
    }

    Ok(classified)
}
