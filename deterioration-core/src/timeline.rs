use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::feature::TrackedFeature;

/// Readings taken at one point of a patient stay.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TimeStep {
    #[serde(default)]
    pub recorded_at: Option<DateTime<Utc>>,
    pub readings: BTreeMap<TrackedFeature, f64>,
}

impl TimeStep {
    pub fn new<I>(readings: I) -> Self
    where
        I: IntoIterator<Item = (TrackedFeature, f64)>,
    {
        Self {
            recorded_at: None,
            readings: readings.into_iter().collect(),
        }
    }

    pub fn with_recorded_at(mut self, recorded_at: DateTime<Utc>) -> Self {
        self.recorded_at = Some(recorded_at);
        self
    }

    pub fn reading(&self, feature: TrackedFeature) -> Option<f64> {
        self.readings.get(&feature).copied()
    }
}

/// Ordered observations for one patient. Owned by the caller; scoring only borrows it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PatientTimeline {
    #[serde(default)]
    pub patient_id: Option<String>,
    pub steps: Vec<TimeStep>,
}

impl PatientTimeline {
    pub fn new(steps: Vec<TimeStep>) -> Self {
        Self {
            patient_id: None,
            steps,
        }
    }

    pub fn with_patient_id(mut self, patient_id: impl Into<String>) -> Self {
        self.patient_id = Some(patient_id.into());
        self
    }

    /// Build a timeline from one series of readings per feature.
    ///
    /// Steps are as long as the longest series; shorter series leave the
    /// feature absent from the trailing steps.
    pub fn from_series<I, S>(series: I) -> Self
    where
        I: IntoIterator<Item = (TrackedFeature, S)>,
        S: AsRef<[f64]>,
    {
        let mut steps: Vec<TimeStep> = Vec::new();
        for (feature, values) in series {
            for (index, value) in values.as_ref().iter().enumerate() {
                if steps.len() <= index {
                    steps.resize_with(index + 1, TimeStep::default);
                }
                steps[index].readings.insert(feature, *value);
            }
        }
        Self::new(steps)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
