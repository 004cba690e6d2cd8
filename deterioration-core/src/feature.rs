use std::fmt;

use serde::{Deserialize, Serialize};

/// The monitored vitals and labs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TrackedFeature {
    Hr,
    Resp,
    O2Sat,
    Temp,
    Map,
    Wbc,
    Platelets,
    Creatinine,
    Glucose,
    Lactate,
}

impl TrackedFeature {
    /// Canonical order. Scores are accumulated in this order.
    pub const ALL: [TrackedFeature; 10] = [
        TrackedFeature::Hr,
        TrackedFeature::Resp,
        TrackedFeature::O2Sat,
        TrackedFeature::Temp,
        TrackedFeature::Map,
        TrackedFeature::Wbc,
        TrackedFeature::Platelets,
        TrackedFeature::Creatinine,
        TrackedFeature::Glucose,
        TrackedFeature::Lactate,
    ];

    /// Key used in JSON payloads.
    pub fn key(self) -> &'static str {
        match self {
            Self::Hr => "hr",
            Self::Resp => "resp",
            Self::O2Sat => "o2sat",
            Self::Temp => "temp",
            Self::Map => "map",
            Self::Wbc => "wbc",
            Self::Platelets => "platelets",
            Self::Creatinine => "creatinine",
            Self::Glucose => "glucose",
            Self::Lactate => "lactate",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hr => "Heart rate",
            Self::Resp => "Respiratory rate",
            Self::O2Sat => "Oxygen saturation",
            Self::Temp => "Temperature",
            Self::Map => "Mean arterial pressure",
            Self::Wbc => "White blood cell count",
            Self::Platelets => "Platelet count",
            Self::Creatinine => "Creatinine",
            Self::Glucose => "Glucose",
            Self::Lactate => "Lactate",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::Hr => "beats/min",
            Self::Resp => "breaths/min",
            Self::O2Sat => "%",
            Self::Temp => "°C",
            Self::Map => "mmHg",
            Self::Wbc | Self::Platelets => "10^3/µL",
            Self::Creatinine | Self::Glucose => "mg/dL",
            Self::Lactate => "mmol/L",
        }
    }
}

impl fmt::Display for TrackedFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-feature severity tier. Only comparable within one feature.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SeverityBucket {
    Normal,
    Moderate,
    Severe,
}

impl fmt::Display for SeverityBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Normal => "normal",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        };
        f.write_str(text)
    }
}
