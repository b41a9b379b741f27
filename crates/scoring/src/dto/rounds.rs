use serde::{Deserialize, Serialize};

use crate::models::WorkoutScheme;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundInput {
    pub raw: String,
    /// Scheme for this round when it differs from the workout's.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme_override: Option<WorkoutScheme>,
}

impl RoundInput {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            scheme_override: None,
        }
    }

    pub fn with_scheme(raw: impl Into<String>, scheme: WorkoutScheme) -> Self {
        Self {
            raw: raw.into(),
            scheme_override: Some(scheme),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedRounds {
    /// Canonical value of every round that parsed, in input order.
    pub rounds: Vec<i64>,
    pub aggregated: Option<i64>,
    /// Zero-based positions of rounds that were skipped as invalid.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<usize>,
}
