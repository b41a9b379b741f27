use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::EventStatus;

/// One athlete's result for one event, as fed to the points engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventScoreInput {
    pub athlete_id: String,
    pub value: Option<i64>,
    pub status: EventStatus,
    /// Precomputed countback position within a numeric tie, lower is better.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countback: Option<i64>,
    /// Placement in the head-to-head reference event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_to_head_placement: Option<u32>,
}

impl EventScoreInput {
    pub fn new(athlete_id: impl Into<String>, value: Option<i64>, status: EventStatus) -> Self {
        Self {
            athlete_id: athlete_id.into(),
            value,
            status,
            countback: None,
            head_to_head_placement: None,
        }
    }

    pub fn scored(athlete_id: impl Into<String>, value: i64) -> Self {
        Self::new(athlete_id, Some(value), EventStatus::Scored)
    }

    pub fn with_countback(mut self, countback: i64) -> Self {
        self.countback = Some(countback);
        self
    }

    pub fn with_head_to_head(mut self, placement: u32) -> Self {
        self.head_to_head_placement = Some(placement);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPointsResult {
    pub athlete_id: String,
    pub points: Decimal,
    pub rank: u32,
}
