use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An athlete's accumulated competition result before tiebreaking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsInput {
    pub athlete_id: String,
    pub total_points: Decimal,
    /// Event id to the rank earned in that event.
    #[serde(default)]
    pub event_placements: BTreeMap<String, u32>,
}

impl StandingsInput {
    pub fn new(athlete_id: impl Into<String>, total_points: Decimal) -> Self {
        Self {
            athlete_id: athlete_id.into(),
            total_points,
            event_placements: BTreeMap::new(),
        }
    }

    pub fn with_placement(mut self, event_id: impl Into<String>, rank: u32) -> Self {
        self.event_placements.insert(event_id.into(), rank);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsEntry {
    pub athlete_id: String,
    pub total_points: Decimal,
    pub rank: u32,
}
