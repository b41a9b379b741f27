use serde::{Deserialize, Serialize};

use crate::models::{
    MeasurementUnit, ScoreType, SortDirection, TiebreakScheme, WorkoutScheme, get_sort_direction,
};

/// Workout metadata the parser and aggregator read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDefinition {
    pub scheme: WorkoutScheme,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_type: Option<ScoreType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_cap_ms: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiebreak_scheme: Option<TiebreakScheme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounds_to_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps_per_round: Option<u32>,
    /// Unit bare numbers are typed in. Falls back to the scheme default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<MeasurementUnit>,
}

impl WorkoutDefinition {
    pub fn new(scheme: WorkoutScheme) -> Self {
        Self {
            scheme,
            score_type: None,
            time_cap_ms: None,
            tiebreak_scheme: None,
            rounds_to_score: None,
            reps_per_round: None,
            unit: None,
        }
    }

    pub fn with_score_type(mut self, score_type: ScoreType) -> Self {
        self.score_type = Some(score_type);
        self
    }

    pub fn with_time_cap(mut self, time_cap_ms: i64) -> Self {
        self.time_cap_ms = Some(time_cap_ms);
        self
    }

    pub fn with_tiebreak(mut self, tiebreak_scheme: TiebreakScheme) -> Self {
        self.tiebreak_scheme = Some(tiebreak_scheme);
        self
    }

    pub fn with_rounds_to_score(mut self, rounds: u32) -> Self {
        self.rounds_to_score = Some(rounds);
        self
    }

    pub fn with_reps_per_round(mut self, reps: u32) -> Self {
        self.reps_per_round = Some(reps);
        self
    }

    pub fn with_unit(mut self, unit: MeasurementUnit) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn input_unit(&self) -> MeasurementUnit {
        self.unit.unwrap_or_else(|| self.scheme.default_input_unit())
    }

    pub fn effective_score_type(&self) -> ScoreType {
        self.score_type
            .unwrap_or_else(|| ScoreType::default_for(self.scheme))
    }

    pub fn direction(&self) -> SortDirection {
        get_sort_direction(self.scheme, self.score_type)
    }
}
