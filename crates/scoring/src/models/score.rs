use serde::{Deserialize, Serialize};

use super::scheme::{ScoreType, SortDirection, TiebreakScheme, WorkoutScheme, get_sort_direction};
use super::status::ScoreStatus;

/// One athlete's score for one workout, in canonical units.
///
/// `value` is `None` only for unscored performances. A capped score carries
/// the reps completed at the cap in `secondary_value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalScore {
    pub value: Option<i64>,
    pub status: ScoreStatus,
    pub scheme: WorkoutScheme,
    pub score_type: ScoreType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiebreak_value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiebreak_scheme: Option<TiebreakScheme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_cap_ms: Option<i64>,
}

impl CanonicalScore {
    pub fn new(scheme: WorkoutScheme, value: Option<i64>, status: ScoreStatus) -> Self {
        Self {
            value,
            status,
            scheme,
            score_type: ScoreType::default_for(scheme),
            secondary_value: None,
            tiebreak_value: None,
            tiebreak_scheme: None,
            time_cap_ms: None,
        }
    }

    pub fn scored(scheme: WorkoutScheme, value: i64) -> Self {
        Self::new(scheme, Some(value), ScoreStatus::Scored)
    }

    pub fn with_score_type(mut self, score_type: ScoreType) -> Self {
        self.score_type = score_type;
        self
    }

    pub fn with_secondary(mut self, reps_at_cap: i64) -> Self {
        self.secondary_value = Some(reps_at_cap);
        self
    }

    pub fn with_tiebreak(mut self, scheme: TiebreakScheme, value: i64) -> Self {
        self.tiebreak_scheme = Some(scheme);
        self.tiebreak_value = Some(value);
        self
    }

    pub fn with_time_cap(mut self, time_cap_ms: i64) -> Self {
        self.time_cap_ms = Some(time_cap_ms);
        self
    }

    pub fn direction(&self) -> SortDirection {
        get_sort_direction(self.scheme, Some(self.score_type))
    }

    /// Tiebreaks default to time semantics when no scheme was recorded.
    pub fn tiebreak_is_time(&self) -> bool {
        self.tiebreak_scheme.unwrap_or(TiebreakScheme::Time) == TiebreakScheme::Time
    }
}
