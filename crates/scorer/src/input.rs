use anyhow::{Context, Result};
use scoring::dto::{EventScoreInput, StandingsInput};
use scoring::models::{ScoringConfig, TiebreakerConfig, WorkoutScheme};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::Path;

/// One event's results, as exported by the scoring desk.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFile {
    pub event_id: String,
    pub scheme: WorkoutScheme,
    #[serde(default)]
    pub config: Option<ScoringConfig>,
    pub scores: Vec<EventScoreInput>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsFile {
    #[serde(default)]
    pub tiebreaker: TiebreakerConfig,
    /// When present, its algorithm decides the ranking direction and its
    /// tiebreaker replaces `tiebreaker`.
    #[serde(default)]
    pub config: Option<ScoringConfig>,
    pub athletes: Vec<StandingsInput>,
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    parse_json(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}

pub fn parse_json<T: DeserializeOwned>(content: &str) -> Result<T> {
    Ok(serde_json::from_str(content)?)
}
