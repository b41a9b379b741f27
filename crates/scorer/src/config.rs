use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Scoring configuration used when an event file carries none.
    pub scoring_config: Option<PathBuf>,
    pub pretty: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            scoring_config: lookup("SCORER_CONFIG").map(PathBuf::from),
            pretty: lookup("SCORER_PRETTY")
                .map(|value| value.parse())
                .transpose()
                .context("SCORER_PRETTY must be true or false")?
                .unwrap_or(false),
        })
    }
}
