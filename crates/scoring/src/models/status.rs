use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoringError};

/// Storage and ranking status of a single score.
///
/// Ordered `scored < cap < dq < withdrawn`; the order is packed into the top
/// bits of every sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreStatus {
    Scored,
    Cap,
    Dq,
    Withdrawn,
}

impl ScoreStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scored => "scored",
            Self::Cap => "cap",
            Self::Dq => "dq",
            Self::Withdrawn => "withdrawn",
        }
    }

    pub fn order(&self) -> u8 {
        match self {
            Self::Scored => 0,
            Self::Cap => 1,
            Self::Dq => 2,
            Self::Withdrawn => 3,
        }
    }

    pub fn from_order(order: u8) -> Option<Self> {
        match order {
            0 => Some(Self::Scored),
            1 => Some(Self::Cap),
            2 => Some(Self::Dq),
            3 => Some(Self::Withdrawn),
            _ => None,
        }
    }
}

impl std::str::FromStr for ScoreStatus {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "scored" => Ok(Self::Scored),
            "cap" | "capped" => Ok(Self::Cap),
            "dq" => Ok(Self::Dq),
            "withdrawn" | "wd" => Ok(Self::Withdrawn),
            _ => Err(ScoringError::UnknownStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for ScoreStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status vocabulary consumed by the points engine.
///
/// Richer than [`ScoreStatus`]: it also distinguishes athletes who did not
/// finish from those who did not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Scored,
    Cap,
    Dq,
    Dnf,
    Dns,
    Withdrawn,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scored => "scored",
            Self::Cap => "cap",
            Self::Dq => "dq",
            Self::Dnf => "dnf",
            Self::Dns => "dns",
            Self::Withdrawn => "withdrawn",
        }
    }

    /// Scores that take part in the performance ordering.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Scored | Self::Cap)
    }

    /// Collapse onto the storage vocabulary. `dnf` and `dns` have no stored
    /// counterpart and are recorded as withdrawn.
    pub fn to_score_status(self) -> ScoreStatus {
        match self {
            Self::Scored => ScoreStatus::Scored,
            Self::Cap => ScoreStatus::Cap,
            Self::Dq => ScoreStatus::Dq,
            Self::Dnf | Self::Dns | Self::Withdrawn => ScoreStatus::Withdrawn,
        }
    }
}

impl From<ScoreStatus> for EventStatus {
    fn from(status: ScoreStatus) -> Self {
        match status {
            ScoreStatus::Scored => Self::Scored,
            ScoreStatus::Cap => Self::Cap,
            ScoreStatus::Dq => Self::Dq,
            ScoreStatus::Withdrawn => Self::Withdrawn,
        }
    }
}

impl std::str::FromStr for EventStatus {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "scored" => Ok(Self::Scored),
            "cap" | "capped" => Ok(Self::Cap),
            "dq" => Ok(Self::Dq),
            "dnf" => Ok(Self::Dnf),
            "dns" => Ok(Self::Dns),
            "withdrawn" | "wd" => Ok(Self::Withdrawn),
            _ => Err(ScoringError::UnknownStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
