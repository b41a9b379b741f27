use serde::{Deserialize, Serialize};

use crate::models::EventStatus;

/// Outcome of parsing one raw score entry.
///
/// Malformed input is reported through `is_valid`/`error` and never as an
/// `Err`. A `warning` marks a usable but suspicious value that the caller
/// should confirm before committing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub formatted: String,
    pub score_status: Option<EventStatus>,
    /// Canonical value (ms, g, mm or count).
    pub raw_value: Option<i64>,
    #[serde(default)]
    pub needs_secondary: bool,
    #[serde(default)]
    pub needs_tiebreak: bool,
}

impl ParseResult {
    pub fn valid(formatted: impl Into<String>, status: EventStatus, raw_value: Option<i64>) -> Self {
        Self {
            is_valid: true,
            error: None,
            warning: None,
            formatted: formatted.into(),
            score_status: Some(status),
            raw_value,
            needs_secondary: false,
            needs_tiebreak: false,
        }
    }

    pub fn scored(formatted: impl Into<String>, raw_value: i64) -> Self {
        Self::valid(formatted, EventStatus::Scored, Some(raw_value))
    }

    pub fn invalid(formatted: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(error.into()),
            warning: None,
            formatted: formatted.into(),
            score_status: None,
            raw_value: None,
            needs_secondary: false,
            needs_tiebreak: false,
        }
    }

    /// Blank input: not valid, but nothing to report either.
    pub fn empty() -> Self {
        Self {
            is_valid: false,
            error: None,
            warning: None,
            formatted: String::new(),
            score_status: None,
            raw_value: None,
            needs_secondary: false,
            needs_tiebreak: false,
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }

    pub fn with_needs_secondary(mut self, needs_secondary: bool) -> Self {
        self.needs_secondary = needs_secondary;
        self
    }

    pub fn with_needs_tiebreak(mut self, needs_tiebreak: bool) -> Self {
        self.needs_tiebreak = needs_tiebreak;
        self
    }

    pub fn has_warning(&self) -> bool {
        self.warning.is_some()
    }

    /// Invalid results never commit; results with a warning commit only once
    /// the caller has confirmed them.
    pub fn can_commit(&self, confirmed: bool) -> bool {
        self.is_valid && (!self.has_warning() || confirmed)
    }
}
