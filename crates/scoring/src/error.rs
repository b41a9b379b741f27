use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("Value {value} is outside the packable range 0..={max}")]
    ValueOutOfRange { value: i64, max: i64 },

    #[error("Canonical conversion overflowed: {0}")]
    CanonicalOverflow(String),

    #[error("Unit '{unit}' cannot express {scheme} scores")]
    UnitMismatch { unit: String, scheme: String },

    #[error("Invalid sort key: {0}")]
    InvalidSortKey(String),

    #[error("Unknown workout scheme: {0}")]
    UnknownScheme(String),

    #[error("Unknown scoring algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Unknown score status: {0}")]
    UnknownStatus(String),

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("headToHeadEventId is required for head_to_head tiebreaker")]
    MissingHeadToHeadEvent,

    #[error("Aggregated value does not fit in a 64-bit integer")]
    AggregationOverflow,

    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ScoringError>;

impl ScoringError {
    /// Errors caused by a value that upstream validation should have rejected.
    pub fn is_range_violation(&self) -> bool {
        matches!(
            self,
            ScoringError::ValueOutOfRange { .. }
                | ScoringError::CanonicalOverflow(_)
                | ScoringError::AggregationOverflow
        )
    }

    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            ScoringError::MissingHeadToHeadEvent
                | ScoringError::UnknownAlgorithm(_)
                | ScoringError::ValidationError(_)
        )
    }
}
