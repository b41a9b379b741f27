pub mod dto;
pub mod error;
pub mod models;
pub mod services;

pub use error::{Result, ScoringError};
pub use models::{
    CanonicalScore, EventStatus, MeasurementUnit, ScoreStatus, ScoreType, ScoringConfig,
    SortDirection, TiebreakScheme, WorkoutScheme,
};

// Entry points of each stage of the pipeline
pub use services::{
    ConfigValidator, ScoreParser, SortKey, aggregate_values, apply_tiebreakers,
    calculate_event_points, compute_sort_key, extract_from_sort_key, from_canonical, parse_score,
    to_canonical,
};
