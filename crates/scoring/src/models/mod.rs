pub mod scheme;
pub mod score;
pub mod scoring_config;
pub mod status;

pub use scheme::{
    Dimension, MeasurementUnit, ScoreType, SortDirection, TiebreakScheme, WorkoutScheme,
    get_default_score_type, get_sort_direction,
};
pub use score::CanonicalScore;
pub use scoring_config::{
    BaseTemplate, CustomTableConfig, DnfHandling, DnsHandling, MedianField, PScoreConfig,
    ScoringAlgorithm, ScoringConfig, StatusHandling, TiebreakerConfig, TiebreakerMethod,
    TraditionalConfig, WithdrawnHandling, default_scoring_config,
};
pub use status::{EventStatus, ScoreStatus};
