use std::borrow::Cow;
use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

/// Scoring configuration for one competition or event.
///
/// The algorithm is a tagged variant so the points engine matches on it
/// exhaustively. On the wire the tag and its payload sit beside the other
/// fields: `{ "algorithm": "traditional", "traditional": { .. }, .. }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringConfig {
    #[serde(flatten)]
    pub algorithm: ScoringAlgorithm,
    #[serde(default)]
    pub tiebreaker: TiebreakerConfig,
    #[serde(default)]
    pub status_handling: StatusHandling,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            algorithm: ScoringAlgorithm::Traditional {
                traditional: TraditionalConfig::default(),
            },
            tiebreaker: TiebreakerConfig::default(),
            status_handling: StatusHandling::default(),
        }
    }
}

/// Owned default configuration: traditional 100/5, countback, DNF last place,
/// DNS zero, withdrawn excluded.
pub fn default_scoring_config() -> ScoringConfig {
    ScoringConfig::default()
}

impl ScoringConfig {
    pub fn traditional(traditional: TraditionalConfig) -> Self {
        Self {
            algorithm: ScoringAlgorithm::Traditional { traditional },
            ..Self::default()
        }
    }

    pub fn p_score(p_score: PScoreConfig) -> Self {
        Self {
            algorithm: ScoringAlgorithm::PScore { p_score },
            ..Self::default()
        }
    }

    pub fn custom(custom_table: CustomTableConfig) -> Self {
        Self {
            algorithm: ScoringAlgorithm::Custom {
                custom_table,
                traditional: TraditionalConfig::default(),
            },
            ..Self::default()
        }
    }

    pub fn with_tiebreaker(mut self, tiebreaker: TiebreakerConfig) -> Self {
        self.tiebreaker = tiebreaker;
        self
    }

    pub fn with_status_handling(mut self, status_handling: StatusHandling) -> Self {
        self.status_handling = status_handling;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum ScoringAlgorithm {
    Traditional {
        #[serde(default)]
        traditional: TraditionalConfig,
    },
    PScore {
        #[serde(default, rename = "pScore")]
        p_score: PScoreConfig,
    },
    /// Fixed front-loaded table, see `WINNER_TAKES_MORE_TABLE`.
    WinnerTakesMore,
    /// Points equal the rank; the lowest total wins.
    Online,
    Custom {
        #[serde(rename = "customTable")]
        custom_table: CustomTableConfig,
        /// Parameters of the traditional base template.
        #[serde(default)]
        traditional: TraditionalConfig,
    },
}

impl ScoringAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Traditional { .. } => "traditional",
            Self::PScore { .. } => "p_score",
            Self::WinnerTakesMore => "winner_takes_more",
            Self::Online => "online",
            Self::Custom { .. } => "custom",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Traditional { .. } => "Traditional",
            Self::PScore { .. } => "P-Score",
            Self::WinnerTakesMore => "Winner Takes More",
            Self::Online => "Online",
            Self::Custom { .. } => "Custom",
        }
    }

    /// Whether standings rank the smallest points total first.
    pub fn lowest_total_wins(&self) -> bool {
        matches!(self, Self::Online)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_traditional_bounds"))]
pub struct TraditionalConfig {
    #[validate(custom(function = "validate_non_negative"))]
    pub step: Decimal,
    #[validate(custom(function = "validate_non_negative"))]
    pub first_place_points: Decimal,
    /// Floor applied after subtracting steps.
    #[serde(default)]
    pub min_points: Decimal,
}

impl Default for TraditionalConfig {
    fn default() -> Self {
        Self {
            step: Decimal::from(5),
            first_place_points: Decimal::ONE_HUNDRED,
            min_points: Decimal::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PScoreConfig {
    #[serde(default = "default_allow_negatives")]
    pub allow_negatives: bool,
    #[serde(default)]
    pub median_field: MedianField,
}

fn default_allow_negatives() -> bool {
    true
}

impl Default for PScoreConfig {
    fn default() -> Self {
        Self {
            allow_negatives: true,
            median_field: MedianField::TopHalf,
        }
    }
}

/// Which part of the field the P-score reference median is taken from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedianField {
    #[default]
    TopHalf,
    All,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomTableConfig {
    pub base_template: BaseTemplate,
    /// Rank (1-indexed) to points, applied over the base template.
    #[serde(default, deserialize_with = "deserialize_overrides")]
    #[validate(custom(function = "validate_override_ranks"))]
    pub overrides: BTreeMap<u32, Decimal>,
}

impl CustomTableConfig {
    pub fn new(base_template: BaseTemplate) -> Self {
        Self {
            base_template,
            overrides: BTreeMap::new(),
        }
    }

    pub fn with_override(mut self, rank: u32, points: Decimal) -> Self {
        self.overrides.insert(rank, points);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseTemplate {
    Traditional,
    PScore,
    WinnerTakesMore,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_tiebreaker"))]
pub struct TiebreakerConfig {
    pub primary: TiebreakerMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<TiebreakerMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_to_head_event_id: Option<String>,
}

impl Default for TiebreakerConfig {
    fn default() -> Self {
        Self::new(TiebreakerMethod::Countback)
    }
}

impl TiebreakerConfig {
    pub fn new(primary: TiebreakerMethod) -> Self {
        Self {
            primary,
            secondary: None,
            head_to_head_event_id: None,
        }
    }

    pub fn with_secondary(mut self, secondary: TiebreakerMethod) -> Self {
        self.secondary = Some(secondary);
        self
    }

    pub fn with_head_to_head_event(mut self, event_id: impl Into<String>) -> Self {
        self.head_to_head_event_id = Some(event_id.into());
        self
    }

    /// Primary rule followed by the secondary one, `none` entries skipped.
    pub fn methods(&self) -> Vec<TiebreakerMethod> {
        std::iter::once(self.primary)
            .chain(self.secondary)
            .filter(|method| *method != TiebreakerMethod::None)
            .collect()
    }

    pub fn uses(&self, method: TiebreakerMethod) -> bool {
        self.methods().contains(&method)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiebreakerMethod {
    Countback,
    HeadToHead,
    None,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusHandling {
    #[serde(default)]
    pub dnf: DnfHandling,
    #[serde(default)]
    pub dns: DnsHandling,
    #[serde(default)]
    pub withdrawn: WithdrawnHandling,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DnfHandling {
    Zero,
    WorstPerformance,
    #[default]
    LastPlace,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DnsHandling {
    #[default]
    Zero,
    WorstPerformance,
    Exclude,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WithdrawnHandling {
    #[default]
    Exclude,
    Zero,
}

/// Override ranks are object keys on the wire, so they arrive as strings.
fn deserialize_overrides<'de, D>(deserializer: D) -> Result<BTreeMap<u32, Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    BTreeMap::<String, Decimal>::deserialize(deserializer)?
        .into_iter()
        .map(|(rank, points)| {
            rank.trim()
                .parse::<u32>()
                .map(|rank| (rank, points))
                .map_err(|_| D::Error::custom(format!("invalid override rank '{}'", rank)))
        })
        .collect()
}

fn validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn validate_non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(validation_error("non_negative", "must not be negative"));
    }
    Ok(())
}

fn validate_traditional_bounds(config: &TraditionalConfig) -> Result<(), ValidationError> {
    if config.min_points > config.first_place_points {
        return Err(validation_error(
            "min_points",
            "minPoints must not exceed firstPlacePoints",
        ));
    }
    Ok(())
}

fn validate_override_ranks(overrides: &BTreeMap<u32, Decimal>) -> Result<(), ValidationError> {
    if overrides.contains_key(&0) {
        return Err(validation_error("override_rank", "override ranks start at 1"));
    }
    Ok(())
}

fn validate_tiebreaker(config: &TiebreakerConfig) -> Result<(), ValidationError> {
    if config.uses(TiebreakerMethod::HeadToHead)
        && config
            .head_to_head_event_id
            .as_deref()
            .is_none_or(|id| id.trim().is_empty())
    {
        return Err(validation_error(
            "head_to_head_event_id",
            "headToHeadEventId is required for head_to_head tiebreaker",
        ));
    }
    if config.secondary.is_some_and(|secondary| {
        secondary == config.primary && secondary != TiebreakerMethod::None
    }) {
        return Err(validation_error(
            "secondary",
            "secondary tiebreaker must differ from the primary one",
        ));
    }
    Ok(())
}
