use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoringError};

/// Workout scoring discipline.
///
/// Each scheme fixes the canonical unit its values are stored in and the
/// direction in which a value counts as a better performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkoutScheme {
    Time,
    TimeWithCap,
    RoundsReps,
    Reps,
    Load,
    Calories,
    Meters,
    Feet,
    Points,
    PassFail,
    Emom,
}

impl WorkoutScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::TimeWithCap => "time-with-cap",
            Self::RoundsReps => "rounds-reps",
            Self::Reps => "reps",
            Self::Load => "load",
            Self::Calories => "calories",
            Self::Meters => "meters",
            Self::Feet => "feet",
            Self::Points => "points",
            Self::PassFail => "pass-fail",
            Self::Emom => "emom",
        }
    }

    pub fn all() -> &'static [WorkoutScheme] {
        &[
            Self::Time,
            Self::TimeWithCap,
            Self::RoundsReps,
            Self::Reps,
            Self::Load,
            Self::Calories,
            Self::Meters,
            Self::Feet,
            Self::Points,
            Self::PassFail,
            Self::Emom,
        ]
    }

    /// Intrinsic direction, ignoring any configured aggregation method.
    pub fn sort_direction(&self) -> SortDirection {
        match self {
            Self::Time | Self::TimeWithCap => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }

    pub fn is_lower_better(&self) -> bool {
        self.sort_direction() == SortDirection::Asc
    }

    pub fn is_time_based(&self) -> bool {
        matches!(self, Self::Time | Self::TimeWithCap | Self::Emom)
    }

    pub fn supports_cap(&self) -> bool {
        matches!(self, Self::Time | Self::TimeWithCap)
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            Self::Time | Self::TimeWithCap | Self::Emom => Dimension::Duration,
            Self::Load => Dimension::Mass,
            Self::Meters | Self::Feet => Dimension::Length,
            Self::RoundsReps | Self::Reps | Self::Calories | Self::Points | Self::PassFail => {
                Dimension::Count
            }
        }
    }

    /// Unit a bare number typed for this scheme is read in.
    pub fn default_input_unit(&self) -> MeasurementUnit {
        match self {
            Self::Time | Self::TimeWithCap | Self::Emom => MeasurementUnit::Seconds,
            Self::Load => MeasurementUnit::Pounds,
            Self::Meters => MeasurementUnit::Meters,
            Self::Feet => MeasurementUnit::Feet,
            _ => MeasurementUnit::Count,
        }
    }

    fn parse_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::all()
            .iter()
            .copied()
            .find(|scheme| scheme.as_str() == normalized)
            .ok_or_else(|| ScoringError::UnknownScheme(s.to_string()))
    }
}

impl std::str::FromStr for WorkoutScheme {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for WorkoutScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Lower values are better.
    Asc,
    /// Higher values are better.
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            _ => Err(ScoringError::ValidationError(format!(
                "Unknown sort direction: '{}'. Expected asc or desc",
                s
            ))),
        }
    }
}

/// Aggregation method collapsing per-round values into one score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreType {
    Min,
    Max,
    Sum,
    Average,
    First,
    Last,
}

impl ScoreType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
            Self::Sum => "sum",
            Self::Average => "average",
            Self::First => "first",
            Self::Last => "last",
        }
    }

    pub fn is_lower_better(&self) -> bool {
        matches!(self, Self::Min)
    }

    /// Default method for a scheme when the workout configures none.
    pub fn default_for(scheme: WorkoutScheme) -> Self {
        match scheme {
            WorkoutScheme::Time | WorkoutScheme::TimeWithCap => Self::Min,
            WorkoutScheme::PassFail => Self::First,
            _ => Self::Max,
        }
    }
}

impl std::str::FromStr for ScoreType {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            "sum" => Ok(Self::Sum),
            "average" | "avg" => Ok(Self::Average),
            "first" => Ok(Self::First),
            "last" => Ok(Self::Last),
            _ => Err(ScoringError::ValidationError(format!(
                "Unknown score type: '{}'",
                s
            ))),
        }
    }
}

pub fn get_default_score_type(scheme: WorkoutScheme) -> ScoreType {
    ScoreType::default_for(scheme)
}

/// Sort direction for a workout, honouring an explicit `min`/`max` method.
pub fn get_sort_direction(scheme: WorkoutScheme, score_type: Option<ScoreType>) -> SortDirection {
    match score_type {
        Some(ScoreType::Min) => SortDirection::Asc,
        Some(ScoreType::Max) => SortDirection::Desc,
        _ => scheme.sort_direction(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TiebreakScheme {
    Time,
    Reps,
}

impl TiebreakScheme {
    pub fn sort_direction(&self) -> SortDirection {
        match self {
            Self::Time => SortDirection::Asc,
            Self::Reps => SortDirection::Desc,
        }
    }
}

impl std::str::FromStr for TiebreakScheme {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "time" => Ok(Self::Time),
            "reps" => Ok(Self::Reps),
            _ => Err(ScoringError::ValidationError(format!(
                "Unknown tie-break scheme: '{}'",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Duration,
    Mass,
    Length,
    Count,
}

/// Physical unit a raw value is expressed in before canonicalisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementUnit {
    #[serde(rename = "ms")]
    Milliseconds,
    #[serde(rename = "s")]
    Seconds,
    #[serde(rename = "min")]
    Minutes,
    #[serde(rename = "g")]
    Grams,
    #[serde(rename = "kg")]
    Kilograms,
    #[serde(rename = "lbs")]
    Pounds,
    #[serde(rename = "mm")]
    Millimeters,
    #[serde(rename = "m")]
    Meters,
    #[serde(rename = "km")]
    Kilometers,
    #[serde(rename = "ft")]
    Feet,
    #[serde(rename = "mi")]
    Miles,
    Count,
}

impl MeasurementUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Milliseconds => "ms",
            Self::Seconds => "s",
            Self::Minutes => "min",
            Self::Grams => "g",
            Self::Kilograms => "kg",
            Self::Pounds => "lbs",
            Self::Millimeters => "mm",
            Self::Meters => "m",
            Self::Kilometers => "km",
            Self::Feet => "ft",
            Self::Miles => "mi",
            Self::Count => "count",
        }
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            Self::Milliseconds | Self::Seconds | Self::Minutes => Dimension::Duration,
            Self::Grams | Self::Kilograms | Self::Pounds => Dimension::Mass,
            Self::Millimeters | Self::Meters | Self::Kilometers | Self::Feet | Self::Miles => {
                Dimension::Length
            }
            Self::Count => Dimension::Count,
        }
    }

    /// Number of canonical base units (ms, g, mm, count) in one of this unit.
    pub fn canonical_factor(&self) -> Decimal {
        match self {
            Self::Milliseconds | Self::Grams | Self::Millimeters | Self::Count => Decimal::ONE,
            Self::Seconds | Self::Kilograms | Self::Meters => Decimal::from(1_000),
            Self::Minutes => Decimal::from(60_000),
            Self::Kilometers => Decimal::from(1_000_000),
            Self::Miles => Decimal::from(1_609_344),
            // 453.592 g
            Self::Pounds => Decimal::new(453_592, 3),
            // 304.8 mm
            Self::Feet => Decimal::new(3_048, 1),
        }
    }
}

impl std::str::FromStr for MeasurementUnit {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "ms" | "millisecond" | "milliseconds" => Ok(Self::Milliseconds),
            "s" | "sec" | "second" | "seconds" => Ok(Self::Seconds),
            "min" | "minute" | "minutes" => Ok(Self::Minutes),
            "g" | "gram" | "grams" => Ok(Self::Grams),
            "kg" | "kgs" | "kilogram" | "kilograms" => Ok(Self::Kilograms),
            "lb" | "lbs" | "pound" | "pounds" => Ok(Self::Pounds),
            "mm" | "millimeter" | "millimeters" => Ok(Self::Millimeters),
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(Self::Meters),
            "km" | "kilometer" | "kilometers" => Ok(Self::Kilometers),
            "ft" | "foot" | "feet" => Ok(Self::Feet),
            "mi" | "mile" | "miles" => Ok(Self::Miles),
            "count" | "reps" => Ok(Self::Count),
            _ => Err(ScoringError::UnknownUnit(s.to_string())),
        }
    }
}

impl std::fmt::Display for MeasurementUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
