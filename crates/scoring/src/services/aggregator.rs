use crate::dto::{EncodedRounds, RoundInput, WorkoutDefinition};
use crate::error::{Result, ScoringError};
use crate::models::{EventStatus, MeasurementUnit, ScoreType, WorkoutScheme};
use crate::services::parser::ScoreParser;

/// Collapse per-round canonical values into one value.
///
/// Sums are exact; `average` rounds half up. An empty slice has no value.
pub fn aggregate_values(values: &[i64], method: ScoreType) -> Result<Option<i64>> {
    let (Some(first), Some(last)) = (values.first(), values.last()) else {
        return Ok(None);
    };

    let value = match method {
        ScoreType::Min => values.iter().copied().min(),
        ScoreType::Max => values.iter().copied().max(),
        ScoreType::First => Some(*first),
        ScoreType::Last => Some(*last),
        ScoreType::Sum => Some(narrow(wide_sum(values))?),
        ScoreType::Average => {
            let count = values.len() as i128;
            let sum = wide_sum(values);
            // floor((2 * sum + count) / (2 * count)) is round-half-up
            let rounded = (2 * sum + count).div_euclid(2 * count);
            Some(narrow(rounded)?)
        }
    };
    Ok(value)
}

fn wide_sum(values: &[i64]) -> i128 {
    values.iter().map(|v| i128::from(*v)).sum()
}

fn narrow(value: i128) -> Result<i64> {
    i64::try_from(value).map_err(|_| ScoringError::AggregationOverflow)
}

pub fn is_lower_better(method: ScoreType) -> bool {
    method.is_lower_better()
}

/// Parse every round, drop the ones that fail, and aggregate the rest.
///
/// `unit` applies to rounds whose scheme measures the same dimension.
pub fn encode_rounds(
    rounds: &[RoundInput],
    scheme: WorkoutScheme,
    method: ScoreType,
    unit: Option<MeasurementUnit>,
) -> Result<EncodedRounds> {
    let mut encoded = EncodedRounds::default();

    for (index, round) in rounds.iter().enumerate() {
        let round_scheme = round.scheme_override.unwrap_or(scheme);
        let mut definition = WorkoutDefinition::new(round_scheme);
        definition.unit = unit.filter(|unit| unit.dimension() == round_scheme.dimension());

        let result = ScoreParser::new(definition).parse(&round.raw);
        match (result.score_status, result.raw_value) {
            (Some(EventStatus::Scored), Some(value)) if result.is_valid => encoded.rounds.push(value),
            _ => encoded.skipped.push(index),
        }
    }

    encoded.aggregated = aggregate_values(&encoded.rounds, method)?;
    Ok(encoded)
}

/// True when `value` lies more than two standard deviations from the mean of
/// `field`. Fields of fewer than three values never flag an outlier.
pub fn is_outlier(value: i64, field: &[i64]) -> bool {
    if field.len() < 3 {
        return false;
    }

    // (n*v - S)^2 > 4 * (n*Q - S^2), all in integers
    let n = field.len() as i128;
    let exact = (|| {
        let sum = wide_sum(field);
        let squares = field
            .iter()
            .try_fold(0_i128, |acc, v| acc.checked_add(i128::from(*v).checked_mul(i128::from(*v))?))?;
        let deviation = n.checked_mul(i128::from(value))?.checked_sub(sum)?;
        let lhs = deviation.checked_mul(deviation)?;
        let spread = n.checked_mul(squares)?.checked_sub(sum.checked_mul(sum)?)?;
        Some(lhs > spread.checked_mul(4)?)
    })();

    exact.unwrap_or_else(|| {
        let count = field.len() as f64;
        let mean = field.iter().map(|v| *v as f64).sum::<f64>() / count;
        let variance = field.iter().map(|v| (*v as f64 - mean).powi(2)).sum::<f64>() / count;
        (value as f64 - mean).abs() > 2.0 * variance.sqrt()
    })
}
