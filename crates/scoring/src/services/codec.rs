use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{Result, ScoringError};
use crate::models::{MeasurementUnit, WorkoutScheme};

fn ensure_compatible(scheme: WorkoutScheme, unit: MeasurementUnit) -> Result<()> {
    if scheme.dimension() != unit.dimension() {
        return Err(ScoringError::UnitMismatch {
            unit: unit.as_str().to_string(),
            scheme: scheme.as_str().to_string(),
        });
    }
    Ok(())
}

/// Convert a physical quantity into the scheme's canonical integer unit.
///
/// The conversion is a single fixed-point multiplication rounded half away
/// from zero, so `315 lbs` always lands on the same gram count.
pub fn to_canonical(raw: Decimal, scheme: WorkoutScheme, unit: MeasurementUnit) -> Result<i64> {
    ensure_compatible(scheme, unit)?;

    let scaled = raw
        .checked_mul(unit.canonical_factor())
        .ok_or_else(|| ScoringError::CanonicalOverflow(format!("{} {}", raw, unit)))?;

    scaled
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| ScoringError::CanonicalOverflow(format!("{} {}", raw, unit)))
}

/// Canonical value expressed in `unit`, unrounded.
pub fn canonical_to_unit(value: i64, scheme: WorkoutScheme, unit: MeasurementUnit) -> Result<Decimal> {
    ensure_compatible(scheme, unit)?;

    Decimal::from(value)
        .checked_div(unit.canonical_factor())
        .ok_or_else(|| ScoringError::CanonicalOverflow(format!("{} / {}", value, unit)))
}

/// Render a canonical value in `target_unit` with at most `precision`
/// decimal places. Whole results drop their fractional part entirely.
pub fn from_canonical(
    value: i64,
    scheme: WorkoutScheme,
    target_unit: MeasurementUnit,
    precision: u32,
) -> Result<String> {
    let converted = canonical_to_unit(value, scheme, target_unit)?;
    Ok(format_decimal(converted, precision))
}

pub(crate) fn format_decimal(value: Decimal, precision: u32) -> String {
    let rounded = value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    if rounded.fract().is_zero() {
        rounded.trunc().normalize().to_string()
    } else {
        format!("{:.*}", precision as usize, rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pounds_to_grams() {
        let grams = to_canonical(Decimal::from(315), WorkoutScheme::Load, MeasurementUnit::Pounds).unwrap();
        // 315 * 453.592 = 142881.48
        assert_eq!(grams, 142_881);

        let grams = to_canonical(Decimal::from(225), WorkoutScheme::Load, MeasurementUnit::Pounds).unwrap();
        assert_eq!(grams, 102_058);
    }

    #[test]
    fn test_metric_conversions_are_exact() {
        assert_eq!(
            to_canonical(Decimal::from(400), WorkoutScheme::Meters, MeasurementUnit::Meters).unwrap(),
            400_000
        );
        assert_eq!(
            to_canonical(Decimal::new(15, 1), WorkoutScheme::Meters, MeasurementUnit::Kilometers).unwrap(),
            1_500_000
        );
        assert_eq!(
            to_canonical(Decimal::new(1005, 1), WorkoutScheme::Load, MeasurementUnit::Kilograms).unwrap(),
            100_500
        );
        assert_eq!(
            to_canonical(Decimal::new(8345, 2), WorkoutScheme::Time, MeasurementUnit::Seconds).unwrap(),
            83_450
        );
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        // 0.0005 s is half a millisecond
        assert_eq!(
            to_canonical(Decimal::new(5, 4), WorkoutScheme::Time, MeasurementUnit::Seconds).unwrap(),
            1
        );
    }

    #[test]
    fn test_unit_must_match_scheme() {
        let err = to_canonical(Decimal::ONE, WorkoutScheme::Load, MeasurementUnit::Meters).unwrap_err();
        assert!(matches!(err, ScoringError::UnitMismatch { .. }));
        assert!(from_canonical(1_000, WorkoutScheme::Time, MeasurementUnit::Kilograms, 0).is_err());
    }

    #[test]
    fn test_overflow_is_an_error() {
        let err = to_canonical(Decimal::MAX, WorkoutScheme::Time, MeasurementUnit::Minutes).unwrap_err();
        assert!(err.is_range_violation());
    }

    #[test]
    fn test_from_canonical_drops_whole_decimals() {
        assert_eq!(
            from_canonical(142_881, WorkoutScheme::Load, MeasurementUnit::Pounds, 1).unwrap(),
            "315"
        );
        assert_eq!(
            from_canonical(1_500_000, WorkoutScheme::Meters, MeasurementUnit::Kilometers, 2).unwrap(),
            "1.50"
        );
        assert_eq!(
            from_canonical(400_000, WorkoutScheme::Meters, MeasurementUnit::Meters, 2).unwrap(),
            "400"
        );
        assert_eq!(
            from_canonical(30_480, WorkoutScheme::Feet, MeasurementUnit::Feet, 1).unwrap(),
            "100"
        );
    }
}
