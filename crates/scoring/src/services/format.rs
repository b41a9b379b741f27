use serde::{Deserialize, Serialize};

use crate::models::{CanonicalScore, MeasurementUnit, ScoreStatus, TiebreakScheme, WorkoutScheme};
use crate::services::codec::{canonical_to_unit, format_decimal};

/// Multiplier separating rounds from reps when no reps-per-round is known.
pub const ROUNDS_MULTIPLIER: i64 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatOptions {
    pub weight_unit: MeasurementUnit,
    /// Overrides the scheme's own distance unit.
    pub distance_unit: Option<MeasurementUnit>,
    pub include_unit: bool,
    pub decimals: u32,
    pub show_status: bool,
    pub reps_per_round: Option<u32>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            weight_unit: MeasurementUnit::Pounds,
            distance_unit: None,
            include_unit: true,
            decimals: 1,
            show_status: true,
            reps_per_round: None,
        }
    }
}

/// `M:SS`, with minutes unbounded and `.mmm` appended only when non-zero.
pub fn format_time(ms: i64) -> String {
    let sign = if ms < 0 { "-" } else { "" };
    let ms = ms.unsigned_abs();
    let minutes = ms / 60_000;
    let seconds = (ms / 1_000) % 60;
    let millis = ms % 1_000;

    if millis == 0 {
        format!("{}{}:{:02}", sign, minutes, seconds)
    } else {
        format!("{}{}:{:02}.{:03}", sign, minutes, seconds, millis)
    }
}

pub fn format_load(grams: i64, unit: MeasurementUnit, decimals: u32, include_unit: bool) -> String {
    let unit = if unit.dimension() == WorkoutScheme::Load.dimension() {
        unit
    } else {
        MeasurementUnit::Pounds
    };
    let amount = canonical_to_unit(grams, WorkoutScheme::Load, unit)
        .map(|value| format_decimal(value, decimals))
        .unwrap_or_else(|_| grams.to_string());

    if include_unit {
        format!("{} {}", amount, unit)
    } else {
        amount
    }
}

pub fn format_distance(
    millimeters: i64,
    unit: MeasurementUnit,
    decimals: u32,
    include_unit: bool,
) -> String {
    let unit = if unit.dimension() == WorkoutScheme::Meters.dimension() {
        unit
    } else {
        MeasurementUnit::Meters
    };
    let amount = canonical_to_unit(millimeters, WorkoutScheme::Meters, unit)
        .map(|value| format_decimal(value, decimals))
        .unwrap_or_else(|_| millimeters.to_string());

    if include_unit {
        format!("{}{}", amount, unit)
    } else {
        amount
    }
}

/// Split a rounds+reps canonical value back into its two parts.
pub fn split_rounds_reps(value: i64, reps_per_round: Option<u32>) -> (i64, i64) {
    let divisor = match reps_per_round {
        Some(reps) if reps > 0 => i64::from(reps),
        _ => ROUNDS_MULTIPLIER,
    };
    (value / divisor, value % divisor)
}

fn plural(count: i64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Display string for a canonical value of `scheme`.
pub fn format_value(value: i64, scheme: WorkoutScheme, options: &FormatOptions) -> String {
    match scheme {
        WorkoutScheme::Time | WorkoutScheme::TimeWithCap | WorkoutScheme::Emom => format_time(value),
        WorkoutScheme::RoundsReps => {
            let (rounds, reps) = split_rounds_reps(value, options.reps_per_round);
            if rounds == 0 {
                plural(reps, "rep", "reps")
            } else {
                format!("{}+{}", rounds, reps)
            }
        }
        WorkoutScheme::Reps => {
            if options.include_unit {
                plural(value, "rep", "reps")
            } else {
                value.to_string()
            }
        }
        WorkoutScheme::Load => format_load(value, options.weight_unit, options.decimals, options.include_unit),
        WorkoutScheme::Meters | WorkoutScheme::Feet => {
            let unit = options.distance_unit.unwrap_or_else(|| scheme.default_input_unit());
            format_distance(value, unit, options.decimals, options.include_unit)
        }
        WorkoutScheme::Calories => {
            if options.include_unit {
                format!("{} cal", value)
            } else {
                value.to_string()
            }
        }
        WorkoutScheme::Points => {
            if options.include_unit {
                format!("{} pts", value)
            } else {
                value.to_string()
            }
        }
        WorkoutScheme::PassFail => plural(value, "pass", "passes"),
    }
}

pub fn format_tiebreak(value: i64, scheme: TiebreakScheme) -> String {
    match scheme {
        TiebreakScheme::Time => format_time(value),
        TiebreakScheme::Reps => value.to_string(),
    }
}

/// Display string for a full score, honouring its status.
pub fn format_score(score: &CanonicalScore, options: &FormatOptions) -> String {
    match score.status {
        ScoreStatus::Cap => {
            let reps = score.secondary_value.map(|reps| plural(reps, "rep", "reps"));
            match (options.show_status, reps) {
                (true, Some(reps)) => format!("CAP ({})", reps),
                (false, Some(reps)) => reps,
                (_, None) => match score.time_cap_ms.or(score.value) {
                    Some(cap) if options.show_status => format!("CAP ({})", format_time(cap)),
                    _ => "CAP".to_string(),
                },
            }
        }
        ScoreStatus::Dq => "DQ".to_string(),
        ScoreStatus::Withdrawn => "WD".to_string(),
        ScoreStatus::Scored => match score.value {
            Some(value) => format_value(value, score.scheme, options),
            None => "N/A".to_string(),
        },
    }
}

pub fn format_score_with_tiebreak(score: &CanonicalScore, options: &FormatOptions) -> String {
    let base = format_score(score, options);
    match score.tiebreak_value {
        Some(value) => {
            let scheme = score.tiebreak_scheme.unwrap_or(TiebreakScheme::Time);
            format!("{} (TB: {})", base, format_tiebreak(value, scheme))
        }
        None => base,
    }
}

pub fn format_rounds(values: &[i64], scheme: WorkoutScheme, options: &FormatOptions) -> Vec<String> {
    values
        .iter()
        .map(|value| format_value(*value, scheme, options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(90_000), "1:30");
        assert_eq!(format_time(125_000), "2:05");
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(3_661_000), "61:01");
        assert_eq!(format_time(510_567), "8:30.567");
        assert_eq!(format_time(83_050), "1:23.050");
    }

    #[test]
    fn test_format_load_and_distance() {
        assert_eq!(format_load(142_881, MeasurementUnit::Pounds, 1, true), "315 lbs");
        assert_eq!(format_load(100_000, MeasurementUnit::Kilograms, 1, true), "100 kg");
        assert_eq!(format_load(102_500, MeasurementUnit::Kilograms, 1, false), "102.5");
        assert_eq!(format_distance(1_000_000, MeasurementUnit::Meters, 1, true), "1000m");
        assert_eq!(format_distance(30_480, MeasurementUnit::Feet, 1, true), "100ft");
        assert_eq!(format_distance(1_250_000, MeasurementUnit::Kilometers, 2, true), "1.25km");
    }

    #[test]
    fn test_format_rounds_reps() {
        let options = FormatOptions::default();
        assert_eq!(format_value(500_012, WorkoutScheme::RoundsReps, &options), "5+12");
        assert_eq!(format_value(150, WorkoutScheme::RoundsReps, &options), "150 reps");

        let options = FormatOptions {
            reps_per_round: Some(30),
            ..FormatOptions::default()
        };
        assert_eq!(format_value(162, WorkoutScheme::RoundsReps, &options), "5+12");
    }

    #[test]
    fn test_format_capped_score() {
        let score = CanonicalScore::new(WorkoutScheme::TimeWithCap, None, ScoreStatus::Cap)
            .with_secondary(142)
            .with_time_cap(900_000);
        assert_eq!(format_score(&score, &FormatOptions::default()), "CAP (142 reps)");

        let options = FormatOptions {
            show_status: false,
            ..FormatOptions::default()
        };
        assert_eq!(format_score(&score, &options), "142 reps");

        let bare = CanonicalScore::new(WorkoutScheme::TimeWithCap, Some(900_000), ScoreStatus::Cap);
        assert_eq!(format_score(&bare, &FormatOptions::default()), "CAP (15:00)");
    }

    #[test]
    fn test_format_with_tiebreak() {
        let score = CanonicalScore::scored(WorkoutScheme::RoundsReps, 500_012)
            .with_tiebreak(TiebreakScheme::Time, 510_000);
        assert_eq!(
            format_score_with_tiebreak(&score, &FormatOptions::default()),
            "5+12 (TB: 8:30)"
        );

        let score = CanonicalScore::scored(WorkoutScheme::Time, 754_000)
            .with_tiebreak(TiebreakScheme::Reps, 150);
        assert_eq!(
            format_score_with_tiebreak(&score, &FormatOptions::default()),
            "12:34 (TB: 150)"
        );
    }

    #[test]
    fn test_format_statuses() {
        let options = FormatOptions::default();
        let dq = CanonicalScore::new(WorkoutScheme::Time, None, ScoreStatus::Dq);
        assert_eq!(format_score(&dq, &options), "DQ");
        let unscored = CanonicalScore::new(WorkoutScheme::Reps, None, ScoreStatus::Scored);
        assert_eq!(format_score(&unscored, &options), "N/A");
    }

    #[test]
    fn test_format_rounds_list() {
        let values = [300_000, 285_000, 310_000];
        assert_eq!(
            format_rounds(&values, WorkoutScheme::Time, &FormatOptions::default()),
            vec!["5:00", "4:45", "5:10"]
        );
        assert_eq!(
            format_value(3, WorkoutScheme::PassFail, &FormatOptions::default()),
            "3 passes"
        );
    }
}
