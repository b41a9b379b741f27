use std::str::FromStr;

use rust_decimal::Decimal;

use crate::dto::{ParseResult, WorkoutDefinition};
use crate::models::{
    CanonicalScore, EventStatus, MeasurementUnit, ScoreStatus, TiebreakScheme, WorkoutScheme,
};
use crate::services::codec::to_canonical;
use crate::services::format::{ROUNDS_MULTIPLIER, format_distance, format_load, format_time};

const REP_SUFFIXES: &[&str] = &["rep", "reps"];
const CALORIE_SUFFIXES: &[&str] = &["cal", "cals", "calorie", "calories"];
const POINT_SUFFIXES: &[&str] = &["pt", "pts", "point", "points"];
const PASS_SUFFIXES: &[&str] = &["pass", "passes"];

/// Parses raw score entries for one workout.
#[derive(Debug, Clone)]
pub struct ScoreParser {
    definition: WorkoutDefinition,
}

impl ScoreParser {
    pub fn new(definition: WorkoutDefinition) -> Self {
        Self { definition }
    }

    pub fn definition(&self) -> &WorkoutDefinition {
        &self.definition
    }

    pub fn parse(&self, raw: &str) -> ParseResult {
        self.parse_as(raw, self.definition.scheme)
    }

    /// Parse with a scheme other than the workout's, used for rounds that
    /// measure something different.
    pub fn parse_as(&self, raw: &str, scheme: WorkoutScheme) -> ParseResult {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return ParseResult::empty();
        }

        if let Some(result) = self.parse_special(&normalized, raw, scheme) {
            return result;
        }

        let result = match scheme {
            WorkoutScheme::Time | WorkoutScheme::TimeWithCap => self.parse_timed(&normalized, raw, scheme),
            WorkoutScheme::Emom => parse_time_entry(&normalized, raw),
            WorkoutScheme::RoundsReps => self.parse_rounds_reps(&normalized, raw),
            WorkoutScheme::Reps => parse_count(&normalized, raw, REP_SUFFIXES, "Invalid rep count", |n| {
                plural(n, "rep", "reps")
            }),
            WorkoutScheme::Calories => {
                parse_count(&normalized, raw, CALORIE_SUFFIXES, "Invalid calorie count", |n| {
                    format!("{} cal", n)
                })
            }
            WorkoutScheme::Points => parse_count(&normalized, raw, POINT_SUFFIXES, "Invalid points", |n| {
                format!("{} pts", n)
            }),
            WorkoutScheme::Load | WorkoutScheme::Meters | WorkoutScheme::Feet => {
                self.parse_measured(&normalized, raw, scheme)
            }
            WorkoutScheme::PassFail => self.parse_pass_fail(&normalized, raw),
        };

        let needs_tiebreak = result.is_valid
            && result.score_status == Some(EventStatus::Scored)
            && self.definition.tiebreak_scheme.is_some();
        let carried = result.needs_tiebreak;
        result.with_needs_tiebreak(needs_tiebreak || carried)
    }

    pub fn parse_tiebreak(&self, raw: &str) -> ParseResult {
        match self.definition.tiebreak_scheme {
            Some(scheme) => parse_tiebreak(raw, scheme),
            None => ParseResult::invalid(raw, "Workout has no tie-break configured"),
        }
    }

    /// Build the canonical score from a committed primary entry plus the
    /// optional reps-at-cap and tie-break entries.
    pub fn to_canonical_score(
        &self,
        primary: &ParseResult,
        secondary: Option<&ParseResult>,
        tiebreak: Option<&ParseResult>,
    ) -> Option<CanonicalScore> {
        if !primary.is_valid {
            return None;
        }
        let status = primary.score_status?.to_score_status();

        let mut score = CanonicalScore::new(self.definition.scheme, primary.raw_value, status)
            .with_score_type(self.definition.effective_score_type());

        if let Some(cap) = self.definition.time_cap_ms {
            score = score.with_time_cap(cap);
        }

        if status == ScoreStatus::Cap
            && let Some(reps) = secondary.filter(|r| r.is_valid).and_then(|r| r.raw_value)
        {
            score = score.with_secondary(reps);
        }

        if let Some(scheme) = self.definition.tiebreak_scheme
            && let Some(value) = tiebreak.filter(|t| t.is_valid).and_then(|t| t.raw_value)
        {
            score = score.with_tiebreak(scheme, value);
        }

        Some(score)
    }

    fn parse_special(&self, normalized: &str, raw: &str, scheme: WorkoutScheme) -> Option<ParseResult> {
        let result = match normalized {
            "dns" | "did not start" => ParseResult::valid("DNS", EventStatus::Dns, None),
            "dnf" | "did not finish" => ParseResult::valid("DNF", EventStatus::Dnf, None),
            "dq" | "disqualified" => ParseResult::valid("DQ", EventStatus::Dq, None),
            "wd" | "withdrawn" => ParseResult::valid("WD", EventStatus::Withdrawn, None),
            "cap" | "c" | "capped" => {
                if !scheme.supports_cap() {
                    return Some(ParseResult::invalid(raw, "CAP is only valid for timed workouts"));
                }
                self.capped(None)
            }
            _ => return None,
        };
        Some(result)
    }

    fn capped(&self, finish_ms: Option<i64>) -> ParseResult {
        let cap = self.definition.time_cap_ms;
        let formatted = match cap.or(finish_ms) {
            Some(ms) => format!("CAP ({})", format_time(ms)),
            None => "CAP".to_string(),
        };

        ParseResult::valid(formatted, EventStatus::Cap, cap.or(finish_ms))
            .with_needs_secondary(true)
            .with_needs_tiebreak(self.definition.tiebreak_scheme.is_some())
    }

    fn parse_timed(&self, normalized: &str, raw: &str, scheme: WorkoutScheme) -> ParseResult {
        let Some(ms) = parse_time(normalized) else {
            return ParseResult::invalid(raw, "Invalid time format");
        };

        match (scheme, self.definition.time_cap_ms) {
            (WorkoutScheme::TimeWithCap, Some(cap)) if ms >= cap => self.capped(Some(ms)),
            (_, Some(cap)) if ms > cap => ParseResult::scored(format_time(ms), ms)
                .with_warning(format!("Time exceeds cap of {}", format_time(cap))),
            _ => ParseResult::scored(format_time(ms), ms),
        }
    }

    fn parse_rounds_reps(&self, normalized: &str, raw: &str) -> ParseResult {
        let per_round = self
            .definition
            .reps_per_round
            .filter(|reps| *reps > 0)
            .map(i64::from);

        let Some(separator) = normalized.find(['+', '.']) else {
            let Some(total) = parse_digits(strip_suffix(normalized, REP_SUFFIXES)) else {
                return ParseResult::invalid(raw, "Invalid rep count");
            };
            return ParseResult::scored(plural(total, "rep", "reps"), total);
        };

        let rounds = parse_digits(normalized[..separator].trim());
        let reps = parse_digits(strip_suffix(&normalized[separator + 1..], REP_SUFFIXES));
        let (Some(rounds), Some(reps)) = (rounds, reps) else {
            return ParseResult::invalid(raw, "Invalid rounds+reps format");
        };
        let formatted = format!("{}+{}", rounds, reps);

        match per_round {
            Some(per_round) => {
                let Some(value) = rounds.checked_mul(per_round).and_then(|v| v.checked_add(reps)) else {
                    return ParseResult::invalid(raw, "Rounds+reps value is too large");
                };
                let result = ParseResult::scored(formatted, value);
                if reps >= per_round {
                    result.with_warning(format!(
                        "{} reps is a full round or more ({} reps per round)",
                        reps, per_round
                    ))
                } else {
                    result
                }
            }
            None => {
                if reps >= ROUNDS_MULTIPLIER {
                    return ParseResult::invalid(raw, "Too many reps in partial round");
                }
                match rounds
                    .checked_mul(ROUNDS_MULTIPLIER)
                    .and_then(|v| v.checked_add(reps))
                {
                    Some(value) => ParseResult::scored(formatted, value),
                    None => ParseResult::invalid(raw, "Rounds+reps value is too large"),
                }
            }
        }
    }

    fn parse_measured(&self, normalized: &str, raw: &str, scheme: WorkoutScheme) -> ParseResult {
        let (amount, suffix) = split_amount(normalized);

        let unit = if suffix.is_empty() {
            if scheme == self.definition.scheme {
                self.definition.input_unit()
            } else {
                scheme.default_input_unit()
            }
        } else {
            match MeasurementUnit::from_str(suffix) {
                Ok(unit) => unit,
                Err(_) => return ParseResult::invalid(raw, format!("Unknown unit: {}", suffix)),
            }
        };
        if unit.dimension() != scheme.dimension() {
            return ParseResult::invalid(
                raw,
                format!("Unit '{}' cannot express {} scores", unit, scheme),
            );
        }

        let Ok(quantity) = Decimal::from_str(amount) else {
            return ParseResult::invalid(raw, invalid_measure_message(scheme));
        };
        if quantity.is_sign_negative() && !quantity.is_zero() {
            return ParseResult::invalid(raw, format!("{} cannot be negative", measure_name(scheme)));
        }

        match to_canonical(quantity, scheme, unit) {
            Ok(value) => {
                let formatted = match scheme {
                    WorkoutScheme::Load => format_load(value, unit, 1, true),
                    _ => format_distance(value, unit, 1, true),
                };
                ParseResult::scored(formatted, value)
            }
            Err(err) => ParseResult::invalid(raw, err.to_string()),
        }
    }

    fn parse_pass_fail(&self, normalized: &str, raw: &str) -> ParseResult {
        let total = self.definition.rounds_to_score.map(i64::from);
        let passes = match normalized {
            "pass" | "p" => Some(total.unwrap_or(1)),
            "fail" | "f" => Some(0),
            other => parse_digits(strip_suffix(other, PASS_SUFFIXES)),
        };

        let Some(passes) = passes else {
            return ParseResult::invalid(raw, "Enter 'pass', 'fail' or the number of rounds passed");
        };
        if let Some(total) = total
            && passes > total
        {
            return ParseResult::invalid(raw, format!("Rounds passed must be between 0 and {}", total));
        }

        ParseResult::scored(plural(passes, "pass", "passes"), passes)
    }
}

/// Parse `raw` for a workout described only by its scheme, cap and tie-break.
pub fn parse_score(
    raw: &str,
    scheme: WorkoutScheme,
    time_cap_ms: Option<i64>,
    tiebreak_scheme: Option<TiebreakScheme>,
) -> ParseResult {
    let mut definition = WorkoutDefinition::new(scheme);
    definition.time_cap_ms = time_cap_ms;
    definition.tiebreak_scheme = tiebreak_scheme;
    ScoreParser::new(definition).parse(raw)
}

/// Tie-break entries use the time or reps grammar regardless of the
/// workout's own scheme.
pub fn parse_tiebreak(raw: &str, scheme: TiebreakScheme) -> ParseResult {
    let normalized = raw.trim().to_lowercase();
    if normalized.is_empty() {
        return ParseResult::empty();
    }

    match scheme {
        TiebreakScheme::Time => parse_time_entry(&normalized, raw),
        TiebreakScheme::Reps => match parse_digits(strip_suffix(&normalized, REP_SUFFIXES)) {
            Some(reps) => ParseResult::scored(reps.to_string(), reps),
            None => ParseResult::invalid(raw, "Invalid rep count"),
        },
    }
}

/// Reps completed when the time cap was hit.
pub fn parse_secondary(raw: &str) -> ParseResult {
    let normalized = raw.trim().to_lowercase();
    if normalized.is_empty() {
        return ParseResult::empty();
    }
    parse_count(&normalized, raw, REP_SUFFIXES, "Invalid rep count", |n| plural(n, "rep", "reps"))
}

/// Parse `SS`, `M:SS` or `H:MM:SS`, each with an optional `.fff`, into
/// milliseconds.
pub fn parse_time(input: &str) -> Option<i64> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let parts: Vec<&str> = input.split(':').collect();
    if parts.len() > 3 {
        return None;
    }
    let (last, leading) = parts.split_last()?;

    let (whole, fraction) = match last.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (*last, None),
    };
    let seconds = parse_digits(whole)?;
    let millis = match fraction {
        None => 0,
        Some(fraction) => {
            if fraction.is_empty() || fraction.len() > 3 {
                return None;
            }
            let digits = parse_digits(fraction)?;
            digits * 10_i64.pow(3 - fraction.len() as u32)
        }
    };

    if !leading.is_empty() && seconds >= 60 {
        return None;
    }

    let total_seconds = match leading {
        [] => seconds,
        [minutes] => parse_digits(minutes)?.checked_mul(60)?.checked_add(seconds)?,
        [hours, minutes] => {
            let minutes = parse_digits(minutes)?;
            if minutes >= 60 {
                return None;
            }
            parse_digits(hours)?
                .checked_mul(3_600)?
                .checked_add(minutes * 60)?
                .checked_add(seconds)?
        }
        _ => return None,
    };

    total_seconds.checked_mul(1_000)?.checked_add(millis)
}

fn parse_time_entry(normalized: &str, raw: &str) -> ParseResult {
    match parse_time(normalized) {
        Some(ms) => ParseResult::scored(format_time(ms), ms),
        None => ParseResult::invalid(raw, "Invalid time format"),
    }
}

fn parse_count(
    normalized: &str,
    raw: &str,
    suffixes: &[&str],
    error: &str,
    formatter: impl Fn(i64) -> String,
) -> ParseResult {
    let amount = strip_suffix(normalized, suffixes);
    if amount.starts_with('-') {
        return ParseResult::invalid(raw, format!("{}: value cannot be negative", error));
    }
    match parse_digits(amount) {
        Some(count) => ParseResult::scored(formatter(count), count),
        None => ParseResult::invalid(raw, error),
    }
}

fn parse_digits(s: &str) -> Option<i64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn strip_suffix<'a>(input: &'a str, suffixes: &[&str]) -> &'a str {
    let (amount, suffix) = split_amount(input);
    if suffix.is_empty() || suffixes.contains(&suffix) {
        amount
    } else {
        input.trim()
    }
}

/// Split `"225.5 lbs"` into `("225.5", "lbs")`.
fn split_amount(input: &str) -> (&str, &str) {
    let input = input.trim();
    let end = input
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
        .unwrap_or(input.len());
    (input[..end].trim(), input[end..].trim())
}

fn plural(count: i64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

fn measure_name(scheme: WorkoutScheme) -> &'static str {
    match scheme {
        WorkoutScheme::Load => "Load",
        _ => "Distance",
    }
}

fn invalid_measure_message(scheme: WorkoutScheme) -> &'static str {
    match scheme {
        WorkoutScheme::Load => "Invalid load",
        _ => "Invalid distance",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_grammar() {
        assert_eq!(parse_time("12:34"), Some(754_000));
        assert_eq!(parse_time("1:23.456"), Some(83_456));
        assert_eq!(parse_time("1:23.4"), Some(83_400));
        assert_eq!(parse_time("1:02:03"), Some(3_723_000));
        assert_eq!(parse_time("90"), Some(90_000));
        assert_eq!(parse_time("90.5"), Some(90_500));
        assert_eq!(parse_time("1:75"), None);
        assert_eq!(parse_time("1:60:00"), None);
        assert_eq!(parse_time("1:2:3:4"), None);
        assert_eq!(parse_time("1:23.4567"), None);
        assert_eq!(parse_time("abc"), None);
        assert_eq!(parse_time("-1:00"), None);
    }

    #[test]
    fn test_parse_time_score() {
        let result = parse_score("12:34", WorkoutScheme::Time, None, None);
        assert!(result.is_valid);
        assert_eq!(result.raw_value, Some(754_000));
        assert_eq!(result.formatted, "12:34");
        assert_eq!(result.score_status, Some(EventStatus::Scored));
        assert!(result.can_commit(false));
    }

    #[test]
    fn test_time_over_cap_on_capped_scheme_becomes_cap() {
        let result = parse_score("16:00", WorkoutScheme::TimeWithCap, Some(900_000), None);
        assert!(result.is_valid);
        assert_eq!(result.score_status, Some(EventStatus::Cap));
        assert_eq!(result.raw_value, Some(900_000));
        assert!(result.needs_secondary);
        assert_eq!(result.formatted, "CAP (15:00)");
    }

    #[test]
    fn test_time_over_cap_on_uncapped_scheme_warns() {
        let result = parse_score("16:00", WorkoutScheme::Time, Some(900_000), None);
        assert!(result.is_valid);
        assert_eq!(result.score_status, Some(EventStatus::Scored));
        assert_eq!(result.raw_value, Some(960_000));
        assert_eq!(result.warning.as_deref(), Some("Time exceeds cap of 15:00"));
        assert!(!result.can_commit(false));
        assert!(result.can_commit(true));
    }

    #[test]
    fn test_cap_token() {
        let result = parse_score("CAP", WorkoutScheme::TimeWithCap, Some(900_000), Some(TiebreakScheme::Reps));
        assert_eq!(result.score_status, Some(EventStatus::Cap));
        assert!(result.needs_secondary);
        assert!(result.needs_tiebreak);

        let result = parse_score("c", WorkoutScheme::Reps, None, None);
        assert!(!result.is_valid);
        assert_eq!(result.error.as_deref(), Some("CAP is only valid for timed workouts"));
    }

    #[test]
    fn test_needs_tiebreak_follows_definition() {
        let definition = WorkoutDefinition::new(WorkoutScheme::TimeWithCap)
            .with_time_cap(600_000)
            .with_tiebreak(TiebreakScheme::Reps);
        let parser = ScoreParser::new(definition);
        assert!(parser.parse("cap").needs_tiebreak);
        assert!(parser.parse("8:15").needs_tiebreak);
        assert!(!parser.parse("dnf").needs_tiebreak);
        assert!(!parser.parse("8:99").needs_tiebreak);

        let parser = ScoreParser::new(WorkoutDefinition::new(WorkoutScheme::TimeWithCap).with_time_cap(600_000));
        assert!(!parser.parse("cap").needs_tiebreak);
        assert!(!parser.parse("8:15").needs_tiebreak);
    }

    #[test]
    fn test_special_status_tokens() {
        for (raw, status) in [
            ("DNS", EventStatus::Dns),
            ("did not finish", EventStatus::Dnf),
            ("dq", EventStatus::Dq),
            ("WD", EventStatus::Withdrawn),
        ] {
            let result = parse_score(raw, WorkoutScheme::Load, None, None);
            assert!(result.is_valid, "{} should be valid", raw);
            assert_eq!(result.score_status, Some(status));
            assert_eq!(result.raw_value, None);
        }
    }

    #[test]
    fn test_empty_and_garbage_input() {
        let result = parse_score("   ", WorkoutScheme::Time, None, None);
        assert!(!result.is_valid);
        assert!(result.error.is_none());

        let result = parse_score("fast", WorkoutScheme::Time, None, None);
        assert!(!result.is_valid);
        assert_eq!(result.error.as_deref(), Some("Invalid time format"));
    }

    #[test]
    fn test_rounds_reps_positional_encoding() {
        let result = parse_score("5+12", WorkoutScheme::RoundsReps, None, Some(TiebreakScheme::Time));
        assert_eq!(result.raw_value, Some(500_012));
        assert_eq!(result.formatted, "5+12");
        assert!(result.needs_tiebreak);

        let result = parse_score("5.12", WorkoutScheme::RoundsReps, None, None);
        assert_eq!(result.raw_value, Some(500_012));

        let result = parse_score("150", WorkoutScheme::RoundsReps, None, None);
        assert_eq!(result.raw_value, Some(150));
        assert_eq!(result.formatted, "150 reps");

        let result = parse_score("5+", WorkoutScheme::RoundsReps, None, None);
        assert!(!result.is_valid);
    }

    #[test]
    fn test_rounds_reps_with_reps_per_round() {
        let parser = ScoreParser::new(WorkoutDefinition::new(WorkoutScheme::RoundsReps).with_reps_per_round(30));
        let result = parser.parse("5+12");
        assert_eq!(result.raw_value, Some(162));
        assert!(result.warning.is_none());

        let result = parser.parse("5+31");
        assert!(result.is_valid);
        assert!(result.warning.is_some());
    }

    #[test]
    fn test_load_defaults_to_pounds() {
        let result = parse_score("225", WorkoutScheme::Load, None, None);
        assert_eq!(result.raw_value, Some(102_058));
        assert_eq!(result.formatted, "225 lbs");

        let result = parse_score("100 kg", WorkoutScheme::Load, None, None);
        assert_eq!(result.raw_value, Some(100_000));
        assert_eq!(result.formatted, "100 kg");

        let parser = ScoreParser::new(WorkoutDefinition::new(WorkoutScheme::Load).with_unit(MeasurementUnit::Kilograms));
        assert_eq!(parser.parse("102.5").raw_value, Some(102_500));
    }

    #[test]
    fn test_measured_input_rejects_wrong_units() {
        let result = parse_score("100 m", WorkoutScheme::Load, None, None);
        assert!(!result.is_valid);

        let result = parse_score("-5", WorkoutScheme::Meters, None, None);
        assert!(!result.is_valid);
        assert_eq!(result.error.as_deref(), Some("Distance cannot be negative"));
    }

    #[test]
    fn test_distance_schemes() {
        let result = parse_score("400", WorkoutScheme::Meters, None, None);
        assert_eq!(result.raw_value, Some(400_000));
        assert_eq!(result.formatted, "400m");

        let result = parse_score("100", WorkoutScheme::Feet, None, None);
        assert_eq!(result.raw_value, Some(30_480));
        assert_eq!(result.formatted, "100ft");
    }

    #[test]
    fn test_scalar_counts() {
        assert_eq!(parse_score("150", WorkoutScheme::Reps, None, None).raw_value, Some(150));
        assert_eq!(parse_score("150 reps", WorkoutScheme::Reps, None, None).raw_value, Some(150));
        assert_eq!(parse_score("50 cal", WorkoutScheme::Calories, None, None).formatted, "50 cal");
        assert_eq!(parse_score("85", WorkoutScheme::Points, None, None).formatted, "85 pts");
        assert!(!parse_score("-3", WorkoutScheme::Reps, None, None).is_valid);
        assert!(!parse_score("12.5", WorkoutScheme::Reps, None, None).is_valid);
    }

    #[test]
    fn test_pass_fail_bounds() {
        let parser = ScoreParser::new(WorkoutDefinition::new(WorkoutScheme::PassFail).with_rounds_to_score(5));
        assert_eq!(parser.parse("pass").raw_value, Some(5));
        assert_eq!(parser.parse("fail").raw_value, Some(0));
        assert_eq!(parser.parse("3").formatted, "3 passes");
        assert!(!parser.parse("6").is_valid);
        assert!(!parser.parse("maybe").is_valid);
    }

    #[test]
    fn test_emom_uses_time_grammar() {
        let result = parse_score("2:00", WorkoutScheme::Emom, None, None);
        assert_eq!(result.raw_value, Some(120_000));
        assert_eq!(result.formatted, "2:00");
    }

    #[test]
    fn test_parse_tiebreak() {
        let result = parse_tiebreak("8:30", TiebreakScheme::Time);
        assert_eq!(result.raw_value, Some(510_000));

        let result = parse_tiebreak("150", TiebreakScheme::Reps);
        assert_eq!(result.raw_value, Some(150));

        assert!(!parse_tiebreak("8:99", TiebreakScheme::Time).is_valid);
        assert!(!parse_tiebreak("", TiebreakScheme::Reps).is_valid);
    }

    #[test]
    fn test_build_canonical_score() {
        let definition = WorkoutDefinition::new(WorkoutScheme::TimeWithCap)
            .with_time_cap(900_000)
            .with_tiebreak(TiebreakScheme::Time);
        let parser = ScoreParser::new(definition);

        let primary = parser.parse("cap");
        let secondary = parse_secondary("142");
        let tiebreak = parser.parse_tiebreak("7:45");
        let score = parser
            .to_canonical_score(&primary, Some(&secondary), Some(&tiebreak))
            .unwrap();

        assert_eq!(score.status, ScoreStatus::Cap);
        assert_eq!(score.value, Some(900_000));
        assert_eq!(score.secondary_value, Some(142));
        assert_eq!(score.tiebreak_value, Some(465_000));
        assert_eq!(score.time_cap_ms, Some(900_000));

        let dnf = parser.parse("dnf");
        let score = parser.to_canonical_score(&dnf, None, None).unwrap();
        assert_eq!(score.status, ScoreStatus::Withdrawn);
        assert_eq!(score.value, None);

        let invalid = parser.parse("nope");
        assert!(parser.to_canonical_score(&invalid, None, None).is_none());
    }

    #[test]
    fn test_parse_tiebreak_without_configuration() {
        let parser = ScoreParser::new(WorkoutDefinition::new(WorkoutScheme::Reps));
        assert!(!parser.parse_tiebreak("8:30").is_valid);
    }
}
