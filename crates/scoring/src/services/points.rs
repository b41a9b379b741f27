use std::cmp::Ordering;
use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::dto::{EventPointsResult, EventScoreInput};
use crate::error::{Result, ScoringError};
use crate::models::{
    DnfHandling, DnsHandling, EventStatus, ScoringAlgorithm, ScoringConfig, SortDirection,
    TiebreakerMethod, WithdrawnHandling, WorkoutScheme,
};
use crate::services::p_score::{PScoreEntry, calculate_p_scores};
use crate::services::points_table::{
    custom_points, online_points, traditional_points, winner_takes_more_points,
};
use crate::services::ranking::{assign_competition_ranks, compare_optional};

/// Rank one event and award points to every athlete in it.
///
/// Scored and capped athletes are ranked against each other, capped after
/// scored. Everyone else is placed behind the last active rank according to
/// the configured status handling; excluded athletes are absent from the
/// result.
pub fn calculate_event_points(
    event_id: &str,
    scores: &[EventScoreInput],
    scheme: WorkoutScheme,
    config: &ScoringConfig,
) -> Result<BTreeMap<String, EventPointsResult>> {
    let methods = config.tiebreaker.methods();
    if methods.contains(&TiebreakerMethod::HeadToHead)
        && config.tiebreaker.head_to_head_event_id.is_none()
    {
        return Err(ScoringError::MissingHeadToHeadEvent);
    }

    let direction = scheme.sort_direction();
    let mut active: Vec<&EventScoreInput> = scores.iter().filter(|s| s.status.is_active()).collect();
    active.sort_by(|a, b| compare_entries(a, b, direction, &methods));

    let ranks = assign_competition_ranks(&active, |a, b| {
        compare_entries(a, b, direction, &methods) == Ordering::Equal
    });
    let field_size = scores.iter().filter(|s| !is_excluded(s.status, config)).count();

    let active_points: Vec<Decimal> = match &config.algorithm {
        ScoringAlgorithm::PScore { p_score } => {
            let entries: Vec<PScoreEntry> = active
                .iter()
                .map(|s| PScoreEntry {
                    value: s.value,
                    capped: s.status == EventStatus::Cap,
                })
                .collect();
            calculate_p_scores(&entries, direction, p_score)
        }
        algorithm => ranks
            .iter()
            .map(|rank| rank_points(algorithm, *rank, field_size))
            .collect(),
    };

    let last_active_rank = ranks.last().copied().unwrap_or(0);
    let behind = last_active_rank + 1;
    let last_place = (last_place_points(config, behind, field_size, &active_points), behind);
    let zero = (zero_points(config, scores.len()), behind);

    let mut results = BTreeMap::new();
    for ((entry, rank), points) in active.iter().zip(&ranks).zip(&active_points) {
        results.insert(entry.athlete_id.clone(), placed(entry, *points, *rank));
    }

    for entry in scores.iter().filter(|s| !s.status.is_active()) {
        let placement = match entry.status {
            EventStatus::Dnf => match config.status_handling.dnf {
                DnfHandling::LastPlace | DnfHandling::WorstPerformance => Some(last_place),
                DnfHandling::Zero => Some(zero),
            },
            EventStatus::Dns => match config.status_handling.dns {
                DnsHandling::WorstPerformance => Some(last_place),
                DnsHandling::Zero => Some(zero),
                DnsHandling::Exclude => None,
            },
            EventStatus::Withdrawn => match config.status_handling.withdrawn {
                WithdrawnHandling::Zero => Some(zero),
                WithdrawnHandling::Exclude => None,
            },
            _ => Some(zero),
        };

        if let Some((points, rank)) = placement {
            results.insert(entry.athlete_id.clone(), placed(entry, points, rank));
        }
    }

    debug!(
        event_id,
        algorithm = config.algorithm.name(),
        athletes = scores.len(),
        ranked = results.len(),
        "Computed event points"
    );

    Ok(results)
}

pub fn get_scoring_algorithm_name(config: &ScoringConfig) -> &'static str {
    config.algorithm.display_name()
}

/// Whether any athlete could end an event below zero points.
pub fn can_have_negative_scores(config: &ScoringConfig) -> bool {
    match &config.algorithm {
        ScoringAlgorithm::PScore { p_score } => p_score.allow_negatives,
        ScoringAlgorithm::Traditional { traditional } => traditional.min_points < Decimal::ZERO,
        ScoringAlgorithm::WinnerTakesMore | ScoringAlgorithm::Online => false,
        ScoringAlgorithm::Custom {
            custom_table,
            traditional,
        } => {
            custom_table.overrides.values().any(|points| *points < Decimal::ZERO)
                || traditional.min_points < Decimal::ZERO
        }
    }
}

fn placed(entry: &EventScoreInput, points: Decimal, rank: u32) -> EventPointsResult {
    EventPointsResult {
        athlete_id: entry.athlete_id.clone(),
        points,
        rank,
    }
}

fn is_excluded(status: EventStatus, config: &ScoringConfig) -> bool {
    match status {
        EventStatus::Dns => config.status_handling.dns == DnsHandling::Exclude,
        EventStatus::Withdrawn => config.status_handling.withdrawn == WithdrawnHandling::Exclude,
        _ => false,
    }
}

fn compare_entries(
    a: &EventScoreInput,
    b: &EventScoreInput,
    direction: SortDirection,
    methods: &[TiebreakerMethod],
) -> Ordering {
    let capped = |s: &EventScoreInput| s.status == EventStatus::Cap;
    capped(a)
        .cmp(&capped(b))
        .then_with(|| compare_optional(a.value, b.value, direction))
        .then_with(|| break_tie(a, b, methods))
}

fn break_tie(a: &EventScoreInput, b: &EventScoreInput, methods: &[TiebreakerMethod]) -> Ordering {
    for method in methods {
        let ordering = match method {
            TiebreakerMethod::Countback => {
                compare_optional(a.countback, b.countback, SortDirection::Asc)
            }
            TiebreakerMethod::HeadToHead => compare_optional(
                a.head_to_head_placement.map(i64::from),
                b.head_to_head_placement.map(i64::from),
                SortDirection::Asc,
            ),
            TiebreakerMethod::None => Ordering::Equal,
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

fn rank_points(algorithm: &ScoringAlgorithm, rank: u32, field_size: usize) -> Decimal {
    match algorithm {
        ScoringAlgorithm::Traditional { traditional } => traditional_points(rank, traditional),
        ScoringAlgorithm::WinnerTakesMore => winner_takes_more_points(rank),
        ScoringAlgorithm::Online => online_points(rank),
        ScoringAlgorithm::Custom {
            custom_table,
            traditional,
        } => custom_points(rank, field_size, custom_table, traditional),
        // value based, 100 for the only athlete
        ScoringAlgorithm::PScore { .. } => Decimal::ONE_HUNDRED,
    }
}

/// A zero score earns nothing, except online where it counts as one place
/// behind every athlete in the event.
fn zero_points(config: &ScoringConfig, athletes: usize) -> Decimal {
    match config.algorithm {
        ScoringAlgorithm::Online => Decimal::from(athletes + 1),
        _ => Decimal::ZERO,
    }
}

fn last_place_points(
    config: &ScoringConfig,
    rank: u32,
    field_size: usize,
    active_points: &[Decimal],
) -> Decimal {
    match &config.algorithm {
        ScoringAlgorithm::PScore { .. } => active_points
            .iter()
            .copied()
            .min()
            .unwrap_or(Decimal::ONE_HUNDRED),
        algorithm => rank_points(algorithm, rank, field_size),
    }
}
