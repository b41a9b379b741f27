use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::debug;

use crate::dto::{StandingsEntry, StandingsInput};
use crate::error::{Result, ScoringError};
use crate::models::{ScoringConfig, TiebreakerConfig, TiebreakerMethod};
use crate::services::ranking::assign_competition_ranks;

/// Overall standings: highest total first, ties on total broken by the
/// configured rules. Athletes still level after every rule share a rank.
pub fn apply_tiebreakers(
    athletes: &[StandingsInput],
    tiebreaker: &TiebreakerConfig,
) -> Result<Vec<StandingsEntry>> {
    order_standings(athletes, tiebreaker, false)
}

/// Standings under a full scoring configuration. Online totals are ranks
/// summed, so the smallest total leads.
pub fn rank_standings(
    athletes: &[StandingsInput],
    config: &ScoringConfig,
) -> Result<Vec<StandingsEntry>> {
    order_standings(athletes, &config.tiebreaker, config.algorithm.lowest_total_wins())
}

fn order_standings(
    athletes: &[StandingsInput],
    tiebreaker: &TiebreakerConfig,
    lowest_total_wins: bool,
) -> Result<Vec<StandingsEntry>> {
    let methods = tiebreaker.methods();
    let head_to_head = match (
        methods.contains(&TiebreakerMethod::HeadToHead),
        tiebreaker.head_to_head_event_id.as_deref(),
    ) {
        (true, None) => return Err(ScoringError::MissingHeadToHeadEvent),
        (_, event_id) => event_id,
    };

    let compare = |a: &&StandingsInput, b: &&StandingsInput| -> Ordering {
        let by_total = if lowest_total_wins {
            a.total_points.cmp(&b.total_points)
        } else {
            b.total_points.cmp(&a.total_points)
        };
        by_total.then_with(|| break_tie(a, b, &methods, head_to_head))
    };

    let mut sorted: Vec<&StandingsInput> = athletes.iter().collect();
    sorted.sort_by(|a, b| compare(a, b));
    let ranks = assign_competition_ranks(&sorted, |a, b| compare(a, b) == Ordering::Equal);

    debug!(athletes = athletes.len(), lowest_total_wins, "Applied standings tiebreakers");

    Ok(sorted
        .into_iter()
        .zip(ranks)
        .map(|(athlete, rank)| StandingsEntry {
            athlete_id: athlete.athlete_id.clone(),
            total_points: athlete.total_points,
            rank,
        })
        .collect())
}

fn break_tie(
    a: &StandingsInput,
    b: &StandingsInput,
    methods: &[TiebreakerMethod],
    head_to_head: Option<&str>,
) -> Ordering {
    for method in methods {
        let ordering = match (method, head_to_head) {
            (TiebreakerMethod::Countback, _) => countback(a, b),
            (TiebreakerMethod::HeadToHead, Some(event_id)) => {
                match (a.event_placements.get(event_id), b.event_placements.get(event_id)) {
                    (Some(a), Some(b)) => a.cmp(b),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }
            }
            _ => Ordering::Equal,
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// More first places wins, then more second places, and so on.
fn countback(a: &StandingsInput, b: &StandingsInput) -> Ordering {
    let (a_counts, b_counts) = (placement_counts(a), placement_counts(b));
    let deepest = a_counts
        .keys()
        .chain(b_counts.keys())
        .copied()
        .max()
        .unwrap_or(0);

    (1..=deepest)
        .map(|place| {
            let a = a_counts.get(&place).copied().unwrap_or(0);
            let b = b_counts.get(&place).copied().unwrap_or(0);
            b.cmp(&a)
        })
        .find(|ordering| *ordering != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

fn placement_counts(athlete: &StandingsInput) -> BTreeMap<u32, usize> {
    let mut counts = BTreeMap::new();
    for rank in athlete.event_placements.values() {
        *counts.entry(*rank).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn athlete(id: &str, total: i64, placements: &[(&str, u32)]) -> StandingsInput {
        placements
            .iter()
            .fold(StandingsInput::new(id, Decimal::from(total)), |acc, (event, rank)| {
                acc.with_placement(*event, *rank)
            })
    }

    fn ranks(entries: &[StandingsEntry]) -> Vec<(&str, u32)> {
        entries.iter().map(|e| (e.athlete_id.as_str(), e.rank)).collect()
    }

    #[test]
    fn test_sorted_by_total() {
        let athletes = vec![athlete("a", 180, &[]), athlete("b", 195, &[]), athlete("c", 170, &[])];
        let standings = apply_tiebreakers(&athletes, &TiebreakerConfig::default()).unwrap();
        assert_eq!(ranks(&standings), vec![("b", 1), ("a", 2), ("c", 3)]);
    }

    #[test]
    fn test_countback() {
        let athletes = vec![
            athlete("a", 190, &[("e1", 2), ("e2", 2)]),
            athlete("b", 190, &[("e1", 1), ("e2", 3)]),
        ];
        let standings = apply_tiebreakers(&athletes, &TiebreakerConfig::default()).unwrap();
        assert_eq!(ranks(&standings), vec![("b", 1), ("a", 2)]);
    }

    #[test]
    fn test_countback_looks_deeper() {
        let athletes = vec![
            athlete("a", 285, &[("e1", 1), ("e2", 3), ("e3", 3)]),
            athlete("b", 285, &[("e1", 1), ("e2", 2), ("e3", 4)]),
        ];
        let standings = apply_tiebreakers(&athletes, &TiebreakerConfig::default()).unwrap();
        assert_eq!(ranks(&standings), vec![("b", 1), ("a", 2)]);
    }

    #[test]
    fn test_head_to_head() {
        let tiebreaker = TiebreakerConfig::new(TiebreakerMethod::HeadToHead).with_head_to_head_event("final");
        let athletes = vec![
            athlete("a", 190, &[("final", 4)]),
            athlete("b", 190, &[("final", 2)]),
            athlete("c", 190, &[]),
        ];
        let standings = apply_tiebreakers(&athletes, &tiebreaker).unwrap();
        assert_eq!(ranks(&standings), vec![("b", 1), ("a", 2), ("c", 3)]);
    }

    #[test]
    fn test_secondary_rule() {
        let tiebreaker = TiebreakerConfig::new(TiebreakerMethod::HeadToHead)
            .with_secondary(TiebreakerMethod::Countback)
            .with_head_to_head_event("final");
        let athletes = vec![
            athlete("a", 190, &[("e1", 2)]),
            athlete("b", 190, &[("e1", 1)]),
        ];
        let standings = apply_tiebreakers(&athletes, &tiebreaker).unwrap();
        assert_eq!(ranks(&standings), vec![("b", 1), ("a", 2)]);
    }

    #[test]
    fn test_unbroken_ties_share_rank() {
        let tiebreaker = TiebreakerConfig::new(TiebreakerMethod::None);
        let athletes = vec![
            athlete("a", 190, &[("e1", 1)]),
            athlete("b", 190, &[("e1", 2)]),
            athlete("c", 150, &[]),
        ];
        let standings = apply_tiebreakers(&athletes, &tiebreaker).unwrap();
        assert_eq!(ranks(&standings), vec![("a", 1), ("b", 1), ("c", 3)]);
    }

    #[test]
    fn test_online_lowest_total_leads() {
        let config = ScoringConfig {
            algorithm: crate::models::ScoringAlgorithm::Online,
            ..ScoringConfig::default()
        };
        let athletes = vec![
            athlete("a", 9, &[("e1", 4), ("e2", 5)]),
            athlete("b", 3, &[("e1", 1), ("e2", 2)]),
            athlete("c", 3, &[("e1", 2), ("e2", 1)]),
        ];
        let standings = rank_standings(&athletes, &config).unwrap();
        // b and c hold one win and one second place each
        assert_eq!(ranks(&standings), vec![("b", 1), ("c", 1), ("a", 3)]);

        let standings = rank_standings(&athletes, &ScoringConfig::default()).unwrap();
        assert_eq!(standings[0].athlete_id, "a");
    }

    #[test]
    fn test_missing_head_to_head_event() {
        let tiebreaker = TiebreakerConfig::new(TiebreakerMethod::HeadToHead);
        let err = apply_tiebreakers(&[], &tiebreaker).unwrap_err();
        assert_eq!(err, ScoringError::MissingHeadToHeadEvent);
    }
}
