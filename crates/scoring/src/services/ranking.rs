use std::cmp::Ordering;

use crate::models::{CanonicalScore, ScoreStatus, SortDirection, TiebreakScheme};

/// Order two optional values, better first, absent values last.
pub(crate) fn compare_optional(a: Option<i64>, b: Option<i64>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match direction {
            SortDirection::Asc => a.cmp(&b),
            SortDirection::Desc => b.cmp(&a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Compare two scores of the same workout, `Less` meaning `a` is better.
///
/// Status decides first, then the primary value. Two capped scores fall
/// back to reps at the cap. A tie-break is only consulted when both scores
/// carry one.
pub fn compare_scores(a: &CanonicalScore, b: &CanonicalScore) -> Ordering {
    a.status
        .cmp(&b.status)
        .then_with(|| compare_optional(a.value, b.value, a.direction()))
        .then_with(|| {
            if a.status == ScoreStatus::Cap && b.status == ScoreStatus::Cap {
                compare_optional(a.secondary_value, b.secondary_value, SortDirection::Desc)
            } else {
                Ordering::Equal
            }
        })
        .then_with(|| match (a.tiebreak_value, b.tiebreak_value) {
            (Some(_), Some(_)) => {
                let direction = a
                    .tiebreak_scheme
                    .unwrap_or(TiebreakScheme::Time)
                    .sort_direction();
                compare_optional(a.tiebreak_value, b.tiebreak_value, direction)
            }
            _ => Ordering::Equal,
        })
}

/// Stable sort, best first.
pub fn sort_scores(scores: &mut [CanonicalScore]) {
    scores.sort_by(compare_scores);
}

/// Standard competition rank of `target` within `field`: one more than the
/// number of strictly better scores.
pub fn find_rank(target: &CanonicalScore, field: &[CanonicalScore]) -> u32 {
    let better = field
        .iter()
        .filter(|score| compare_scores(score, target) == Ordering::Less)
        .count();
    u32::try_from(better).unwrap_or(u32::MAX - 1) + 1
}

/// Standard competition ranks ("1224") for an already sorted slice. `same`
/// reports whether two neighbours are tied.
pub fn assign_competition_ranks<T>(sorted: &[T], same: impl Fn(&T, &T) -> bool) -> Vec<u32> {
    let mut ranks: Vec<u32> = Vec::with_capacity(sorted.len());
    for (index, entry) in sorted.iter().enumerate() {
        let position = u32::try_from(index + 1).unwrap_or(u32::MAX);
        let rank = match (index.checked_sub(1).and_then(|prev| sorted.get(prev)), ranks.last()) {
            (Some(prev), Some(&prev_rank)) if same(prev, entry) => prev_rank,
            _ => position,
        };
        ranks.push(rank);
    }
    ranks
}
