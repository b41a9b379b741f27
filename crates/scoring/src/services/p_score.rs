use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{MedianField, PScoreConfig, SortDirection};

/// One active athlete as seen by the P-score calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PScoreEntry {
    pub value: Option<i64>,
    pub capped: bool,
}

impl PScoreEntry {
    pub fn scored(value: i64) -> Self {
        Self {
            value: Some(value),
            capped: false,
        }
    }

    pub fn capped(value: Option<i64>) -> Self {
        Self {
            value,
            capped: true,
        }
    }
}

/// P-score for every entry, in input order.
///
/// The winner earns 100 and the reference median earns 50, linearly in
/// between and beyond. The reference pool is the scored (uncapped) entries,
/// or every valued entry when nobody finished. Capped entries never out-score
/// the worst finisher, and entries without a value take the lowest score in
/// the field.
pub fn calculate_p_scores(
    entries: &[PScoreEntry],
    direction: SortDirection,
    config: &PScoreConfig,
) -> Vec<Decimal> {
    let mut pool: Vec<i64> = entries
        .iter()
        .filter(|entry| !entry.capped)
        .filter_map(|entry| entry.value)
        .collect();
    if pool.is_empty() {
        pool = entries.iter().filter_map(|entry| entry.value).collect();
    }
    if pool.is_empty() {
        return vec![Decimal::ONE_HUNDRED; entries.len()];
    }

    sort_best_first(&mut pool, direction);
    let best = Decimal::from(pool[0]);
    let Some(reference) = reference_value(&pool, config.median_field, best) else {
        return vec![Decimal::ONE_HUNDRED; entries.len()];
    };

    let score = |value: i64| -> Decimal {
        let value = Decimal::from(value);
        let (behind, spread) = match direction {
            SortDirection::Asc => (value - best, reference - best),
            SortDirection::Desc => (best - value, best - reference),
        };
        let points = Decimal::ONE_HUNDRED - behind * Decimal::from(50) / spread;
        let points = points.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        if config.allow_negatives {
            points
        } else {
            points.max(Decimal::ZERO)
        }
    };

    let raw: Vec<Option<Decimal>> = entries.iter().map(|entry| entry.value.map(score)).collect();
    let worst_finisher = entries
        .iter()
        .zip(&raw)
        .filter(|(entry, _)| !entry.capped)
        .filter_map(|(_, points)| *points)
        .min();
    let floor = raw.iter().flatten().copied().min().unwrap_or(Decimal::ZERO);

    entries
        .iter()
        .zip(raw)
        .map(|(entry, points)| match (points, entry.capped, worst_finisher) {
            (Some(points), true, Some(limit)) => points.min(limit),
            (Some(points), _, _) => points,
            (None, _, _) => floor,
        })
        .collect()
}

fn sort_best_first(values: &mut [i64], direction: SortDirection) {
    match direction {
        SortDirection::Asc => values.sort_unstable(),
        SortDirection::Desc => values.sort_unstable_by(|a, b| b.cmp(a)),
    }
}

/// The value worth 50 points. Falls back from the configured median to the
/// full-field median, then to the worst value; `None` when the whole pool is
/// tied.
fn reference_value(sorted: &[i64], field: MedianField, best: Decimal) -> Option<Decimal> {
    let configured = match field {
        MedianField::TopHalf => Decimal::from(sorted[sorted.len().div_ceil(2) - 1]),
        MedianField::All => full_median(sorted),
    };
    [configured, full_median(sorted), Decimal::from(sorted[sorted.len() - 1])]
        .into_iter()
        .find(|candidate| *candidate != best)
}

fn full_median(sorted: &[i64]) -> Decimal {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Decimal::from(sorted[mid])
    } else {
        (Decimal::from(sorted[mid - 1]) + Decimal::from(sorted[mid])) / Decimal::TWO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(values: &[i64]) -> Vec<PScoreEntry> {
        values.iter().copied().map(PScoreEntry::scored).collect()
    }

    fn points(values: &[i64]) -> Vec<Decimal> {
        values.iter().copied().map(Decimal::from).collect()
    }

    #[test]
    fn test_top_half_median() {
        let result = calculate_p_scores(
            &scored(&[300_000, 360_000, 420_000, 480_000]),
            SortDirection::Asc,
            &PScoreConfig::default(),
        );
        assert_eq!(result, points(&[100, 50, 0, -50]));
    }

    #[test]
    fn test_six_athletes() {
        let result = calculate_p_scores(
            &scored(&[300, 360, 420, 480, 540, 600]),
            SortDirection::Asc,
            &PScoreConfig::default(),
        );
        assert_eq!(result[0], Decimal::from(100));
        assert_eq!(result[1], Decimal::from(75));
        assert_eq!(result[2], Decimal::from(50));
    }

    #[test]
    fn test_full_field_median() {
        let config = PScoreConfig {
            median_field: MedianField::All,
            ..PScoreConfig::default()
        };
        let result = calculate_p_scores(&scored(&[300, 360, 420, 480]), SortDirection::Asc, &config);
        // median 390, spread 90
        assert_eq!(result[1], Decimal::new(6667, 2));
        assert_eq!(result[3], Decimal::ZERO);
    }

    #[test]
    fn test_clamped_at_zero() {
        let config = PScoreConfig {
            allow_negatives: false,
            ..PScoreConfig::default()
        };
        let result = calculate_p_scores(&scored(&[300, 360, 420, 480]), SortDirection::Asc, &config);
        assert_eq!(result, points(&[100, 50, 0, 0]));
    }

    #[test]
    fn test_descending() {
        let result = calculate_p_scores(
            &scored(&[200, 190, 180, 170, 160, 150]),
            SortDirection::Desc,
            &PScoreConfig::default(),
        );
        assert_eq!(result[0], Decimal::from(100));
        assert_eq!(result[1], Decimal::from(75));
    }

    #[test]
    fn test_ties_share_points() {
        let result = calculate_p_scores(&scored(&[300, 300, 360]), SortDirection::Asc, &PScoreConfig::default());
        assert_eq!(result, points(&[100, 100, 50]));
    }

    #[test]
    fn test_identical_field() {
        let result = calculate_p_scores(&scored(&[300, 300, 300]), SortDirection::Asc, &PScoreConfig::default());
        assert_eq!(result, points(&[100, 100, 100]));
        let single = calculate_p_scores(&scored(&[300]), SortDirection::Asc, &PScoreConfig::default());
        assert_eq!(single, points(&[100]));
    }

    #[test]
    fn test_capped_never_beat_finishers() {
        let mut entries = scored(&[300, 360, 420, 480]);
        entries.push(PScoreEntry::capped(Some(600)));
        entries.push(PScoreEntry::capped(Some(300)));
        entries.push(PScoreEntry::capped(None));
        let result = calculate_p_scores(&entries, SortDirection::Asc, &PScoreConfig::default());
        assert_eq!(result[4], Decimal::from(-150));
        assert_eq!(result[5], Decimal::from(-50));
        assert_eq!(result[6], Decimal::from(-150));
    }

    #[test]
    fn test_only_capped_athletes() {
        let entries = vec![PScoreEntry::capped(Some(150)), PScoreEntry::capped(Some(100))];
        let result = calculate_p_scores(&entries, SortDirection::Desc, &PScoreConfig::default());
        // top half of two is the best value, full median 125 takes over
        assert_eq!(result, points(&[100, 0]));
    }

    #[test]
    fn test_rounds_to_two_places() {
        let result = calculate_p_scores(&scored(&[0, 3, 7]), SortDirection::Asc, &PScoreConfig::default());
        // median 3: 7 → 100 - 7 * 50 / 3
        assert_eq!(result[2], Decimal::new(-1667, 2));
    }
}
