use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{BaseTemplate, CustomTableConfig, TraditionalConfig};

/// Front-loaded table rewarding podium finishes; every rank past the end
/// earns one point.
pub const WINNER_TAKES_MORE_TABLE: [u32; 28] = [
    100, 85, 75, 67, 60, 54, 49, 45, 41, 38, 35, 32, 30, 28, 26, 24, 22, 20, 18, 16, 14, 12, 10, 8,
    6, 4, 2, 1,
];

/// `first_place_points - (rank - 1) * step`, floored at `min_points`.
pub fn traditional_points(rank: u32, config: &TraditionalConfig) -> Decimal {
    let steps = Decimal::from(rank.max(1) - 1);
    steps
        .checked_mul(config.step)
        .and_then(|deduction| config.first_place_points.checked_sub(deduction))
        .map_or(config.min_points, |points| points.max(config.min_points))
}

pub fn winner_takes_more_points(rank: u32) -> Decimal {
    let index = rank.max(1) as usize - 1;
    Decimal::from(WINNER_TAKES_MORE_TABLE.get(index).copied().unwrap_or(1))
}

/// Online events award the rank itself, so fewer points is better.
pub fn online_points(rank: u32) -> Decimal {
    Decimal::from(rank.max(1))
}

/// Linear spread from 100 for first to 0 for last, rounded to whole points.
pub fn even_spread_points(rank: u32, field_size: usize) -> Decimal {
    if field_size <= 1 {
        return Decimal::ONE_HUNDRED;
    }
    let place = Decimal::from(rank.max(1) - 1);
    let step = Decimal::ONE_HUNDRED / Decimal::from(field_size - 1);
    (Decimal::ONE_HUNDRED - place * step)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .max(Decimal::ZERO)
}

pub fn template_points(
    template: BaseTemplate,
    rank: u32,
    field_size: usize,
    traditional: &TraditionalConfig,
) -> Decimal {
    match template {
        BaseTemplate::Traditional => traditional_points(rank, traditional),
        BaseTemplate::WinnerTakesMore => winner_takes_more_points(rank),
        BaseTemplate::PScore => even_spread_points(rank, field_size),
    }
}

/// Rank-to-points table for ranks `1..=field_size`.
pub fn generate_points_table(
    template: BaseTemplate,
    field_size: usize,
    traditional: &TraditionalConfig,
) -> Vec<Decimal> {
    (1..=field_size)
        .map(|rank| {
            let rank = u32::try_from(rank).unwrap_or(u32::MAX);
            template_points(template, rank, field_size, traditional)
        })
        .collect()
}

/// Points for `rank` under a custom table: an explicit override wins,
/// otherwise the base template decides.
pub fn custom_points(
    rank: u32,
    field_size: usize,
    table: &CustomTableConfig,
    traditional: &TraditionalConfig,
) -> Decimal {
    table
        .overrides
        .get(&rank)
        .copied()
        .unwrap_or_else(|| template_points(table.base_template, rank, field_size, traditional))
}
