pub mod aggregator;
pub mod codec;
pub mod config_validator;
pub mod format;
pub mod p_score;
pub mod parser;
pub mod points;
pub mod points_table;
pub mod ranking;
pub mod sort_key;
pub mod standings;

pub use aggregator::{aggregate_values, encode_rounds, is_lower_better, is_outlier};
pub use codec::{canonical_to_unit, from_canonical, to_canonical};
pub use config_validator::ConfigValidator;
pub use format::{
    FormatOptions, ROUNDS_MULTIPLIER, format_rounds, format_score, format_score_with_tiebreak,
    format_time, format_value,
};
pub use p_score::{PScoreEntry, calculate_p_scores};
pub use parser::{ScoreParser, parse_score, parse_secondary, parse_tiebreak, parse_time};
pub use points::{calculate_event_points, can_have_negative_scores, get_scoring_algorithm_name};
pub use points_table::{WINNER_TAKES_MORE_TABLE, generate_points_table, online_points};
pub use ranking::{compare_scores, find_rank, sort_scores};
pub use sort_key::{
    FIELD_MAX, MAX_SORTABLE_VALUE, SORT_KEY_WIDTH, SortKey, SortKeyParts, compute_sort_key,
    compute_sort_key_with_direction, extract_from_sort_key, sort_key_to_string,
};
pub use standings::{apply_tiebreakers, rank_standings};
