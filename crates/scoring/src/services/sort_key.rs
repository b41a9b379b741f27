use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoringError};
use crate::models::{CanonicalScore, ScoreStatus, SortDirection, TiebreakScheme};

const FIELD_BITS: u32 = 40;
const SECONDARY_SHIFT: u32 = FIELD_BITS;
const PRIMARY_SHIFT: u32 = 2 * FIELD_BITS;
const STATUS_SHIFT: u32 = 3 * FIELD_BITS;

/// All-ones pattern of one 40-bit field.
pub const FIELD_MAX: u128 = (1 << FIELD_BITS) - 1;
/// Largest canonical value a field may hold; the all-ones pattern is
/// reserved for absent values.
pub const MAX_SORTABLE_VALUE: i64 = (1 << FIELD_BITS) - 2;
/// Width of the persisted decimal form.
pub const SORT_KEY_WIDTH: usize = 38;

const STATUS_MASK: u128 = 0b111;
const LOW_BITS: u128 = (1 << STATUS_SHIFT) - 1;
const KEY_LIMIT: u128 = 1 << (STATUS_SHIFT + 3);

/// Packed ranking key: `status(3) | primary(40) | secondary(40) | tiebreak(40)`.
///
/// Ascending numeric order of keys is best-performance-first for every
/// scheme, and so is lexicographic order of [`SortKey::to_storage_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SortKey(u128);

/// What a key still says after packing: status and primary value only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortKeyParts {
    pub status_order: u8,
    pub value: Option<i64>,
}

impl SortKeyParts {
    pub fn status(&self) -> Option<ScoreStatus> {
        ScoreStatus::from_order(self.status_order)
    }
}

fn checked_field(value: i64) -> Result<u128> {
    if !(0..=MAX_SORTABLE_VALUE).contains(&value) {
        return Err(ScoringError::ValueOutOfRange {
            value,
            max: MAX_SORTABLE_VALUE,
        });
    }
    Ok(value as u128)
}

/// Values are packed so that a smaller field always means better.
/// Inversion is taken against `MAX_SORTABLE_VALUE`, which keeps every
/// present field strictly below `FIELD_MAX`.
fn normalize(value: i64, lower_is_better: bool) -> Result<u128> {
    let field = checked_field(value)?;
    Ok(if lower_is_better {
        field
    } else {
        MAX_SORTABLE_VALUE as u128 - field
    })
}

fn denormalize(field: u128, lower_is_better: bool) -> i64 {
    let value = if lower_is_better {
        field
    } else {
        (MAX_SORTABLE_VALUE as u128).saturating_sub(field)
    };
    value as i64
}

impl SortKey {
    /// Pack one score.
    ///
    /// `secondary` (reps at the cap, higher is better) only counts for
    /// capped scores. Missing secondary or tie-break values sort after
    /// present ones; a missing primary value sorts after everything else in
    /// its status group.
    pub fn encode(
        value: Option<i64>,
        status: ScoreStatus,
        direction: SortDirection,
        secondary: Option<i64>,
        tiebreak: Option<(TiebreakScheme, i64)>,
    ) -> Result<Self> {
        let status_bits = u128::from(status.order()) << STATUS_SHIFT;

        let Some(value) = value else {
            return Ok(Self(status_bits | LOW_BITS));
        };

        let primary = normalize(value, direction == SortDirection::Asc)?;

        let secondary = match (status, secondary) {
            (ScoreStatus::Cap, Some(reps)) => normalize(reps, false)?,
            (ScoreStatus::Cap, None) => FIELD_MAX,
            _ => 0,
        };

        let tiebreak = match tiebreak {
            Some((scheme, value)) => normalize(value, scheme.sort_direction() == SortDirection::Asc)?,
            None => FIELD_MAX,
        };

        Ok(Self(
            status_bits | (primary << PRIMARY_SHIFT) | (secondary << SECONDARY_SHIFT) | tiebreak,
        ))
    }

    pub fn from_u128(raw: u128) -> Result<Self> {
        if raw >= KEY_LIMIT {
            return Err(ScoringError::InvalidSortKey(format!(
                "{} does not fit in {} bits",
                raw,
                STATUS_SHIFT + 3
            )));
        }
        Ok(Self(raw))
    }

    pub fn as_u128(&self) -> u128 {
        self.0
    }

    pub fn status_order(&self) -> u8 {
        ((self.0 >> STATUS_SHIFT) & STATUS_MASK) as u8
    }

    /// Recover status and primary value. Secondary and tie-break fields are
    /// not recoverable.
    pub fn decode(&self, direction: SortDirection) -> SortKeyParts {
        let primary = (self.0 >> PRIMARY_SHIFT) & FIELD_MAX;
        let value = if primary == FIELD_MAX {
            None
        } else {
            Some(denormalize(primary, direction == SortDirection::Asc))
        };

        SortKeyParts {
            status_order: self.status_order(),
            value,
        }
    }

    /// Zero-padded decimal form whose lexicographic order matches the
    /// numeric order of keys.
    pub fn to_storage_string(&self) -> String {
        format!("{:0width$}", self.0, width = SORT_KEY_WIDTH)
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_storage_string())
    }
}

impl std::str::FromStr for SortKey {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ScoringError::InvalidSortKey(s.to_string()));
        }
        let raw: u128 = trimmed
            .parse()
            .map_err(|_| ScoringError::InvalidSortKey(s.to_string()))?;
        Self::from_u128(raw)
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.to_storage_string()
    }
}

impl TryFrom<String> for SortKey {
    type Error = ScoringError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Sort key of a canonical score, using its scheme and aggregation method
/// to pick the direction.
pub fn compute_sort_key(score: &CanonicalScore) -> Result<SortKey> {
    let tiebreak = score.tiebreak_value.map(|value| {
        let scheme = score.tiebreak_scheme.unwrap_or(TiebreakScheme::Time);
        (scheme, value)
    });

    SortKey::encode(
        score.value,
        score.status,
        score.direction(),
        score.secondary_value,
        tiebreak,
    )
}

pub fn compute_sort_key_with_direction(
    value: Option<i64>,
    status: ScoreStatus,
    direction: SortDirection,
) -> Result<SortKey> {
    SortKey::encode(value, status, direction, None, None)
}

pub fn sort_key_to_string(key: &SortKey) -> String {
    key.to_storage_string()
}

/// Decode a persisted key string.
pub fn extract_from_sort_key(key: &str, direction: SortDirection) -> Result<SortKeyParts> {
    let key: SortKey = key.parse()?;
    Ok(key.decode(direction))
}
