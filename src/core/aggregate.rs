use indexmap::IndexMap;
use tracing::{trace, warn};

use crate::core::commit_index::{CommitIndex, DAY_KEY_LEN};

/// Day-bucketed totals keyed by `YYYY-MM-DD`.
pub type DailyTotals = IndexMap<String, u32>;

/// Folds hour buckets into day buckets.
///
/// Every key is truncated to its date prefix and counts are summed. Zero
/// counts contribute nothing and do not create entries, so an empty or
/// all-zero index produces an empty map.
#[must_use]
pub fn aggregate_to_daily(index: &CommitIndex) -> DailyTotals {
    let mut totals = DailyTotals::new();
    for (key, count) in index.iter() {
        if count == 0 {
            continue;
        }
        let Some(day) = key.get(..DAY_KEY_LEN) else {
            warn!(key, "skipping commit index key shorter than a date");
            continue;
        };
        let slot = totals.entry(day.to_owned()).or_insert(0);
        *slot = slot.saturating_add(count);
    }
    trace!(
        source_entries = index.len(),
        days = totals.len(),
        "aggregated commit index to daily totals"
    );
    totals
}

/// Largest daily total, floored to 1 so relative scaling never divides by zero.
#[must_use]
pub fn max_daily_count(totals: &DailyTotals) -> u32 {
    totals.values().copied().max().unwrap_or(0).max(1)
}
