//! Score collections
//!
//! Helpers for combining result sets from different sources (embedded
//! fixtures, the remote service, freshly typed entries) and putting them in
//! display order.

pub mod fixtures;

use crate::core::Score;
use rustc_hash::FxHashMap;

/// Scores keyed by puzzle number
pub type ScoresCollection = FxHashMap<i64, Score>;

/// Stable ascending sort by an extracted key
///
/// Records with equal keys keep their input order.
///
/// # Examples
/// ```
/// use wordle_scores::scores::{fixtures::sample_scores, sorted_by_key};
///
/// let by_date = sorted_by_key(sample_scores(), |s| s.date);
/// assert_eq!(by_date[0].id, 262);
/// ```
#[must_use]
pub fn sorted_by_key<T, K, F>(records: impl IntoIterator<Item = T>, key: F) -> Vec<T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut records: Vec<T> = records.into_iter().collect();
    records.sort_by_key(key);
    records
}

/// Index records by id; a later record replaces an earlier one with the same id
#[must_use]
pub fn dedupe_by_id(records: impl IntoIterator<Item = Score>) -> ScoresCollection {
    let mut collection = ScoresCollection::default();
    for score in records {
        collection.insert(score.id, score);
    }
    collection
}

/// The record for puzzle `id`, taking the later one when the id repeats
#[must_use]
pub fn latest_by_id(records: &[Score], id: i64) -> Option<&Score> {
    records.iter().rev().find(|s| s.id == id)
}

/// Combine a cached set with a freshly fetched one
///
/// Fetched records win on id conflicts. The result is ordered by date, then id.
#[must_use]
pub fn merge(cached: Vec<Score>, fetched: Vec<Score>) -> Vec<Score> {
    let collection = dedupe_by_id(cached.into_iter().chain(fetched));
    sorted_by_key(collection.into_values(), |s| (s.date, s.id))
}
