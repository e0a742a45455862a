//! Stats command
//!
//! Aggregates a set of results: solve rate, guess distribution, streaks and
//! how the letters of every guess were scored.

use crate::core::{LetterResult, Score};
use crate::scores::dedupe_by_id;
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::warn;

/// Letter feedback totals across every guess
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterTotals {
    pub correct: usize,
    pub wrong_position: usize,
    pub wrong: usize,
}

impl LetterTotals {
    fn add(self, other: Self) -> Self {
        Self {
            correct: self.correct + other.correct,
            wrong_position: self.wrong_position + other.wrong_position,
            wrong: self.wrong + other.wrong,
        }
    }

    fn count(&mut self, result: LetterResult) {
        match result {
            LetterResult::Correct => self.correct += 1,
            LetterResult::WrongPosition => self.wrong_position += 1,
            LetterResult::Wrong => self.wrong += 1,
        }
    }
}

/// Statistics over a set of results
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreStatistics {
    pub total: usize,
    pub solved: usize,
    pub failed: usize,
    /// Solved games keyed by number of guesses (1-6)
    pub distribution: BTreeMap<usize, usize>,
    /// Mean guesses over solved games, 0.0 if none
    pub average_tries: f64,
    /// Longest run of consecutive puzzle numbers that were all solved
    pub longest_streak: usize,
    pub letters: LetterTotals,
    /// Puzzles whose guesses could not be scored against the word
    pub invalid: Vec<i64>,
}

/// Per-score summary computed in parallel
struct ScoreSummary {
    id: i64,
    tries: usize,
    solved: bool,
    letters: Option<LetterTotals>,
}

fn summarize(score: &Score) -> ScoreSummary {
    let letters = score.results().ok().map(|rows| {
        let mut totals = LetterTotals::default();
        for result in rows.into_iter().flatten() {
            totals.count(result);
        }
        totals
    });

    ScoreSummary {
        id: score.id,
        tries: score.tries.len(),
        solved: score.is_won(),
        letters,
    }
}

/// Compute statistics for `scores`
///
/// Each puzzle number is counted once; a later record replaces an earlier one
/// with the same id. Scores with a guess that cannot be evaluated are listed
/// in [`ScoreStatistics::invalid`] and left out of every other figure.
#[must_use]
pub fn compute_statistics(scores: &[Score]) -> ScoreStatistics {
    let unique: Vec<Score> = dedupe_by_id(scores.iter().cloned()).into_values().collect();
    let mut summaries: Vec<ScoreSummary> = unique.par_iter().map(summarize).collect();
    summaries.sort_by_key(|s| s.id);

    let mut invalid = Vec::new();
    let mut letters = LetterTotals::default();
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut solved_ids = Vec::new();
    let mut total = 0;

    for summary in &summaries {
        let Some(totals) = summary.letters else {
            warn!(id = summary.id, "skipping score with mismatched guess length");
            invalid.push(summary.id);
            continue;
        };

        total += 1;
        letters = letters.add(totals);
        if summary.solved {
            *distribution.entry(summary.tries).or_insert(0) += 1;
            solved_ids.push(summary.id);
        }
    }

    let solved = solved_ids.len();
    let total_tries: usize = distribution.iter().map(|(tries, count)| tries * count).sum();
    let average_tries = if solved > 0 {
        total_tries as f64 / solved as f64
    } else {
        0.0
    };

    ScoreStatistics {
        total,
        solved,
        failed: total - solved,
        distribution,
        average_tries,
        longest_streak: longest_run(&solved_ids),
        letters,
        invalid,
    }
}

/// Length of the longest run of consecutive values in a sorted slice
fn longest_run(sorted_ids: &[i64]) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<i64> = None;

    for &id in sorted_ids {
        current = match previous {
            Some(prev) if prev.checked_add(1) == Some(id) => current + 1,
            Some(prev) if id == prev => current,
            _ => 1,
        };
        longest = longest.max(current);
        previous = Some(id);
    }

    longest
}
