//! In-process backend backed by a vector

use super::{Backend, BackendError};
use crate::core::Score;
use crate::scores::fixtures::sample_scores;
use parking_lot::Mutex;
use tracing::debug;

/// Stores results in memory, in submission order
#[derive(Debug, Default)]
pub struct MemoryBackend {
    scores: Mutex<Vec<Score>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new(scores: Vec<Score>) -> Self {
        Self {
            scores: Mutex::new(scores),
        }
    }

    /// Backend preloaded with the embedded sample results
    #[must_use]
    pub fn with_samples() -> Self {
        Self::new(sample_scores())
    }
}

impl Backend for MemoryBackend {
    fn get_all_scores(&self) -> Result<Vec<Score>, BackendError> {
        Ok(self.scores.lock().clone())
    }

    fn add_new_score(&self, score: &Score) -> Result<Score, BackendError> {
        let mut scores = self.scores.lock();
        scores.push(score.clone());
        debug!(id = score.id, total = scores.len(), "stored score in memory");
        Ok(score.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DayDate;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn samples_are_served_in_order() {
        let ids: Vec<i64> = MemoryBackend::with_samples()
            .get_all_scores()
            .unwrap()
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, [261, 262, 263, 264]);
    }

    #[test]
    fn added_scores_follow_submission_order() {
        let backend = MemoryBackend::default();
        for id in [5, 3, 9] {
            let score = Score::new(id, DayDate::new(2021, 6, 24), "nymph", vec!["nymph".into()]);
            assert_eq!(backend.add_new_score(&score).unwrap(), score);
        }

        let ids: Vec<i64> = backend
            .get_all_scores()
            .unwrap()
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, [5, 3, 9]);
    }

    #[test]
    fn concurrent_submissions_are_all_stored() {
        let backend = Arc::new(MemoryBackend::default());

        let handles: Vec<_> = (0..8)
            .map(|id| {
                let backend = Arc::clone(&backend);
                thread::spawn(move || {
                    let score =
                        Score::new(id, DayDate::new(2022, 1, 1), "sweet", vec!["sweet".into()]);
                    backend.add_new_score(&score).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut ids: Vec<i64> = backend
            .get_all_scores()
            .unwrap()
            .iter()
            .map(|s| s.id)
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..8).collect::<Vec<_>>());
    }
}
