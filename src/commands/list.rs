//! List command
//!
//! Fetches recorded results and merges them with the results already at hand.

use crate::backend::Backend;
use crate::core::Score;
use crate::scores::merge;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::warn;

/// Result of listing scores
#[derive(Debug)]
pub struct ListResult {
    /// Merged results, ordered by date then puzzle number
    pub scores: Vec<Score>,
    /// Set when the fetch failed and only cached results are shown
    pub fetch_error: Option<String>,
}

/// Fetch scores from `backend` and merge them over `cached`
///
/// A failed fetch does not fail the command: the cached results are returned
/// and the error is logged and reported in [`ListResult::fetch_error`].
pub fn list_scores<B: Backend + ?Sized>(backend: &B, cached: Vec<Score>) -> ListResult {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Fetching scores...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let fetched = backend.get_all_scores();
    spinner.finish_and_clear();

    match fetched {
        Ok(fetched) => ListResult {
            scores: merge(cached, fetched),
            fetch_error: None,
        },
        Err(error) => {
            warn!(%error, "could not fetch scores, showing cached results");
            ListResult {
                scores: merge(cached, Vec::new()),
                fetch_error: Some(error.to_string()),
            }
        }
    }
}
