//! Add command
//!
//! Turns a typed-in result into a score and submits it.

use crate::backend::{Backend, BackendError};
use crate::core::{DayDate, EntryError, Score};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum AddError {
    #[error(transparent)]
    Entry(#[from] EntryError),
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Build today's score from `word` and comma-separated `tries`, then submit it
///
/// # Errors
/// Returns [`AddError::Entry`] for invalid input (nothing is submitted) and
/// [`AddError::Backend`] if the submission fails.
pub fn add_score<B: Backend + ?Sized>(
    backend: &B,
    word: &str,
    tries: &str,
    today: DayDate,
) -> Result<Score, AddError> {
    let score = Score::from_entry(word, tries, today)?;
    let stored = backend.add_new_score(&score)?;
    info!(id = stored.id, tries = stored.tries.len(), "score added");
    Ok(stored)
}
