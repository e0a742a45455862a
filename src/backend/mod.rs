//! Remote score storage
//!
//! The service exposes a single `/scores` resource: `GET` returns every
//! recorded result, `POST` stores one. [`HttpBackend`] talks to the real
//! service; [`MemoryBackend`] serves the embedded samples for offline use and
//! tests.

mod error;
mod http;
mod memory;

pub use error::BackendError;
pub use http::{AUTHORIZATION_HEADER, HttpBackend};
pub use memory::MemoryBackend;

use crate::core::Score;

/// Source and sink of recorded results
///
/// Implementations must not run two `add_new_score` calls at once, so that a
/// result is stored before any result submitted after it.
pub trait Backend {
    /// Fetch every recorded result, in the order the service returns them
    ///
    /// # Errors
    /// Returns `BackendError` if the request fails or the response cannot be decoded.
    fn get_all_scores(&self) -> Result<Vec<Score>, BackendError>;

    /// Store a result and return it as the service recorded it
    ///
    /// # Errors
    /// Returns `BackendError` if the request fails or the response cannot be decoded.
    fn add_new_score(&self, score: &Score) -> Result<Score, BackendError>;
}
