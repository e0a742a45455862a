//! HTTP client for the scores service

use super::{Backend, BackendError};
use crate::config::BackendConfig;
use crate::core::{Score, ScoresResponse};
use parking_lot::Mutex;
use reqwest::Url;
use reqwest::blocking::{Client, Response};
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use std::time::Duration;
use tracing::{debug, warn};

/// Header carrying the access token
pub const AUTHORIZATION_HEADER: &str = "X-Authorization";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Blocking client for `<base_url>/scores`
pub struct HttpBackend {
    client: Client,
    scores_url: Url,
    token: HeaderValue,
    submit_lock: Mutex<()>,
}

impl HttpBackend {
    /// Build a client from configuration
    ///
    /// # Errors
    /// Returns [`BackendError::CouldNotPrepareRequest`] if the URL does not
    /// parse or the token is not a valid header value.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let scores_url = format!("{}/scores", config.base_url.trim_end_matches('/'));
        let scores_url = Url::parse(&scores_url)
            .map_err(|e| BackendError::CouldNotPrepareRequest(format!("{scores_url}: {e}")))?;

        let mut token = HeaderValue::from_str(&config.token).map_err(|e| {
            BackendError::CouldNotPrepareRequest(format!("invalid access token: {e}"))
        })?;
        token.set_sensitive(true);

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| BackendError::CouldNotPrepareRequest(e.to_string()))?;

        Ok(Self {
            client,
            scores_url,
            token,
            submit_lock: Mutex::new(()),
        })
    }

    #[must_use]
    pub fn scores_url(&self) -> &Url {
        &self.scores_url
    }
}

impl Backend for HttpBackend {
    fn get_all_scores(&self) -> Result<Vec<Score>, BackendError> {
        debug!(url = %self.scores_url, "fetching scores");

        let response = self
            .client
            .get(self.scores_url.clone())
            .header(AUTHORIZATION_HEADER, self.token.clone())
            .send()
            .map_err(BackendError::Transport)?;

        let body = read_ok_body(response)?;
        let decoded: ScoresResponse =
            serde_json::from_slice(&body).map_err(BackendError::Decoding)?;

        debug!(count = decoded.scores.len(), "fetched scores");
        Ok(decoded.scores)
    }

    fn add_new_score(&self, score: &Score) -> Result<Score, BackendError> {
        let _guard = self.submit_lock.lock();
        debug!(id = score.id, url = %self.scores_url, "submitting score");

        let body = serde_json::to_vec(score).map_err(BackendError::Encoding)?;

        let response = self
            .client
            .post(self.scores_url.clone())
            .header(AUTHORIZATION_HEADER, self.token.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(BackendError::Transport)?;

        let body = read_ok_body(response)?;
        serde_json::from_slice(&body).map_err(BackendError::Decoding)
    }
}

/// Return the body of a 200 response, or the status as an error
fn read_ok_body(response: Response) -> Result<Vec<u8>, BackendError> {
    let status = response.status();
    if status != reqwest::StatusCode::OK {
        warn!(status = status.as_u16(), "scores service rejected request");
        return Err(BackendError::InvalidResponse {
            status: status.as_u16(),
        });
    }

    let bytes = response.bytes().map_err(BackendError::Transport)?;
    Ok(bytes.to_vec())
}
