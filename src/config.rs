//! Backend connection settings
//!
//! Values come from command-line flags, which fall back to the
//! `WORDLE_SCORES_URL` and `WORDLE_SCORES_TOKEN` environment variables.

use std::fmt;
use thiserror::Error;

/// Default location of the scores service
pub const DEFAULT_BASE_URL: &str = "https://wordle.shareup.fun";

/// Environment variable holding the service URL
pub const URL_ENV: &str = "WORDLE_SCORES_URL";

/// Environment variable holding the access token
pub const TOKEN_ENV: &str = "WORDLE_SCORES_TOKEN";

/// Where the scores service lives and how to authenticate with it
#[derive(Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: String,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("No access token: pass --token or set WORDLE_SCORES_TOKEN")]
    MissingToken,
}

impl BackendConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Resolve settings from optional values, applying defaults
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingToken`] if no non-blank token is given.
    ///
    /// # Examples
    /// ```
    /// use wordle_scores::config::{BackendConfig, DEFAULT_BASE_URL};
    ///
    /// let config = BackendConfig::resolve(None, Some("abc")).unwrap();
    /// assert_eq!(config.base_url, DEFAULT_BASE_URL);
    /// assert!(BackendConfig::resolve(None, None).is_err());
    /// ```
    pub fn resolve(base_url: Option<&str>, token: Option<&str>) -> Result<Self, ConfigError> {
        let token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let base_url = base_url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);

        Ok(Self::new(base_url, token))
    }
}

impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_uses_defaults() {
        let config = BackendConfig::resolve(None, Some("token")).unwrap();
        assert_eq!(config, BackendConfig::new(DEFAULT_BASE_URL, "token"));
    }

    #[test]
    fn resolve_prefers_given_url() {
        let config = BackendConfig::resolve(Some(" http://localhost:8080 "), Some("t")).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn resolve_blank_url_falls_back() {
        let config = BackendConfig::resolve(Some("  "), Some("t")).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn resolve_requires_token() {
        assert_eq!(
            BackendConfig::resolve(None, None),
            Err(ConfigError::MissingToken)
        );
        assert_eq!(
            BackendConfig::resolve(None, Some("   ")),
            Err(ConfigError::MissingToken)
        );
    }

    #[test]
    fn debug_hides_token() {
        let rendered = format!("{:?}", BackendConfig::new("http://x", "hunter2"));
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("http://x"));
    }
}
