use std::time::Duration;
use thiserror::Error;

/// A required element was missing from the page
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no element matches the game name selector `{selector}`")]
    MissingName { selector: String },

    #[error("expected 2 developer/publisher rows matching `{selector}`, found {found}")]
    MissingDeveloperRows { selector: String, found: usize },

    #[error("no element matches the tags selector `{selector}`")]
    MissingTags { selector: String },
}

/// Failure kinds of a single fetch, plus configuration errors
#[derive(Debug, Error)]
pub enum SnagError {
    /// The request exceeded the configured timeout
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Network failure or non-success HTTP status
    #[error("{0}")]
    Fetch(#[source] reqwest::Error),

    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Unexpected(String),

    /// Raised only while building an extractor
    #[error("configuration error: {0}")]
    Config(String),
}

impl SnagError {
    /// Classifies a reqwest error, separating timeouts from other failures
    pub(crate) fn from_request(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            SnagError::Timeout(timeout)
        } else if err.is_decode() {
            SnagError::Unexpected(format!("failed to decode response body: {}", err))
        } else {
            SnagError::Fetch(err)
        }
    }
}
