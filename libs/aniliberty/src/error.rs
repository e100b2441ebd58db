//! Error types for AniLiberty operations

#[derive(Debug, thiserror::Error)]
pub enum AnilibertyError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("no base URL configured")]
    NoBaseUrl,
}

impl AnilibertyError {
    /// True for a definite upstream "no such resource" answer.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}
