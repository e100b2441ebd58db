//! Error types for provider operations

/// Errors surfaced by provider adapters once their own endpoint
/// iteration is exhausted.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("AniLiberty error: {0}")]
    Aniliberty(#[from] aniliberty::AnilibertyError),

    #[error("AniLibria error: {0}")]
    Anilibria(#[from] anilibria::AnilibriaError),

    #[error("anicli bridge error: {0}")]
    Anicli(#[from] anicli::AnicliError),
}
