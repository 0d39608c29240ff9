/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while loading catalogs or story data.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The input was not valid JSON for the expected shape.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two catalog entries share the same identifier.
    #[error("duplicate id in catalog: \"{0}\"")]
    DuplicateId(String),

    /// Stats whose current values fall outside `0..=max`.
    #[error("stats out of bounds: {0}")]
    InvalidStats(crate::GameStats),
}
