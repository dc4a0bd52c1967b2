/// Convenience result type used throughout the crate.
pub type ContribResult<T> = Result<T, ContribError>;

/// Top-level error type for the drawing pipeline and its collaborators.
#[derive(thiserror::Error, Debug)]
pub enum ContribError {
    /// The text rendering backend could not be loaded (missing or unusable font).
    #[error("dependency unavailable: {0}")]
    DependencyUnavailable(String),

    /// A `YEAR:WORD` mapping string could not be parsed.
    #[error("invalid mapping: {0}")]
    InvalidMapping(String),

    /// The record consumer (e.g. the `git` binary) failed.
    #[error("consumer error: {0}")]
    Consumer(String),

    /// Any other error, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ContribError {
    /// Build a [`ContribError::DependencyUnavailable`].
    pub fn dependency_unavailable(msg: impl Into<String>) -> Self {
        Self::DependencyUnavailable(msg.into())
    }

    /// Build a [`ContribError::InvalidMapping`].
    pub fn invalid_mapping(msg: impl Into<String>) -> Self {
        Self::InvalidMapping(msg.into())
    }

    /// Build a [`ContribError::Consumer`].
    pub fn consumer(msg: impl Into<String>) -> Self {
        Self::Consumer(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
