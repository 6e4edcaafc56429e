use thiserror::Error;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Failure to reach a key/value store.
///
/// These never leave the crate's orchestration layer: the initializer treats
/// every store failure as a cache miss.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("storage unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("storage read failed for key {key}: {reason}")]
    Read { key: String, reason: String },
}

impl StoreError {
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}

/// Failure to write a CSS custom property.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// The execution context has no mutable root style (no document, SSR, worker).
    #[error("root style is not available")]
    Unavailable,

    #[error("failed to set {name}: {reason}")]
    Rejected { name: String, reason: String },
}
