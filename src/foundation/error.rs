/// Convenience result type used across the crate's fallible boundary APIs.
pub type AvatarResult<T> = Result<T, AvatarError>;

/// Error taxonomy for boundary operations.
///
/// Composition itself never fails; these errors only surface from parsing, strict validation
/// for the profile-write path, and batch thread-pool setup.
#[derive(thiserror::Error, Debug)]
pub enum AvatarError {
    /// Invalid user-provided persona data or options.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AvatarError {
    /// Build an [`AvatarError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`AvatarError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
