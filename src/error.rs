//! Error types for the crate boundary.
//!
//! The layout engine itself never fails; these errors come from parsing
//! JSON input, from the collaborator services and from writing bundles.

/// Result alias used by fallible plaquelib APIs.
pub type PlaqueResult<T> = Result<T, PlaqueError>;

#[derive(thiserror::Error, Debug)]
pub enum PlaqueError {
    /// Caller supplied unusable input (blank query, bad URL, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The metadata provider has no such track.
    #[error("not found: {0}")]
    NotFound(String),

    /// The provider could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The provider answered with something we could not use.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Writing a production archive failed.
    #[error("archive error: {0}")]
    Archive(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PlaqueError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    /// True for failures worth retrying later (provider unreachable or flaky).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Upstream(_))
    }
}

impl From<zip::result::ZipError> for PlaqueError {
    fn from(e: zip::result::ZipError) -> Self {
        Self::Archive(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_detail() {
        let e = PlaqueError::not_found("track 'xyz'");
        assert_eq!(e.to_string(), "not found: track 'xyz'");
        assert!(!e.is_transient());
        assert!(PlaqueError::network("timeout").is_transient());
    }

    #[test]
    fn json_errors_convert() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e: PlaqueError = err.into();
        assert!(matches!(e, PlaqueError::Json(_)));
    }
}
