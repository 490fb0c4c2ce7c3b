use thiserror::Error;

/// Why a configured facade issuer URL was rejected.
///
/// Never returned to the host. It only travels inside
/// [`crate::mapper::OverrideOutcome::InvalidUrl`] and the warning it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IssuerUrlError {
    #[error("not a valid URL: {0}")]
    Unparseable(#[from] url::ParseError),

    #[error("URL contains control characters")]
    ControlCharacter,

    #[error("URL has no hierarchical authority component")]
    NotHierarchical,

    #[error("URL scheme is not followed by `//`")]
    MissingAuthority,

    #[error("URL has no host")]
    MissingHost,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid mapper configuration: {0}")]
    Deserialize(#[from] serde_json::Error),
}
