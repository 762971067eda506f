//! Error types for cold root identity.
//!
//! All errors are strongly typed and propagated without panicking.
//! Seed and secret key material is never included in error messages.

/// Identity error types covering all operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("Invalid seed length: expected {expected} bytes, got {actual}")]
    InvalidSeedLength { expected: usize, actual: usize },

    #[error("Invalid KDF output length: requested {requested} bytes, max {max}")]
    InvalidLength { requested: usize, max: usize },

    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Malformed lineage event: {0}")]
    MalformedEvent(String),

    #[error("Lineage root does not match the claimed root key")]
    RootMismatch,

    #[error("Lineage event attests a different epoch key: {0}")]
    EpochMismatch(String),

    #[error("Signature verification failed")]
    SignatureInvalid,

    #[error("Invalid epoch label: {0}")]
    InvalidEpochLabel(String),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for IdentityError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, IdentityError>;
