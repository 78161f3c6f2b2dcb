//! Resolution errors.

use thiserror::Error;

/// Errors resolving a key against a committed map.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The key has no leaf under the keys root (or the map is empty).
    /// Deliberately distinct from "empty value": an absent key never
    /// resolves to anything.
    #[error("key not found in committed map")]
    KeyNotFound,

    #[error("oracle: {0}")]
    Oracle(#[from] OracleError),
}

/// Failure surfaced by a Merkle proof oracle's transport.
#[derive(Debug, Error)]
#[error("merkle oracle failure: {0}")]
pub struct OracleError(pub Box<dyn std::error::Error + Send + Sync>);

impl OracleError {
    /// Wraps any error type produced by an oracle implementation.
    pub fn new(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(err.into())
    }
}
