//! Parse and transport errors.

use keyfort_codec::CarryOverflow;
use keyfort_merkle_map::ResolveError;
use thiserror::Error;

use crate::mode::ParseMode;

/// Errors aborting an in-flight transaction parse.
///
/// Running out of buffered data is deliberately not represented here; it is
/// a clean suspension ([`Progress::Stalled`](crate::Progress::Stalled)),
/// never a failure. Every variant below is terminal: the parse is abandoned
/// and no partial digest is ever returned.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The byte stream does not follow the expected encoding.
    #[error("malformed transaction encoding: {0}")]
    Malformed(&'static str),

    /// A hashing step was reached under a mode with no implementation.
    #[error("parse mode {0:?} is not implemented")]
    UnsupportedMode(ParseMode),

    /// The running hash context was used after finalization.
    #[error("hash context misuse: {0}")]
    HashState(&'static str),

    /// A suspension left more unconsumed bytes than can be carried over.
    #[error(transparent)]
    Carry(#[from] CarryOverflow),

    /// `finish` was called before the final step completed.
    #[error("transaction parse is not complete")]
    Incomplete,

    /// The preimage stream ended before the transaction was complete.
    #[error("preimage stream ended before the transaction was complete")]
    TruncatedStream,

    #[error("transport: {0}")]
    Transport(#[from] TransportError),

    #[error("resolve: {0}")]
    Resolve(#[from] ResolveError),
}

/// Failure surfaced by the host chunk transport.
#[derive(Debug, Error)]
#[error("host transport failure: {0}")]
pub struct TransportError(pub Box<dyn std::error::Error + Send + Sync>);

impl TransportError {
    /// Wraps any error type produced by a transport implementation.
    pub fn new(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(err.into())
    }
}
