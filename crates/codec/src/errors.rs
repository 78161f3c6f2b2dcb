//! Codec errors.

use thiserror::Error;

/// The requested bytes are not yet available in the buffered data.
///
/// This is a suspension signal, not a failure: the caller persists the
/// unconsumed remainder and retries once the next chunk arrives. It is a
/// dedicated unit type so it can never be confused with a real parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("insufficient buffered data")]
pub struct Insufficient;

/// More bytes were left unconsumed at a suspension point than the
/// carry-over buffer can hold.
///
/// Bounded read widths make this unreachable for well-formed parsers; it is
/// surfaced as an error rather than silently truncating the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("carry-over buffer capacity exceeded")]
pub struct CarryOverflow;
