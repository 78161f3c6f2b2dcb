//! Resumable streaming parser for raw transactions.
//!
//! The transaction being parsed is too large to hold in memory: it arrives
//! from the host in small chunks, each valid only for the duration of one
//! exchange. The parser decodes it field by field, feeding every consumed
//! byte into a running hash, and suspends cleanly whenever the buffered
//! data runs out mid-field — resuming later at exactly the step (and, for
//! nested element parsers, the element) where it stopped.
//!
//! The preimage to parse is located through a Merkle-committed key/value
//! map: [`parse_and_hash`] resolves the key's verified value hash and then
//! streams that hash's preimage through a [`RawTxParser`].

// Exercised by the integration test suites.
#[cfg(test)]
use bitcoin as _;
#[cfg(test)]
use hex_literal as _;
#[cfg(test)]
use proptest as _;

#[macro_use]
mod macros;

mod constants;
pub use constants::{SCRIPT_SLICE_LEN, TX_FORMAT_MARKER};

mod errors;
pub use errors::{ParseError, TransportError};

mod flow;
pub use flow::parse_and_hash;

mod hasher;

mod mode;
pub use mode::ParseMode;

mod raw_tx;
pub use raw_tx::RawTxParser;

mod sequencer;
pub use sequencer::Progress;

mod state;
pub use state::TxSummary;

mod stream;
pub use stream::{ChunkTransport, stream_preimage};

mod tx_input;
mod tx_output;
