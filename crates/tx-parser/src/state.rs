//! Shared top-level parse state.

use keyfort_codec::{Buf32, MAX_COMPACT_SIZE_LEN, encode_compact_size};

use crate::{errors::ParseError, hasher::TxidHasher, mode::ParseMode};

/// State shared by the transaction sequence and its nested element
/// sequences: the selected mode, the running digest, and the decoded
/// header fields.
///
/// Nested sequences mutate this only through the mutable reference handed
/// into each step; there is exactly one in-flight parse per instance.
#[derive(Debug)]
pub(crate) struct TxCore {
    mode: ParseMode,
    hasher: TxidHasher,
    pub(crate) n_inputs: u8,
    pub(crate) n_outputs: u8,
    pub(crate) locktime: u32,
    pub(crate) total_output: u64,
}

impl TxCore {
    pub(crate) fn new(mode: ParseMode) -> Self {
        Self {
            mode,
            hasher: TxidHasher::new(),
            n_inputs: 0,
            n_outputs: 0,
            locktime: 0,
            total_output: 0,
        }
    }

    /// Feeds bytes covered by the transaction digest into the running hash.
    ///
    /// Every mode other than [`ParseMode::Txid`] is an explicit gap: it
    /// fails here rather than producing a digest that silently omits data.
    pub(crate) fn hash_field(&mut self, bytes: &[u8]) -> Result<(), ParseError> {
        match self.mode {
            ParseMode::Txid => self.hasher.update(bytes),
            mode => Err(ParseError::UnsupportedMode(mode)),
        }
    }

    /// Hashes a length field in its canonical compact-size encoding, even
    /// when the source bytes used a longer form.
    pub(crate) fn hash_length(&mut self, value: u64) -> Result<(), ParseError> {
        let mut buf = [0u8; MAX_COMPACT_SIZE_LEN];
        let n = encode_compact_size(value, &mut buf);
        self.hash_field(&buf[..n])
    }

    pub(crate) fn finalize_txid(&mut self) -> Result<Buf32, ParseError> {
        self.hasher.finalize_double()
    }
}

/// Result of a completed transaction parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxSummary {
    /// Double-hash of every serialized transaction byte.
    pub txid: Buf32,
    pub n_inputs: u8,
    pub n_outputs: u8,
    pub locktime: u32,
    /// Sum of all output values, in the smallest unit.
    pub total_output: u64,
}
