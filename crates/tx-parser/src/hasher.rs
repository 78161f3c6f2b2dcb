//! Running transaction digest.

use std::fmt;

use keyfort_codec::Buf32;
use sha2::{Digest, Sha256};

use crate::errors::ParseError;

/// Incremental SHA-256 behind a finalize-once discipline.
///
/// Parsing steps append every byte covered by the transaction digest;
/// finalization applies SHA-256 a second time over the first digest
/// (the standard double-hash identifier derivation). Updating or
/// finalizing again after finalization is a hard error, never a silent
/// truncation or recompute.
pub(crate) struct TxidHasher {
    ctx: Option<Sha256>,
}

impl TxidHasher {
    pub(crate) fn new() -> Self {
        Self {
            ctx: Some(Sha256::new()),
        }
    }

    pub(crate) fn update(&mut self, bytes: &[u8]) -> Result<(), ParseError> {
        self.ctx
            .as_mut()
            .ok_or(ParseError::HashState("update after finalize"))?
            .update(bytes);
        Ok(())
    }

    /// Finalizes the running hash and double-hashes it into the identifier.
    pub(crate) fn finalize_double(&mut self) -> Result<Buf32, ParseError> {
        let ctx = self
            .ctx
            .take()
            .ok_or(ParseError::HashState("finalize called twice"))?;
        let first = ctx.finalize();
        Ok(Buf32::new(Sha256::digest(first).into()))
    }
}

impl fmt::Debug for TxidHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TxidHasher")
            .field("finalized", &self.ctx.is_none())
            .finish()
    }
}
