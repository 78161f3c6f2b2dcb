//! Step sequence for one transaction output.

use keyfort_codec::DualReader;

use crate::{
    constants::SCRIPT_SLICE_LEN,
    errors::ParseError,
    sequencer::{StepExit, StepSequence},
    state::TxCore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputStep {
    Value,
    ScriptPubkeyLen,
    ScriptPubkeyInit,
    ScriptPubkey,
    Done,
}

/// Decodes value and scriptPubKey of a single output, hashing every
/// consumed byte through the shared [`TxCore`].
#[derive(Debug)]
pub(crate) struct TxOutParser {
    step: OutputStep,
    script_len: u64,
    script_read: u64,
}

impl TxOutParser {
    pub(crate) fn new() -> Self {
        Self {
            step: OutputStep::Value,
            script_len: 0,
            script_read: 0,
        }
    }

    /// Rewinds to the first step for the next element.
    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }
}

impl StepSequence for TxOutParser {
    type Ctx = TxCore;

    fn finished(&self) -> bool {
        self.step == OutputStep::Done
    }

    fn exec_step(
        &mut self,
        tx: &mut TxCore,
        rd: &mut DualReader<'_>,
    ) -> Result<StepExit, ParseError> {
        match self.step {
            OutputStep::Value => {
                let mut value = [0u8; 8];
                try_read!(rd.read_exact(&mut value));
                tx.hash_field(&value)?;
                tx.total_output = tx.total_output.saturating_add(u64::from_le_bytes(value));
                self.step = OutputStep::ScriptPubkeyLen;
            }
            OutputStep::ScriptPubkeyLen => {
                let len = try_read!(rd.read_compact_size());
                self.script_len = len;
                tx.hash_length(len)?;
                self.step = OutputStep::ScriptPubkeyInit;
            }
            // No stream reads; only resets the slice counter.
            OutputStep::ScriptPubkeyInit => {
                self.script_read = 0;
                self.step = OutputStep::ScriptPubkey;
            }
            OutputStep::ScriptPubkey => {
                let remaining = self.script_len - self.script_read;
                if remaining == 0 {
                    self.step = OutputStep::Done;
                } else {
                    let take = remaining.min(SCRIPT_SLICE_LEN as u64) as usize;
                    let mut slice = [0u8; SCRIPT_SLICE_LEN];
                    try_read!(rd.read_exact(&mut slice[..take]));
                    tx.hash_field(&slice[..take])?;
                    self.script_read += take as u64;
                }
            }
            OutputStep::Done => {}
        }
        Ok(StepExit::Continue)
    }
}
