//! Step sequence for one transaction input.

use keyfort_codec::DualReader;

use crate::{
    constants::SCRIPT_SLICE_LEN,
    errors::ParseError,
    sequencer::{StepExit, StepSequence},
    state::TxCore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputStep {
    Txid,
    Vout,
    ScriptSigLen,
    ScriptSigInit,
    ScriptSig,
    Sequence,
    Done,
}

/// Decodes txid, vout, scriptSig and sequence of a single input, hashing
/// every consumed byte through the shared [`TxCore`].
#[derive(Debug)]
pub(crate) struct TxInParser {
    step: InputStep,
    script_len: u64,
    script_read: u64,
}

impl TxInParser {
    pub(crate) fn new() -> Self {
        Self {
            step: InputStep::Txid,
            script_len: 0,
            script_read: 0,
        }
    }

    /// Rewinds to the first step for the next element.
    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }
}

impl StepSequence for TxInParser {
    type Ctx = TxCore;

    fn finished(&self) -> bool {
        self.step == InputStep::Done
    }

    fn exec_step(
        &mut self,
        tx: &mut TxCore,
        rd: &mut DualReader<'_>,
    ) -> Result<StepExit, ParseError> {
        match self.step {
            InputStep::Txid => {
                let mut txid = [0u8; 32];
                try_read!(rd.read_exact(&mut txid));
                tx.hash_field(&txid)?;
                self.step = InputStep::Vout;
            }
            InputStep::Vout => {
                let mut vout = [0u8; 4];
                try_read!(rd.read_exact(&mut vout));
                tx.hash_field(&vout)?;
                self.step = InputStep::ScriptSigLen;
            }
            InputStep::ScriptSigLen => {
                let len = try_read!(rd.read_compact_size());
                self.script_len = len;
                tx.hash_length(len)?;
                self.step = InputStep::ScriptSigInit;
            }
            // No stream reads; only resets the slice counter.
            InputStep::ScriptSigInit => {
                self.script_read = 0;
                self.step = InputStep::ScriptSig;
            }
            InputStep::ScriptSig => {
                let remaining = self.script_len - self.script_read;
                if remaining == 0 {
                    self.step = InputStep::Sequence;
                } else {
                    let take = remaining.min(SCRIPT_SLICE_LEN as u64) as usize;
                    let mut slice = [0u8; SCRIPT_SLICE_LEN];
                    try_read!(rd.read_exact(&mut slice[..take]));
                    tx.hash_field(&slice[..take])?;
                    self.script_read += take as u64;
                }
            }
            InputStep::Sequence => {
                let mut sequence = [0u8; 4];
                try_read!(rd.read_exact(&mut sequence));
                tx.hash_field(&sequence)?;
                self.step = InputStep::Done;
            }
            InputStep::Done => {}
        }
        Ok(StepExit::Continue)
    }
}
