//! Top-level transaction step sequence and the resumable parser value.

use keyfort_codec::{CARRY_CAPACITY, CarryBuf, DualReader};
use tracing::debug;

use crate::{
    constants::TX_FORMAT_MARKER,
    errors::ParseError,
    mode::ParseMode,
    sequencer::{Progress, StepExit, StepSequence, drive},
    state::{TxCore, TxSummary},
    tx_input::TxInParser,
    tx_output::TxOutParser,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TxStep {
    Marker,
    Version,
    InputCount,
    InputsInit,
    Inputs,
    OutputCount,
    OutputsInit,
    Outputs,
    Locktime,
    Done,
}

/// Step sequence for a whole transaction: version, inputs, outputs,
/// locktime, with one nested element sequence driven per input and output.
#[derive(Debug)]
struct RawTxSeq {
    step: TxStep,
    counter: u8,
    input: TxInParser,
    output: TxOutParser,
}

impl RawTxSeq {
    fn new() -> Self {
        Self {
            step: TxStep::Marker,
            counter: 0,
            input: TxInParser::new(),
            output: TxOutParser::new(),
        }
    }
}

impl StepSequence for RawTxSeq {
    type Ctx = TxCore;

    fn finished(&self) -> bool {
        self.step == TxStep::Done
    }

    fn exec_step(
        &mut self,
        tx: &mut TxCore,
        rd: &mut DualReader<'_>,
    ) -> Result<StepExit, ParseError> {
        match self.step {
            // The marker is consumed but not part of the hashed
            // serialization.
            TxStep::Marker => {
                let marker = try_read!(rd.read_u8());
                if marker != TX_FORMAT_MARKER {
                    return Err(ParseError::Malformed("unexpected format marker byte"));
                }
                self.step = TxStep::Version;
            }
            TxStep::Version => {
                let mut version = [0u8; 4];
                try_read!(rd.read_exact(&mut version));
                tx.hash_field(&version)?;
                self.step = TxStep::InputCount;
            }
            // Counts are single-byte by design; 255 elements is far beyond
            // what fits through this device path.
            TxStep::InputCount => {
                let count = try_read!(rd.read_u8());
                tx.n_inputs = count;
                tx.hash_field(&[count])?;
                self.step = TxStep::InputsInit;
            }
            // No stream reads; only resets the element loop.
            TxStep::InputsInit => {
                self.counter = 0;
                self.input.reset();
                self.step = TxStep::Inputs;
            }
            TxStep::Inputs => {
                if self.counter == tx.n_inputs {
                    self.step = TxStep::OutputCount;
                } else {
                    match drive(&mut self.input, tx, rd)? {
                        Progress::Stalled => return Ok(StepExit::Stall),
                        Progress::Complete => {
                            self.counter += 1;
                            self.input.reset();
                        }
                    }
                }
            }
            TxStep::OutputCount => {
                let count = try_read!(rd.read_u8());
                tx.n_outputs = count;
                tx.hash_field(&[count])?;
                self.step = TxStep::OutputsInit;
            }
            // No stream reads; only resets the element loop.
            TxStep::OutputsInit => {
                self.counter = 0;
                self.output.reset();
                self.step = TxStep::Outputs;
            }
            TxStep::Outputs => {
                if self.counter == tx.n_outputs {
                    self.step = TxStep::Locktime;
                } else {
                    match drive(&mut self.output, tx, rd)? {
                        Progress::Stalled => return Ok(StepExit::Stall),
                        Progress::Complete => {
                            self.counter += 1;
                            self.output.reset();
                        }
                    }
                }
            }
            TxStep::Locktime => {
                let mut locktime = [0u8; 4];
                try_read!(rd.read_exact(&mut locktime));
                tx.locktime = u32::from_le_bytes(locktime);
                tx.hash_field(&locktime)?;
                self.step = TxStep::Done;
            }
            TxStep::Done => {}
        }
        Ok(StepExit::Continue)
    }
}

/// Resumable transaction parse over host-delivered chunks.
///
/// Chunks are only valid for the duration of one [`feed`](Self::feed)
/// call: whatever a stalled parse leaves unconsumed is persisted into the
/// carry-over buffer and replayed ahead of the next chunk. Dropping the
/// value cancels the parse; [`finish`](Self::finish) produces the
/// double-hashed identifier once the final step has completed.
#[derive(Debug)]
pub struct RawTxParser {
    core: TxCore,
    seq: RawTxSeq,
    carry: CarryBuf,
    complete: bool,
}

impl RawTxParser {
    pub fn new(mode: ParseMode) -> Self {
        Self {
            core: TxCore::new(mode),
            seq: RawTxSeq::new(),
            carry: CarryBuf::new(),
            complete: false,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Parses as far as the carried-over bytes plus `chunk` allow.
    ///
    /// On [`Progress::Stalled`] every unconsumed byte has been persisted
    /// for the next call; bounded field reads keep that remainder under
    /// the carry-over capacity. Bytes trailing a completed transaction are
    /// ignored.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<Progress, ParseError> {
        if self.complete {
            return Ok(Progress::Complete);
        }

        let mut rest = [0u8; CARRY_CAPACITY];
        let mut rest_len = 0;
        let progress = {
            let mut rd = DualReader::new(self.carry.as_slice(), chunk);
            let progress = drive(&mut self.seq, &mut self.core, &mut rd)?;
            if progress == Progress::Stalled {
                if rd.available() > CARRY_CAPACITY {
                    return Err(keyfort_codec::CarryOverflow.into());
                }
                rest_len = rd.drain_into(&mut rest);
            }
            progress
        };
        self.carry.set(&rest[..rest_len])?;

        match progress {
            Progress::Stalled => {
                debug!(carried = rest_len, "parse suspended awaiting more data");
            }
            Progress::Complete => {
                self.complete = true;
                debug!(
                    n_inputs = self.core.n_inputs,
                    n_outputs = self.core.n_outputs,
                    "transaction parse complete"
                );
            }
        }
        Ok(progress)
    }

    /// Finalizes the digest and returns the parse summary.
    pub fn finish(mut self) -> Result<TxSummary, ParseError> {
        if !self.complete {
            return Err(ParseError::Incomplete);
        }
        Ok(TxSummary {
            txid: self.core.finalize_txid()?,
            n_inputs: self.core.n_inputs,
            n_outputs: self.core.n_outputs,
            locktime: self.core.locktime,
            total_output: self.core.total_output,
        })
    }
}
