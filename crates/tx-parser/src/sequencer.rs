//! Resumable step sequencing.

use keyfort_codec::DualReader;

use crate::errors::ParseError;

/// Outcome of executing one parsing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StepExit {
    /// The step made progress; keep driving the sequence.
    Continue,
    /// The buffered data ran out mid-field; suspend with the current step
    /// preserved for the next invocation.
    Stall,
}

/// Outcome of driving a sequence against the currently buffered data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Every step of the sequence has completed.
    Complete,
    /// The sequence is suspended awaiting more data.
    Stalled,
}

/// An ordered list of parsing steps with a persisted position.
///
/// A sequence owns its step position and step-local substate; shared state
/// (the running hash, element counters) lives in the context and is reached
/// only through it, so nested sequences never duplicate their parent's
/// state. A step that performs no stream reads always continues.
pub(crate) trait StepSequence {
    type Ctx;

    /// Executes the step the sequence is currently on.
    fn exec_step(
        &mut self,
        ctx: &mut Self::Ctx,
        rd: &mut DualReader<'_>,
    ) -> Result<StepExit, ParseError>;

    /// True once the final step has completed.
    fn finished(&self) -> bool;
}

/// Drives `seq` until it completes, stalls, or fails.
///
/// A stall propagates immediately without unwinding any state already
/// applied, which is how suspension travels up through nested sequences.
pub(crate) fn drive<S: StepSequence>(
    seq: &mut S,
    ctx: &mut S::Ctx,
    rd: &mut DualReader<'_>,
) -> Result<Progress, ParseError> {
    while !seq.finished() {
        match seq.exec_step(ctx, rd)? {
            StepExit::Continue => {}
            StepExit::Stall => return Ok(Progress::Stalled),
        }
    }
    Ok(Progress::Complete)
}
