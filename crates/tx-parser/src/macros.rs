//! Internal helper macros.

/// Unwraps a buffered read inside a parsing step, suspending the sequence
/// when the data is not yet available.
macro_rules! try_read {
    ($read:expr) => {
        match $read {
            Ok(value) => value,
            Err(::keyfort_codec::Insufficient) => {
                return Ok($crate::sequencer::StepExit::Stall);
            }
        }
    };
}
