//! Parser constants.

/// Leading byte expected before the serialized transaction.
pub const TX_FORMAT_MARKER: u8 = 0x00;

/// Script bytes are consumed in slices of at most this many bytes, so a
/// suspension always leaves fewer unconsumed bytes than the carry-over
/// buffer can hold.
pub const SCRIPT_SLICE_LEN: usize = 32;
