//! Byte-buffer primitives for chunked, resumable stream parsing.
//!
//! A parse that cannot hold its whole input lives off two physical buffers:
//! a small carry-over region persisted between host exchanges and the chunk
//! that just arrived. [`DualReader`] presents the pair as one logical byte
//! stream; [`CarryBuf`] persists whatever a suspended parse did not consume.

mod buf;
pub use buf::{Buf20, Buf32};

mod carry;
pub use carry::CarryBuf;

mod compact;
pub use compact::encode_compact_size;

mod constants;
pub use constants::{CARRY_CAPACITY, MAX_COMPACT_SIZE_LEN};

mod dual_reader;
pub use dual_reader::DualReader;

mod errors;
pub use errors::{CarryOverflow, Insufficient};
