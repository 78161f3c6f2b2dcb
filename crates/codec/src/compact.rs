//! Compact-size ("varint") encoding helpers.

use crate::constants::MAX_COMPACT_SIZE_LEN;

/// Writes the canonical compact-size encoding of `value` into `out`,
/// returning the number of bytes written (1, 3, 5 or 9).
pub fn encode_compact_size(value: u64, out: &mut [u8; MAX_COMPACT_SIZE_LEN]) -> usize {
    match value {
        0..=0xfc => {
            out[0] = value as u8;
            1
        }
        0xfd..=0xffff => {
            out[0] = 0xfd;
            out[1..3].copy_from_slice(&(value as u16).to_le_bytes());
            3
        }
        0x1_0000..=0xffff_ffff => {
            out[0] = 0xfe;
            out[1..5].copy_from_slice(&(value as u32).to_le_bytes());
            5
        }
        _ => {
            out[0] = 0xff;
            out[1..9].copy_from_slice(&value.to_le_bytes());
            9
        }
    }
}

/// Total encoded width implied by a compact-size discriminant byte.
pub(crate) fn compact_size_width(discriminant: u8) -> usize {
    match discriminant {
        0xfd => 3,
        0xfe => 5,
        0xff => 9,
        _ => 1,
    }
}
