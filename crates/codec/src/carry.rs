//! Carry-over buffer persisted between host exchanges.

use crate::{CarryOverflow, constants::CARRY_CAPACITY};

/// Bytes read from a previous chunk but not yet consumed by a field.
///
/// The content is always a contiguous suffix of previously delivered bytes;
/// it is replaced wholesale at each suspension point and never reordered.
#[derive(Debug, Clone)]
pub struct CarryBuf {
    buf: [u8; CARRY_CAPACITY],
    len: usize,
}

impl CarryBuf {
    pub const fn new() -> Self {
        Self {
            buf: [0; CARRY_CAPACITY],
            len: 0,
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Replaces the buffered bytes with `bytes`.
    pub fn set(&mut self, bytes: &[u8]) -> Result<(), CarryOverflow> {
        if bytes.len() > CARRY_CAPACITY {
            return Err(CarryOverflow);
        }
        self.buf[..bytes.len()].copy_from_slice(bytes);
        self.len = bytes.len();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl Default for CarryBuf {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_read_back() {
        let mut carry = CarryBuf::new();
        assert!(carry.is_empty());

        carry.set(&[1, 2, 3]).unwrap();
        assert_eq!(carry.as_slice(), &[1, 2, 3]);
        assert_eq!(carry.len(), 3);

        carry.set(&[9]).unwrap();
        assert_eq!(carry.as_slice(), &[9]);
    }

    #[test]
    fn test_set_at_capacity() {
        let mut carry = CarryBuf::new();
        let full = [0xaau8; CARRY_CAPACITY];
        carry.set(&full).unwrap();
        assert_eq!(carry.as_slice(), &full);
    }

    #[test]
    fn test_set_over_capacity_fails() {
        let mut carry = CarryBuf::new();
        let oversized = [0u8; CARRY_CAPACITY + 1];
        assert_eq!(carry.set(&oversized), Err(CarryOverflow));
        // Prior content is untouched on failure.
        assert!(carry.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut carry = CarryBuf::new();
        carry.set(&[5, 6]).unwrap();
        carry.clear();
        assert!(carry.is_empty());
    }
}
