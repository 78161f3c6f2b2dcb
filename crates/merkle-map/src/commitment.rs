//! Committed map description supplied by the caller.

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use keyfort_codec::Buf20;
use serde::{Deserialize, Serialize};

/// Commitment to a key/value map whose contents are fetched on demand.
///
/// `keys_root` commits to the ordered leaf hashes of the keys and
/// `values_root` to the value hashes at the same positions; `size` is the
/// number of leaves under both roots.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
    Arbitrary,
)]
pub struct MapCommitment {
    size: u32,
    keys_root: Buf20,
    values_root: Buf20,
}

impl MapCommitment {
    pub const fn new(size: u32, keys_root: Buf20, values_root: Buf20) -> Self {
        Self {
            size,
            keys_root,
            values_root,
        }
    }

    pub const fn size(&self) -> u32 {
        self.size
    }

    pub const fn keys_root(&self) -> &Buf20 {
        &self.keys_root
    }

    pub const fn values_root(&self) -> &Buf20 {
        &self.values_root
    }
}
