//! Domain-separated element hashing for committed maps.

use bitcoin::hashes::{Hash, HashEngine, ripemd160};
use keyfort_codec::Buf20;

/// Prefix byte hashed before a leaf element.
pub const LEAF_TAG: u8 = 0x00;

/// Prefix byte hashed before the concatenation of two child hashes.
pub const NODE_TAG: u8 = 0x01;

/// Computes the 20-byte leaf hash of a raw element.
///
/// Leaves and internal nodes hash under distinct prefixes, so a crafted
/// element can never collide with an internal node of the tree.
pub fn element_hash(element: &[u8]) -> Buf20 {
    let mut engine = ripemd160::Hash::engine();
    engine.input(&[LEAF_TAG]);
    engine.input(element);
    Buf20::new(ripemd160::Hash::from_engine(engine).to_byte_array())
}

/// Combines two child hashes into their parent node hash.
pub fn node_hash(left: &Buf20, right: &Buf20) -> Buf20 {
    let mut engine = ripemd160::Hash::engine();
    engine.input(&[NODE_TAG]);
    engine.input(left.as_slice());
    engine.input(right.as_slice());
    Buf20::new(ripemd160::Hash::from_engine(engine).to_byte_array())
}
