//! Interface presented by the Merkle inclusion-proof primitives.

use keyfort_codec::Buf20;

use crate::errors::OracleError;

/// Proof-backed lookups into a committed Merkle tree.
///
/// Implementations verify inclusion proofs against the supplied root before
/// returning; callers treat every returned value as trusted. Calls may be
/// round trips to the host, and retry policy belongs to the implementation's
/// transport, never to callers.
pub trait MerkleOracle {
    /// Returns the position of `element_hash` among the `size` leaves under
    /// `root`, or `None` when the element is absent.
    fn find_leaf_index(
        &mut self,
        root: &Buf20,
        size: u32,
        element_hash: &Buf20,
    ) -> Result<Option<u32>, OracleError>;

    /// Returns the proof-verified leaf hash at `index` under `root`.
    fn leaf_value(&mut self, root: &Buf20, size: u32, index: u32) -> Result<Buf20, OracleError>;
}
