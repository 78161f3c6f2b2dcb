//! Merkle-committed key/value maps resolved on demand.
//!
//! A committed map is never held in full: the caller supplies only an
//! element count and two 20-byte Merkle roots (one over the hashed keys,
//! one over the value hashes). Looking a key up means hashing it into its
//! leaf form, asking the proof oracle where that leaf sits under the keys
//! root, then fetching the verified value hash at the same position under
//! the values root.

mod commitment;
pub use commitment::MapCommitment;

mod element;
pub use element::{element_hash, node_hash, LEAF_TAG, NODE_TAG};

mod errors;
pub use errors::{OracleError, ResolveError};

mod oracle;
pub use oracle::MerkleOracle;

mod resolver;
pub use resolver::resolve_value_hash;
