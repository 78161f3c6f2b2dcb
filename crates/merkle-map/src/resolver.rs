//! Key-to-value-hash resolution against a committed map.

use keyfort_codec::Buf20;
use tracing::{trace, warn};

use crate::{
    commitment::MapCommitment,
    element::element_hash,
    errors::ResolveError,
    oracle::MerkleOracle,
};

/// Resolves the verified value hash committed for `key`.
///
/// The returned hash is the trusted starting point for streaming the value's
/// preimage. An absent key is an error, never an empty value; an empty map
/// fails without consulting the oracle at all.
pub fn resolve_value_hash<O: MerkleOracle>(
    oracle: &mut O,
    map: &MapCommitment,
    key: &[u8],
) -> Result<Buf20, ResolveError> {
    if map.size() == 0 {
        warn!("lookup in empty committed map");
        return Err(ResolveError::KeyNotFound);
    }

    let key_hash = element_hash(key);
    let Some(index) = oracle.find_leaf_index(map.keys_root(), map.size(), &key_hash)? else {
        warn!(%key_hash, "key not found in committed map");
        return Err(ResolveError::KeyNotFound);
    };
    trace!(index, "located key leaf");

    Ok(oracle.leaf_value(map.values_root(), map.size(), index)?)
}
