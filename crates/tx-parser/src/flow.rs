//! Resolve-then-parse entry point.

use keyfort_merkle_map::{MapCommitment, MerkleOracle, resolve_value_hash};
use tracing::{debug, warn};

use crate::{
    errors::ParseError,
    mode::ParseMode,
    raw_tx::RawTxParser,
    state::TxSummary,
    stream::{ChunkTransport, stream_preimage},
};

/// Parses and hashes the transaction committed for `key` in `map`.
///
/// Resolves the key's verified value hash through the Merkle oracle, then
/// streams that hash's preimage through a fresh [`RawTxParser`]. An
/// unsupported mode fails before any oracle call, streaming, or hash
/// update; every other failure aborts atomically with no partial digest.
pub fn parse_and_hash<O: MerkleOracle, T: ChunkTransport>(
    oracle: &mut O,
    transport: &mut T,
    mode: ParseMode,
    map: &MapCommitment,
    key: &[u8],
) -> Result<TxSummary, ParseError> {
    if !mode.is_supported() {
        warn!(?mode, "refusing parse under unimplemented mode");
        return Err(ParseError::UnsupportedMode(mode));
    }

    let value_hash = resolve_value_hash(oracle, map, key)?;
    debug!(%value_hash, "streaming resolved transaction preimage");

    let mut parser = RawTxParser::new(mode);
    stream_preimage(transport, &value_hash, &mut parser)?;
    parser.finish()
}
