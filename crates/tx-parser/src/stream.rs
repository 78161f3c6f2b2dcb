//! Preimage streaming from the host transport.

use keyfort_codec::Buf20;
use tracing::debug;

use crate::{
    errors::{ParseError, TransportError},
    raw_tx::RawTxParser,
    sequencer::Progress,
};

/// Host-exchange transport delivering the preimage of a committed hash.
///
/// Chunks arrive strictly in order with no gaps or duplication; `None`
/// marks the end of the stream. Retry policy, if any, lives behind this
/// interface.
pub trait ChunkTransport {
    /// Starts streaming the preimage of `value_hash`.
    fn begin_preimage(&mut self, value_hash: &Buf20) -> Result<(), TransportError>;

    /// Returns the next chunk of the current preimage.
    fn next_chunk(&mut self) -> Result<Option<Vec<u8>>, TransportError>;
}

/// Streams the preimage of `value_hash` through `parser` until the
/// transaction completes.
///
/// Bytes trailing the completed transaction are ignored; a stream that
/// ends while the parser is still stalled is a truncation error.
pub fn stream_preimage<T: ChunkTransport>(
    transport: &mut T,
    value_hash: &Buf20,
    parser: &mut RawTxParser,
) -> Result<(), ParseError> {
    transport.begin_preimage(value_hash)?;

    let mut chunks = 0usize;
    loop {
        let Some(chunk) = transport.next_chunk()? else {
            return Err(ParseError::TruncatedStream);
        };
        chunks += 1;
        if parser.feed(&chunk)? == Progress::Complete {
            debug!(chunks, "preimage fully parsed");
            return Ok(());
        }
    }
}
