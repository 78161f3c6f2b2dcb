//! In-memory oracle and transport fakes for the flow tests.

use bitcoin::{
    Amount, OutPoint, ScriptBuf, Sequence, Transaction, TxIn, TxOut, Txid, Witness,
    absolute::LockTime, consensus::serialize, hashes::Hash, transaction::Version,
};
use keyfort_codec::Buf20;
use keyfort_merkle_map::{MapCommitment, MerkleOracle, OracleError, element_hash, node_hash};
use keyfort_tx_parser::{ChunkTransport, TX_FORMAT_MARKER, TransportError};

/// Root of a list of leaf hashes, odd leaves promoted unchanged.
pub fn merkle_root(leaves: &[Buf20]) -> Buf20 {
    if leaves.is_empty() {
        return Buf20::zero();
    }
    let mut level = leaves.to_vec();
    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| match pair {
                [left, right] => node_hash(left, right),
                [only] => *only,
                _ => unreachable!(),
            })
            .collect();
    }
    level[0]
}

/// Oracle over an in-memory key/value map, counting calls so tests can
/// assert which lookups actually happened.
pub struct FakeOracle {
    key_hashes: Vec<Buf20>,
    value_hashes: Vec<Buf20>,
    pub index_calls: usize,
    pub leaf_calls: usize,
}

impl MerkleOracle for FakeOracle {
    fn find_leaf_index(
        &mut self,
        _root: &Buf20,
        size: u32,
        element_hash: &Buf20,
    ) -> Result<Option<u32>, OracleError> {
        self.index_calls += 1;
        assert_eq!(size as usize, self.key_hashes.len());
        Ok(self
            .key_hashes
            .iter()
            .position(|h| h == element_hash)
            .map(|i| i as u32))
    }

    fn leaf_value(&mut self, _root: &Buf20, _size: u32, index: u32) -> Result<Buf20, OracleError> {
        self.leaf_calls += 1;
        Ok(self.value_hashes[index as usize])
    }
}

/// Builds an oracle plus matching commitment over `entries`.
pub fn committed_map(entries: &[(&[u8], &[u8])]) -> (FakeOracle, MapCommitment) {
    let key_hashes: Vec<Buf20> = entries.iter().map(|(k, _)| element_hash(k)).collect();
    let value_hashes: Vec<Buf20> = entries.iter().map(|(_, v)| element_hash(v)).collect();
    let commitment = MapCommitment::new(
        entries.len() as u32,
        merkle_root(&key_hashes),
        merkle_root(&value_hashes),
    );
    let oracle = FakeOracle {
        key_hashes,
        value_hashes,
        index_calls: 0,
        leaf_calls: 0,
    };
    (oracle, commitment)
}

/// Transport serving one preimage split into fixed-size chunks.
pub struct FakeTransport {
    expected: Buf20,
    chunks: Vec<Vec<u8>>,
    cursor: usize,
    fail_on_chunk: bool,
    pub begin_calls: usize,
}

impl FakeTransport {
    pub fn new(preimage: &[u8], chunk_len: usize) -> Self {
        Self {
            expected: element_hash(preimage),
            chunks: preimage.chunks(chunk_len).map(<[u8]>::to_vec).collect(),
            cursor: 0,
            fail_on_chunk: false,
            begin_calls: 0,
        }
    }

    /// Drops the final chunk so the stream ends early.
    pub fn truncated(mut self) -> Self {
        self.chunks.pop();
        self
    }

    /// Fails every chunk request.
    pub fn failing(mut self) -> Self {
        self.fail_on_chunk = true;
        self
    }
}

impl ChunkTransport for FakeTransport {
    fn begin_preimage(&mut self, value_hash: &Buf20) -> Result<(), TransportError> {
        self.begin_calls += 1;
        if *value_hash != self.expected {
            return Err(TransportError::new("no preimage known for hash"));
        }
        self.cursor = 0;
        Ok(())
    }

    fn next_chunk(&mut self) -> Result<Option<Vec<u8>>, TransportError> {
        if self.fail_on_chunk {
            return Err(TransportError::new("host exchange dropped"));
        }
        let chunk = self.chunks.get(self.cursor).cloned();
        self.cursor += 1;
        Ok(chunk)
    }
}

/// Two-input, two-output transaction with scripts long enough to cross
/// the bounded slice width.
pub fn sample_tx() -> Transaction {
    Transaction {
        version: Version::ONE,
        lock_time: LockTime::from_consensus(750_000),
        input: vec![
            TxIn {
                previous_output: OutPoint {
                    txid: Txid::from_raw_hash(Hash::from_byte_array([0x11; 32])),
                    vout: 1,
                },
                script_sig: ScriptBuf::from_bytes((0u8..72).collect()),
                sequence: Sequence::MAX,
                witness: Witness::default(),
            },
            TxIn {
                previous_output: OutPoint {
                    txid: Txid::from_raw_hash(Hash::from_byte_array([0x22; 32])),
                    vout: 0,
                },
                script_sig: ScriptBuf::new(),
                sequence: Sequence(0xffff_fffe),
                witness: Witness::default(),
            },
        ],
        output: vec![
            TxOut {
                value: Amount::from_sat(1_500_000),
                script_pubkey: ScriptBuf::from_bytes(vec![0x76, 0xa9, 0x14]),
            },
            TxOut {
                value: Amount::from_sat(2_500_000),
                script_pubkey: ScriptBuf::from_bytes(vec![0x6a; 48]),
            },
        ],
    }
}

/// Serialized transaction behind the expected format marker.
pub fn preimage_of(tx: &Transaction) -> Vec<u8> {
    let mut preimage = vec![TX_FORMAT_MARKER];
    preimage.extend(serialize(tx));
    preimage
}
