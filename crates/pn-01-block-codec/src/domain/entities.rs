//! # Domain Entities
//!
//! A block is immutable once signed. The chain grows by signing a successor
//! that references the hash of its predecessor's encoded bytes.

use shared_crypto::{hash_data, Secp256k1PublicKey};
use shared_types::HASH_SIZE;

/// A single block record, not decoded. Interpretation of `data` belongs to
/// the consumer of `record_type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRecordRaw {
    /// Record type tag
    pub record_type: u8,
    /// Opaque payload
    pub data: Vec<u8>,
}

impl BlockRecordRaw {
    /// Create a record.
    pub fn new(record_type: u8, data: Vec<u8>) -> Self {
        Self { record_type, data }
    }
}

/// A single block containing a set of records (metadata).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Owner public key. Recovered from the signature on decode; ignored on
    /// encode, where the signing key determines the owner.
    pub owner_public_key: Option<Secp256k1PublicKey>,
    /// Hash of the previous block. Must be 32 bytes for blocks > 0.
    pub last_block_hash: Vec<u8>,
    /// Blockchain version
    pub blockchain_version: u64,
    /// Block number. Carried as 32-bit on the wire.
    pub number: u64,
    /// Records in wire order
    pub records: Vec<BlockRecordRaw>,
}

impl Block {
    /// Block 0 of a chain.
    pub fn genesis(blockchain_version: u64, records: Vec<BlockRecordRaw>) -> Self {
        Self {
            owner_public_key: None,
            last_block_hash: vec![0u8; HASH_SIZE],
            blockchain_version,
            number: 0,
            records,
        }
    }

    /// Build the successor of this block given this block's encoded bytes.
    ///
    /// `None` once the block number cannot advance.
    pub fn successor(&self, encoded: &[u8], records: Vec<BlockRecordRaw>) -> Option<Self> {
        Some(Self {
            owner_public_key: None,
            last_block_hash: hash_data(encoded).to_vec(),
            blockchain_version: self.blockchain_version,
            number: self.number.checked_add(1)?,
            records,
        })
    }

    /// Whether this is the first block of its chain.
    pub fn is_genesis(&self) -> bool {
        self.number == 0
    }
}
