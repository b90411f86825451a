//! # Genesis Block Builder

use pn_01_block_codec::{decode_block, encode_block, Block, BlockRecordRaw, DecodeError, EncodeError};
use pn_03_data_store::data_to_hash;
use shared_crypto::Secp256k1KeyPair;
use shared_types::KeyHash;
use thiserror::Error;

/// Genesis block creation errors.
#[derive(Debug, Error)]
pub enum GenesisError {
    /// Encoding or signing failed.
    #[error("Failed to encode genesis block: {0}")]
    Encode(#[from] EncodeError),

    /// The encoded block does not decode back.
    #[error("Genesis block failed self-check: {0}")]
    SelfCheck(#[from] DecodeError),
}

/// A signed genesis block.
#[derive(Debug, Clone)]
pub struct GenesisBlock {
    /// Decoded form, with the owner key recovered from the signature.
    pub block: Block,
    /// Wire form.
    pub raw: Vec<u8>,
}

impl GenesisBlock {
    /// Content hash of the wire form; the previous hash of block 1.
    pub fn hash(&self) -> KeyHash {
        data_to_hash(&self.raw)
    }
}

/// Builds block 0 for a blockchain version.
#[derive(Debug, Clone, Default)]
pub struct GenesisBuilder {
    blockchain_version: u64,
    records: Vec<BlockRecordRaw>,
}

impl GenesisBuilder {
    /// Empty genesis block.
    pub fn new(blockchain_version: u64) -> Self {
        Self {
            blockchain_version,
            records: Vec::new(),
        }
    }

    /// Append a record.
    pub fn with_record(mut self, record_type: u8, data: Vec<u8>) -> Self {
        self.records.push(BlockRecordRaw::new(record_type, data));
        self
    }

    /// Encode and sign, then decode once to confirm the owner round-trips.
    pub fn build(self, owner: &Secp256k1KeyPair) -> Result<GenesisBlock, GenesisError> {
        let raw = encode_block(&Block::genesis(self.blockchain_version, self.records), owner)?;
        let block = decode_block(&raw)?;
        Ok(GenesisBlock { block, raw })
    }
}
