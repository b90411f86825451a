//! # Codec Errors
//!
//! Every rejected invariant has its own variant so callers (and tests) can
//! tell which stage of the pipeline refused the block.

use shared_crypto::CryptoError;
use thiserror::Error;

/// Errors raised while decoding untrusted block bytes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Buffer is smaller than the fixed header
    #[error("Block too short: {len} bytes, header requires {min}")]
    TooShort { len: usize, min: usize },

    /// Owner public key could not be recovered from the signature
    #[error("Invalid block signature: {0}")]
    InvalidSignature(CryptoError),

    /// Declared total size does not equal the received length
    #[error("Declared block size {declared} does not match actual size {actual}")]
    SizeMismatch { declared: u32, actual: usize },

    /// A record header or payload runs past the end of the buffer
    #[error("Block record {index} exceeds block size")]
    RecordOverrun { index: u16 },
}

/// Errors raised while encoding a block. No bytes are returned on error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// Non-genesis block whose previous hash is not exactly 32 bytes
    #[error("Invalid last block hash length: {len}")]
    InvalidLastBlockHash { len: usize },

    /// Block number does not fit the 32-bit wire field
    #[error("Block number {0} exceeds 32-bit wire width")]
    BlockNumberOverflow(u64),

    /// More records than the 16-bit count field can express
    #[error("Too many records: {0}")]
    TooManyRecords(usize),

    /// Record payload does not fit the 32-bit length field
    #[error("Record {index} too large: {len} bytes")]
    RecordTooLarge { index: usize, len: usize },

    /// Encoded block does not fit the 32-bit size field
    #[error("Block too large: {0} bytes")]
    BlockTooLarge(usize),

    /// The owner key failed to sign the block digest
    #[error("Signing failed: {0}")]
    Signing(CryptoError),
}
