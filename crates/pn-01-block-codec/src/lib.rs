//! # Block Codec (pn-01)
//!
//! Encodes and decodes signed blocks: a fixed 115-byte header followed by a
//! sequence of typed, opaque records. Each block is signed by its owner with
//! a compact recoverable secp256k1 signature, so the owner's public key is
//! recovered from the bytes rather than transmitted.
//!
//! ## Wire Layout (little-endian)
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0      | 65   | Compact recoverable signature |
//! | 65     | 32   | Previous block hash (zero for block 0) |
//! | 97     | 8    | Blockchain version |
//! | 105    | 4    | Block number |
//! | 109    | 4    | Total block size in bytes |
//! | 113    | 2    | Record count |
//! | 115..  | var  | Records: `{type: u8, len: u32, data}` |
//!
//! ## Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Genesis Link | Block 0 always carries an all-zero previous hash |
//! | 2 | Chain Link | Blocks > 0 carry a previous hash of exactly 32 bytes |
//! | 3 | Size Binding | Declared total size equals the received length |
//! | 4 | Bounded Reads | Record framing never reads past the buffer |
//! | 5 | All or Nothing | A rejected block yields no partial result |
//!
//! ## Usage
//!
//! ```rust
//! use pn_01_block_codec::{decode_block, encode_block, Block, BlockRecordRaw};
//! use shared_crypto::Secp256k1KeyPair;
//!
//! let owner = Secp256k1KeyPair::generate();
//! let block = Block::genesis(1, vec![BlockRecordRaw::new(1, b"profile".to_vec())]);
//!
//! let raw = encode_block(&block, &owner).unwrap();
//! let decoded = decode_block(&raw).unwrap();
//!
//! assert_eq!(decoded.owner_public_key, Some(owner.public_key()));
//! assert_eq!(decoded.records, block.records);
//! ```

pub mod codec;
pub mod domain;

pub use codec::{decode_block, decode_blocks, encode_block};
pub use domain::entities::{Block, BlockRecordRaw};
pub use domain::errors::{DecodeError, EncodeError};
pub use domain::layout::{BLOCK_HEADER_SIZE, RECORD_HEADER_SIZE, SIGNATURE_SIZE};
