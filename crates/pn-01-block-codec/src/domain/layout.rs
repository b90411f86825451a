//! Fixed offsets of the block header.

use shared_crypto::ecdsa::COMPACT_SIGNATURE_SIZE;
use shared_types::HASH_SIZE;

/// Compact recoverable signature region at the start of every block.
pub const SIGNATURE_SIZE: usize = COMPACT_SIGNATURE_SIZE;

pub(crate) const OFFSET_LAST_BLOCK_HASH: usize = SIGNATURE_SIZE;
pub(crate) const OFFSET_VERSION: usize = OFFSET_LAST_BLOCK_HASH + HASH_SIZE;
pub(crate) const OFFSET_NUMBER: usize = OFFSET_VERSION + 8;
pub(crate) const OFFSET_SIZE: usize = OFFSET_NUMBER + 4;
pub(crate) const OFFSET_RECORD_COUNT: usize = OFFSET_SIZE + 4;

/// Total size of the fixed header (115 bytes).
pub const BLOCK_HEADER_SIZE: usize = OFFSET_RECORD_COUNT + 2;

/// Size of each record header: 1 byte type + 4 bytes payload length.
pub const RECORD_HEADER_SIZE: usize = 5;
