//! # Block Encoding
//!
//! Stateless transform between [`Block`] and its signed wire form. Decoding is
//! a staged validation pipeline over untrusted bytes; each stage rejects with
//! its own [`DecodeError`] and never reads outside the buffer.

use crate::domain::entities::{Block, BlockRecordRaw};
use crate::domain::errors::{DecodeError, EncodeError};
use crate::domain::layout::{
    BLOCK_HEADER_SIZE, OFFSET_LAST_BLOCK_HASH, OFFSET_NUMBER, OFFSET_RECORD_COUNT, OFFSET_SIZE,
    OFFSET_VERSION, RECORD_HEADER_SIZE, SIGNATURE_SIZE,
};
use shared_crypto::{hash_data, recover_compact, CompactSignature, Secp256k1KeyPair};
use shared_types::HASH_SIZE;

/// Decode a single block.
///
/// Pipeline:
/// 1. Header length
/// 2. Owner recovery from the signature over `hash(raw[65..])`
/// 3. Previous hash, version, number
/// 4. Declared size == actual length
/// 5. Record framing
pub fn decode_block(raw: &[u8]) -> Result<Block, DecodeError> {
    if raw.len() < BLOCK_HEADER_SIZE {
        return Err(DecodeError::TooShort {
            len: raw.len(),
            min: BLOCK_HEADER_SIZE,
        });
    }

    let signature = CompactSignature::from_slice(&raw[..SIGNATURE_SIZE])
        .map_err(DecodeError::InvalidSignature)?;
    let owner_public_key = recover_compact(&signature, &hash_data(&raw[SIGNATURE_SIZE..]))
        .map_err(DecodeError::InvalidSignature)?;

    let last_block_hash = raw[OFFSET_LAST_BLOCK_HASH..OFFSET_VERSION].to_vec();
    let blockchain_version = u64::from_le_bytes(read_array(raw, OFFSET_VERSION));
    // 32-bit on the wire
    let number = u64::from(u32::from_le_bytes(read_array(raw, OFFSET_NUMBER)));

    let declared = u32::from_le_bytes(read_array(raw, OFFSET_SIZE));
    if u64::from(declared) != raw.len() as u64 {
        return Err(DecodeError::SizeMismatch {
            declared,
            actual: raw.len(),
        });
    }

    let count = u16::from_le_bytes(read_array(raw, OFFSET_RECORD_COUNT));
    let records = decode_records(raw, count)?;

    Ok(Block {
        owner_public_key: Some(owner_public_key),
        last_block_hash,
        blockchain_version,
        number,
        records,
    })
}

fn decode_records(raw: &[u8], count: u16) -> Result<Vec<BlockRecordRaw>, DecodeError> {
    // A hostile count must not drive the allocation: every record costs at
    // least its header.
    let capacity = usize::from(count).min((raw.len() - BLOCK_HEADER_SIZE) / RECORD_HEADER_SIZE);
    let mut records = Vec::with_capacity(capacity);
    let mut index = BLOCK_HEADER_SIZE;

    for n in 0..count {
        let overrun = DecodeError::RecordOverrun { index: n };

        let header = raw
            .get(index..index + RECORD_HEADER_SIZE)
            .ok_or_else(|| overrun.clone())?;
        let record_type = header[0];
        let size = u32::from_le_bytes(read_array(header, 1)) as usize;
        index += RECORD_HEADER_SIZE;

        let end = index
            .checked_add(size)
            .filter(|end| *end <= raw.len())
            .ok_or(overrun)?;

        records.push(BlockRecordRaw::new(record_type, raw[index..end].to_vec()));
        index = end;
    }

    Ok(records)
}

/// Decode many blocks in parallel. Results keep the input order.
pub fn decode_blocks(raws: &[&[u8]]) -> Vec<Result<Block, DecodeError>> {
    use rayon::prelude::*;

    raws.par_iter().map(|raw| decode_block(raw)).collect()
}

/// Encode and sign a block with the owner's private key.
///
/// Block 0 is always written with an all-zero previous hash, whatever the
/// caller supplied.
pub fn encode_block(block: &Block, owner: &Secp256k1KeyPair) -> Result<Vec<u8>, EncodeError> {
    if !block.is_genesis() && block.last_block_hash.len() != HASH_SIZE {
        return Err(EncodeError::InvalidLastBlockHash {
            len: block.last_block_hash.len(),
        });
    }
    let number =
        u32::try_from(block.number).map_err(|_| EncodeError::BlockNumberOverflow(block.number))?;

    let payload_len: usize = block.records.iter().map(|r| r.data.len()).sum();
    let mut raw = Vec::with_capacity(
        BLOCK_HEADER_SIZE + block.records.len() * RECORD_HEADER_SIZE + payload_len,
    );

    raw.extend_from_slice(&[0u8; SIGNATURE_SIZE]); // filled last
    if block.is_genesis() {
        raw.extend_from_slice(&[0u8; HASH_SIZE]);
    } else {
        raw.extend_from_slice(&block.last_block_hash);
    }
    raw.extend_from_slice(&block.blockchain_version.to_le_bytes());
    raw.extend_from_slice(&number.to_le_bytes());
    raw.extend_from_slice(&[0u8; 4]); // total size, filled later
    raw.extend_from_slice(&[0u8; 2]); // record count, filled later

    let mut count: u16 = 0;
    for (index, record) in block.records.iter().enumerate() {
        let len = u32::try_from(record.data.len()).map_err(|_| EncodeError::RecordTooLarge {
            index,
            len: record.data.len(),
        })?;
        count = count
            .checked_add(1)
            .ok_or(EncodeError::TooManyRecords(block.records.len()))?;

        raw.push(record.record_type);
        raw.extend_from_slice(&len.to_le_bytes());
        raw.extend_from_slice(&record.data);
    }

    let total = u32::try_from(raw.len()).map_err(|_| EncodeError::BlockTooLarge(raw.len()))?;
    raw[OFFSET_SIZE..OFFSET_RECORD_COUNT].copy_from_slice(&total.to_le_bytes());
    raw[OFFSET_RECORD_COUNT..BLOCK_HEADER_SIZE].copy_from_slice(&count.to_le_bytes());

    let signature = owner
        .sign_compact(&hash_data(&raw[SIGNATURE_SIZE..]))
        .map_err(EncodeError::Signing)?;
    raw[..SIGNATURE_SIZE].copy_from_slice(signature.as_bytes());

    Ok(raw)
}

/// Copy `N` bytes at `offset`. Callers check bounds beforehand.
fn read_array<const N: usize>(bytes: &[u8], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[offset..offset + N]);
    out
}
