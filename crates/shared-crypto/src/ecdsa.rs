//! # Compact Recoverable Signatures (secp256k1)
//!
//! 65-byte signatures in the `header || r || s` layout, where the header byte
//! is `27 + recovery_id + 4` (the `+ 4` marks a compressed public key). The
//! signer's public key is recovered from the signature and the signed digest.
//!
//! ## Security Properties
//!
//! - RFC 6979 deterministic nonces (no RNG dependency for signing)
//! - Low-S normalization, high-S signatures fail recovery
//! - Signing always covers a 32-byte BLAKE3 digest (prehash)

use crate::hashing::{hash_data, Hash};
use crate::CryptoError;
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use shared_types::NodeId;
use std::fmt;
use zeroize::Zeroizing;

/// Size of a compact recoverable signature.
pub const COMPACT_SIGNATURE_SIZE: usize = 65;

/// Header byte base value for recovery id 0.
const COMPACT_HEADER_BASE: u8 = 27;

/// Header flag marking that the recovered key is compressed.
const COMPACT_HEADER_COMPRESSED: u8 = 4;

/// Compressed secp256k1 public key (33 bytes).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Secp256k1PublicKey([u8; 33]);

impl Secp256k1PublicKey {
    /// Create from compressed bytes (33 bytes, starting with 0x02 or 0x03).
    pub fn from_bytes(bytes: [u8; 33]) -> Result<Self, CryptoError> {
        VerifyingKey::from_sec1_bytes(&bytes).map_err(|_| CryptoError::InvalidPublicKey)?;
        Ok(Self(bytes))
    }

    fn from_verifying_key(key: &VerifyingKey) -> Self {
        let point = key.to_encoded_point(true);
        // SEC1 compressed encoding of a non-identity point is always 33 bytes
        let mut bytes = [0u8; 33];
        bytes.copy_from_slice(point.as_bytes());
        Self(bytes)
    }

    /// Get raw compressed bytes.
    pub fn as_bytes(&self) -> &[u8; 33] {
        &self.0
    }

    /// Derive the DHT node identifier: BLAKE3 of the compressed key.
    pub fn to_node_id(&self) -> NodeId {
        NodeId::new(hash_data(&self.0))
    }
}

impl fmt::Debug for Secp256k1PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secp256k1PublicKey({})", hex::encode(self.0))
    }
}

/// Compact recoverable signature: header byte followed by r || s.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CompactSignature([u8; COMPACT_SIGNATURE_SIZE]);

impl CompactSignature {
    /// Wrap raw bytes. Validity is checked on recovery.
    pub fn from_bytes(bytes: [u8; COMPACT_SIGNATURE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Copy from a slice that must be exactly 65 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let bytes: [u8; COMPACT_SIGNATURE_SIZE] = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidSignatureFormat)?;
        Ok(Self(bytes))
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; COMPACT_SIGNATURE_SIZE] {
        &self.0
    }
}

impl fmt::Debug for CompactSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompactSignature({})", hex::encode(self.0))
    }
}

/// secp256k1 ECDSA keypair.
pub struct Secp256k1KeyPair {
    signing_key: SigningKey,
}

impl Secp256k1KeyPair {
    /// Generate random keypair.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        Self { signing_key }
    }

    /// Create from secret key bytes (32 bytes).
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, CryptoError> {
        let signing_key =
            SigningKey::from_slice(bytes).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    /// Create from a 64 character hex secret. Intermediate buffers are zeroized.
    pub fn from_hex(secret_hex: &str) -> Result<Self, CryptoError> {
        let decoded = Zeroizing::new(
            hex::decode(secret_hex.trim()).map_err(|e| CryptoError::InvalidHex(e.to_string()))?,
        );
        let bytes: Zeroizing<[u8; 32]> = Zeroizing::new(
            decoded
                .as_slice()
                .try_into()
                .map_err(|_| CryptoError::InvalidPrivateKey)?,
        );
        Self::from_bytes(&bytes)
    }

    /// Get public key (compressed, 33 bytes).
    pub fn public_key(&self) -> Secp256k1PublicKey {
        Secp256k1PublicKey::from_verifying_key(self.signing_key.verifying_key())
    }

    /// Node identifier of this key pair's public key.
    pub fn node_id(&self) -> NodeId {
        self.public_key().to_node_id()
    }

    /// Sign a 32-byte digest, producing a compact recoverable signature.
    pub fn sign_compact(&self, digest: &Hash) -> Result<CompactSignature, CryptoError> {
        let (signature, recovery_id) = self
            .signing_key
            .sign_prehash_recoverable(digest)
            .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;

        let mut bytes = [0u8; COMPACT_SIGNATURE_SIZE];
        bytes[0] = COMPACT_HEADER_BASE + recovery_id.to_byte() + COMPACT_HEADER_COMPRESSED;
        bytes[1..].copy_from_slice(&signature.to_bytes());
        Ok(CompactSignature(bytes))
    }
}

impl fmt::Debug for Secp256k1KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secp256k1KeyPair")
            .field("public_key", &self.public_key())
            .finish_non_exhaustive()
    }
}

/// Recover the signer's public key from a compact signature over `digest`.
pub fn recover_compact(
    signature: &CompactSignature,
    digest: &Hash,
) -> Result<Secp256k1PublicKey, CryptoError> {
    let header = signature.0[0];
    if !(COMPACT_HEADER_BASE..COMPACT_HEADER_BASE + 8).contains(&header) {
        return Err(CryptoError::InvalidRecoveryHeader(header));
    }

    let recovery_id = RecoveryId::from_byte((header - COMPACT_HEADER_BASE) & !COMPACT_HEADER_COMPRESSED)
        .ok_or(CryptoError::InvalidRecoveryHeader(header))?;

    let sig =
        Signature::from_slice(&signature.0[1..]).map_err(|_| CryptoError::InvalidSignatureFormat)?;

    let key = VerifyingKey::recover_from_prehash(digest, &sig, recovery_id)
        .map_err(|_| CryptoError::RecoveryFailed)?;

    Ok(Secp256k1PublicKey::from_verifying_key(&key))
}
