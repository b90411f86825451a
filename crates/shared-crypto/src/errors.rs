//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Secret key bytes are not a valid secp256k1 scalar
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// Public key bytes are not a valid compressed point
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Compact signature header byte is outside 27..=34
    #[error("Invalid recovery header: {0}")]
    InvalidRecoveryHeader(u8),

    /// r || s is not a valid signature encoding
    #[error("Invalid signature format")]
    InvalidSignatureFormat,

    /// No public key could be recovered from the signature
    #[error("Failed to recover public key")]
    RecoveryFailed,

    /// The signer rejected the digest
    #[error("Signing failed: {0}")]
    SigningFailed(String),

    /// Hex input could not be decoded
    #[error("Invalid hex: {0}")]
    InvalidHex(String),
}
