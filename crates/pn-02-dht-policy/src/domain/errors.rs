//! Domain Errors for the DHT policy

use thiserror::Error;

/// Invalid routing engine parameters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Only the 256-bit keyspace is supported
    #[error("Unsupported keyspace width: {0} bits")]
    UnsupportedIdBits(u16),
    /// Buckets must hold at least one node
    #[error("Bucket size k must be positive")]
    ZeroBucketSize,
    /// Alpha must be in 1..=k
    #[error("Lookup parallelism {alpha} must be in 1..={k}")]
    InvalidAlpha { alpha: usize, k: usize },
}
