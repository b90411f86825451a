//! Routing engine parameters.

use serde::Deserialize;

use super::errors::ConfigError;

/// Width of the keyspace in bits. Fixed by `NodeId`.
pub const ID_BITS: u16 = 256;

/// Kademlia parameters handed to the routing engine at construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KademliaConfig {
    /// Keyspace width in bits.
    pub id_bits: u16,
    /// Bucket size.
    pub k: usize,
    /// Lookup parallelism.
    pub alpha: usize,
}

impl Default for KademliaConfig {
    fn default() -> Self {
        Self {
            id_bits: ID_BITS,
            k: 20,
            alpha: 5,
        }
    }
}

impl KademliaConfig {
    /// Small buckets for tests.
    pub fn for_testing() -> Self {
        Self {
            id_bits: ID_BITS,
            k: 4,
            alpha: 2,
        }
    }

    /// Reject parameter sets the routing engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.id_bits != ID_BITS {
            return Err(ConfigError::UnsupportedIdBits(self.id_bits));
        }
        if self.k == 0 {
            return Err(ConfigError::ZeroBucketSize);
        }
        if self.alpha == 0 || self.alpha > self.k {
            return Err(ConfigError::InvalidAlpha {
                alpha: self.alpha,
                k: self.k,
            });
        }
        Ok(())
    }
}
