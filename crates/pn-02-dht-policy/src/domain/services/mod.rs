//! Domain Services - Pure functions for Kademlia policy
//!
//! All functions in this module are pure (no I/O, no state mutation)
//! and deterministic (same inputs → same outputs), so the routing engine may
//! call them concurrently for independent node pairs.

mod distance;
mod eviction;

pub use distance::{is_closer, xor_distance, Distance};
pub use eviction::should_evict;
