//! Domain Layer - Pure Kademlia policy with no I/O
//!
//! - XOR distance and closeness comparison
//! - Eviction rule for contested bucket slots
//! - Lookup requests and outbound announcement types
//! - Routing engine parameters

pub mod config;
pub mod entities;
pub mod errors;
pub mod services;

pub use config::*;
pub use entities::*;
pub use errors::*;
pub use services::*;
