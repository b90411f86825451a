//! # Ports Layer - Hexagonal Architecture Boundaries
//!
//! - **Driving Port (Inbound):** `DhtPolicy`, the callbacks the routing
//!   engine invokes on this crate
//! - **Driven Ports (Outbound):** `Peer`, `AnnouncementDispatcher` and
//!   `DhtEngine`, which the host implements

pub mod inbound;
pub mod outbound;

pub use inbound::DhtPolicy;
pub use outbound::{AnnouncementDispatcher, DhtEngine, DhtError, DhtValue, NetworkError, Peer};
