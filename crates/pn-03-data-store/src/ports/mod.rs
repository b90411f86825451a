//! # Ports Layer - Hexagonal Architecture Boundaries
//!
//! - **Driving Port (Inbound):** `DataStoreApi`
//! - **Driven Port (Outbound):** `Warehouse`

pub mod inbound;
pub mod outbound;

pub use inbound::DataStoreApi;
pub use outbound::{InMemoryWarehouse, Warehouse};
