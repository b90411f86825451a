//! # Data Service
//!
//! Implements `DataStoreApi` over a `Warehouse` and a `DhtEngine` handle.
//! No lock is held across an `.await`: warehouse calls are synchronous and
//! scoped, DHT calls are delegated whole.

mod core;

pub use core::DataService;
