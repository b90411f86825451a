//! # DHT Policy Service
//!
//! `KademliaPolicy` implements the `DhtPolicy` callbacks the routing engine is
//! built with. Announcements leave through an `AnnouncementDispatcher`, one
//! call per candidate node.

mod core;

pub use core::KademliaPolicy;
