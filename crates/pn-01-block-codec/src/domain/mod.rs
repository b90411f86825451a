//! # Domain Layer
//!
//! Block entities, wire layout constants and codec errors. No I/O.

pub mod entities;
pub mod errors;
pub mod layout;
