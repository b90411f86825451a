//! # Adapters Layer
//!
//! - `FileWarehouse`: one file per object under a data directory

pub mod file;

pub use file::FileWarehouse;
