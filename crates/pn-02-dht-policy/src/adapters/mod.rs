//! # Adapters Layer
//!
//! - `DirectDispatcher`: one announcement, one peer send
//! - `NoOpDhtEngine`: stand-in routing engine for standalone nodes

pub mod dispatch;
pub mod noop;

pub use dispatch::DirectDispatcher;
pub use noop::NoOpDhtEngine;
