//! Cross-crate integration flows.

pub mod block_chain;
pub mod dht_dispatch;
pub mod storage_flows;
