//! # Peernet Core Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Codec and policy throughput
//! └── src/integration/  # Flows spanning several crates
//!     ├── storage_flows.rs   # data store over warehouse + DHT engine
//!     ├── dht_dispatch.rs    # policy callbacks driving recording peers
//!     └── block_chain.rs     # chained blocks through the warehouse
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p pn-tests
//! cargo bench -p pn-tests
//! ```

pub mod integration;
