//! Test doubles for the DHT policy and its consumers.
//!
//! Enable with the `test-utils` feature flag.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use pn_02_dht_policy::test_utils::RecordingPeer;
//! use pn_02_dht_policy::{Announcement, Node, NodeId, Peer};
//!
//! let peer = Arc::new(RecordingPeer::new(None));
//! let node = Node::new(NodeId::new([1u8; 32]), peer.clone());
//! node.peer.send_find_value([2u8; 32]).unwrap();
//!
//! assert_eq!(peer.sent(), vec![Announcement::FindValue([2u8; 32])]);
//! ```

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use shared_types::KeyHash;

use crate::domain::{Announcement, FindTarget, InfoStore};
use crate::ports::{DhtEngine, DhtError, DhtValue, NetworkError, Peer};

/// Peer that records every message instead of sending it.
#[derive(Debug, Default)]
pub struct RecordingPeer {
    rtt: Option<Duration>,
    fail: bool,
    sent: Mutex<Vec<Announcement>>,
}

impl RecordingPeer {
    /// Peer with the given RTT sample.
    pub fn new(rtt: Option<Duration>) -> Self {
        Self {
            rtt,
            ..Self::default()
        }
    }

    /// Peer whose every send fails with `NotConnected`.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Messages recorded so far, in send order.
    pub fn sent(&self) -> Vec<Announcement> {
        self.sent.lock().clone()
    }

    fn record(&self, announcement: Announcement) -> Result<(), NetworkError> {
        if self.fail {
            return Err(NetworkError::NotConnected);
        }
        self.sent.lock().push(announcement);
        Ok(())
    }
}

impl Peer for RecordingPeer {
    fn rtt(&self) -> Option<Duration> {
        self.rtt
    }

    fn send_store_announcement(&self, store: InfoStore) -> Result<(), NetworkError> {
        self.record(Announcement::Store(store))
    }

    fn send_find_node(&self, target: FindTarget) -> Result<(), NetworkError> {
        self.record(match target {
            FindTarget::SelfRecord => Announcement::FindSelf,
            FindTarget::Key(key) => Announcement::FindNode(key),
        })
    }

    fn send_find_value(&self, key: KeyHash) -> Result<(), NetworkError> {
        self.record(Announcement::FindValue(key))
    }
}

/// Scripted routing engine that counts its calls.
#[derive(Debug, Default)]
pub struct MockDhtEngine {
    response: Mutex<Option<DhtValue>>,
    get_calls: AtomicUsize,
    stores: Mutex<Vec<(KeyHash, u64)>>,
    fail_get: AtomicBool,
    fail_store: AtomicBool,
}

impl MockDhtEngine {
    /// Engine that finds nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine answering every lookup with `value`.
    pub fn with_response(value: DhtValue) -> Self {
        Self {
            response: Mutex::new(Some(value)),
            ..Self::default()
        }
    }

    /// Make lookups fail with `Timeout`.
    pub fn fail_gets(&self) {
        self.fail_get.store(true, Ordering::SeqCst);
    }

    /// Make announcements fail with `NoReachableNodes`.
    pub fn fail_stores(&self) {
        self.fail_store.store(true, Ordering::SeqCst);
    }

    /// Number of `get` calls so far.
    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    /// `(key, size)` of every `store` call so far.
    pub fn stores(&self) -> Vec<(KeyHash, u64)> {
        self.stores.lock().clone()
    }
}

#[async_trait]
impl DhtEngine for MockDhtEngine {
    async fn get(&self, _key: &KeyHash) -> Result<Option<DhtValue>, DhtError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(DhtError::Timeout);
        }
        Ok(self.response.lock().clone())
    }

    async fn store(&self, key: &KeyHash, size: u64) -> Result<(), DhtError> {
        if self.fail_store.load(Ordering::SeqCst) {
            return Err(DhtError::NoReachableNodes);
        }
        self.stores.lock().push((*key, size));
        Ok(())
    }
}
