//! Dispatcher without coalescing.

use crate::domain::{Announcement, FindTarget, Node};
use crate::ports::{AnnouncementDispatcher, NetworkError};

/// Maps each announcement onto the matching `Peer` send.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectDispatcher;

impl AnnouncementDispatcher for DirectDispatcher {
    fn dispatch(&self, node: &Node, announcement: Announcement) -> Result<(), NetworkError> {
        match announcement {
            Announcement::Store(store) => node.peer.send_store_announcement(store),
            Announcement::FindSelf => node.peer.send_find_node(FindTarget::SelfRecord),
            Announcement::FindNode(key) => node.peer.send_find_node(FindTarget::Key(key)),
            Announcement::FindValue(key) => node.peer.send_find_value(key),
        }
    }
}
