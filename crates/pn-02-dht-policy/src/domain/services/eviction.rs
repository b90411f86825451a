//! Bucket slot contest between an incumbent and a challenger.

use super::distance::is_closer;
use crate::domain::EvictionCandidate;
use shared_types::NodeId;

/// Decide whether `incumbent` should be evicted in favor of `challenger`.
///
/// 1. An incumbent without an RTT sample is stale and always evicted.
/// 2. A challenger with an RTT sample wins only if strictly faster.
/// 3. Otherwise the node closer to `local_id` keeps the slot; ties keep the
///    incumbent.
pub fn should_evict(
    local_id: &NodeId,
    incumbent: &EvictionCandidate,
    challenger: &EvictionCandidate,
) -> bool {
    let Some(incumbent_rtt) = incumbent.rtt else {
        return true;
    };

    if let Some(challenger_rtt) = challenger.rtt {
        return challenger_rtt < incumbent_rtt;
    }

    is_closer(local_id, &challenger.id, &incumbent.id)
}
