//! Static message-count and routing precomputation (§4.5 supplement).
//!
//! Segment successor topology never changes after network construction, so
//! every worker computes its expected inbound message count, and the list
//! of segments it must send to remotely, once at start-up rather than every
//! tick — the same build-once preference
//! `metro_network::NetworkBuilder::build` follows for the network itself.

use metro_core::{SegmentId, WorkerId};
use metro_network::{owner_of, partition_bounds, Network};

/// One of this worker's owned segments sending to a successor owned by a
/// different worker — a message that must actually cross the wire (§4.5's
/// local hand-off short-circuit means same-worker successors never appear
/// here).
#[derive(Clone, Copy, Debug)]
pub struct OutboundEdge {
    pub segment: SegmentId,
    pub successor: SegmentId,
    pub owner: WorkerId,
}

/// Every remote outbound edge for `worker`'s owned segments, in ascending
/// `(segment, successor)` order.
pub fn remote_edges(network: &Network, worker: WorkerId, num_workers: usize) -> Vec<OutboundEdge> {
    let num_segments = network.segment_count();
    let mut out = Vec::new();
    for idx in partition_bounds(worker, num_segments, num_workers) {
        let segment = SegmentId(idx as u32);
        for successor in network.segment(segment).distinct_successors() {
            let owner = owner_of(successor, num_segments, num_workers);
            if owner != worker {
                out.push(OutboundEdge { segment, successor, owner });
            }
        }
    }
    out
}

/// The number of cross-worker hand-off messages `worker` must receive every
/// tick: one per distinct predecessor segment (owned elsewhere) of each of
/// `worker`'s owned segments (§4.5's reconciliation rule, mirrored from the
/// sender's point of view).
pub fn inbound_count(network: &Network, worker: WorkerId, num_workers: usize) -> usize {
    let num_segments = network.segment_count();

    // Invert the successor graph once: predecessors[s] lists every segment
    // whose distinct-successor set includes `s`.
    let mut predecessors: Vec<Vec<SegmentId>> = vec![Vec::new(); num_segments];
    for idx in 0..num_segments {
        let segment = SegmentId(idx as u32);
        for successor in network.segment(segment).distinct_successors() {
            predecessors[successor.index()].push(segment);
        }
    }

    let mut count = 0;
    for idx in partition_bounds(worker, num_segments, num_workers) {
        for &pred in &predecessors[idx] {
            if owner_of(pred, num_segments, num_workers) != worker {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use metro_core::Line;
    use metro_network::NetworkBuilder;

    fn three_station_network() -> Network {
        let mut b = NetworkBuilder::new();
        let a = b.add_station("A".into(), 0);
        let s = b.add_station("B".into(), 0);
        let c = b.add_station("C".into(), 0);
        let matrix = vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]];
        b.set_adjacency(&matrix).unwrap();
        b.set_line(Line::Green, &[a, s, c]).unwrap();
        b.build()
    }

    #[test]
    fn inbound_and_outbound_agree_across_workers() {
        let net = three_station_network();
        let num_workers = 2;

        let total_out: usize = (0..num_workers)
            .map(|w| remote_edges(&net, WorkerId(w as u32), num_workers).len())
            .sum();
        let total_in: usize = (0..num_workers)
            .map(|w| inbound_count(&net, WorkerId(w as u32), num_workers))
            .sum();

        assert_eq!(total_out, total_in);
    }

    #[test]
    fn single_worker_has_no_remote_edges() {
        let net = three_station_network();
        for idx in net.segment_ids() {
            assert_eq!(
                remote_edges(&net, WorkerId(0), 1)
                    .iter()
                    .filter(|e| e.segment == idx)
                    .count(),
                0
            );
        }
        assert_eq!(inbound_count(&net, WorkerId(0), 1), 0);
    }
}
