//! Per-worker runtime state and the tick-local scheduler driver (§4.4).

use std::collections::BTreeMap;
use std::sync::Arc;

use metro_core::{SegmentId, Tick, WorkerId};
use metro_network::Network;

use crate::segment_state::SegmentState;
use crate::spawner::spawn_plan;
use crate::vehicle::{Vehicle, VehicleState};

/// A vehicle handed off to a segment this worker does not own, produced by
/// [`WorkerState::step1_arrivals`] (§4.5). The caller (the transfer
/// protocol) is responsible for getting it to its owning worker.
#[derive(Clone, Debug)]
pub struct PendingHandoff {
    /// The owned segment the hand-off departed from — identifies which of
    /// a segment's (possibly several, per distinct successor) outbound
    /// transfer messages this vehicle belongs to (§4.5).
    pub origin: SegmentId,
    pub destination: SegmentId,
    pub vehicle: Vehicle,
}

/// One worker's slice of segment runtime state, plus the scheduler
/// operations that advance it one tick at a time.
///
/// Mirrors `dt_mobility::MobilityEngine`'s scan-then-mutate shape: each
/// step collects the segments needing a transition, then mutates, so a
/// segment is never read and written inconsistently within one step.
pub struct WorkerState {
    network: Arc<Network>,
    worker_id: WorkerId,
    num_workers: usize,
    segments: BTreeMap<SegmentId, SegmentState>,
}

impl WorkerState {
    /// Creates empty runtime state for every segment `worker_id` owns
    /// under the contiguous-block partitioning (§4.2).
    pub fn new(network: Arc<Network>, worker_id: WorkerId, num_workers: usize) -> Self {
        let bounds = metro_network::partition_bounds(worker_id, network.segment_count(), num_workers);
        let mut segments = BTreeMap::new();
        for idx in bounds {
            segments.insert(SegmentId(idx as u32), SegmentState::new());
        }
        Self { network, worker_id, num_workers, segments }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn worker_id(&self) -> WorkerId {
        self.worker_id
    }

    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    pub fn owns(&self, segment: SegmentId) -> bool {
        self.segments.contains_key(&segment)
    }

    pub fn owned_segments(&self) -> impl Iterator<Item = SegmentId> + '_ {
        self.segments.keys().copied()
    }

    /// Spawns this tick's new vehicles into the waiting pool of whichever
    /// forward/backward start segment this worker owns (§4.3). A worker
    /// that doesn't own the relevant start segment silently does nothing —
    /// it still ran [`spawn_plan`] and agrees on the ids, it just has no
    /// local state to place a vehicle into.
    pub fn apply_spawns(&mut self, tick: Tick, line_totals: [u32; 3]) {
        for entry in spawn_plan(tick, line_totals) {
            if let Some(id) = entry.forward {
                if let Some(seg) = self.network.forward_start(entry.line) {
                    if let Some(state) = self.segments.get_mut(&seg) {
                        state.push_waiting(Vehicle::spawn(id, entry.line, seg, tick));
                    }
                }
            }
            if let Some(id) = entry.backward {
                if let Some(seg) = self.network.backward_start(entry.line) {
                    if let Some(state) = self.segments.get_mut(&seg) {
                        state.push_waiting(Vehicle::spawn(id, entry.line, seg, tick));
                    }
                }
            }
        }
    }

    /// Step 1 (§4.4): for every owned segment with a matured transit
    /// vehicle, move it to `WAITING_PLATFORM` on its line's successor
    /// segment. Local successors are applied immediately; segments owned
    /// by another worker are returned for the transfer protocol (§4.5) —
    /// this is the local-handoff short-circuit invited by §9's
    /// per-neighbour-aggregation note, skipping the channel round-trip
    /// for a hand-off that never leaves this worker.
    ///
    /// Called after this tick's [`step2_3`] (§9's resolved tick-ordering
    /// Open Question): a hand-off landing in a waiting pool here is only
    /// eligible for platform admission starting next tick, never this one.
    pub fn step1_arrivals(&mut self, tick: Tick) -> Vec<PendingHandoff> {
        let mut outgoing = Vec::new();

        for seg_id in self.owned_segments().collect::<Vec<_>>() {
            let matured = match self.segments[&seg_id].transit() {
                Some(v) => {
                    let length = self.network.segment(seg_id).length as u64;
                    tick.since(v.timestamp) >= length
                }
                None => false,
            };
            if !matured {
                continue;
            }

            let mut v = self.segments.get_mut(&seg_id).unwrap().take_transit().unwrap();
            let successor = self
                .network
                .successor(seg_id, v.line)
                .expect("a vehicle in transit must sit on a segment used by its own line");

            v.state = VehicleState::WaitingPlatform;
            v.timestamp = tick;
            v.segment = successor;

            if let Some(state) = self.segments.get_mut(&successor) {
                state.push_waiting(v);
            } else {
                outgoing.push(PendingHandoff { origin: seg_id, destination: successor, vehicle: v });
            }
        }

        outgoing
    }

    /// Applies a vehicle received from a remote worker (§4.5): append it
    /// to its destination segment's waiting pool. Panics if this worker
    /// does not own the destination — a protocol invariant violation, not
    /// a recoverable runtime condition.
    pub fn receive_handoff(&mut self, vehicle: Vehicle) {
        let seg = vehicle.segment;
        self.segments
            .get_mut(&seg)
            .expect("handoff destination must be owned by the receiving worker")
            .push_waiting(vehicle);
    }

    /// Steps 2 and 3 (§4.4): platform dwell / transit-request, then
    /// admission from the waiting pool. Runs before this tick's
    /// [`step1_arrivals`] (§9's resolved tick-ordering Open Question) so a
    /// hand-off produced by step 1 never gets admitted to a platform before
    /// the tick after it arrives.
    ///
    /// The dwell-expiry check and the transit-slot move are sequential, not
    /// mutually exclusive: a platform vehicle whose dwell just expired can
    /// move straight into a transit slot that happens to be free in the
    /// same call (§8 Scenario A/C — a `match` over `VehicleState` would
    /// stall that vehicle on the platform for one extra tick).
    pub fn step2_3(&mut self, tick: Tick) {
        for seg_id in self.owned_segments().collect::<Vec<_>>() {
            let popularity = self.network.station(self.network.segment(seg_id).source).popularity as u64;
            let state = self.segments.get_mut(&seg_id).unwrap();

            if let Some((VehicleState::OnPlatform, vts)) = state.platform().map(|v| (v.state, v.timestamp)) {
                if tick.since(vts) > popularity {
                    let v = state.platform_mut().unwrap();
                    v.state = VehicleState::WaitingTransit;
                    v.timestamp = tick;
                }
            }

            if let Some(VehicleState::WaitingTransit) = state.platform().map(|v| v.state) {
                if state.transit_is_empty() {
                    let mut v = state.take_platform().unwrap();
                    v.state = VehicleState::InTransit;
                    v.timestamp = tick;
                    state.set_transit(v);
                }
            }

            if state.platform_is_empty() && !state.waiting_is_empty() {
                let mut v = state.pop_waiting().unwrap();
                v.state = VehicleState::OnPlatform;
                v.timestamp = tick;
                state.set_platform(v);
            }
        }
    }

    /// All vehicles this worker currently holds, across every owned
    /// segment's platform slot, transit slot, and waiting pool — the
    /// per-worker contribution to the snapshot gather (§4.6).
    pub fn live_vehicles(&self) -> Vec<Vehicle> {
        self.segments.values().flat_map(|s| s.live_vehicles().cloned()).collect()
    }

    pub fn segment_state(&self, segment: SegmentId) -> Option<&SegmentState> {
        self.segments.get(&segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metro_core::{Line, StationId};
    use metro_network::NetworkBuilder;

    fn three_station_network() -> Arc<Network> {
        let mut b = NetworkBuilder::new();
        let a = b.add_station("A".into(), 0);
        let s = b.add_station("B".into(), 0);
        let c = b.add_station("C".into(), 0);
        let matrix = vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]];
        b.set_adjacency(&matrix).unwrap();
        b.set_line(Line::Green, &[a, s, c]).unwrap();
        Arc::new(b.build())
    }

    #[test]
    fn spawn_then_dwell_then_transit_single_worker() {
        let net = three_station_network();
        let mut w = WorkerState::new(net, WorkerId(0), 1);

        // tick 0: spawn g0 at forward start (A->B), then step2_3 admits it
        // straight onto the empty platform.
        w.apply_spawns(Tick(0), [1, 0, 0]);
        w.step2_3(Tick(0));
        w.step1_arrivals(Tick(0));
        let live = w.live_vehicles();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].state, VehicleState::OnPlatform);

        // tick 1: popularity 0 means dwell 0+1=1 tick; (1-0)=1 > 0, so the
        // dwell-expiry check fires, and — chained in the same call — the
        // transit-slot move fires too, since the transit slot is free.
        w.step2_3(Tick(1));
        w.step1_arrivals(Tick(1));
        let live = w.live_vehicles();
        assert_eq!(live[0].state, VehicleState::InTransit);
    }

    #[test]
    fn dwell_expiry_does_not_force_through_an_occupied_transit_slot() {
        let net = three_station_network();
        let mut w = WorkerState::new(net, WorkerId(0), 1);

        w.apply_spawns(Tick(0), [1, 0, 0]);
        w.step2_3(Tick(0));
        w.step1_arrivals(Tick(0));

        // Occupy the transit slot by hand so the chained move in step2_3
        // has nowhere to go once dwell expires.
        let seg = w.owned_segments().next().unwrap();
        let blocker = Vehicle::spawn(metro_core::VehicleId(99), Line::Green, seg, Tick(0));
        let mut blocker = blocker;
        blocker.state = VehicleState::InTransit;
        w.segments.get_mut(&seg).unwrap().set_transit(blocker);

        w.step2_3(Tick(1));
        w.step1_arrivals(Tick(1));
        let live = w.live_vehicles();
        let g0 = live.iter().find(|v| v.id == metro_core::VehicleId(0)).unwrap();
        assert_eq!(g0.state, VehicleState::WaitingTransit);
    }
}
