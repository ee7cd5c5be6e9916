//! The per-worker tick loop (§4.4, §4.5, §4.6, §4.7).
//!
//! Grounded on `dt_sim::Sim::run_ticks`'s per-tick hook-calling shape, but
//! the tick body itself follows §9's resolved Open Question rather than
//! `dt_sim`'s agent-update loop: spawn, snapshot, step2_3, step1_arrivals,
//! then the transfer protocol's send/receive/barrier.

use std::collections::HashMap;
use std::sync::Arc;

use metro_core::{RunConfig, Tick, WorkerId};
use metro_network::Network;
use metro_transfer::{inbound_count, remote_edges, OutboundEdge, TransferMessage, WorkerLink};
use metro_vehicle::WorkerState;

use crate::error::SimResult;
use crate::observer::WorkerObserver;

/// One worker's full runtime: its slice of segment state plus the
/// precomputed routing and message-count tables that let it run the
/// transfer protocol without recomputing topology every tick.
pub struct Worker<L: WorkerLink> {
    state: WorkerState,
    config: RunConfig,
    link: L,
    /// This worker's outbound remote edges, grouped by the owning worker so
    /// `step1_arrivals`'s per-edge `PendingHandoff`s can be matched back to
    /// the successor they departed from (a segment can have more than one
    /// distinct successor across different lines).
    outbound: Vec<OutboundEdge>,
    inbound_expected: usize,
}

impl<L: WorkerLink> Worker<L> {
    /// Build a worker's runtime state and precompute its routing tables
    /// (§4.5's supplement: topology never changes after construction, so
    /// this runs once, not once per tick).
    pub fn new(network: Arc<Network>, config: RunConfig, link: L) -> Self {
        let worker_id = link.worker_id();
        let num_workers = link.num_workers();
        let state = WorkerState::new(Arc::clone(&network), worker_id, num_workers);
        let outbound = remote_edges(&network, worker_id, num_workers);
        let inbound_expected = inbound_count(&network, worker_id, num_workers);
        Self { state, config, link, outbound, inbound_expected }
    }

    pub fn worker_id(&self) -> WorkerId {
        self.state.worker_id()
    }

    /// This worker's live vehicles at the current point in the run — the
    /// same contribution it packs for the snapshot gather (§4.6). Exposed
    /// for tests and for a caller that wants a final-state check beyond
    /// the printed trailing window.
    pub fn live_vehicles(&self) -> Vec<metro_vehicle::Vehicle> {
        self.state.live_vehicles()
    }

    /// Run every tick of the configured run, invoking `observer`'s hooks at
    /// the documented points. Returns once `self.config.end_tick()` has been
    /// fully processed and every worker has crossed the final barrier.
    pub fn run(&mut self, observer: &mut impl WorkerObserver) -> SimResult<()> {
        let end = self.config.end_tick();
        let mut tick = Tick::ZERO;
        while tick < end {
            self.run_tick(tick, observer)?;
            tick = tick.offset(1);
        }
        observer.on_sim_end(end);
        Ok(())
    }

    /// One tick of §4.4 through §4.5, in the order §9 resolves: spawns land
    /// before the snapshot is taken (so a print captures the tick a vehicle
    /// is spawned into, not the tick before), and `step2_3` runs before
    /// `step1_arrivals` (so a hand-off lands in a waiting pool only eligible
    /// for platform admission next tick).
    fn run_tick(&mut self, tick: Tick, observer: &mut impl WorkerObserver) -> SimResult<()> {
        observer.on_tick_start(tick);

        self.state.apply_spawns(tick, self.config.line_totals);

        if self.config.in_print_window(tick) {
            let live = self.state.live_vehicles();
            if let Some(line) = metro_output::gather_and_format(&self.link, tick, live, self.state.network())? {
                observer.on_snapshot(tick, &line);
            }
        }

        self.state.step2_3(tick);
        let outgoing = self.state.step1_arrivals(tick);

        self.send_handoffs(tick, outgoing);
        let incoming = self.link.recv_handoffs(tick, self.inbound_expected)?;
        for vehicle in incoming {
            self.state.receive_handoff(vehicle);
        }

        self.link.barrier();
        observer.on_tick_end(tick);
        Ok(())
    }

    /// Dispatch every [`metro_vehicle::PendingHandoff`] this tick produced as
    /// a `TransferMessage` to its owning worker, plus a sentinel to every
    /// remote peer this worker has an edge to but produced no hand-off for
    /// this tick — §4.5's reconciliation rule requires `recv_handoffs` to
    /// see exactly one message per expected edge, present or not.
    fn send_handoffs(&self, tick: Tick, outgoing: Vec<metro_vehicle::PendingHandoff>) {
        let mut by_edge: HashMap<(metro_core::SegmentId, metro_core::SegmentId), metro_vehicle::Vehicle> =
            outgoing.into_iter().map(|h| ((h.origin, h.destination), h.vehicle)).collect();

        for edge in &self.outbound {
            let vehicle = by_edge.remove(&(edge.segment, edge.successor));
            let msg = TransferMessage { from: self.state.worker_id(), tick, destination: edge.successor, vehicle };
            self.link.send_handoff(edge.owner, msg);
        }
    }
}
