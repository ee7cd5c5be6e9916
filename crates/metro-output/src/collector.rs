//! Snapshot gather-to-worker-0 (§4.6), re-expressed over `WorkerLink` so
//! snapshot traffic rides its own channel mesh, independent of mid-tick
//! hand-off traffic. Grounded on `old_main.cc::gather_all_troons` for the
//! gather-to-rank-0 mechanics.

use metro_core::Tick;
use metro_network::Network;
use metro_transfer::{SnapshotMessage, WorkerLink};
use metro_vehicle::Vehicle;

use crate::error::OutputResult;
use crate::report::format_tick_line;

/// Every worker calls this once per print-window tick with its own live
/// vehicles. Worker 0 gets back the fully assembled, sorted, formatted
/// snapshot line (§6); every other worker gets back `None` — its
/// contribution has been handed off to the coordinator.
pub fn gather_and_format<L: WorkerLink + ?Sized>(
    link: &L,
    tick: Tick,
    live: Vec<Vehicle>,
    network: &Network,
) -> OutputResult<Option<String>> {
    let mine = SnapshotMessage { from: link.worker_id(), tick, vehicles: live };
    let gathered = link.gather_snapshot(mine)?;
    if gathered.is_empty() {
        return Ok(None);
    }

    let all: Vec<Vehicle> = gathered.into_iter().flat_map(|m| m.vehicles).collect();
    Ok(Some(format_tick_line(tick, &all, network)))
}
