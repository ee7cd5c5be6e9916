//! Wire messages exchanged between workers once per tick (§4.5, §4.6).

use metro_core::{SegmentId, Tick, WorkerId};
use metro_vehicle::Vehicle;

/// One hand-off slot: either a real vehicle arriving at `destination` this
/// tick, or a "no vehicle" sentinel posted purely for message-count
/// reconciliation (§4.5).
#[derive(Clone, Debug)]
pub struct TransferMessage {
    pub from: WorkerId,
    pub tick: Tick,
    pub destination: SegmentId,
    pub vehicle: Option<Vehicle>,
}

/// One worker's live-vehicle contribution to a snapshot gather (§4.6).
#[derive(Clone, Debug)]
pub struct SnapshotMessage {
    pub from: WorkerId,
    pub tick: Tick,
    pub vehicles: Vec<Vehicle>,
}
