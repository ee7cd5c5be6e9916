//! Per-segment runtime state (§3, §4.4).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::vehicle::{Vehicle, WaitingEntry};

/// Runtime state owned by a single segment: a priority-ordered waiting
/// pool, at most one platform-slot vehicle, at most one transit-slot
/// vehicle (§3's invariants, §8 P1/P2).
#[derive(Default)]
pub struct SegmentState {
    waiting: BinaryHeap<Reverse<WaitingEntry>>,
    platform: Option<Vehicle>,
    transit: Option<Vehicle>,
}

impl SegmentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_waiting(&mut self, vehicle: Vehicle) {
        self.waiting.push(Reverse(WaitingEntry(vehicle)));
    }

    /// Pop the pool's minimum `(timestamp, identifier)` entry, if any.
    pub fn pop_waiting(&mut self) -> Option<Vehicle> {
        self.waiting.pop().map(|Reverse(WaitingEntry(v))| v)
    }

    pub fn waiting_is_empty(&self) -> bool {
        self.waiting.is_empty()
    }

    pub fn waiting_iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.waiting.iter().map(|Reverse(WaitingEntry(v))| v)
    }

    pub fn platform(&self) -> Option<&Vehicle> {
        self.platform.as_ref()
    }

    pub fn platform_mut(&mut self) -> Option<&mut Vehicle> {
        self.platform.as_mut()
    }

    pub fn platform_is_empty(&self) -> bool {
        self.platform.is_none()
    }

    pub fn take_platform(&mut self) -> Option<Vehicle> {
        self.platform.take()
    }

    pub fn set_platform(&mut self, vehicle: Vehicle) {
        debug_assert!(self.platform.is_none(), "platform slot already occupied");
        self.platform = Some(vehicle);
    }

    pub fn transit(&self) -> Option<&Vehicle> {
        self.transit.as_ref()
    }

    pub fn transit_is_empty(&self) -> bool {
        self.transit.is_none()
    }

    pub fn take_transit(&mut self) -> Option<Vehicle> {
        self.transit.take()
    }

    pub fn set_transit(&mut self, vehicle: Vehicle) {
        debug_assert!(self.transit.is_none(), "transit slot already occupied");
        self.transit = Some(vehicle);
    }

    /// All live vehicles currently held by this segment, in no particular
    /// order (used by the snapshot collector, §4.6).
    pub fn live_vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.platform.iter().chain(self.transit.iter()).chain(self.waiting_iter())
    }

    pub fn len(&self) -> usize {
        self.waiting.len() + self.platform.is_some() as usize + self.transit.is_some() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
