//! Station data (§3).

use metro_core::SegmentId;

/// A station. Created once from the input and never mutated during
/// simulation (§3).
#[derive(Clone, Debug)]
pub struct Station {
    pub name: String,

    /// Non-negative integer governing platform dwell time (§4.4).
    pub popularity: u32,

    /// Per-line outbound segment, indexed by `Line::index()`. `None` means
    /// this station has no outbound segment on that line.
    pub outbound: [Option<SegmentId>; 3],

    /// Per-line inbound segment, indexed by `Line::index()`.
    pub inbound: [Option<SegmentId>; 3],
}
