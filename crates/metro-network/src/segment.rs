//! Segment data (§3).

use metro_core::{SegmentId, StationId};

/// A directed travel path between two stations (§3).
#[derive(Clone, Debug)]
pub struct Segment {
    pub source: StationId,
    pub destination: StationId,

    /// Ticks required to traverse this segment end-to-end. Always ≥ 1.
    pub length: u32,

    /// Per-line successor segment, indexed by `Line::index()`. `None` means
    /// this segment is not used by that line.
    pub successor: [Option<SegmentId>; 3],
}

impl Segment {
    /// `true` if at least one line uses this segment.
    pub fn is_used(&self) -> bool {
        self.successor.iter().any(Option::is_some)
    }

    /// Distinct successor segment ids across all lines that use this
    /// segment, deduplicated (§4.5's "K distinct outbound successors").
    ///
    /// Two lines sharing the same successor segment collapse to one entry —
    /// this is the message-count reconciliation rule from §4.5.
    pub fn distinct_successors(&self) -> Vec<SegmentId> {
        let mut out: Vec<SegmentId> = Vec::with_capacity(3);
        for s in self.successor.iter().flatten() {
            if !out.contains(s) {
                out.push(*s);
            }
        }
        out
    }
}
