//! Network model and its builder (§4.1).
//!
//! # Data layout
//!
//! Unlike `dt_spatial::RoadNetwork`'s CSR + R-tree layout, `Network` looks
//! nothing up spatially — it is queried by id only, so stations and segments
//! are plain `Vec`s indexed by `StationId`/`SegmentId`. A metro network has
//! at most a few thousand segments in any scenario this simulation targets;
//! a row-pointer adjacency scheme would be pure ceremony here.

use std::collections::HashMap;

use metro_core::{Line, SegmentId, StationId};

use crate::error::{NetworkError, NetworkResult};
use crate::segment::Segment;
use crate::station::Station;

// ── Network ───────────────────────────────────────────────────────────────────

/// Immutable description of stations, segments, and per-line connectivity.
/// Identical on every worker (§3, §4.1) — built once by the coordinator and
/// shared read-only (`Arc<Network>`) thereafter.
pub struct Network {
    stations: Vec<Station>,
    segments: Vec<Segment>,

    /// Per-line forward-start segment — where forward-spawned vehicles
    /// enter (§4.1(c), §4.3).
    forward_start: [Option<SegmentId>; 3],

    /// Per-line backward-start segment — where backward-spawned vehicles
    /// enter.
    backward_start: [Option<SegmentId>; 3],
}

impl Network {
    pub fn station(&self, id: StationId) -> &Station {
        &self.stations[id.index()]
    }

    pub fn segment(&self, id: SegmentId) -> &Segment {
        &self.segments[id.index()]
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// The segment a given line's forward-spawned vehicles first enter, if
    /// the line is configured (§4.1(c)).
    pub fn forward_start(&self, line: Line) -> Option<SegmentId> {
        self.forward_start[line.index()]
    }

    /// The segment a given line's backward-spawned vehicles first enter.
    pub fn backward_start(&self, line: Line) -> Option<SegmentId> {
        self.backward_start[line.index()]
    }

    /// The segment `line`'s scheduler successor rule maps `from` to, or
    /// `None` if `line` does not use `from` at all (§4.4 step 1).
    pub fn successor(&self, from: SegmentId, line: Line) -> Option<SegmentId> {
        self.segment(from).successor[line.index()]
    }

    /// Iterate all segment ids in ascending order — the natural partitioning
    /// order for `metro_network::partition` (§4.2).
    pub fn segment_ids(&self) -> impl Iterator<Item = SegmentId> {
        (0..self.segments.len() as u32).map(SegmentId)
    }
}

// ── NetworkBuilder ────────────────────────────────────────────────────────────

/// Incrementally construct a [`Network`], then call [`build`](Self::build).
///
/// Mirrors `dt_spatial::RoadNetworkBuilder`'s imperative add-then-build
/// shape: add stations, set the adjacency matrix (which creates segments),
/// then set each line's station sequence (which assigns successor links).
pub struct NetworkBuilder {
    stations: Vec<Station>,
    segments: Vec<Segment>,
    segment_by_pair: HashMap<(StationId, StationId), SegmentId>,
    forward_start: [Option<SegmentId>; 3],
    backward_start: [Option<SegmentId>; 3],
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self {
            stations: Vec::new(),
            segments: Vec::new(),
            segment_by_pair: HashMap::new(),
            forward_start: [None; 3],
            backward_start: [None; 3],
        }
    }

    /// Add a station and return its `StationId` (sequential from 0, matching
    /// the order station names appear in the input — §6).
    pub fn add_station(&mut self, name: String, popularity: u32) -> StationId {
        let id = StationId(self.stations.len() as u32);
        self.stations.push(Station {
            name,
            popularity,
            outbound: [None; 3],
            inbound: [None; 3],
        });
        id
    }

    /// Build the segment list from an `S`×`S` adjacency matrix: a non-zero
    /// entry `matrix[i][j]` becomes a segment from station `i` to station
    /// `j` with that length (§4.1, §6).
    pub fn set_adjacency(&mut self, matrix: &[Vec<u32>]) -> NetworkResult<()> {
        let n = self.stations.len();
        for (row, cols) in matrix.iter().enumerate() {
            if cols.len() != n {
                return Err(NetworkError::RaggedAdjacency { rows: n, row, cols: cols.len() });
            }
        }
        for (i, row) in matrix.iter().enumerate() {
            for (j, &length) in row.iter().enumerate() {
                if length == 0 {
                    continue;
                }
                let source = StationId(i as u32);
                let destination = StationId(j as u32);
                let id = SegmentId(self.segments.len() as u32);
                self.segments.push(Segment { source, destination, length, successor: [None; 3] });
                self.segment_by_pair.insert((source, destination), id);
            }
        }
        Ok(())
    }

    /// Walk `line`'s station sequence forward then backward, assigning
    /// successor links that close the cycle (§4.1, §3's closed-loop
    /// invariant).
    ///
    /// Forward segments are `sequence[i] -> sequence[i+1]`; backward
    /// segments are the same pairs reversed, walked from the line's
    /// terminal back to its start. The last forward segment's successor is
    /// the first backward segment (and vice versa), which is exactly the
    /// "direction reverses at a terminal station" rule.
    pub fn set_line(&mut self, line: Line, sequence: &[StationId]) -> NetworkResult<()> {
        let m = sequence.len();
        if m < 2 {
            return Err(NetworkError::LineTooShort);
        }

        let mut forward_ids = Vec::with_capacity(m - 1);
        for pair in sequence.windows(2) {
            forward_ids.push(self.find_segment(pair[0], pair[1])?);
        }

        let mut backward_ids = Vec::with_capacity(m - 1);
        for pair in sequence.iter().rev().collect::<Vec<_>>().windows(2) {
            backward_ids.push(self.find_segment(*pair[0], *pair[1])?);
        }

        for (i, &id) in forward_ids.iter().enumerate() {
            let succ = forward_ids.get(i + 1).copied().unwrap_or(backward_ids[0]);
            self.segments[id.index()].successor[line.index()] = Some(succ);
        }
        for (j, &id) in backward_ids.iter().enumerate() {
            let succ = backward_ids.get(j + 1).copied().unwrap_or(forward_ids[0]);
            self.segments[id.index()].successor[line.index()] = Some(succ);
        }

        self.forward_start[line.index()] = Some(forward_ids[0]);
        self.backward_start[line.index()] = Some(backward_ids[0]);

        // Station outbound/inbound bookkeeping (§4.1(b)). Not consumed by
        // the scheduler (§4.4 only reads `Segment::successor`); recorded
        // for the read-only query contract. `outbound` is this station's
        // forward-direction departure, `inbound` its backward-direction one.
        for (i, &id) in forward_ids.iter().enumerate() {
            self.stations[sequence[i].index()].outbound[line.index()] = Some(id);
        }
        for (j, &id) in backward_ids.iter().enumerate() {
            let from = sequence[m - 1 - j];
            self.stations[from.index()].inbound[line.index()] = Some(id);
        }

        Ok(())
    }

    fn find_segment(&self, from: StationId, to: StationId) -> NetworkResult<SegmentId> {
        self.segment_by_pair
            .get(&(from, to))
            .copied()
            .ok_or(NetworkError::MissingSegment { from, to })
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Consume the builder and produce a [`Network`].
    pub fn build(self) -> Network {
        Network {
            stations: self.stations,
            segments: self.segments,
            forward_start: self.forward_start,
            backward_start: self.backward_start,
        }
    }
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
