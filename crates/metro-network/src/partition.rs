//! Segment partitioning across workers (§4.2).
//!
//! Segments `[0, num_segments)` are split into contiguous blocks of
//! `ceil(num_segments / num_workers)` each; the last worker absorbs
//! whatever remainder is left. This mirrors the block partitioning
//! `old_main.cc` derives from `link_group_size` / `my_links_start` /
//! `my_links_end` rather than a round-robin scheme, so a worker's owned
//! segments are always a single contiguous range.

use std::ops::Range;

use metro_core::{SegmentId, WorkerId};

/// Size of each worker's contiguous block, given `num_segments` total
/// segments split across `num_workers` workers.
fn block_size(num_segments: usize, num_workers: usize) -> usize {
    (num_segments + num_workers - 1) / num_workers
}

/// The half-open range of segment indices `worker` owns.
pub fn partition_bounds(worker: WorkerId, num_segments: usize, num_workers: usize) -> Range<usize> {
    let size = block_size(num_segments, num_workers);
    let start = (worker.index() * size).min(num_segments);
    let end = (start + size).min(num_segments);
    start..end
}

/// The worker that owns a given segment.
pub fn owner_of(segment: SegmentId, num_segments: usize, num_workers: usize) -> WorkerId {
    let size = block_size(num_segments, num_workers);
    let owner = (segment.index() / size).min(num_workers - 1);
    WorkerId(owner as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contiguous_and_exhaustive() {
        let num_segments = 17;
        let num_workers = 4;
        let mut covered = Vec::new();
        for w in 0..num_workers {
            let range = partition_bounds(WorkerId(w as u32), num_segments, num_workers);
            covered.extend(range);
        }
        covered.sort_unstable();
        assert_eq!(covered, (0..num_segments).collect::<Vec<_>>());
    }

    #[test]
    fn owner_of_agrees_with_bounds() {
        let num_segments = 17;
        let num_workers = 4;
        for s in 0..num_segments {
            let owner = owner_of(SegmentId(s as u32), num_segments, num_workers);
            let bounds = partition_bounds(owner, num_segments, num_workers);
            assert!(bounds.contains(&s), "segment {s} not within owner {owner:?}'s bounds {bounds:?}");
        }
    }

    #[test]
    fn single_worker_owns_everything() {
        let bounds = partition_bounds(WorkerId(0), 9, 1);
        assert_eq!(bounds, 0..9);
    }

    #[test]
    fn last_worker_absorbs_remainder() {
        // 10 segments, 3 workers -> block size 4: [0,4) [4,8) [8,10)
        assert_eq!(partition_bounds(WorkerId(0), 10, 3), 0..4);
        assert_eq!(partition_bounds(WorkerId(1), 10, 3), 4..8);
        assert_eq!(partition_bounds(WorkerId(2), 10, 3), 8..10);
    }

    #[test]
    fn more_workers_than_segments_leaves_some_empty() {
        let bounds = partition_bounds(WorkerId(2), 2, 5);
        assert_eq!(bounds, 2..2);
    }
}
