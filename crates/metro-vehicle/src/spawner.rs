//! Deterministic, coordination-free vehicle spawner (§4.3).
//!
//! Every worker runs [`spawn_plan`] independently each tick against the
//! same `line_totals` and arrives at identical vehicle ids without
//! exchanging a single message — only the worker that owns the relevant
//! forward/backward start segment actually appends the vehicle to its
//! state (§4.3, §9's "preserve the exact formula" design note).

use metro_core::{Line, Tick, VehicleId};

/// Vehicles already spawned for a line strictly before `tick`, given the
/// line's configured total `total`. Two per tick, capped at `total`.
fn already_spawned_before(tick: Tick, total: u32) -> u32 {
    (2 * tick.0).min(total as u64) as u32
}

/// What to spawn for one line this tick: a forward-start vehicle, a
/// backward-start vehicle, or both, each carrying the id the spawner has
/// deterministically assigned it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineSpawn {
    pub line: Line,
    pub forward: Option<VehicleId>,
    pub backward: Option<VehicleId>,
}

/// The full spawn plan for `tick`, one entry per line in fixed order
/// (green, yellow, blue) — only lines with something to spawn this tick
/// are included.
pub fn spawn_plan(tick: Tick, line_totals: [u32; 3]) -> Vec<LineSpawn> {
    let mut plan = Vec::with_capacity(3);

    // The running id counter starts at the total already spawned across
    // all lines before this tick, summed in fixed line order — this is
    // what makes identifier assignment agree across workers without
    // coordination.
    let mut counter: u32 = Line::ALL
        .iter()
        .map(|&line| already_spawned_before(tick, line_totals[line.index()]))
        .sum();

    for &line in Line::ALL.iter() {
        let total = line_totals[line.index()];
        let spawned_before = already_spawned_before(tick, total);
        let to_spawn = (total - spawned_before).min(2);
        if to_spawn == 0 {
            continue;
        }

        let forward = Some(VehicleId(counter));
        counter += 1;
        let backward = if to_spawn >= 2 {
            let id = VehicleId(counter);
            counter += 1;
            Some(id)
        } else {
            None
        };

        plan.push(LineSpawn { line, forward, backward });
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_spawns_in_pairs() {
        // V = 3: tick0 -> {0,1}, tick1 -> {2}, tick2 -> nothing.
        let totals = [3, 0, 0];

        let t0 = spawn_plan(Tick(0), totals);
        assert_eq!(t0.len(), 1);
        assert_eq!(t0[0].forward, Some(VehicleId(0)));
        assert_eq!(t0[0].backward, Some(VehicleId(1)));

        let t1 = spawn_plan(Tick(1), totals);
        assert_eq!(t1[0].forward, Some(VehicleId(2)));
        assert_eq!(t1[0].backward, None);

        let t2 = spawn_plan(Tick(2), totals);
        assert!(t2.is_empty());
    }

    #[test]
    fn ids_assigned_in_fixed_line_order() {
        // Green=2, Yellow=2, Blue=2 at tick 0: green gets 0,1; yellow 2,3;
        // blue 4,5.
        let totals = [2, 2, 2];
        let plan = spawn_plan(Tick(0), totals);
        assert_eq!(plan.len(), 3);
        assert_eq!(plan[0].line, Line::Green);
        assert_eq!(plan[0].forward, Some(VehicleId(0)));
        assert_eq!(plan[0].backward, Some(VehicleId(1)));
        assert_eq!(plan[1].line, Line::Yellow);
        assert_eq!(plan[1].forward, Some(VehicleId(2)));
        assert_eq!(plan[1].backward, Some(VehicleId(3)));
        assert_eq!(plan[2].line, Line::Blue);
        assert_eq!(plan[2].forward, Some(VehicleId(4)));
        assert_eq!(plan[2].backward, Some(VehicleId(5)));
    }

    #[test]
    fn zero_total_spawns_nothing() {
        assert!(spawn_plan(Tick(0), [0, 0, 0]).is_empty());
    }

    #[test]
    fn counts_match_p4_min_2t_v() {
        let totals = [5, 0, 0];
        let mut spawned_so_far = 0u32;
        for t in 0..5u64 {
            let plan = spawn_plan(Tick(t), totals);
            if let Some(entry) = plan.first() {
                spawned_so_far += entry.forward.is_some() as u32 + entry.backward.is_some() as u32;
            }
            let expected = (2 * (t + 1)).min(5 as u64) as u32;
            assert_eq!(spawned_so_far, expected, "tick {t}");
        }
    }
}
