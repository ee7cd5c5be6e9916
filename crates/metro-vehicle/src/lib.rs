//! Vehicle state, per-segment scheduling, and the deterministic spawner
//! (§3, §4.3, §4.4).
//!
//! | module          | purpose                                              |
//! |-----------------|-------------------------------------------------------|
//! | `vehicle`       | `Vehicle`, `VehicleState`, waiting-pool ordering        |
//! | `segment_state` | `SegmentState` — per-segment waiting pool + slots       |
//! | `spawner`       | deterministic, coordination-free id assignment          |
//! | `worker_state`  | `WorkerState` — owned segments + the tick-step driver    |

pub mod segment_state;
pub mod spawner;
pub mod vehicle;
pub mod worker_state;

pub use segment_state::SegmentState;
pub use spawner::{spawn_plan, LineSpawn};
pub use vehicle::{Vehicle, VehicleState, WaitingEntry};
pub use worker_state::{PendingHandoff, WorkerState};
