//! Per-worker tick loop orchestrator (§4.4 - §4.7).
//!
//! | module      | purpose                                                  |
//! |-------------|-----------------------------------------------------------|
//! | `worker`    | `Worker<L>` — owned segment state + the tick loop driver   |
//! | `builder`   | `WorkerBuilder` — validated construction                   |
//! | `observer`  | `WorkerObserver` — progress/reporting hooks                |
//! | `error`     | `SimError` / `SimResult`                                   |

pub mod builder;
pub mod error;
pub mod observer;
pub mod worker;

pub use builder::WorkerBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, WorkerObserver};
pub use worker::Worker;
