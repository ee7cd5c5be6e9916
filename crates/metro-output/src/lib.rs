//! Snapshot gather and the final textual report (§4.6, §6).
//!
//! | module       | purpose                                               |
//! |--------------|---------------------------------------------------------|
//! | `report`     | `format_tick_line` — the §6 token grammar and sort       |
//! | `collector`  | gather-to-worker-0 over `WorkerLink`                     |
//! | `error`      | `OutputError` / `OutputResult`                           |

pub mod collector;
pub mod error;
pub mod report;

pub use collector::gather_and_format;
pub use error::{OutputError, OutputResult};
pub use report::format_tick_line;
