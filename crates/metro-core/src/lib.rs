//! `metro-core` — foundational types for the metro network tick simulation.
//!
//! This crate is a dependency of every other `metro-*` crate. It
//! intentionally has no `metro-*` dependencies and a single external one
//! (`thiserror`).
//!
//! # What lives here
//!
//! | Module   | Contents                                   |
//! |----------|---------------------------------------------|
//! | [`ids`]  | `StationId`, `SegmentId`, `VehicleId`, `WorkerId` |
//! | [`line`] | `Line`                                     |
//! | [`time`] | `Tick`, `RunConfig`                        |
//! | [`error`]| `MetroError`, `MetroResult<T>`             |

pub mod error;
pub mod ids;
pub mod line;
pub mod time;


pub use error::{MetroError, MetroResult};
pub use ids::{SegmentId, StationId, VehicleId, WorkerId};
pub use line::Line;
pub use time::{RunConfig, Tick};
