//! Cross-worker vehicle hand-off and snapshot gather (§4.5, §4.6).
//!
//! | module          | purpose                                              |
//! |-----------------|-------------------------------------------------------|
//! | `message`       | `TransferMessage`, `SnapshotMessage`                   |
//! | `communicator`  | `WorkerLink` trait + `ChannelLink` / `DummyLink`        |
//! | `topology`      | static per-worker message-count precomputation          |
//! | `error`         | `TransferError` / `TransferResult`                     |

pub mod communicator;
pub mod error;
pub mod message;
pub mod topology;

pub use communicator::{ChannelLink, DummyLink, WorkerLink};
pub use error::{TransferError, TransferResult};
pub use message::{SnapshotMessage, TransferMessage};
pub use topology::{inbound_count, remote_edges, OutboundEdge};
