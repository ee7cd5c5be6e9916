//! `metro-transfer`'s narrow error type — everything here is a §7
//! `ProtocolError` or `RuntimeError`, converted into `MetroError` at the
//! crate boundary the way `dt_mobility::MobilityError` wraps
//! `dt_spatial::SpatialError`.

use metro_core::MetroError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransferError {
    /// A received hand-off message's tick did not match the tick being
    /// awaited — the §7 consistency assertion tripping.
    #[error("expected hand-off for tick {expected}, received one for tick {got}")]
    TickMismatch { expected: u64, got: u64 },

    /// A worker's channel endpoint disappeared (the peer thread panicked or
    /// exited) before the expected message count was satisfied.
    #[error("hand-off channel from a peer worker closed unexpectedly")]
    ChannelClosed,
}

pub type TransferResult<T> = Result<T, TransferError>;

impl From<TransferError> for MetroError {
    fn from(e: TransferError) -> Self {
        MetroError::Protocol(e.to_string())
    }
}
