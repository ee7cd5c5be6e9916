//! `metro-output`'s error type — a thin wrapper over `metro-transfer`'s
//! gather failures, converted into `MetroError` at the crate boundary the
//! way `dt_mobility::MobilityError` wraps `dt_spatial::SpatialError`.

use metro_core::MetroError;
use metro_transfer::TransferError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("snapshot gather failed: {0}")]
    Gather(#[from] TransferError),
}

pub type OutputResult<T> = Result<T, OutputError>;

impl From<OutputError> for MetroError {
    fn from(e: OutputError) -> Self {
        MetroError::Protocol(e.to_string())
    }
}
