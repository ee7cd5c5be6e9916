use metro_core::MetroError;
use metro_output::OutputError;
use metro_transfer::TransferError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("hand-off transfer failed: {0}")]
    Transfer(#[from] TransferError),

    #[error("snapshot gather failed: {0}")]
    Output(#[from] OutputError),

    #[error("worker link has {link} endpoints but run config expects {configured}")]
    WorkerCountMismatch { configured: usize, link: usize },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<SimError> for MetroError {
    fn from(e: SimError) -> Self {
        MetroError::Protocol(e.to_string())
    }
}
