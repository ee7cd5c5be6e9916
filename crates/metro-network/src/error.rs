use metro_core::StationId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("adjacency matrix is not square: {rows} rows, row {row} has {cols} columns")]
    RaggedAdjacency { rows: usize, row: usize, cols: usize },

    #[error("a line must visit at least two stations")]
    LineTooShort,

    #[error("no segment from station {from:?} to station {to:?}, but the line sequence requires one")]
    MissingSegment { from: StationId, to: StationId },
}

pub type NetworkResult<T> = Result<T, NetworkError>;
