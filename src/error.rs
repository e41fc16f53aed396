use thiserror::Error;

/// Precondition failures at the boundary of the crate. Finding no alignment is not an error:
/// it is reported as a score of 0 with an empty path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("buffer of length {len} cannot form a {rows}x{cols} matrix")]
    ShapeMismatch { rows: usize, cols: usize, len: usize },

    #[error("cell ({row}, {col}) outside a {rows}x{cols} matrix")]
    CellOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("non-finite similarity at ({row}, {col})")]
    NonFinite { row: usize, col: usize },

    #[error("embedding width mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("invalid chunking: chunk_len = {chunk_len}, stride = {stride}")]
    InvalidChunking { chunk_len: usize, stride: usize },

    #[error("chunk index {index} out of range for {len} chunks")]
    ChunkOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
