use thiserror::Error;

/// Errors returned by the match controller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The input layer handed over a cell that does not exist
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBoard { row: u8, col: u8 },
}

/// Errors raised while reading a piece placement string
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid placement: expected 8 ranks, found {0}")]
    RankCount(usize),

    #[error("invalid placement: rank {rank} describes {files} files")]
    FileCount { rank: usize, files: usize },

    #[error("invalid piece character in placement: {0}")]
    UnknownPiece(char),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldParseError {
    #[error("invalid square: {0}")]
    Invalid(String),

    #[error("square ({row}, {col}) is outside the board")]
    OutOfRange { row: u8, col: u8 },
}
