//! Error kinds for the chess-sudoku core.
//!
//! Per the error handling design, the core recognizes three kinds of
//! failure: an unsatisfiable piece configuration, a carver shortfall (not an
//! error, handled as an advisory return value instead), and an internal
//! invariant breach. Invariant breaches are programmer errors that must
//! never occur on valid input, so they panic with a diagnostic rather than
//! being threaded through `Result` where a caller could swallow them.

use thiserror::Error;

/// Errors surfaced by the public operations of the chess-sudoku core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChessSudokuError {
    /// The piece configuration admits no complete Chess-Sudoku solution.
    ///
    /// No partial board is exposed alongside this error.
    #[error("no complete board satisfies the given piece configuration")]
    Unsatisfiable,

    /// Two pieces were given the same square, or a malformed square was
    /// supplied (out of the 0..=8 range). This is a caller input error
    /// raised at `PiecesSet` construction time, before any solving begins.
    #[error("invalid piece placement: {0}")]
    InvalidPlacement(String),
}
