//! Errors used throughout the chess board core.
//!
//! `ChessErrors` is the single error type returned by board accessors, the
//! move mutator, coordinate parsing and the engine layer. Every variant is a
//! local, recoverable condition: callers match on it to surface a message and
//! discard whatever selection was in progress. Nothing in the crate treats
//! these as fatal.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

/// Unified error type for the chess board core.
///
/// Variants carry the offending squares or colors so front-ends can print
/// precise diagnostics without re-deriving them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Coordinates fall outside `[0,8) x [0,8)`.
    #[error("square ({row},{col}) is outside the board")]
    OutOfRange { row: i8, col: i8 },

    /// The origin of a move holds no piece.
    #[error("no piece at origin {0}")]
    NoPieceAtOrigin(Square),

    /// The origin piece does not belong to the side to move.
    #[error("piece at {origin} is {piece_color}, but {current_player} is to move")]
    WrongPlayer {
        origin: Square,
        piece_color: Color,
        current_player: Color,
    },

    /// The destination is not in the freshly computed candidate set.
    #[error("{destination} is not a candidate destination from {origin}")]
    IllegalDestination { origin: Square, destination: Square },

    /// Tried to place a piece on a square that already holds one.
    #[error("square {0} is already occupied")]
    SquareOccupied(Square),

    /// An algebraic coordinate such as `e4` could not be parsed.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraicString(String),

    /// An engine could not produce a usable answer.
    #[error("engine failure: {0}")]
    EngineFailure(String),
}

/// Result alias for chess board core operations.
pub type ChessResult<T> = Result<T, ChessErrors>;
