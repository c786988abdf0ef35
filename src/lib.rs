//! A two-player board game engine on an 8x8 cell graph.
//!
//! - [`chess_board`]: the cell graph, piece model and per-piece move generation
//! - [`game`]: the click driven match controller
//! - [`ui`]: text rendering of a match
//! - [`autoplay`]: seeded random games

pub mod autoplay;
pub mod chess_board;
pub mod error;
pub mod game;
pub mod ui;

pub use chess_board::{Board, ChessField, Color, Direction, Piece, PieceType};
pub use error::{FieldParseError, MatchError, PlacementError};
pub use game::{ClickOutcome, Match, MoveRecord, Selection};
