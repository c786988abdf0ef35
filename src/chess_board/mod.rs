pub mod model;
pub use model::{ChessField, Color, Direction, Piece, PieceId, PieceType, RelativeDirection, BOARD_SIZE};

mod graph;
pub use graph::{Board, Cell, RowMajor};

pub mod placement;
pub use placement::INITIAL_PLACEMENT;

mod move_generation;
#[cfg(test)]
pub mod test_utils;
