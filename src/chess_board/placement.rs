use super::model::BOARD_SIZE;
use super::Board;
use super::{ChessField, Color, PieceType};
use crate::error::PlacementError;

pub const INITIAL_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

const BACK_RANK: [PieceType; BOARD_SIZE] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

fn piece_from_char(c: char) -> Option<(Color, PieceType)> {
    match c {
        'p' => Some((Color::Black, PieceType::Pawn)),
        'r' => Some((Color::Black, PieceType::Rook)),
        'n' => Some((Color::Black, PieceType::Knight)),
        'b' => Some((Color::Black, PieceType::Bishop)),
        'q' => Some((Color::Black, PieceType::Queen)),
        'k' => Some((Color::Black, PieceType::King)),
        'P' => Some((Color::White, PieceType::Pawn)),
        'R' => Some((Color::White, PieceType::Rook)),
        'N' => Some((Color::White, PieceType::Knight)),
        'B' => Some((Color::White, PieceType::Bishop)),
        'Q' => Some((Color::White, PieceType::Queen)),
        'K' => Some((Color::White, PieceType::King)),
        _ => None,
    }
}

/// Parses the piece placement field of a FEN string. Anything after the first
/// whitespace is ignored, so a full FEN line is accepted as well.
fn parse_placement(placement: &str) -> Result<Vec<(ChessField, Color, PieceType)>, PlacementError> {
    let field = placement.split_whitespace().next().unwrap_or("");
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != BOARD_SIZE {
        return Err(PlacementError::RankCount(ranks.len()));
    }

    let mut pieces = Vec::new();
    for (row, rank) in ranks.iter().enumerate() {
        let mut col = 0;
        for c in rank.chars() {
            if let Some(skip) = c.to_digit(10) {
                col += skip as usize;
                continue;
            }
            let (color, kind) = piece_from_char(c).ok_or(PlacementError::UnknownPiece(c))?;
            if col >= BOARD_SIZE {
                return Err(PlacementError::FileCount { rank: row, files: col + 1 });
            }
            pieces.push((ChessField::new(row as u8, col as u8), color, kind));
            col += 1;
        }
        if col != BOARD_SIZE {
            return Err(PlacementError::FileCount { rank: row, files: col });
        }
    }
    Ok(pieces)
}

impl Board<String> {
    /// Creates a board from a piece placement such as `INITIAL_PLACEMENT`.
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        let mut board = Board::new();
        board.apply_placement(placement)?;
        Ok(board)
    }

    /// Creates a board holding the usual starting position.
    pub fn standard() -> Self {
        let mut board = Board::new();
        board.set_up_standard();
        board
    }
}

impl<L> Board<L> {
    /// Replaces all pieces with the ones described by `placement`.
    /// The board is left untouched when the placement is invalid.
    pub fn apply_placement(&mut self, placement: &str) -> Result<(), PlacementError> {
        let pieces = parse_placement(placement)?;
        self.clear();
        for (field, color, kind) in pieces {
            self.place(field, kind, color);
        }
        Ok(())
    }

    pub fn set_up_standard(&mut self) {
        self.clear();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            self.place(ChessField::new(0, col), *kind, Color::Black);
            self.place(ChessField::new(1, col), PieceType::Pawn, Color::Black);
            self.place(ChessField::new(6, col), PieceType::Pawn, Color::White);
            self.place(ChessField::new(7, col), *kind, Color::White);
        }
    }

    pub fn to_placement(&self) -> String {
        let mut placement = String::new();
        for row in 0..BOARD_SIZE {
            let mut empty = 0;
            for col in 0..BOARD_SIZE {
                match self.occupant(ChessField::new(row as u8, col as u8)) {
                    Some(piece) => {
                        if empty > 0 {
                            placement.push_str(&empty.to_string());
                            empty = 0;
                        }
                        placement.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                placement.push_str(&empty.to_string());
            }
            if row < BOARD_SIZE - 1 {
                placement.push('/');
            }
        }
        placement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_matches_initial_placement() {
        assert_eq!(Board::standard().to_placement(), INITIAL_PLACEMENT);
        let parsed = Board::from_placement(INITIAL_PLACEMENT).unwrap();
        assert_eq!(parsed.pieces().count(), 32);
        let king = parsed.occupant(ChessField::new(7, 4)).unwrap();
        assert_eq!((king.kind, king.color), (PieceType::King, Color::White));
        let queen = parsed.occupant(ChessField::new(0, 3)).unwrap();
        assert_eq!((queen.kind, queen.color), (PieceType::Queen, Color::Black));
    }

    #[test]
    fn test_placement_roundtrip() {
        let placement = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";
        assert_eq!(Board::from_placement(placement).unwrap().to_placement(), placement);
    }

    #[test]
    fn test_full_fen_is_accepted() {
        let board = Board::from_placement("8/8/8/8/8/8/4P3/8 w - - 0 1").unwrap();
        assert_eq!(board.pieces().count(), 1);
        assert!(board.occupant(ChessField::new(6, 4)).is_some());
    }

    #[test]
    fn test_invalid_placements() {
        assert_eq!(Board::from_placement("8/8/8").unwrap_err(), PlacementError::RankCount(3));
        assert_eq!(
            Board::from_placement("8/8/8/8/8/8/8/9").unwrap_err(),
            PlacementError::FileCount { rank: 7, files: 9 }
        );
        assert_eq!(
            Board::from_placement("8/8/8/8/8/8/8/7").unwrap_err(),
            PlacementError::FileCount { rank: 7, files: 7 }
        );
        assert_eq!(
            Board::from_placement("8/8/8/8/8/8/8/ppppppppp").unwrap_err(),
            PlacementError::FileCount { rank: 7, files: 9 }
        );
        assert_eq!(
            Board::from_placement("8/8/8/8/8/8/8/7x").unwrap_err(),
            PlacementError::UnknownPiece('x')
        );
    }

    #[test]
    fn test_invalid_placement_keeps_board() {
        let mut board = Board::standard();
        assert!(board.apply_placement("not a placement").is_err());
        assert_eq!(board.to_placement(), INITIAL_PLACEMENT);
    }
}
