use super::RelativeDirection::{Forward, ForwardLeft, ForwardRight};
use super::{Board, ChessField, Color, Piece, PieceType, RelativeDirection};

impl<L> Board<L> {
    /// All cells the piece on `from` may move to. Empty if `from` is unoccupied.
    ///
    /// Moves are generated for the piece in isolation: whether a move leaves the
    /// mover's own king attacked is not considered.
    pub fn generate_moves_from(&self, from: ChessField) -> Vec<ChessField> {
        let piece = match self.occupant(from) {
            Some(p) => *p,
            None => return Vec::new(),
        };

        match piece.kind {
            PieceType::Pawn => self.generate_pawn_moves(from, &piece),
            PieceType::Knight => self.generate_knight_moves(from, &piece),
            PieceType::Bishop => self.generate_bishop_moves(from, &piece),
            PieceType::Rook => self.generate_rook_moves(from, &piece),
            PieceType::Queen => self.generate_queen_moves(from, &piece),
            PieceType::King => self.generate_king_moves(from, &piece),
        }
    }

    /// Every piece of `color` that can move, with its destinations.
    pub fn generate_moves(&self, color: Color) -> Vec<(ChessField, Vec<ChessField>)> {
        self.pieces()
            .filter(|(_, piece)| piece.color == color)
            .map(|(field, _)| (field, self.generate_moves_from(field)))
            .filter(|(_, destinations)| !destinations.is_empty())
            .collect()
    }

    /// The neighbor in `direction` if a piece of `color` may enter it: empty or held by the opponent.
    pub fn step(&self, from: ChessField, direction: super::Direction, color: Color) -> Option<ChessField> {
        let target = self.neighbor(from, direction)?;
        match self.occupant(target) {
            Some(p) if p.color == color => None,
            _ => Some(target),
        }
    }

    /// Steps repeatedly in `direction`. The first occupied cell ends the run and is
    /// included only when it holds an opponent piece.
    pub fn slide(&self, from: ChessField, direction: super::Direction, color: Color) -> Vec<ChessField> {
        let mut cells = Vec::new();
        let mut current = from;
        while let Some(next) = self.step(current, direction, color) {
            cells.push(next);
            if !self.is_empty(next) {
                break;
            }
            current = next;
        }
        cells
    }

    fn generate_pawn_moves(&self, from: ChessField, pawn: &Piece) -> Vec<ChessField> {
        let mut moves = Vec::new();
        let forward = pawn.toward(Forward);

        // Regular forward move
        if let Some(one) = self.neighbor(from, forward).filter(|f| self.is_empty(*f)) {
            moves.push(one);

            // Double move while the pawn has never moved
            if pawn.moves == 0 {
                if let Some(two) = self.neighbor(one, forward).filter(|f| self.is_empty(*f)) {
                    moves.push(two);
                }
            }
        }

        // Capture diagonally
        for side in [ForwardLeft, ForwardRight] {
            if let Some(target) = self.neighbor(from, pawn.toward(side)) {
                if self.occupant(target).is_some_and(|p| p.color != pawn.color) {
                    moves.push(target);
                }
            }
        }

        moves
    }

    /// Two cells straight, then one to either side. Pieces on the way are jumped over.
    fn generate_knight_moves(&self, from: ChessField, knight: &Piece) -> Vec<ChessField> {
        let mut moves = Vec::new();
        for leg in RelativeDirection::ORTHOGONAL {
            let direction = knight.toward(leg);
            let corner = match self.neighbor(from, direction).and_then(|f| self.neighbor(f, direction)) {
                Some(f) => f,
                None => continue,
            };
            for side in leg.perpendicular() {
                if let Some(target) = self.step(corner, knight.toward(side), knight.color) {
                    moves.push(target);
                }
            }
        }
        moves
    }

    fn generate_sliding_moves(&self, from: ChessField, piece: &Piece, directions: &[RelativeDirection]) -> Vec<ChessField> {
        directions
            .iter()
            .flat_map(|&d| self.slide(from, piece.toward(d), piece.color))
            .collect()
    }

    fn generate_bishop_moves(&self, from: ChessField, bishop: &Piece) -> Vec<ChessField> {
        self.generate_sliding_moves(from, bishop, &RelativeDirection::DIAGONAL)
    }

    fn generate_rook_moves(&self, from: ChessField, rook: &Piece) -> Vec<ChessField> {
        self.generate_sliding_moves(from, rook, &RelativeDirection::ORTHOGONAL)
    }

    fn generate_queen_moves(&self, from: ChessField, queen: &Piece) -> Vec<ChessField> {
        self.generate_sliding_moves(from, queen, &RelativeDirection::ALL)
    }

    fn generate_king_moves(&self, from: ChessField, king: &Piece) -> Vec<ChessField> {
        RelativeDirection::ALL
            .iter()
            .filter_map(|&d| self.step(from, king.toward(d), king.color))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::*;
    use super::super::{Board, Direction};
    use super::*;

    fn moves_from(board: &Board, square: &str) -> Vec<ChessField> {
        board.generate_moves_from(field(square))
    }

    #[test]
    fn test_generate_pawn_moves() {
        // White pawn on its start square
        let board = Board::from_placement("8/8/8/8/8/8/4P3/8").unwrap();
        assert_moves(moves_from(&board, "e2"), vec!["e3", "e4"]);

        // Black pawn on its start square moves towards row 7
        let board = Board::from_placement("8/4p3/8/8/8/8/8/8").unwrap();
        assert_moves(moves_from(&board, "e7"), vec!["e6", "e5"]);

        // Blocked directly in front
        let board = Board::from_placement("8/8/8/8/8/4p3/4P3/8").unwrap();
        assert_moves(moves_from(&board, "e2"), vec![]);

        // Double step blocked, single step free
        let board = Board::from_placement("8/8/8/8/4p3/8/4P3/8").unwrap();
        assert_moves(moves_from(&board, "e2"), vec!["e3"]);

        // Capture an enemy on one diagonal, own piece on the other
        let board = Board::from_placement("8/8/8/8/8/3p1P2/4P3/8").unwrap();
        assert_moves(moves_from(&board, "e2"), vec!["e3", "e4", "d3"]);

        // Black captures towards its own forward
        let board = Board::from_placement("8/4p3/3P1P2/8/8/8/8/8").unwrap();
        assert_moves(moves_from(&board, "e7"), vec!["e6", "e5", "d6", "f6"]);

        // Pawn on the a-file has a single diagonal
        let board = Board::from_placement("8/8/8/8/8/1p6/P7/8").unwrap();
        assert_moves(moves_from(&board, "a2"), vec!["a3", "a4", "b3"]);
    }

    #[test]
    fn test_pawn_double_step_needs_unmoved_pawn() {
        let mut board = Board::from_placement("8/8/8/8/8/8/4P3/8").unwrap();
        board.occupant_mut(field("e2")).unwrap().moves = 1;
        assert_moves(moves_from(&board, "e2"), vec!["e3"]);
    }

    #[test]
    fn test_pawn_never_moves_diagonally_without_capture() {
        let board = Board::from_placement("8/8/8/8/8/8/4P3/8").unwrap();
        let moves = moves_from(&board, "e2");
        assert!(!moves.contains(&field("d3")));
        assert!(!moves.contains(&field("f3")));

        // A pawn cannot capture straight ahead
        let board = Board::from_placement("8/8/8/8/4p3/4P3/8/8").unwrap();
        assert_moves(moves_from(&board, "e3"), vec![]);
    }

    #[test]
    fn test_pawn_at_last_row_has_no_forward_move() {
        let board = Board::from_placement("4P3/8/8/8/8/8/8/8").unwrap();
        assert_moves(moves_from(&board, "e8"), vec![]);
    }

    #[test]
    fn test_generate_knight_moves() {
        let board = Board::from_placement("8/8/8/8/3N4/8/8/8").unwrap();
        assert_moves(
            moves_from(&board, "d4"),
            vec!["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"],
        );

        // Corner
        let board = Board::from_placement("8/8/8/8/8/8/8/N7").unwrap();
        assert_moves(moves_from(&board, "a1"), vec!["b3", "c2"]);

        // Jumps over the pawn wall of the starting position
        let board = Board::standard();
        assert_moves(moves_from(&board, "b1"), vec!["a3", "c3"]);
        assert_moves(moves_from(&board, "g8"), vec!["f6", "h6"]);

        // Own pieces block, enemy pieces can be captured
        let board = Board::from_placement("8/8/2P1p3/8/3N4/8/8/8").unwrap();
        assert_moves(
            moves_from(&board, "d4"),
            vec!["b3", "b5", "c2", "e2", "e6", "f3", "f5"],
        );
    }

    #[test]
    fn test_knight_on_interior_cell_has_eight_moves() {
        for row in 2..6 {
            for col in 2..6 {
                let mut board = Board::new();
                let from = ChessField::new(row, col);
                board.place(from, PieceType::Knight, Color::Black);
                assert_eq!(board.generate_moves_from(from).len(), 8);
            }
        }
    }

    #[test]
    fn test_generate_bishop_moves() {
        let board = Board::from_placement("8/8/8/8/8/8/8/2B5").unwrap();
        assert_moves(
            moves_from(&board, "c1"),
            vec!["b2", "a3", "d2", "e3", "f4", "g5", "h6"],
        );

        let board = Board::from_placement("8/8/8/8/8/8/1p1P4/2B5").unwrap();
        assert_moves(moves_from(&board, "c1"), vec!["b2"]);
    }

    #[test]
    fn test_generate_rook_moves() {
        // Enemy on d1 ends the run along the first rank
        let board = Board::from_placement("8/8/8/8/8/8/8/R2p4").unwrap();
        assert_moves(
            moves_from(&board, "a1"),
            vec!["a2", "a3", "a4", "a5", "a6", "a7", "a8", "b1", "c1", "d1"],
        );

        // Own piece on d1 is not a destination
        let board = Board::from_placement("8/8/8/8/8/8/8/R2P4").unwrap();
        assert_moves(
            moves_from(&board, "a1"),
            vec!["a2", "a3", "a4", "a5", "a6", "a7", "a8", "b1", "c1"],
        );

        // Boxed in by own pieces
        assert_moves(moves_from(&Board::standard(), "a1"), vec![]);
    }

    #[test]
    fn test_generate_queen_moves() {
        let board = Board::from_placement("8/8/8/8/8/2P5/1pQ5/2p5").unwrap();
        assert_moves(
            moves_from(&board, "c2"),
            vec!["b2", "c1", "b1", "d1", "b3", "a4", "d3", "e4", "f5", "g6", "h7", "d2", "e2", "f2", "g2", "h2"],
        );
    }

    #[test]
    fn test_generate_king_moves() {
        let board = Board::from_placement("8/8/8/8/8/3K4/8/8").unwrap();
        assert_moves(
            moves_from(&board, "d3"),
            vec!["c2", "c3", "c4", "d2", "d4", "e2", "e3", "e4"],
        );

        // Blocked by own pieces, three captures
        let board = Board::from_placement("8/8/8/3ppp2/3PKP2/3PPP2/8/8").unwrap();
        assert_moves(moves_from(&board, "e4"), vec!["d5", "e5", "f5"]);

        let board = Board::from_placement("8/8/8/8/8/8/8/7k").unwrap();
        assert_moves(moves_from(&board, "h1"), vec!["h2", "g1", "g2"]);

        // King moves a single cell even on an open board
        let board = Board::from_placement("K7/8/8/8/8/8/8/8").unwrap();
        assert_moves(moves_from(&board, "a8"), vec!["a7", "b8", "b7"]);
    }

    #[test]
    fn test_empty_cell_has_no_moves() {
        assert_moves(moves_from(&Board::standard(), "e4"), vec![]);
    }

    #[test]
    fn test_step() {
        let board = Board::from_placement("8/8/8/8/3pP3/3R4/8/8").unwrap();
        let rook = field("d3");
        assert_eq!(board.step(rook, Direction::North, Color::White), Some(field("d4")));
        assert_eq!(board.step(rook, Direction::NorthEast, Color::White), None);
        assert_eq!(board.step(rook, Direction::South, Color::White), Some(field("d2")));
        assert_eq!(board.step(field("a1"), Direction::West, Color::White), None);
    }

    #[test]
    fn test_slide_stops_at_first_occupant() {
        for (placement, expected) in [
            ("8/8/8/8/8/8/8/R2p4", vec!["b1", "c1", "d1"]),
            ("8/8/8/8/8/8/8/R2P4", vec!["b1", "c1"]),
            ("8/8/8/8/8/8/8/Rp6", vec!["b1"]),
            ("8/8/8/8/8/8/8/RP6", vec![]),
            ("8/8/8/8/8/8/8/R7", vec!["b1", "c1", "d1", "e1", "f1", "g1", "h1"]),
        ] {
            let board = Board::from_placement(placement).unwrap();
            assert_moves(board.slide(field("a1"), Direction::East, Color::White), expected);
        }
    }

    #[test]
    fn test_generate_moves_for_color() {
        let board = Board::standard();
        let moves = board.generate_moves(Color::White);
        // Eight pawns and two knights
        assert_eq!(moves.len(), 10);
        let total: usize = moves.iter().map(|(_, d)| d.len()).sum();
        assert_eq!(total, 20);
    }
}
