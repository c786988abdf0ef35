use std::fmt;
use std::str::FromStr;

use crate::error::FieldParseError;

pub const BOARD_SIZE: usize = 8;

/// Side owning a piece. White is the light side and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Absolute direction for each `RelativeDirection`, seen from this side.
    pub fn heading(&self) -> &'static [Direction; 8] {
        match self {
            Color::White => &WHITE_HEADING,
            Color::Black => &BLACK_HEADING,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceType::Pawn => write!(f, "P"),
            PieceType::Knight => write!(f, "N"),
            PieceType::Bishop => write!(f, "B"),
            PieceType::Rook => write!(f, "R"),
            PieceType::Queen => write!(f, "Q"),
            PieceType::King => write!(f, "K"),
        }
    }
}

/// Compass direction on the board. North points from white's home row towards black's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Clockwise from north; `opposite` relies on this order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// (row delta, column delta)
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    pub fn opposite(self) -> Self {
        Self::ALL[(self.index() + 4) % 8]
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Direction as seen by the owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelativeDirection {
    Forward,
    ForwardRight,
    Right,
    BackwardRight,
    Backward,
    BackwardLeft,
    Left,
    ForwardLeft,
}

impl RelativeDirection {
    pub const ALL: [RelativeDirection; 8] = [
        RelativeDirection::Forward,
        RelativeDirection::ForwardRight,
        RelativeDirection::Right,
        RelativeDirection::BackwardRight,
        RelativeDirection::Backward,
        RelativeDirection::BackwardLeft,
        RelativeDirection::Left,
        RelativeDirection::ForwardLeft,
    ];

    pub const ORTHOGONAL: [RelativeDirection; 4] = [
        RelativeDirection::Forward,
        RelativeDirection::Right,
        RelativeDirection::Backward,
        RelativeDirection::Left,
    ];

    pub const DIAGONAL: [RelativeDirection; 4] = [
        RelativeDirection::ForwardRight,
        RelativeDirection::BackwardRight,
        RelativeDirection::BackwardLeft,
        RelativeDirection::ForwardLeft,
    ];

    /// The two directions at a right angle to this one.
    pub fn perpendicular(self) -> [RelativeDirection; 2] {
        let i = self as usize;
        [Self::ALL[(i + 2) % 8], Self::ALL[(i + 6) % 8]]
    }
}

// Indexed by `RelativeDirection as usize`.
static WHITE_HEADING: [Direction; 8] = Direction::ALL;
static BLACK_HEADING: [Direction; 8] = [
    Direction::South,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
    Direction::North,
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
];

/// Identity of a piece, unique within one board.
#[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub struct PieceId(pub u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub color: Color,
    pub kind: PieceType,
    /// Number of times this piece has been relocated.
    pub moves: u32,
    heading: &'static [Direction; 8],
}

impl Piece {
    pub fn new(id: PieceId, color: Color, kind: PieceType) -> Self {
        Self {
            id,
            color,
            kind,
            moves: 0,
            heading: color.heading(),
        }
    }

    pub fn toward(&self, direction: RelativeDirection) -> Direction {
        self.heading[direction as usize]
    }

    pub fn to_char(&self) -> char {
        let c = match self.kind {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        };
        if self.color == Color::White {
            c
        } else {
            c.to_ascii_lowercase()
        }
    }
}

/// A cell coordinate. Row 0 is black's home row, row 7 is white's.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct ChessField {
    pub row: u8,
    pub col: u8,
}

impl ChessField {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(&self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// Row-major index into a 64 cell array.
    pub fn index(&self) -> usize {
        assert!(self.is_on_board(), "field ({}, {}) is off the board", self.row, self.col);
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    pub fn from_index(index: usize) -> Self {
        Self::new((index / BOARD_SIZE) as u8, (index % BOARD_SIZE) as u8)
    }

    /// The adjacent field in `direction`, if it is on the board.
    pub fn offset(&self, direction: Direction) -> Option<ChessField> {
        let (dr, dc) = direction.delta();
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        let size = BOARD_SIZE as i16;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(ChessField::new(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn as_algebraic(&self) -> String {
        let file = (b'a' + self.col) as char;
        let rank = BOARD_SIZE - self.row as usize;
        format!("{}{}", file, rank)
    }
}

impl fmt::Display for ChessField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_algebraic())
    }
}

/// Accepts algebraic names ("e2") or a "row col" pair ("6 4", "6,4").
impl FromStr for ChessField {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || FieldParseError::Invalid(s.to_string());

        let bytes = s.as_bytes();
        if bytes.len() == 2 && bytes[0].is_ascii_alphabetic() {
            let file = bytes[0].to_ascii_lowercase();
            let rank = bytes[1];
            if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
                return Err(invalid());
            }
            return Ok(ChessField::new(b'8' - rank, file - b'a'));
        }

        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() != 2 {
            return Err(invalid());
        }
        let row: u8 = parts[0].parse().map_err(|_| invalid())?;
        let col: u8 = parts[1].parse().map_err(|_| invalid())?;
        let field = ChessField::new(row, col);
        if field.is_on_board() {
            Ok(field)
        } else {
            Err(FieldParseError::OutOfRange { row, col })
        }
    }
}
