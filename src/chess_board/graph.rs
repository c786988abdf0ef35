use super::model::BOARD_SIZE;
use super::{ChessField, Color, Direction, Piece, PieceId, PieceType};
use lazy_static::lazy_static;
use tracing::trace;

const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

type Neighbors = [Option<ChessField>; 8];

lazy_static! {
    /// Neighbor of every cell in every direction, indexed by cell then `Direction`.
    static ref NEIGHBORS: [Neighbors; CELL_COUNT] = wire_neighbors();
}

fn wire_neighbors() -> [Neighbors; CELL_COUNT] {
    let mut table = [[None; 8]; CELL_COUNT];
    for (index, neighbors) in table.iter_mut().enumerate() {
        let field = ChessField::from_index(index);
        for direction in Direction::ALL {
            neighbors[direction.index()] = field.offset(direction);
        }
    }
    table
}

/// One of the 64 fixed board positions.
#[derive(Debug, Clone)]
pub struct Cell<L> {
    field: ChessField,
    label: L,
    neighbors: Neighbors,
    occupant: Option<Piece>,
}

impl<L> Cell<L> {
    pub fn field(&self) -> ChessField {
        self.field
    }

    pub fn label(&self) -> &L {
        &self.label
    }

    pub fn occupant(&self) -> Option<&Piece> {
        self.occupant.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    pub fn neighbor(&self, direction: Direction) -> Option<ChessField> {
        self.neighbors[direction.index()]
    }

    /// The links that exist at this position, in `Direction::ALL` order.
    pub fn neighbors(&self) -> impl Iterator<Item = (Direction, ChessField)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| self.neighbor(direction).map(|field| (direction, field)))
    }
}

/// The 8x8 cell graph and its occupants.
///
/// Adjacency is fixed when the board is built; only occupants change afterwards.
/// Every method taking a `ChessField` expects it to be on the board and panics otherwise.
#[derive(Debug, Clone)]
pub struct Board<L = String> {
    cells: Vec<Cell<L>>,
    origin: ChessField,
    next_id: u16,
}

impl Board<String> {
    /// Creates an empty board whose cells are labelled with their algebraic names
    pub fn new() -> Self {
        Self::with_labels(std::array::from_fn(|row| {
            std::array::from_fn(|col| ChessField::new(row as u8, col as u8).as_algebraic())
        }))
    }
}

impl Default for Board<String> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> Board<L> {
    /// Creates an empty board, tagging cell (row, col) with `labels[row][col]`.
    pub fn with_labels(labels: [[L; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let cells = labels
            .into_iter()
            .enumerate()
            .flat_map(|(row, rank)| {
                rank.into_iter().enumerate().map(move |(col, label)| {
                    let field = ChessField::new(row as u8, col as u8);
                    Cell {
                        field,
                        label,
                        neighbors: NEIGHBORS[field.index()],
                        occupant: None,
                    }
                })
            })
            .collect();

        Self {
            cells,
            origin: ChessField::new(0, 0),
            next_id: 0,
        }
    }

    pub fn origin(&self) -> ChessField {
        self.origin
    }

    pub fn cell(&self, field: ChessField) -> &Cell<L> {
        &self.cells[field.index()]
    }

    pub fn neighbor(&self, field: ChessField, direction: Direction) -> Option<ChessField> {
        self.cell(field).neighbor(direction)
    }

    pub fn occupant(&self, field: ChessField) -> Option<&Piece> {
        self.cell(field).occupant()
    }

    pub fn occupant_mut(&mut self, field: ChessField) -> Option<&mut Piece> {
        self.cells[field.index()].occupant.as_mut()
    }

    pub fn is_empty(&self, field: ChessField) -> bool {
        self.cell(field).is_empty()
    }

    /// Puts a fresh piece on `field`, replacing whatever stood there.
    pub fn place(&mut self, field: ChessField, kind: PieceType, color: Color) -> PieceId {
        let id = PieceId(self.next_id);
        self.next_id += 1;
        self.cells[field.index()].occupant = Some(Piece::new(id, color, kind));
        id
    }

    pub fn remove(&mut self, field: ChessField) -> Option<Piece> {
        self.cells[field.index()].occupant.take()
    }

    /// Removes every piece from the board.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.occupant = None;
        }
    }

    /// Moves the occupant of `from` (if any) to `to` without any rule checks.
    ///
    /// Returns the piece that stood on `to`; the caller decides what happens to it.
    pub fn move_occupant(&mut self, from: ChessField, to: ChessField) -> Option<Piece> {
        let moving = self.cells[from.index()].occupant.take();
        let displaced = std::mem::replace(&mut self.cells[to.index()].occupant, moving);
        trace!(%from, %to, displaced = ?displaced.map(|p| p.kind), "occupant moved");
        displaced
    }

    /// Returns an iterator over all pieces on the board along with their coordinates.
    pub fn pieces(&self) -> impl Iterator<Item = (ChessField, &Piece)> {
        self.cells
            .iter()
            .filter_map(|cell| cell.occupant().map(|piece| (cell.field, piece)))
    }

    /// Walks the cells in row-major order by following the east and south links from the origin.
    pub fn cells(&self) -> RowMajor<'_, L> {
        RowMajor {
            board: self,
            next: Some(self.origin),
            row_start: Some(self.origin),
        }
    }
}

pub struct RowMajor<'a, L> {
    board: &'a Board<L>,
    next: Option<ChessField>,
    row_start: Option<ChessField>,
}

impl<'a, L> Iterator for RowMajor<'a, L> {
    type Item = &'a Cell<L>;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.board.cell(self.next?);
        self.next = match cell.neighbor(Direction::East) {
            Some(east) => Some(east),
            None => {
                let below = self
                    .row_start
                    .and_then(|start| self.board.neighbor(start, Direction::South));
                self.row_start = below;
                below
            }
        };
        Some(cell)
    }
}
