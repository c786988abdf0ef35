//! Turn taking and piece selection.
//!
//! A [`Match`] turns a stream of "cell clicked" events into validated moves. It is
//! either idle or holds a selected cell; a click on a legal destination of the
//! selected piece moves it and hands the turn to the other side.

use crate::chess_board::{Board, ChessField, Color, PieceType};
use crate::error::MatchError;
use circular_buffer::CircularBuffer;
use tracing::{debug, trace};

/// Number of moves kept in the match history.
pub const HISTORY_LEN: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    /// The cell holding the piece that waits for a destination.
    Selected(ChessField),
}

/// A move accepted by the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// 1-based number of the half move.
    pub ply: u32,
    pub color: Color,
    pub kind: PieceType,
    pub from: ChessField,
    pub to: ChessField,
    pub captured: Option<PieceType>,
}

/// What a click did to the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing selectable at the cell.
    Ignored,
    /// The piece at the cell is now selected.
    Selected(ChessField),
    /// The cell is not a legal destination of the selected piece. The selection is kept.
    Rejected,
    Moved(MoveRecord),
}

#[derive(Debug, Clone)]
pub struct Match<L = String> {
    board: Board<L>,
    active: Color,
    selection: Selection,
    history: CircularBuffer<HISTORY_LEN, MoveRecord>,
    ply: u32,
}

impl Match<String> {
    /// A match from the starting position, white to move.
    pub fn new() -> Self {
        Self::with_board(Board::standard(), Color::White)
    }
}

impl Default for Match<String> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> Match<L> {
    pub fn with_board(board: Board<L>, first: Color) -> Self {
        Self {
            board,
            active: first,
            selection: Selection::Idle,
            history: CircularBuffer::new(),
            ply: 0,
        }
    }

    pub fn board(&self) -> &Board<L> {
        &self.board
    }

    pub fn active_player(&self) -> Color {
        self.active
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn is_selected(&self, field: ChessField) -> bool {
        self.selection == Selection::Selected(field)
    }

    /// Number of moves played so far.
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// The most recent moves, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &MoveRecord> {
        self.history.iter()
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.back()
    }

    /// Legal destinations of the selected piece, empty when idle.
    pub fn selected_destinations(&self) -> Vec<ChessField> {
        match self.selection {
            Selection::Idle => Vec::new(),
            Selection::Selected(from) => self.board.generate_moves_from(from),
        }
    }

    /// Drops the current selection. Nothing else changes.
    pub fn deselect(&mut self) {
        if let Selection::Selected(field) = self.selection {
            trace!(%field, "selection cleared");
        }
        self.selection = Selection::Idle;
    }

    /// Processes one click on `field`.
    ///
    /// Illegal clicks are not errors: they come back as `Ignored` or `Rejected` and
    /// leave the match unchanged. Only a field outside the board is refused.
    pub fn handle_selection(&mut self, field: ChessField) -> Result<ClickOutcome, MatchError> {
        if !field.is_on_board() {
            return Err(MatchError::OutOfBoard {
                row: field.row,
                col: field.col,
            });
        }

        let outcome = match self.selection {
            Selection::Idle => self.select(field),
            Selection::Selected(from) => self.try_move(from, field),
        };
        Ok(outcome)
    }

    fn select(&mut self, field: ChessField) -> ClickOutcome {
        match self.board.occupant(field) {
            Some(piece) if piece.color == self.active => {
                debug!(%field, kind = %piece.kind, color = %piece.color, "piece selected");
                self.selection = Selection::Selected(field);
                ClickOutcome::Selected(field)
            }
            _ => {
                trace!(%field, active = %self.active, "nothing to select");
                ClickOutcome::Ignored
            }
        }
    }

    fn try_move(&mut self, from: ChessField, to: ChessField) -> ClickOutcome {
        let mover = match self.board.occupant(from) {
            Some(piece) => *piece,
            None => return ClickOutcome::Rejected,
        };

        if !self.board.generate_moves_from(from).contains(&to) {
            trace!(%from, %to, kind = %mover.kind, "illegal destination");
            return ClickOutcome::Rejected;
        }

        let captured = self.board.move_occupant(from, to);
        if let Some(piece) = self.board.occupant_mut(to) {
            piece.moves += 1;
        }

        self.ply += 1;
        let record = MoveRecord {
            ply: self.ply,
            color: mover.color,
            kind: mover.kind,
            from,
            to,
            captured: captured.map(|p| p.kind),
        };
        self.history.push_back(record);

        if let Some(victim) = captured {
            debug!(at = %to, kind = %victim.kind, color = %victim.color, "piece captured");
        }
        debug!(ply = self.ply, %from, %to, kind = %mover.kind, color = %mover.color, "move played");

        self.active = self.active.opposite();
        self.selection = Selection::Idle;
        ClickOutcome::Moved(record)
    }
}
