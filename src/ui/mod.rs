use crate::chess_board::{ChessField, BOARD_SIZE};
use crate::game::{Match, Selection};
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Renders the board as text, rank 8 on top.
///
/// The selected piece is shown in brackets and its destinations are marked with `*`.
pub fn render_board<L>(game: &Match<L>) -> String {
    let destinations = game.selected_destinations();
    let mut out = String::new();

    for row in 0..BOARD_SIZE {
        out.push_str(&format!("{} ", BOARD_SIZE - row));
        for col in 0..BOARD_SIZE {
            let field = ChessField::new(row as u8, col as u8);
            let glyph = match game.board().occupant(field) {
                Some(piece) => piece.to_char(),
                None if destinations.contains(&field) => '*',
                None => '.',
            };
            if game.is_selected(field) {
                out.push_str(&format!("[{}]", glyph));
            } else if destinations.contains(&field) && glyph != '*' {
                // capture target
                out.push_str(&format!("*{} ", glyph));
            } else {
                out.push_str(&format!(" {} ", glyph));
            }
        }
        out.push('\n');
    }

    out.push_str("  ");
    for col in 0..BOARD_SIZE {
        out.push_str(&format!(" {} ", (b'a' + col as u8) as char));
    }
    out.push('\n');
    out
}

pub fn status_line<L>(game: &Match<L>) -> String {
    match game.selection() {
        Selection::Idle => format!("{} to move", game.active_player()),
        Selection::Selected(field) => {
            let piece = game
                .board()
                .occupant(field)
                .map(|p| p.kind.to_string())
                .unwrap_or_default();
            format!("{} to move, {}{} selected", game.active_player(), piece, field)
        }
    }
}

#[derive(Tabled)]
struct HistoryRow {
    ply: u32,
    player: String,
    piece: String,
    from: String,
    to: String,
    capture: String,
}

/// The recent moves as a table.
pub fn history_table<L>(game: &Match<L>) -> String {
    let rows: Vec<HistoryRow> = game
        .history()
        .map(|record| HistoryRow {
            ply: record.ply,
            player: record.color.to_string(),
            piece: record.kind.to_string(),
            from: record.from.as_algebraic(),
            to: record.to.as_algebraic(),
            capture: record.captured.map(|kind| kind.to_string()).unwrap_or_default(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    table.to_string()
}
