use crate::chess_board::PieceType;
use crate::game::{ClickOutcome, Match, MoveRecord};
use rand::prelude::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use tracing::info;

/// Plays up to `plies` random moves from the starting position.
///
/// Every move goes through the same two clicks a player would make. The game stops
/// early when the side to move has nothing to play or a king has been taken.
pub fn play_random(seed: u64, plies: u32) -> Match {
    let mut game = Match::new();
    let mut rng = Pcg64::seed_from_u64(seed);

    for _ in 0..plies {
        match random_ply(&mut game, &mut rng) {
            Some(record) if record.captured == Some(PieceType::King) => {
                info!(ply = record.ply, winner = %record.color, "king captured");
                break;
            }
            Some(_) => {}
            None => {
                info!(ply = game.ply(), side = %game.active_player(), "no move available");
                break;
            }
        }
    }
    game
}

/// Picks a random movable piece of the side to move and a random destination for it.
pub fn random_ply<L, R: Rng + ?Sized>(game: &mut Match<L>, rng: &mut R) -> Option<MoveRecord> {
    let candidates = game.board().generate_moves(game.active_player());
    let (from, destinations) = candidates.choose(rng)?;
    let from = *from;
    let to = *destinations.choose(rng)?;

    game.deselect();
    game.handle_selection(from).ok()?;
    match game.handle_selection(to).ok()? {
        ClickOutcome::Moved(record) => Some(record),
        _ => None,
    }
}
