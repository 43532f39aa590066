use instant::{Duration, Instant};
use log::{debug, warn};

use nogo_sim::prelude::*;
use nogo_sim_cli_utils::Player;

/// Result of one game.
#[derive(Debug, Clone)]
pub struct RoundResult {
    pub winner: Color,
    pub moves: u32,
    pub final_board: Board,
    pub elapsed: Duration,
}

/// Plays `board` to the end, black moving first. The side that cannot make
/// a legal move loses.
pub fn match_round(mut board: Board, players: &mut ByColor<Player>) -> RoundResult {
    let t0 = Instant::now();
    let mut who = Color::Black;
    let mut moves = 0;
    loop {
        let player = &mut players[who];
        let Some(action) = player.take_action(&board) else {
            debug!("match_round: {} ({who}) has no legal move", player.name());
            break;
        };
        if action.who != who {
            warn!("match_round: {} played {action} out of turn", player.name());
            break;
        }
        if let Err(e) = board.advance(action) {
            warn!("match_round: {} played {action}: {e}", player.name());
            break;
        }
        moves += 1;
        who = who.opposite();
    }

    RoundResult {
        winner: who.opposite(),
        moves,
        final_board: board,
        elapsed: t0.elapsed(),
    }
}
