use proptest::prelude::*;

use crate::prelude::*;

/// A position reached by alternating random legal placements from the empty
/// board, together with the side to move.
#[derive(Debug, Clone)]
pub struct Reachable {
    pub board: Board,
    pub to_move: Color,
}

pub fn play_random(size: u8, plies: u32, seed: u64) -> Reachable {
    let mut rng = RngState::from_seed_u64(seed);
    let mut board = Board::new(size).expect("size in range");
    let mut to_move = Color::Black;
    for _ in 0..plies {
        let Some((_, next)) = board.random_move(to_move, &mut rng) else {
            break;
        };
        board = next;
        to_move = to_move.opposite();
    }
    Reachable { board, to_move }
}

prop_compose! {
    pub fn arb_reachable()(size in 2u8..=7, plies in 0u32..40, seed in any::<u64>()) -> Reachable {
        play_random(size, plies, seed)
    }
}
