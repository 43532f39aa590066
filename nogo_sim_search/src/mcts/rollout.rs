use nogo_sim::{game_tree_search::Game, rand::Rng, types::color::Color};

use super::{policy::SelectionPolicy, MCTS};

/// End of a random playout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playout {
    /// Moves played before reaching the terminal state.
    pub steps: u32,
    /// Side to move at the terminal state, the side that lost.
    pub stuck: Color,
}

/// Plays uniformly random legal moves from `state`, `who` moving first and
/// the sides alternating, until the side to move has no legal move.
///
/// Every step shuffles the full candidate list of the mover and plays its
/// first legal entry.
pub fn random_playout<G: Game, R: Rng>(state: &G, who: Color, rng: &mut R) -> Playout {
    let mut game = state.clone();
    let mut who = who;
    let mut steps = 0;
    loop {
        let Some((_, next)) = game.random_move(who, rng) else {
            return Playout { steps, stuck: who };
        };
        game = next;
        who = who.opposite();
        steps += 1;
    }
}

impl<S: SelectionPolicy> MCTS<S> {
    /// Scores one playout for the searching side: 0 when the searching side
    /// is stuck at the end, otherwise 1.
    #[inline]
    pub(crate) fn playout_score(&self, playout: Playout) -> u32 {
        (playout.stuck != self.searching_side) as u32
    }

    /// Runs `rollout_samples` playouts from the same state and sums their
    /// scores. Returns `(total steps, reward)`.
    pub(crate) fn default_policy<G: Game>(&mut self, state: &G, who: Color) -> (u64, u32) {
        let mut steps = 0u64;
        let mut reward = 0u32;
        for _ in 0..self.config.rollout_samples {
            let playout = random_playout(state, who, &mut self.rng);
            steps += playout.steps as u64;
            reward += self.playout_score(playout);
        }
        (steps, reward)
    }
}
