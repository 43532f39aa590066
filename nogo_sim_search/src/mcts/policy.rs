use atree::Token;
use nogo_sim::game_tree_search::Game;

use super::tree::SearchTree;

/// Exploration term of the selection score. In the selection phase of MCTS,
/// the child with highest (mean reward + exploration) is selected.
///
/// See also: <https://en.wikipedia.org/wiki/Monte_Carlo_tree_search#Exploration_and_exploitation>
pub trait SelectionPolicy {
    /// Bonus for a child visited `child_n` times under a parent visited
    /// `parent_n` times, scaled by the exploration constant `c`.
    fn exploration(&self, c: f64, parent_n: u32, child_n: u32) -> f64;
}

/// Pure exploitation regardless of `c`.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoneUCT;

impl SelectionPolicy for NoneUCT {
    #[inline]
    fn exploration(&self, _: f64, _: u32, _: u32) -> f64 {
        0.0
    }
}

/// `c * sqrt(2 * ln(parent_n) / child_n)`
#[derive(Debug, Default, Copy, Clone)]
pub struct UCB1;

impl SelectionPolicy for UCB1 {
    #[inline]
    fn exploration(&self, c: f64, parent_n: u32, child_n: u32) -> f64 {
        if c == 0.0 {
            return 0.0;
        }
        c * f64::sqrt(2.0 * (parent_n as f64).ln() / (child_n as f64))
    }
}

/// Child of `token` with the strictly greatest score. Ties go to the child
/// created first. `None` if `token` has no children.
pub fn best_child<G: Game, S: SelectionPolicy>(
    tree: &SearchTree<G>,
    token: Token,
    policy: &S,
    c: f64,
) -> Option<Token> {
    let parent_n = tree.get(token).stats.n;
    let mut best: Option<(Token, f64)> = None;
    for child in tree.children(token) {
        let stats = child.data.stats;
        debug_assert!(stats.n > 0, "best_child: child #{} was never visited", child.data.id);
        let score = stats.mean() + policy.exploration(c, parent_n, stats.n);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((child.token(), score));
        }
    }
    best.map(|(token, _)| token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ucb1_exploration() {
        let expected = f64::sqrt(2.0 * 100f64.ln() / 4.0);
        assert!((expected - UCB1.exploration(1.0, 100, 4)).abs() < 1e-12);
        assert!((0.5 * expected - UCB1.exploration(0.5, 100, 4)).abs() < 1e-12);
        assert_eq!(0.0, UCB1.exploration(0.0, 100, 4));
        assert_eq!(0.0, NoneUCT.exploration(1.0, 100, 4));
    }

    #[test]
    fn test_ucb1_favors_fewer_visits() {
        assert!(UCB1.exploration(1.0, 50, 2) > UCB1.exploration(1.0, 50, 20));
    }
}
