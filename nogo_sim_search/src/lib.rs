use nogo_sim::game_tree_search::Game;

/// Implementation for Monte-Carlo Tree Search
pub mod mcts;

pub use mcts::stats::NodeStats;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchCounter {
    /// Number of selection/expansion/playout/backpropagation iterations.
    pub iterations: u32,
    /// Number of nodes in the tree, including the root.
    pub nodes: usize,
    /// Number of random playouts.
    pub rollouts: u64,
    /// Number of moves played during random playouts.
    pub rollout_steps: u64,
}

impl SearchCounter {
    pub fn summary(&self, dt_ns: u128) -> String {
        let dt_ms: f64 = 1e-6 * (dt_ns as f64);
        let rate: f64 = (1e-3_f64 * 1e9_f64) * (self.rollouts as f64) / (dt_ns.max(1) as f64);
        format!("dt={dt_ms:.2}ms rate={rate:.2} Kplayouts/s")
    }
}

/// Outcome of one move decision.
#[derive(Debug, Clone)]
pub struct SearchResult<G: Game> {
    /// Selected move, `None` when the side to move has no legal move (game over).
    pub action: Option<G::Action>,
    /// Statistics of the root after the last iteration.
    pub root: NodeStats,
    /// Statistics of the selected child.
    pub best: NodeStats,
    pub counter: SearchCounter,
}

impl<G: Game> Default for SearchResult<G> {
    fn default() -> Self {
        Self::game_over()
    }
}

impl<G: Game> SearchResult<G> {
    #[inline]
    pub fn game_over() -> Self {
        SearchResult {
            action: None,
            root: Default::default(),
            best: Default::default(),
            counter: Default::default(),
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.action.is_none()
    }
}
