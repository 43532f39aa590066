use instant::Instant;
use log::{debug, trace};

use atree::Token;
use nogo_sim::{game_tree_search::Game, rng::RngState, types::color::Color};

use crate::{SearchCounter, SearchResult};

use self::policy::{best_child, SelectionPolicy, UCB1};
use self::tree::SearchTree;

pub mod policy;

pub mod rollout;

pub mod stats;

pub mod tree;

pub mod debug;
pub use debug::*;


#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MCTSConfig {
    /// Exploration constant `c` used while descending the tree. 0 selects by mean reward only.
    pub exploration: f64,
    /// Random playouts per iteration. The iteration reward is the number of playouts won.
    pub rollout_samples: u32,
    /// Simulation budget when the caller does not give one.
    pub default_simulations: u32,
    /// Upper bound of the simulation budget.
    pub max_simulations: u32,
    /// Log the top of the tree after every decision.
    pub debug: bool,
}

impl Default for MCTSConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl MCTSConfig {
    pub const STANDARD: Self = Self {
        exploration: 0.0,
        rollout_samples: 5,
        default_simulations: 200,
        max_simulations: 8000,
        debug: false,
    };

    /// Number of iterations to run: the requested budget or the default,
    /// clamped to `1..=max_simulations`.
    #[inline]
    pub fn simulation_budget(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.default_simulations)
            .clamp(1, self.max_simulations.max(1))
    }
}

/// UCT search scoring playouts for `searching_side`.
///
/// Every decision grows a new tree from the given position and drops it
/// before returning. Random playouts draw from `rng` only, so a fixed seed,
/// budget and configuration reproduce the same decision.
#[derive(Debug)]
pub struct MCTS<S: SelectionPolicy = UCB1> {
    pub config: MCTSConfig,
    pub searching_side: Color,
    pub rng: RngState,
    pub selection_policy: S,
}

impl MCTS {
    pub fn new(config: MCTSConfig, searching_side: Color, rng: RngState) -> Self {
        Self::new_with_selection_policy(config, searching_side, rng, UCB1)
    }
}

impl<S: SelectionPolicy> MCTS<S> {
    pub fn new_with_selection_policy(
        config: MCTSConfig,
        searching_side: Color,
        rng: RngState,
        selection_policy: S,
    ) -> Self {
        Self {
            config,
            searching_side,
            rng,
            selection_policy,
        }
    }

    /// Selects a move for `mover` at `state`, where `space` is the mover's
    /// candidate list. Returns a result without an action when no candidate
    /// is legal.
    ///
    /// `mover` decides which side moves at every tree level; rewards always
    /// count wins of `searching_side`.
    pub fn decide<G: Game>(
        &mut self,
        simulation_budget: Option<u32>,
        state: &G,
        mover: Color,
        space: &[G::Action],
    ) -> SearchResult<G> {
        let t0 = Instant::now();
        let Some((tree, counter)) = self.grow_tree(simulation_budget, state, mover, space) else {
            debug!("decide: {mover} has no legal move");
            return SearchResult::game_over();
        };

        let root = tree.root();
        // Final choice is pure exploitation.
        let best = best_child(&tree, root, &self.selection_policy, 0.0)
            .expect("decide: root must have children after at least one iteration");
        let best = tree.get(best);
        let action = best.action.expect("decide: child node action must exist");
        if self.config.debug {
            self.print_tree(&tree, root, 0, 2, 2 * self.config.rollout_samples);
        }
        debug!(
            "decide: {mover} plays {} for {} ({}) nodes={} | {}",
            state.describe_action(action),
            self.searching_side,
            best.stats,
            counter.nodes,
            counter.summary(t0.elapsed().as_nanos())
        );
        SearchResult {
            action: Some(action),
            root: tree.get(root).stats,
            best: best.stats,
            counter,
        }
    }

    /// Runs the search iterations and returns the grown tree, or `None` when
    /// `state` is terminal for `mover`.
    pub fn grow_tree<G: Game>(
        &mut self,
        simulation_budget: Option<u32>,
        state: &G,
        mover: Color,
        space: &[G::Action],
    ) -> Option<(SearchTree<G>, SearchCounter)> {
        if !state.has_legal_action(space) {
            return None;
        }

        let budget = self.config.simulation_budget(simulation_budget);
        let mut tree = SearchTree::create_root(state.clone(), space, mover);
        let root = tree.root();
        let mut counter = SearchCounter::default();
        for i in 0..budget {
            let (leaf, who) = self.tree_policy(&mut tree, root, mover);
            let (steps, reward) = self.default_policy(&tree.get(leaf).state, who);
            tree.backpropagate(leaf, reward as f64);
            counter.rollouts += self.config.rollout_samples as u64;
            counter.rollout_steps += steps;
            trace!("iteration {i}: node #{} to_move={who} reward={reward}", tree.get(leaf).id);
        }
        counter.iterations = budget;
        counter.nodes = tree.len();
        Some((tree, counter))
    }

    /// Descends from `token`, where `who` is to move, until a node is
    /// expanded or a terminal node is reached. Returns that node and the side
    /// to move there.
    fn tree_policy<G: Game>(
        &self,
        tree: &mut SearchTree<G>,
        token: Token,
        who: Color,
    ) -> (Token, Color) {
        let (mut token, mut who) = (token, who);
        while !tree.is_terminal(token) {
            if let Some(action) = tree.pop_untried(token) {
                return (self.expand(tree, token, action, who), who.opposite());
            }
            token = best_child(tree, token, &self.selection_policy, self.config.exploration)
                .expect("tree_policy: fully expanded node must have children");
            who = who.opposite();
        }
        (token, who)
    }

    fn expand<G: Game>(
        &self,
        tree: &mut SearchTree<G>,
        parent: Token,
        action: G::Action,
        who: Color,
    ) -> Token {
        let state = tree
            .get(parent)
            .state
            .advanced(action)
            .expect("expand: untried actions must be legal");
        tree.create_child(parent, state, action, who.opposite())
    }
}
