use atree::{Arena, Token};
use nogo_sim::{action::ActionList, game_tree_search::Game, types::color::Color};

use super::stats::NodeStats;

pub struct NodeData<G: Game> {
    /// Creation order, the root is 0.
    pub id: usize,
    pub state: G,
    /// Move that produced this node from its parent, `None` for the root.
    pub action: Option<G::Action>,
    pub parent: Option<Token>,
    /// Side to move at this node.
    pub mover: Color,
    pub stats: NodeStats,
    /// Legal moves not expanded yet. Only ever shrinks.
    pub untried: ActionList<G::Action>,
}

impl<G: Game> std::fmt::Debug for NodeData<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeData")
            .field("id", &self.id)
            .field("action", &self.action)
            .field("mover", &self.mover)
            .field("q", &self.stats.q)
            .field("n", &self.stats.n)
            .field("untried", &self.untried.len())
            .finish()
    }
}

impl<G: Game> NodeData<G> {
    #[inline]
    fn new(
        id: usize,
        state: G,
        action: Option<G::Action>,
        parent: Option<Token>,
        mover: Color,
        untried: ActionList<G::Action>,
    ) -> Self {
        Self {
            id,
            state,
            action,
            parent,
            mover,
            stats: Default::default(),
            untried,
        }
    }
}

/// Owns every node created during one search. Nodes refer to each other by
/// arena token, and all of them are dropped together with the tree.
pub struct SearchTree<G: Game> {
    arena: Arena<NodeData<G>>,
    root: Token,
    len: usize,
}

impl<G: Game> std::fmt::Debug for SearchTree<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchTree")
            .field("root", self.get(self.root))
            .field("len", &self.len)
            .finish()
    }
}

impl<G: Game> SearchTree<G> {
    /// Creates the root from the search input. `space` holds the candidates
    /// of `mover`; the root's untried moves are its legal subset, kept in the
    /// order of `space`.
    pub fn create_root(state: G, space: &[G::Action], mover: Color) -> Self {
        let untried = state.legal_actions(space);
        let root = NodeData::new(0, state, None, None, mover, untried);
        let (arena, root) = Arena::<NodeData<G>>::with_data(root);
        Self { arena, root, len: 1 }
    }

    /// Appends a child under `parent`. `mover` is the side to move at the
    /// child; the child's untried moves are the legal candidates for `mover`.
    pub fn create_child(
        &mut self,
        parent: Token,
        state: G,
        action: G::Action,
        mover: Color,
    ) -> Token {
        let untried = state.legal_actions(&state.action_space(mover));
        let child = NodeData::new(self.len, state, Some(action), Some(parent), mover, untried);
        self.len += 1;
        parent.append(&mut self.arena, child)
    }

    #[inline]
    pub fn root(&self) -> Token {
        self.root
    }

    /// Number of nodes, including the root.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn node(&self, token: Token) -> &atree::Node<NodeData<G>> {
        self.arena.get(token).expect("SearchTree: token must belong to this tree")
    }

    #[inline]
    pub fn get(&self, token: Token) -> &NodeData<G> {
        &self.node(token).data
    }

    #[inline]
    pub fn get_mut(&mut self, token: Token) -> &mut NodeData<G> {
        &mut self
            .arena
            .get_mut(token)
            .expect("SearchTree: token must belong to this tree")
            .data
    }

    /// Children of `token` in insertion order.
    #[inline]
    pub fn children(&self, token: Token) -> impl Iterator<Item = &atree::Node<NodeData<G>>> + '_ {
        self.node(token).children(&self.arena)
    }

    /// A node is terminal when its mover had no legal move when it was created.
    #[inline]
    pub fn is_terminal(&self, token: Token) -> bool {
        let node = self.node(token);
        node.data.untried.is_empty() && node.is_leaf()
    }

    /// Removes the most recently listed untried move.
    #[inline]
    pub fn pop_untried(&mut self, token: Token) -> Option<G::Action> {
        self.get_mut(token).untried.pop()
    }

    /// Adds one visit and `reward` to every node from `token` up to the root.
    /// The reward is added unchanged at every level.
    pub fn backpropagate(&mut self, token: Token, reward: f64) {
        let mut current = Some(token);
        while let Some(token) = current {
            let data = self.get_mut(token);
            data.stats.record(reward);
            current = data.parent;
        }
    }
}
