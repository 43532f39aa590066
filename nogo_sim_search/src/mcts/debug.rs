use std::rc::Rc;

use atree::Token;
use itertools::Itertools;
use log::debug;
use nogo_sim::game_tree_search::Game;

use super::{policy::SelectionPolicy, stats::NodeStats, tree::NodeData, tree::SearchTree, MCTS};

#[derive(Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeDump<T> {
    #[cfg_attr(feature = "serde", serde(rename = "_"))]
    pub value: T,
    #[cfg_attr(feature = "serde", serde(rename = "children"))]
    pub children: Vec<Rc<TreeDump<T>>>,
}

impl<T> TreeDump<T> {
    pub fn new(value: T, children: Vec<Rc<TreeDump<T>>>) -> Self {
        Self { value, children }
    }
}

impl NodeStats {
    fn format_mean(self) -> String {
        format!("{self} = {:.3}", self.mean())
    }
}

impl<G: Game> NodeData<G> {
    fn debug_description(&self, children_count: usize) -> String {
        let action_part = if let Some(action) = self.action {
            self.state.describe_action(action)
        } else {
            "[Root]".to_string()
        };
        format!(
            "#{} {action_part} to_move={} ({}), #children = {}, untried = [{}]",
            self.id,
            self.mover,
            self.stats.format_mean(),
            children_count,
            self.untried.iter().map(|&a| self.state.describe_action(a)).join(", ")
        )
    }
}

impl<S: SelectionPolicy> MCTS<S> {
    pub fn dump_tree<G: Game>(
        &self,
        tree: &SearchTree<G>,
        token: Token,
        max_depth: u8,
    ) -> TreeDump<String> {
        if max_depth == 0 {
            return Default::default();
        }

        let node = tree.node(token);
        let desc = node.data.debug_description(tree.children(token).count());
        let max_depth_1 = max_depth - 1;
        let children = tree
            .children(token)
            .map(|child| Rc::new(self.dump_tree(tree, child.token(), max_depth_1)))
            .filter(|child| !(child.children.is_empty() && child.value.is_empty()))
            .collect();
        TreeDump::new(desc, children)
    }

    /// Logs the tree below `token` at debug level, best children first.
    /// Children visited fewer than `min_n` times are summarized.
    pub fn print_tree<G: Game>(
        &self,
        tree: &SearchTree<G>,
        token: Token,
        depth: u8,
        max_depth: u8,
        min_n: u32,
    ) {
        if depth > max_depth {
            return;
        }

        fn indent_prefix(indent_depth: u8) -> String {
            let mut s = String::new();
            for _ in 0..indent_depth {
                s += "  ";
            }
            s += "- ";
            s
        }

        let node = tree.node(token);
        debug!(
            "{}{}",
            indent_prefix(depth),
            node.data.debug_description(tree.children(token).count())
        );
        let mut omitted_stats = NodeStats::default();
        let mut omitted = 0;
        let mut found = false;
        let children = tree
            .children(token)
            .sorted_by(|a, b| b.data.stats.mean().total_cmp(&a.data.stats.mean()))
            .collect::<Vec<_>>();
        let c = children.len();
        for (i, child) in children.into_iter().enumerate() {
            let stats = child.data.stats;
            if stats.n != 0 && (c <= 1 || depth == 0 || stats.n >= min_n || i == 0) {
                found = depth < max_depth;
                self.print_tree(tree, child.token(), depth + 1, max_depth, min_n);
            } else {
                omitted += 1;
                omitted_stats += stats;
            }
        }

        if found && omitted > 0 {
            debug!(
                "{}...[{omitted} omitted] ({})",
                indent_prefix(depth + 1),
                omitted_stats.format_mean()
            );
        }
    }
}
