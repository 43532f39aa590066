use std::str::FromStr;
use structopt::StructOpt;

use nogo_sim::prelude::*;
use nogo_sim_search::{
    mcts::{MCTSConfig, MCTS},
    SearchResult,
};

use crate::agent::{AgentConfig, AgentConfigError, MCTSFlavor};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SearchAlgorithm {
    MCTS,
    Random,
}

impl FromStr for SearchAlgorithm {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mcts" => Ok(Self::MCTS),
            "random" => Ok(Self::Random),
            _ => Err("expected mcts|random"),
        }
    }
}

#[derive(Debug, StructOpt, Clone, Default)]
pub struct SearchConfig {
    #[structopt(
        short = "A",
        long = "--algorithm",
        help = "mcts|random, Monte-Carlo Tree Search or uniformly random legal moves"
    )]
    pub algorithm: Option<SearchAlgorithm>,

    #[structopt(
        short = "I",
        long = "--simulations",
        help = "MCTS: number of iterations per move (default 200, at most 8000)"
    )]
    pub simulations: Option<u32>,

    #[structopt(
        short = "C",
        long = "--mcts-c",
        help = "MCTS: exploration constant. 0 descends by mean reward only."
    )]
    pub mcts_c: Option<f64>,

    #[structopt(long = "--rollout-samples", help = "MCTS: random playouts per iteration")]
    pub rollout_samples: Option<u32>,

    #[structopt(short = "S", long = "--seed", help = "Random seed for the agent")]
    pub seed: Option<u64>,

    #[structopt(short = "D", long = "--debug", help = "Print debug info")]
    pub debug: bool,
}

impl SearchConfig {
    /// Agent configuration playing `role`, equivalent to these flags. Fails
    /// on the same values the agent argument string rejects.
    pub fn agent_config(&self, name: &str, role: Color) -> Result<AgentConfig, AgentConfigError> {
        let mcts = match self.algorithm.unwrap_or(SearchAlgorithm::MCTS) {
            SearchAlgorithm::MCTS => Some(MCTSFlavor::Tree),
            SearchAlgorithm::Random => None,
        };
        let config = AgentConfig {
            name: name.to_string(),
            role,
            seed: self.seed,
            mcts,
            simulations: self.simulations,
            exploration: self.mcts_c.unwrap_or(MCTSConfig::STANDARD.exploration),
            rollout_samples: self.rollout_samples.unwrap_or(MCTSConfig::STANDARD.rollout_samples),
            debug: self.debug,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }
}

/// Plays a uniformly random legal move.
#[derive(Debug, Clone)]
pub struct RandomSearch {
    pub rng: RngState,
}

impl RandomSearch {
    pub fn new(rng: RngState) -> Self {
        Self { rng }
    }

    /// Shuffles the candidates of `who` and returns the first legal one.
    pub fn decide<G: Game>(&mut self, state: &G, who: Color) -> SearchResult<G> {
        let action = state.random_move(who, &mut self.rng).map(|(action, _)| action);
        SearchResult {
            action,
            ..SearchResult::game_over()
        }
    }
}

pub enum GenericSearch {
    MCTS(MCTS),
    Random(RandomSearch),
}

impl GenericSearch {
    /// Selects a move for `who` at `board`. `budget` applies to MCTS only.
    pub fn decide(
        &mut self,
        board: &Board,
        who: Color,
        budget: Option<u32>,
    ) -> SearchResult<Board> {
        match self {
            Self::MCTS(s) => s.decide(budget, board, who, &board.action_space(who)),
            Self::Random(s) => s.decide(board, who),
        }
    }
}

impl std::fmt::Debug for GenericSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MCTS(s) => f.debug_tuple("MCTS").field(&s.config).finish(),
            Self::Random(_) => f.write_str("Random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_algorithm_from_str() {
        assert_eq!(Ok(SearchAlgorithm::MCTS), "MCTS".parse());
        assert_eq!(Ok(SearchAlgorithm::Random), "random".parse());
        assert!("minimax".parse::<SearchAlgorithm>().is_err());
    }

    #[test]
    fn test_flags_parse() {
        let config = SearchConfig::from_iter_safe([
            "prog",
            "--algorithm",
            "mcts",
            "--simulations",
            "50",
            "--mcts-c",
            "1.5",
            "--seed",
            "3",
        ])
        .unwrap();
        assert_eq!(Some(SearchAlgorithm::MCTS), config.algorithm);
        assert_eq!(Some(50), config.simulations);
        assert_eq!(Some(1.5), config.mcts_c);
        assert_eq!(None, config.rollout_samples);
        assert!(!config.debug);

        let agent = config.agent_config("bench", Color::White).unwrap();
        assert_eq!(Color::White, agent.role);
        assert_eq!(Some(MCTSFlavor::Tree), agent.mcts);
        assert_eq!(1.5, agent.exploration);
        assert_eq!(5, agent.rollout_samples);
        assert_eq!(Some(3), agent.seed);
    }

    #[test]
    fn test_flags_reject_unusable_search_parameters() {
        let config = SearchConfig::from_iter_safe(["prog", "--rollout-samples", "0"]).unwrap();
        assert_eq!(Some(0), config.rollout_samples);
        assert_eq!(
            Err(AgentConfigError::InvalidValue {
                key: "samples".to_string(),
                value: "0".to_string()
            }),
            config.agent_config("bench", Color::Black)
        );

        let config = SearchConfig::from_iter_safe(["prog", "--mcts-c", "NaN"]).unwrap();
        assert!(config.agent_config("bench", Color::Black).is_err());

        let config = SearchConfig::from_iter_safe(["prog", "--rollout-samples", "2"]).unwrap();
        assert_eq!(2, config.agent_config("bench", Color::Black).unwrap().rollout_samples);
    }

    #[test]
    fn test_random_search_plays_only_legal_move() {
        let b = Board::from_rows(&["OX", ".."]).unwrap();
        for seed in 0..8 {
            let mut s = RandomSearch::new(RngState::from_seed_u64(seed));
            assert_eq!(Some(Place::new(3, Color::Black)), s.decide(&b, Color::Black).action);
        }
    }

    #[test]
    fn test_random_search_game_over() {
        let b = Board::from_rows(&["XX", "O."]).unwrap();
        let mut s = RandomSearch::new(RngState::from_seed_u64(0));
        assert!(s.decide(&b, Color::Black).is_game_over());
    }
}
