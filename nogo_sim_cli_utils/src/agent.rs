use std::{collections::BTreeMap, str::FromStr};

use log::{debug, info};
use nogo_sim::prelude::*;
use nogo_sim_search::mcts::{MCTSConfig, MCTS};

use crate::cli_args::{GenericSearch, RandomSearch};

/// Characters that may not appear in an agent name.
pub const NAME_FORBIDDEN_CHARS: &str = "[]():; ";

const DEFAULT_ARGS: &str = "name=unknown role=unknown";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgentConfigError {
    #[error("invalid name: {0}")]
    InvalidName(String),
    #[error("invalid role: {0}")]
    InvalidRole(String),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Label of the `mcts=` argument. Both flavors run the same UCT search.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MCTSFlavor {
    /// `mcts=N=<count>`
    Naive,
    /// `mcts=T=<count>`
    Tree,
}

/// Parsed agent arguments, such as `name=alice role=black mcts=T=500 seed=7`.
///
/// Pairs are separated by whitespace and split at the first `=`. Later pairs
/// override earlier ones, and the string is read after the defaults
/// `name=unknown role=unknown`. Unrecognized keys are kept in `meta`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentConfig {
    pub name: String,
    pub role: Color,
    pub seed: Option<u64>,
    /// `None` plays uniformly random legal moves.
    pub mcts: Option<MCTSFlavor>,
    /// Requested simulation count, `None` for the default.
    pub simulations: Option<u32>,
    pub exploration: f64,
    pub rollout_samples: u32,
    pub debug: bool,
    pub meta: BTreeMap<String, String>,
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, AgentConfigError> {
    value.parse().map_err(|_| AgentConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_mcts(value: &str) -> Result<(MCTSFlavor, Option<u32>), AgentConfigError> {
    let invalid = || AgentConfigError::InvalidValue {
        key: "mcts".to_string(),
        value: value.to_string(),
    };
    let (flavor, count) = value.split_once('=').unwrap_or((value, ""));
    let flavor = match flavor {
        "N" | "n" => MCTSFlavor::Naive,
        "T" | "t" => MCTSFlavor::Tree,
        _ => return Err(invalid()),
    };
    if count.is_empty() {
        return Ok((flavor, None));
    }
    let count = count.parse::<u32>().map_err(|_| invalid())?;
    Ok((flavor, Some(count.min(MCTSConfig::STANDARD.max_simulations))))
}

impl FromStr for AgentConfig {
    type Err = AgentConfigError;

    fn from_str(args: &str) -> Result<Self, Self::Err> {
        let mut meta = BTreeMap::new();
        for pair in DEFAULT_ARGS.split_whitespace().chain(args.split_whitespace()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            meta.insert(key.to_string(), value.to_string());
        }

        let name = meta.remove("name").unwrap_or_default();
        if name.contains(|c: char| NAME_FORBIDDEN_CHARS.contains(c)) {
            return Err(AgentConfigError::InvalidName(name));
        }
        let role = match meta.remove("role").unwrap_or_default().as_str() {
            "black" => Color::Black,
            "white" => Color::White,
            other => return Err(AgentConfigError::InvalidRole(other.to_string())),
        };
        let seed = meta
            .remove("seed")
            .map(|v| parse_value::<u64>("seed", &v))
            .transpose()?;
        let (mcts, simulations) = match meta.remove("mcts") {
            Some(v) => {
                let (flavor, count) = parse_mcts(&v)?;
                (Some(flavor), count)
            }
            None => (None, None),
        };
        let exploration = meta
            .remove("c")
            .map(|v| parse_value::<f64>("c", &v))
            .transpose()?
            .unwrap_or(MCTSConfig::STANDARD.exploration);
        let rollout_samples = meta
            .remove("samples")
            .map(|v| parse_value::<u32>("samples", &v))
            .transpose()?
            .unwrap_or(MCTSConfig::STANDARD.rollout_samples);
        let debug = meta.remove("debug").is_some();

        let config = Self {
            name,
            role,
            seed,
            mcts,
            simulations,
            exploration,
            rollout_samples,
            debug,
            meta,
        };
        config.validate()?;
        Ok(config)
    }
}

impl AgentConfig {
    /// Rejects search parameters the engine cannot run with: a rollout
    /// sample count of 0 or a non-finite exploration constant.
    pub fn validate(&self) -> Result<(), AgentConfigError> {
        if self.rollout_samples == 0 {
            return Err(AgentConfigError::InvalidValue {
                key: "samples".to_string(),
                value: self.rollout_samples.to_string(),
            });
        }
        if !self.exploration.is_finite() {
            return Err(AgentConfigError::InvalidValue {
                key: "c".to_string(),
                value: self.exploration.to_string(),
            });
        }
        Ok(())
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.meta.get(key).map(|s| s.as_str())
    }

    pub fn mcts_config(&self) -> MCTSConfig {
        MCTSConfig {
            exploration: self.exploration,
            rollout_samples: self.rollout_samples,
            debug: self.debug,
            ..MCTSConfig::STANDARD
        }
    }

    pub fn make_search(&self) -> GenericSearch {
        let rng = RngState::new(self.seed);
        match self.mcts {
            Some(_) => GenericSearch::MCTS(MCTS::new(self.mcts_config(), self.role, rng)),
            None => GenericSearch::Random(RandomSearch::new(rng)),
        }
    }
}

/// One side of a game, choosing moves with the search built from its configuration.
#[derive(Debug)]
pub struct Player {
    pub config: AgentConfig,
    search: GenericSearch,
}

impl Player {
    pub fn new(config: AgentConfig) -> Self {
        let search = config.make_search();
        info!("player {}: role={} search={:?}", config.name, config.role, search);
        Self { config, search }
    }

    pub fn from_args(args: &str) -> Result<Self, AgentConfigError> {
        Ok(Self::new(args.parse()?))
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.config.name
    }

    #[inline]
    pub fn role(&self) -> Color {
        self.config.role
    }

    /// Move for this player's role at `board`, or `None` when it has no legal move.
    pub fn take_action(&mut self, board: &Board) -> Option<Place> {
        let who = self.role();
        let action = self.search.decide(board, who, self.config.simulations).action?;
        if !board.is_legal(action) {
            debug!("player {}: discarding illegal move {action}", self.config.name);
            return None;
        }
        Some(action)
    }
}
