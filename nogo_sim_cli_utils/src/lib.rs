/// Agent argument strings and the player driving one side of a game.
pub mod agent;

/// Command-line search options and the search variants they build.
pub mod cli_args;

pub use agent::{AgentConfig, AgentConfigError, MCTSFlavor, Player};
pub use cli_args::{GenericSearch, RandomSearch, SearchAlgorithm, SearchConfig};
