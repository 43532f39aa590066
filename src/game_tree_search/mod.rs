mod game_trait;

pub use game_trait::*;
