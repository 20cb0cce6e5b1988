pub mod config;
pub mod game;
pub mod mapgen;
pub mod rng;
pub mod state;
pub mod types;

pub use config::GameConfig;
pub use game::Game;
pub use rng::GameRng;
pub use state::{Enemy, GameState, Item, Map, Player};
pub use types::*;
