//! Random move bot - plays a random legal move.
//!
//! This is the simplest possible UCI bot, useful as a template for more
//! sophisticated bots. The board representation behind it is chosen once
//! at startup from `config.json`.

mod chooser;
mod config;
mod session;

pub use chooser::{MoveChooser, RandomChooser};
pub use config::{ConfigError, EngineConfig};
pub use session::{Session, ENGINE_AUTHOR, ENGINE_NAME};
