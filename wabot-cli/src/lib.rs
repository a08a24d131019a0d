//! # wabot-cli
//!
//! Entry-point wiring for the bot: env config, component assembly, and the
//! message-processing facade. The binary adds a stdin REPL and gateway delivery on top.

pub mod assembly;
pub mod config;
pub mod facade;

pub use assembly::{build_components, BotComponents};
pub use config::BotConfig;
pub use facade::process_message;
