/// The current version of greetings, sourced from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod commands;
pub mod config;
pub mod error;
pub mod greeting;
pub mod repeat;
