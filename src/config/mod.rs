/// Blog search configuration loading from config.toml
pub mod blog;

/// Discord token and guild settings from environment variables
pub mod discord;

pub use blog::{BlogConfig, Config};
