//! Unified error types and result handling.

use thiserror::Error;

/// Errors surfaced by the bot and its article pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description
        message: String,
    },

    /// The article index could not be fetched
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The article index was fetched but could not be understood
    #[error("Parse error: {message}")]
    Parse {
        /// Human readable description
        message: String,
    },

    /// A required environment variable was missing or invalid
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Formatting a message failed
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Serenity/Poise framework error
    #[error("Serenity/Poise framework error: {0}")]
    #[allow(clippy::enum_variant_names)]
    FrameworkError(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::FrameworkError(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
