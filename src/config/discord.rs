//! Discord connection settings read from environment variables.
//!
//! These are loaded from the process environment (optionally populated from a
//! `.env` file) rather than config.toml so the token never lands in a
//! checked-in file.

use crate::errors::{Error, Result};

/// Reads the bot token from `DISCORD_BOT_TOKEN`.
pub fn get_bot_token() -> Result<String> {
    std::env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| tracing::error!("DISCORD_BOT_TOKEN not found: {}", e))
        .map_err(Error::EnvVar)
}

/// Gets the development guild id, if configured.
///
/// When set, commands are registered in that guild only, which takes effect
/// immediately instead of waiting for global propagation.
#[must_use]
pub fn get_dev_guild_id() -> Option<u64> {
    std::env::var("DEV_GUILD_ID")
        .ok()
        .and_then(|raw| parse_guild_id(&raw))
}

fn parse_guild_id(raw: &str) -> Option<u64> {
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => {
            tracing::warn!("Ignoring invalid DEV_GUILD_ID {raw:?}");
            None
        }
        Ok(id) => Some(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_guild_id() {
        assert_eq!(parse_guild_id("123456789012345678"), Some(123_456_789_012_345_678));
        assert_eq!(parse_guild_id(" 42 "), Some(42));
        assert_eq!(parse_guild_id("0"), None);
        assert_eq!(parse_guild_id("not-a-number"), None);
    }
}
