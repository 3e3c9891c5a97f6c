//! General Discord commands - ping, help, and other utility commands.
//! These commands don't search anything and provide basic bot functionality
//! and user assistance.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };
    use std::fmt::Write;
    use tracing::info;

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        info!("Ping command received from user: {}", ctx.author().name);
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    ///
    /// Also reports how many articles are searchable and when they were last fetched.
    #[poise::command(slash_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let snapshot = ctx.data().articles.snapshot();

        let mut help_text = String::from(
            "**Blog Search Help**\n\
            • `/blog <query>` - Searches Go blog titles and summaries (3-20 characters).\n\
            • `/ping` - Checks if the bot is responsive.\n\
            • `/help` - Shows this help message.\n\n",
        );
        write!(
            &mut help_text,
            "{} articles indexed, last refreshed {}.",
            snapshot.articles.len(),
            snapshot.fetched_at.format("%Y-%m-%d %H:%M UTC")
        )?;

        ctx.send(
            poise::CreateReply::default()
                .content(help_text)
                .ephemeral(true),
        )
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
