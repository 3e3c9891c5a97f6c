//! Bot layer - Discord-specific interface, command handlers and bot startup
//!
//! This module wires the `/blog` search and utility commands into a poise
//! framework, routes component interactions from result messages, and holds
//! the shared state every invocation reads from.

/// Discord command implementations (blog search, general)
pub mod commands;
/// Discord interaction handlers (select menus and buttons)
pub mod handlers;
/// Embed and component rendering
pub mod views;

use crate::{config::Config, core::cache::ArticleCache, errors::Error};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Shared data available to all bot commands and interaction handlers.
#[derive(Debug)]
pub struct BotData {
    /// Current article snapshot, refreshed in the background
    pub articles: Arc<ArticleCache>,
    /// Application configuration
    pub config: Arc<Config>,
}

impl BotData {
    /// Creates a new `BotData` from the article cache and configuration.
    #[must_use]
    pub const fn new(articles: Arc<ArticleCache>, config: Arc<Config>) -> Self {
        Self { articles, config }
    }
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            let reply = poise::CreateReply::default()
                .content(format!("An error occurred: {error}"))
                .ephemeral(true);
            if let Err(e) = ctx.send(reply).await {
                error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, BotData, Error>,
    data: &BotData,
) -> Result<(), Error> {
    if let serenity::FullEvent::InteractionCreate {
        interaction: serenity::Interaction::Component(component),
    } = event
    {
        handlers::component::handle(ctx, component, data).await?;
    }
    Ok(())
}

/// Builds the poise framework and runs the client until it stops.
#[instrument(skip(token, data))]
pub async fn run_bot(token: String, data: BotData) -> Result<(), Error> {
    let dev_guild = crate::config::discord::get_dev_guild_id();

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![commands::blog(), commands::ping(), commands::help()],
            on_error: |error| Box::pin(on_error(error)),
            event_handler: |ctx, event, framework, data| {
                Box::pin(event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                if let Some(guild_id) = dev_guild {
                    let guild_id = serenity::GuildId::new(guild_id);
                    poise::builtins::register_in_guild(
                        ctx,
                        &framework.options().commands,
                        guild_id,
                    )
                    .await?;
                    info!("Registered commands in guild {}", guild_id);
                } else {
                    info!("Registering commands globally...");
                    poise::builtins::register_globally(ctx, &framework.options().commands)
                        .await?;
                }
                Ok(data)
            })
        })
        .build();

    // Slash commands and components need no privileged intents
    let intents = serenity::GatewayIntents::non_privileged();

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {:?}", e))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {:?}", e))?;
    Ok(())
}

pub use commands::*;
