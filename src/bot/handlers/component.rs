//! Component interaction handling for blog result messages.
//!
//! Paging clicks recompute the requested page from the footer of the clicked
//! message and update it in place. Selecting an article strips the controls
//! from the private result message and posts the article publicly.

use crate::{
    bot::{BotData, views},
    core::{
        action::{ActionError, BlogAction},
        article::Article,
        pagination::{Direction, PageStateError},
        search::{NavigationError, find_by_url, turn_page},
    },
    errors::Result,
};
use poise::serenity_prelude::{self as serenity, Mentionable};
use tracing::{debug, info, instrument, trace};

/// Routes a component interaction to the matching blog action.
///
/// Components from other features are ignored.
#[instrument(skip_all, fields(custom_id = %component.data.custom_id))]
pub async fn handle(
    ctx: &serenity::Context,
    component: &serenity::ComponentInteraction,
    data: &BotData,
) -> Result<()> {
    let selected: &[String] = match &component.data.kind {
        serenity::ComponentInteractionDataKind::StringSelect { values } => values,
        _ => &[],
    };

    let action = match BlogAction::decode(&component.data.custom_id, selected) {
        Ok(action) => action,
        Err(ActionError::ForeignNamespace(id)) => {
            trace!("Unhandled component interaction: {}", id);
            return Ok(());
        }
        Err(e) => {
            debug!("Ignoring blog component: {}", e);
            component
                .create_response(ctx, serenity::CreateInteractionResponse::Acknowledge)
                .await?;
            return Ok(());
        }
    };

    let color = data.config.blog.accent_color;
    match action {
        BlogAction::Display { url } => display(ctx, component, data, &url, color).await,
        BlogAction::Prev { query } => {
            paginate(ctx, component, data, &query, Direction::Prev, color).await
        }
        BlogAction::Next { query } => {
            paginate(ctx, component, data, &query, Direction::Next, color).await
        }
    }
}

fn page_footer(message: &serenity::Message) -> Option<&str> {
    message
        .embeds
        .first()
        .and_then(|embed| embed.footer.as_ref())
        .map(|footer| footer.text.as_str())
}

/// Response to a paging click given the clicked message's footer.
///
/// Anything that prevents showing the requested page yields a plain
/// acknowledgement, leaving the message as it was.
#[must_use]
pub fn navigation_response(
    articles: &[Article],
    query: &str,
    footer: Option<&str>,
    direction: Direction,
    color: u32,
) -> serenity::CreateInteractionResponse {
    let page = footer
        .ok_or(NavigationError::State(PageStateError::Missing))
        .and_then(|footer| turn_page(articles, query, footer, direction));

    match page {
        Ok(page) => serenity::CreateInteractionResponse::UpdateMessage(
            serenity::CreateInteractionResponseMessage::new()
                .embed(views::results_embed(&page, color))
                .components(views::results_components(&page)),
        ),
        Err(e) => {
            debug!("Leaving blog results unchanged: {}", e);
            serenity::CreateInteractionResponse::Acknowledge
        }
    }
}

async fn paginate(
    ctx: &serenity::Context,
    component: &serenity::ComponentInteraction,
    data: &BotData,
    query: &str,
    direction: Direction,
    color: u32,
) -> Result<()> {
    let response = {
        let snapshot = data.articles.snapshot();
        navigation_response(
            &snapshot.articles,
            query,
            page_footer(&component.message),
            direction,
            color,
        )
    };

    component.create_response(ctx, response).await?;
    Ok(())
}

/// Embed to post for a selected article, or `None` when the URL is no longer
/// in the snapshot and the selection gets no response at all.
#[must_use]
pub fn selection_embed(articles: &[Article], url: &str, color: u32) -> Option<serenity::CreateEmbed> {
    let Some(article) = find_by_url(articles, url) else {
        debug!("Selected article {} is no longer available", url);
        return None;
    };
    Some(views::article_embed(article, color))
}

async fn display(
    ctx: &serenity::Context,
    component: &serenity::ComponentInteraction,
    data: &BotData,
    url: &str,
    color: u32,
) -> Result<()> {
    let Some(embed) = selection_embed(&data.articles.snapshot().articles, url, color) else {
        return Ok(());
    };

    info!("{} displayed {}", component.user.tag(), url);

    component
        .create_response(
            ctx,
            serenity::CreateInteractionResponse::UpdateMessage(
                serenity::CreateInteractionResponseMessage::new().components(Vec::new()),
            ),
        )
        .await?;

    component
        .create_followup(
            ctx,
            serenity::CreateInteractionResponseFollowup::new()
                .content(format!("{}:", component.user.mention()))
                .embed(embed)
                .allowed_mentions(serenity::CreateAllowedMentions::new()),
        )
        .await?;
    Ok(())
}
