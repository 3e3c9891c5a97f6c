//! Blog search command - `/blog <query>`.
//!
//! Zero matches and validation failures reply privately. One or two matches
//! are posted publicly without controls. Three or more reply privately with the
//! first page, a select menu and, past one page, Prev/Next buttons.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, views},
        core::{pagination::validate_query, search::search},
        errors::{Error, Result},
    };
    use tracing::{info, instrument};

    /// Search the Go blog.
    ///
    /// Matches the query against article titles first, then summaries.
    #[poise::command(slash_command)]
    #[instrument(skip(ctx))]
    pub async fn blog(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Words to look for in titles and summaries"] query: String,
    ) -> Result<()> {
        info!("{} used blog({:?})", ctx.author().tag(), query);

        let reply = if let Err(e) = validate_query(&query) {
            poise::CreateReply::default()
                .embed(views::failure_embed("Error", &e.to_string()))
                .ephemeral(true)
        } else {
            let snapshot = ctx.data().articles.snapshot();
            let color = ctx.data().config.blog.accent_color;
            super::search_reply(&search(&snapshot.articles, &query), &query, color)
        };

        ctx.send(reply).await?;
        Ok(())
    }
}

use crate::{bot::views, core::search::SearchOutcome};

/// Builds the initial response for a search outcome.
#[must_use]
pub fn search_reply(outcome: &SearchOutcome<'_>, query: &str, color: u32) -> poise::CreateReply {
    let reply = poise::CreateReply::default();
    match outcome {
        SearchOutcome::NoResults => reply
            .embed(views::failure_embed(
                "Error",
                &format!("No results found for {query:?}"),
            ))
            .ephemeral(true),
        SearchOutcome::Single(article) => reply.embed(views::article_embed(article, color)),
        SearchOutcome::Pair(articles) => reply.embed(views::pair_embed(query, *articles, color)),
        SearchOutcome::Paged(page) => reply
            .embed(views::results_embed(page, color))
            .components(views::results_components(page))
            .ephemeral(true),
    }
}

pub use inner::blog;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::search::search;
    use crate::test_utils::{article, numbered_articles};

    const COLOR: u32 = 0x00AD_D8;

    #[test]
    fn test_no_results_reply_is_private_without_components() {
        let articles = numbered_articles("Post", 3);
        let reply = search_reply(&search(&articles, "abc"), "abc", COLOR);
        assert_eq!(reply.ephemeral, Some(true));
        assert_eq!(reply.embeds.len(), 1);
        assert!(reply.components.is_none());
    }

    #[test]
    fn test_single_result_reply_is_public_without_components() {
        let articles = vec![article("Go 1.21", "Release"), article("Modules", "Deps")];
        let reply = search_reply(&search(&articles, "modules"), "modules", COLOR);
        assert_ne!(reply.ephemeral, Some(true));
        assert_eq!(reply.embeds.len(), 1);
        assert!(reply.components.is_none());
    }

    #[test]
    fn test_pair_reply_is_public_without_components() {
        let articles = numbered_articles("Post", 2);
        let reply = search_reply(&search(&articles, "post"), "post", COLOR);
        assert_ne!(reply.ephemeral, Some(true));
        assert!(reply.components.is_none());
    }

    #[test]
    fn test_paged_reply_is_private_with_controls() {
        let articles = numbered_articles("Post", 7);
        let reply = search_reply(&search(&articles, "post"), "post", COLOR);
        assert_eq!(reply.ephemeral, Some(true));
        assert_eq!(reply.components.map(|rows| rows.len()), Some(2));
    }
}
