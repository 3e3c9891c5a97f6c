//! Rendering of search outcomes into Discord embeds and components.

use crate::core::{
    action::{BlogAction, DISPLAY_ID},
    article::Article,
    pagination::Direction,
    search::ResultPage,
};
use poise::serenity_prelude as serenity;
use tracing::warn;

const FAILURE_COLOR: u32 = 0x00E7_4C3C;

// Discord limits
const OPTION_TEXT_LIMIT: usize = 100;
const FIELD_NAME_LIMIT: usize = 256;
const FIELD_VALUE_LIMIT: usize = 1024;
const DESCRIPTION_LIMIT: usize = 4096;

/// Value limit for fields on a result page. Five entries at this size plus the
/// name, title, search term and footer stay under the 6000 character embed total.
pub const RESULT_FIELD_VALUE_LIMIT: usize = 850;

/// Cuts `text` to at most `limit` characters, marking the cut with an ellipsis.
fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(limit.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Embed for user facing errors.
#[must_use]
pub fn failure_embed(title: &str, description: &str) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(title)
        .description(description)
        .color(FAILURE_COLOR)
}

/// Full view of a single article.
#[must_use]
pub fn article_embed(article: &Article, color: u32) -> serenity::CreateEmbed {
    let mut embed = serenity::CreateEmbed::new()
        .title(truncate(&article.title, FIELD_NAME_LIMIT))
        .url(&article.url)
        .color(color);
    if !article.summary.is_empty() {
        embed = embed.description(truncate(&article.summary, DESCRIPTION_LIMIT));
    }
    if !article.authors.is_empty() {
        embed = embed.field("Authors", truncate(&article.authors, FIELD_VALUE_LIMIT), true);
    }
    if !article.date.is_empty() {
        embed = embed.field("Published", &article.date, true);
    }
    embed
}

/// Name and value of the result field for `article`, the value capped at `value_limit`.
///
/// The summary is shortened first so the URL survives whenever it fits.
#[must_use]
pub fn article_field(article: &Article, value_limit: usize) -> (String, String) {
    let authors = truncate(&article.authors, OPTION_TEXT_LIMIT);
    // "*" + authors + "*\n" + summary + "\n" + url
    let fixed = authors.chars().count() + article.url.chars().count() + 4;
    let summary = truncate(&article.summary, value_limit.saturating_sub(fixed));

    (
        truncate(&format!("{}, {}", article.title, article.date), FIELD_NAME_LIMIT),
        truncate(
            &format!("*{authors}*\n{summary}\n{}", article.url),
            value_limit,
        ),
    )
}

/// Both results of a two-match search, with no controls.
#[must_use]
pub fn pair_embed(query: &str, articles: [&Article; 2], color: u32) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(format!("Blog: {query:?}"))
        .fields(articles.into_iter().map(|article| {
            let (name, value) = article_field(article, FIELD_VALUE_LIMIT);
            (name, value, true)
        }))
        .color(color)
}

/// One page of results with the search term and page footer.
#[must_use]
pub fn results_embed(page: &ResultPage<'_>, color: u32) -> serenity::CreateEmbed {
    let search_term = ("Search Term".to_string(), format!("{:?}", page.query), false);
    let entries = page.entries.iter().map(|article| {
        let (name, value) = article_field(article, RESULT_FIELD_VALUE_LIMIT);
        (name, value, false)
    });

    serenity::CreateEmbed::new()
        .title(format!("Blog: {} Results", page.total))
        .fields(std::iter::once(search_term).chain(entries))
        .footer(serenity::CreateEmbedFooter::new(page.state.footer()))
        .color(color)
}

/// Select menu option for `article`; the URL is the option value.
///
/// Returns `None` when the URL is too long to be an option value, since a
/// single oversized value makes Discord reject the whole message.
#[must_use]
pub fn article_option(article: &Article) -> Option<serenity::CreateSelectMenuOption> {
    if article.url.chars().count() > OPTION_TEXT_LIMIT {
        warn!("Leaving {} out of the select menu: URL too long", article.url);
        return None;
    }
    let option = serenity::CreateSelectMenuOption::new(
        truncate(&article.title, OPTION_TEXT_LIMIT),
        article.url.clone(),
    );
    Some(if article.authors.is_empty() {
        option
    } else {
        option.description(truncate(&article.authors, OPTION_TEXT_LIMIT))
    })
}

/// Prev/Next buttons carrying `query` in their identifiers.
#[must_use]
pub fn paginate_buttons(query: &str) -> Vec<serenity::CreateButton> {
    vec![
        serenity::CreateButton::new(BlogAction::paging(Direction::Prev, query).custom_id())
            .label("Prev Page")
            .style(serenity::ButtonStyle::Secondary)
            .emoji(serenity::ReactionType::Unicode("⬅️".to_string())),
        serenity::CreateButton::new(BlogAction::paging(Direction::Next, query).custom_id())
            .label("Next Page")
            .style(serenity::ButtonStyle::Secondary)
            .emoji(serenity::ReactionType::Unicode("➡️".to_string())),
    ]
}

/// Component rows under a result page: the select menu, then paging buttons if needed.
#[must_use]
pub fn results_components(page: &ResultPage<'_>) -> Vec<serenity::CreateActionRow> {
    let options: Vec<_> = page.entries.iter().filter_map(|a| article_option(a)).collect();

    let mut rows = Vec::new();
    if !options.is_empty() {
        let menu = serenity::CreateSelectMenu::new(
            DISPLAY_ID,
            serenity::CreateSelectMenuKind::String { options },
        )
        .placeholder("Display Blog Post");
        rows.push(serenity::CreateActionRow::SelectMenu(menu));
    }
    if page.has_navigation() {
        rows.push(serenity::CreateActionRow::Buttons(paginate_buttons(
            &page.query,
        )));
    }
    rows
}
