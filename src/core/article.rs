//! Article model and retrieval from the Go blog index.
//!
//! The index page lists every post as a `p.blogtitle` paragraph (link, date and
//! authors) followed by an optional `p.blogsummary` paragraph. Parsing is kept
//! separate from fetching so it can be exercised without the network.

use crate::errors::{Error, Result};
use async_trait::async_trait;
use reqwest::Url;
use scraper::{Html, Selector};
use tracing::{debug, info, warn};

/// A single blog post. The URL uniquely identifies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Post title
    pub title: String,
    /// Author names, comma separated
    pub authors: String,
    /// One paragraph summary, may be empty
    pub summary: String,
    /// Publication date as printed on the index
    pub date: String,
    /// Absolute URL of the post
    pub url: String,
}

/// Somewhere a full list of articles can be fetched from.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetches the complete, ordered list of articles.
    async fn fetch(&self) -> Result<Vec<Article>>;
}

/// Fetches articles from the Go blog index page.
#[derive(Debug, Clone)]
pub struct GoBlogSource {
    client: reqwest::Client,
    index_url: String,
}

impl GoBlogSource {
    /// Creates a source reading the given index page.
    #[must_use]
    pub fn new(client: reqwest::Client, index_url: impl Into<String>) -> Self {
        Self {
            client,
            index_url: index_url.into(),
        }
    }
}

#[async_trait]
impl ArticleSource for GoBlogSource {
    async fn fetch(&self) -> Result<Vec<Article>> {
        debug!("Fetching blog index from {}", self.index_url);
        let body = self
            .client
            .get(&self.index_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let articles = parse_index(&body, &self.index_url)?;
        info!("Parsed {} articles from {}", articles.len(), self.index_url);
        Ok(articles)
    }
}

fn selector(css: &'static str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Parse {
        message: format!("Invalid selector {css:?}: {e}"),
    })
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parses the blog index HTML into articles, resolving links against `base_url`.
///
/// # Errors
/// Returns [`Error::Parse`] if `base_url` is not a valid URL or no article could
/// be found on the page.
pub fn parse_index(html: &str, base_url: &str) -> Result<Vec<Article>> {
    let base = Url::parse(base_url).map_err(|e| Error::Parse {
        message: format!("Invalid base URL {base_url:?}: {e}"),
    })?;

    let document = Html::parse_document(html);
    let entries = selector("p.blogtitle, p.blogsummary")?;
    let link = selector("a")?;
    let date = selector("span.date")?;
    let author = selector("span.author")?;

    let mut articles: Vec<Article> = Vec::new();
    // Summaries only attach to the title paragraph directly before them.
    let mut last_was_title = false;

    for element in document.select(&entries) {
        let is_title = element.value().classes().any(|class| class == "blogtitle");

        if !is_title {
            if last_was_title {
                if let Some(article) = articles.last_mut() {
                    article.summary = collapse_whitespace(&element.text().collect::<String>());
                }
            }
            last_was_title = false;
            continue;
        }

        last_was_title = false;
        let Some(anchor) = element.select(&link).next() else {
            warn!("Skipping blog entry without a link");
            continue;
        };
        let Some(href) = anchor.value().attr("href") else {
            warn!("Skipping blog entry without an href");
            continue;
        };
        let url = match base.join(href) {
            Ok(url) => url.to_string(),
            Err(e) => {
                warn!("Skipping blog entry with bad href {href:?}: {e}");
                continue;
            }
        };

        let authors = element
            .select(&author)
            .map(|span| collapse_whitespace(&span.text().collect::<String>()))
            .filter(|name| !name.is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        articles.push(Article {
            title: collapse_whitespace(&anchor.text().collect::<String>()),
            authors,
            summary: String::new(),
            date: element
                .select(&date)
                .next()
                .map(|span| collapse_whitespace(&span.text().collect::<String>()))
                .unwrap_or_default(),
            url,
        });
        last_was_title = true;
    }

    if articles.is_empty() {
        return Err(Error::Parse {
            message: format!("No articles found at {base_url}"),
        });
    }

    Ok(articles)
}
