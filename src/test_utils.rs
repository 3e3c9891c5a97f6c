//! Shared test utilities for the blog bot.
//!
//! Helpers for building articles and snapshots with predictable URLs so tests
//! can assert on ordering and lookups.

use crate::core::article::{Article, ArticleSource};
use crate::errors::{Error, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Creates an article with the given title and summary.
///
/// The URL is derived from the title so it stays unique as long as titles do.
#[must_use]
pub fn article(title: &str, summary: &str) -> Article {
    Article {
        title: title.to_string(),
        authors: "The Go Team".to_string(),
        summary: summary.to_string(),
        date: "1 January 2024".to_string(),
        url: format!(
            "https://go.dev/blog/{}",
            title.to_lowercase().replace(' ', "-")
        ),
    }
}

/// Creates `count` articles titled `"{prefix} 1"`, `"{prefix} 2"`, ...
#[must_use]
pub fn numbered_articles(prefix: &str, count: usize) -> Vec<Article> {
    (1..=count)
        .map(|n| article(&format!("{prefix} {n}"), "Numbered test post"))
        .collect()
}

/// An [`ArticleSource`] that replays a scripted sequence of fetch results.
///
/// Once the script runs out every further fetch fails.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    responses: Mutex<VecDeque<Option<Vec<Article>>>>,
}

impl ScriptedSource {
    /// Creates a source; `None` entries produce a fetch error.
    #[must_use]
    pub fn new(responses: Vec<Option<Vec<Article>>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
        }
    }
}

#[async_trait]
impl ArticleSource for ScriptedSource {
    async fn fetch(&self) -> Result<Vec<Article>> {
        #[allow(clippy::unwrap_used)]
        let next = self.responses.lock().unwrap().pop_front().flatten();
        next.ok_or_else(|| Error::Parse {
            message: "scripted fetch failure".to_string(),
        })
    }
}
