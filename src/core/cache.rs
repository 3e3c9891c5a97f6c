//! In-memory article snapshot and its periodic refresher.
//!
//! The snapshot is replaced wholesale by a single pointer swap, so any reader
//! sees either the previous or the next complete list, never a mix.

use crate::core::article::{Article, ArticleSource};
use crate::errors::Result;
use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{error, info, instrument, trace};

/// A complete, immutable list of articles and when it was fetched.
#[derive(Debug, Clone)]
pub struct ArticleSnapshot {
    /// Articles in index order
    pub articles: Vec<Article>,
    /// When the articles were fetched
    pub fetched_at: DateTime<Utc>,
}

/// Single-writer, multi-reader holder of the current article snapshot.
#[derive(Debug)]
pub struct ArticleCache {
    current: ArcSwap<ArticleSnapshot>,
}

impl ArticleCache {
    /// Creates a cache holding `articles`.
    #[must_use]
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            current: ArcSwap::from_pointee(ArticleSnapshot {
                articles,
                fetched_at: Utc::now(),
            }),
        }
    }

    /// Performs the startup fetch. A failure here is fatal to the caller.
    #[instrument(skip(source))]
    pub async fn load(source: &dyn ArticleSource) -> Result<Self> {
        info!("Loading blog articles...");
        let articles = source.fetch().await?;
        info!("Loaded {} blog articles.", articles.len());
        Ok(Self::new(articles))
    }

    /// Returns the current snapshot. Holding it does not block refreshes.
    #[must_use]
    pub fn snapshot(&self) -> Arc<ArticleSnapshot> {
        self.current.load_full()
    }

    /// Swaps in a new snapshot.
    pub fn replace(&self, articles: Vec<Article>) {
        self.current.store(Arc::new(ArticleSnapshot {
            articles,
            fetched_at: Utc::now(),
        }));
    }

    /// Fetches from `source` and swaps on success; keeps the old snapshot on failure.
    pub async fn refresh(&self, source: &dyn ArticleSource) -> Result<usize> {
        info!("Refreshing blog articles cache...");
        let articles = source.fetch().await?;
        let count = articles.len();
        self.replace(articles);
        info!("Blog articles cache refreshed with {} items.", count);
        Ok(count)
    }
}

/// Spawns the background task refreshing `cache` every `period`.
///
/// The first refresh happens one full period after the call. Failures are
/// logged and the stale snapshot stays in place until the next tick.
pub fn spawn_refresher(
    cache: Arc<ArticleCache>,
    source: Arc<dyn ArticleSource>,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            trace!("Blog refresh tick");
            if let Err(e) = cache.refresh(source.as_ref()).await {
                error!("Error refreshing blog articles: {}", e);
            }
        }
    })
}
