//! Blog search business logic.
//!
//! Turns a query and an article snapshot into a framework-agnostic outcome
//! that the bot layer renders. Every call recomputes from the snapshot it is
//! given, so paging after a refresh may see a different result set.

use crate::core::{
    article::Article,
    matcher::match_all,
    pagination::{Direction, PAGE_SIZE, PageState, PageStateError, page_count, page_slice},
};
use thiserror::Error;

/// What to show in response to a `/blog` query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// Nothing matched
    NoResults,
    /// Exactly one match, shown in full
    Single(&'a Article),
    /// Exactly two matches, listed together without controls
    Pair([&'a Article; 2]),
    /// Three or more matches, shown one page at a time
    Paged(ResultPage<'a>),
}

/// One page of a paginated result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPage<'a> {
    /// Query that produced the results
    pub query: String,
    /// Number of matches across all pages
    pub total: usize,
    /// Position of this page
    pub state: PageState,
    /// Matches on this page, at most [`PAGE_SIZE`]
    pub entries: Vec<&'a Article>,
}

impl ResultPage<'_> {
    /// Whether Prev/Next buttons belong under this page.
    #[must_use]
    pub const fn has_navigation(&self) -> bool {
        self.total > PAGE_SIZE
    }
}

/// Why a paging click leaves the message untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The clicked message does not carry a readable page footer
    #[error(transparent)]
    State(#[from] PageStateError),
    /// The requested page is before the first or after the last page
    #[error("page {requested} is outside 1..={total_pages}")]
    OutOfRange {
        /// Page the click asked for
        requested: usize,
        /// Pages available for the current snapshot
        total_pages: usize,
    },
}

/// Searches `articles` for an already validated `query`.
#[must_use]
pub fn search<'a>(articles: &'a [Article], query: &str) -> SearchOutcome<'a> {
    let ordered = match_all(articles, query).into_ordered();

    match ordered.as_slice() {
        [] => SearchOutcome::NoResults,
        [only] => SearchOutcome::Single(*only),
        [first, second] => SearchOutcome::Pair([*first, *second]),
        _ => {
            let total = ordered.len();
            SearchOutcome::Paged(ResultPage {
                query: query.to_string(),
                total,
                state: PageState::first(page_count(total)),
                entries: page_slice(&ordered, 1).to_vec(),
            })
        }
    }
}

/// Computes the page a Prev/Next click leads to.
///
/// The current page is read from `footer`; the result set is rebuilt from
/// `articles`.
pub fn turn_page<'a>(
    articles: &'a [Article],
    query: &str,
    footer: &str,
    direction: Direction,
) -> Result<ResultPage<'a>, NavigationError> {
    let shown = PageState::parse_footer(footer)?;
    let requested = shown.step(direction).unwrap_or(0);

    let ordered = match_all(articles, query).into_ordered();
    let total = ordered.len();
    let state = PageState {
        current: requested,
        total_pages: page_count(total),
    };
    if !state.in_range() {
        return Err(NavigationError::OutOfRange {
            requested,
            total_pages: state.total_pages,
        });
    }

    Ok(ResultPage {
        query: query.to_string(),
        total,
        state,
        entries: page_slice(&ordered, requested).to_vec(),
    })
}

/// Finds the article with exactly this URL.
#[must_use]
pub fn find_by_url<'a>(articles: &'a [Article], url: &str) -> Option<&'a Article> {
    articles.iter().find(|article| article.url == url)
}
