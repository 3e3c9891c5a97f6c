//! Query validation and pagination state.
//!
//! Pagination is stateless on the server: the current page travels in the
//! rendered footer (`Page <cur> of <total>`) and is parsed back on every
//! navigation click.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Results shown per page. Also the select menu option count.
pub const PAGE_SIZE: usize = 5;
/// Shortest accepted query, in characters
pub const MIN_QUERY_LEN: usize = 3;
/// Longest accepted query, in characters
pub const MAX_QUERY_LEN: usize = 20;

const FOOTER_HINT: &str = "To display publicly, select a single post";

#[allow(clippy::expect_used)] // Pattern is a literal and known to be valid
static PAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Page (\d+) of (\d+)").expect("page footer pattern is valid"));

/// Reasons a query is rejected before searching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Query length outside the accepted range
    #[error(
        "Your query must be between {min} and {max} characters.",
        min = MIN_QUERY_LEN,
        max = MAX_QUERY_LEN
    )]
    Length {
        /// Length of the rejected query in characters
        len: usize,
    },
}

/// Checks the query length. Surrounding whitespace counts towards the length.
pub fn validate_query(query: &str) -> Result<(), QueryError> {
    let len = query.chars().count();
    if (MIN_QUERY_LEN..=MAX_QUERY_LEN).contains(&len) {
        Ok(())
    } else {
        Err(QueryError::Length { len })
    }
}

/// Number of pages needed for `total` results.
#[must_use]
pub const fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

/// The 1-based `page` of `items`; the last page may be short.
///
/// Pages outside the range yield an empty slice.
#[must_use]
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let Some(start) = page.checked_sub(1).map(|p| p * PAGE_SIZE) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// Navigation direction of a paging button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One page back
    Prev,
    /// One page forward
    Next,
}

/// Why a footer could not be read back as a [`PageState`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageStateError {
    /// The message carried no footer
    #[error("message has no page footer")]
    Missing,
    /// The footer does not look like `Page <cur> of <total>`
    #[error("footer {0:?} is not a page indicator")]
    Malformed(String),
}

/// Position within a paginated result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// 1-based current page
    pub current: usize,
    /// Number of pages
    pub total_pages: usize,
}

impl PageState {
    /// First page of `total_pages`.
    #[must_use]
    pub const fn first(total_pages: usize) -> Self {
        Self {
            current: 1,
            total_pages,
        }
    }

    /// Moves one page in `direction`. The result may be out of range.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Option<usize> {
        match direction {
            Direction::Prev => self.current.checked_sub(1),
            Direction::Next => self.current.checked_add(1),
        }
    }

    /// Whether `current` lies within `1..=total_pages`.
    #[must_use]
    pub const fn in_range(self) -> bool {
        self.current >= 1 && self.current <= self.total_pages
    }

    /// Full footer text rendered under a result page.
    #[must_use]
    pub fn footer(self) -> String {
        format!("{self}\n{FOOTER_HINT}")
    }

    /// Reads the page state back from a rendered footer.
    pub fn parse_footer(text: &str) -> Result<Self, PageStateError> {
        let malformed = || PageStateError::Malformed(text.to_string());
        let captures = PAGE_RE.captures(text).ok_or_else(malformed)?;
        let current = captures[1].parse().map_err(|_| malformed())?;
        let total_pages = captures[2].parse().map_err(|_| malformed())?;
        Ok(Self {
            current,
            total_pages,
        })
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page {} of {}", self.current, self.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_query_bounds() {
        assert_eq!(validate_query("ab"), Err(QueryError::Length { len: 2 }));
        assert!(validate_query("abc").is_ok());
        assert!(validate_query("a".repeat(20).as_str()).is_ok());
        assert_eq!(
            validate_query("a".repeat(21).as_str()),
            Err(QueryError::Length { len: 21 })
        );
        assert_eq!(validate_query(""), Err(QueryError::Length { len: 0 }));
    }

    #[test]
    fn test_validate_query_counts_characters_without_trimming() {
        // Three multi-byte characters
        assert!(validate_query("語言學").is_ok());
        // Whitespace is not trimmed
        assert!(validate_query(" a ").is_ok());
        assert!(validate_query(" a").is_err());
    }

    #[test]
    fn test_query_error_message() {
        let err = QueryError::Length { len: 1 };
        assert_eq!(
            err.to_string(),
            "Your query must be between 3 and 20 characters."
        );
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(3), 1);
        assert_eq!(page_count(5), 1);
        assert_eq!(page_count(6), 2);
        assert_eq!(page_count(7), 2);
        assert_eq!(page_count(10), 2);
        assert_eq!(page_count(11), 3);
    }

    #[test]
    fn test_page_slice() {
        let items: Vec<u32> = (1..=7).collect();
        assert_eq!(page_slice(&items, 1), &[1, 2, 3, 4, 5]);
        assert_eq!(page_slice(&items, 2), &[6, 7]);
        assert!(page_slice(&items, 3).is_empty());
        assert!(page_slice(&items, 0).is_empty());
    }

    #[test]
    fn test_footer_round_trip() {
        let states = [
            PageState::first(1),
            PageState {
                current: 2,
                total_pages: 2,
            },
            PageState {
                current: 7,
                total_pages: 12,
            },
        ];
        for state in states {
            let footer = state.footer();
            assert!(footer.ends_with("\nTo display publicly, select a single post"));
            assert_eq!(PageState::parse_footer(&footer), Ok(state));
        }
        assert_eq!(
            PageState::first(2).footer(),
            "Page 1 of 2\nTo display publicly, select a single post"
        );
    }

    #[test]
    fn test_parse_footer_rejects_other_text() {
        assert!(matches!(
            PageState::parse_footer("Blog: 3 Results"),
            Err(PageStateError::Malformed(_))
        ));
        assert!(matches!(
            PageState::parse_footer("Page one of two"),
            Err(PageStateError::Malformed(_))
        ));
    }

    #[test]
    fn test_step() {
        let state = PageState::first(3);
        assert_eq!(state.step(Direction::Prev), Some(0));
        assert_eq!(state.step(Direction::Next), Some(2));
        let zero = PageState {
            current: 0,
            total_pages: 1,
        };
        assert_eq!(zero.step(Direction::Prev), None);
    }
}
