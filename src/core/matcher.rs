//! Query matching over an article snapshot.

use crate::core::article::Article;

/// Articles matching a query, split by where the match was found.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MatchResult<'a> {
    /// Articles whose title contains the query
    pub by_title: Vec<&'a Article>,
    /// Articles whose summary, but not title, contains the query
    pub by_description: Vec<&'a Article>,
}

impl<'a> MatchResult<'a> {
    /// Number of matched articles.
    #[must_use]
    pub fn total(&self) -> usize {
        self.by_title.len() + self.by_description.len()
    }

    /// Title matches followed by description matches.
    #[must_use]
    pub fn into_ordered(self) -> Vec<&'a Article> {
        let mut ordered = self.by_title;
        ordered.extend(self.by_description);
        ordered
    }
}

/// Matches `query` case-insensitively against every article.
///
/// An article lands in at most one group; a title hit wins over a summary hit.
/// Within each group the snapshot order is preserved.
#[must_use]
pub fn match_all<'a>(articles: &'a [Article], query: &str) -> MatchResult<'a> {
    let needle = query.to_lowercase();
    let mut result = MatchResult::default();

    for article in articles {
        if article.title.to_lowercase().contains(&needle) {
            result.by_title.push(article);
        } else if article.summary.to_lowercase().contains(&needle) {
            result.by_description.push(article);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::article;

    #[test]
    fn test_title_matches_rank_before_description_matches() {
        let articles = vec![
            article("Profiling basics", "Using pprof with generics"),
            article("Generics tutorial", "Type parameters"),
            article("Modules", "Nothing relevant"),
            article("More Generics", "Constraints in depth"),
        ];

        let result = match_all(&articles, "generics");
        assert_eq!(result.total(), 3);
        assert_eq!(result.by_title.len(), 2);
        assert_eq!(result.by_description.len(), 1);

        let titles: Vec<&str> = result
            .into_ordered()
            .into_iter()
            .map(|a| a.title.as_str())
            .collect();
        assert_eq!(titles, ["Generics tutorial", "More Generics", "Profiling basics"]);
    }

    #[test]
    fn test_article_matching_both_is_counted_once() {
        let articles = vec![article("Go fuzzing", "All about fuzzing")];
        let result = match_all(&articles, "FUZZ");
        assert_eq!(result.by_title.len(), 1);
        assert!(result.by_description.is_empty());
        assert_eq!(result.total(), 1);
    }

    #[test]
    fn test_no_matches() {
        let articles = vec![article("Go 1.21", "Release notes")];
        let result = match_all(&articles, "rust");
        assert_eq!(result.total(), 0);
        assert!(result.into_ordered().is_empty());
    }
}
