//! Decoding of component identifiers into blog actions.
//!
//! Identifiers have the form `<namespace>.<action>[.<payload>]`. The select
//! menu uses `blog.display` and carries the article URL as its selected value;
//! the paging buttons use `blog.prev.<query>` and `blog.next.<query>`.

use crate::core::pagination::Direction;
use thiserror::Error;

/// Namespace shared by every blog component
pub const NAMESPACE: &str = "blog";

/// Identifier of the result select menu
pub const DISPLAY_ID: &str = "blog.display";

/// An action triggered from a blog result message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlogAction {
    /// Show a single article publicly
    Display {
        /// URL of the selected article
        url: String,
    },
    /// Go to the previous page of results for `query`
    Prev {
        /// Original search query
        query: String,
    },
    /// Go to the next page of results for `query`
    Next {
        /// Original search query
        query: String,
    },
}

/// Why a component identifier could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The identifier belongs to another feature
    #[error("component {0:?} is not a blog component")]
    ForeignNamespace(String),
    /// Unknown action name
    #[error("unknown blog action {0:?}")]
    UnknownAction(String),
    /// A paging action without its query
    #[error("blog action {0:?} is missing its query")]
    MissingPayload(String),
    /// The select menu was submitted without a value
    #[error("no article was selected")]
    NoSelection,
}

impl BlogAction {
    /// Decodes a component identifier and, for the select menu, its values.
    pub fn decode(custom_id: &str, selected: &[String]) -> Result<Self, ActionError> {
        let mut parts = custom_id.splitn(3, '.');
        if parts.next() != Some(NAMESPACE) {
            return Err(ActionError::ForeignNamespace(custom_id.to_string()));
        }

        let action = parts.next().unwrap_or_default();
        let payload = parts.next();

        match action {
            "display" => selected
                .first()
                .map(|url| Self::Display { url: url.clone() })
                .ok_or(ActionError::NoSelection),
            "prev" | "next" => {
                let query = payload
                    .filter(|query| !query.is_empty())
                    .ok_or_else(|| ActionError::MissingPayload(action.to_string()))?
                    .to_string();
                Ok(if action == "prev" {
                    Self::Prev { query }
                } else {
                    Self::Next { query }
                })
            }
            other => Err(ActionError::UnknownAction(other.to_string())),
        }
    }

    /// Builds the paging action for `query` in `direction`.
    #[must_use]
    pub fn paging(direction: Direction, query: &str) -> Self {
        let query = query.to_string();
        match direction {
            Direction::Prev => Self::Prev { query },
            Direction::Next => Self::Next { query },
        }
    }

    /// Component identifier carrying this action.
    ///
    /// `Display` maps to the select menu id; the URL travels as the option value.
    #[must_use]
    pub fn custom_id(&self) -> String {
        match self {
            Self::Display { .. } => DISPLAY_ID.to_string(),
            Self::Prev { query } => format!("{NAMESPACE}.prev.{query}"),
            Self::Next { query } => format!("{NAMESPACE}.next.{query}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_paging_keeps_dots_in_query() {
        assert_eq!(
            BlogAction::decode("blog.next.go1.21 release", &[]),
            Ok(BlogAction::Next {
                query: "go1.21 release".to_string()
            })
        );
        assert_eq!(
            BlogAction::decode("blog.prev.abc", &[]),
            Ok(BlogAction::Prev {
                query: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_decode_display_uses_first_selected_value() {
        let selected = vec!["https://go.dev/blog/go1.21".to_string()];
        assert_eq!(
            BlogAction::decode(DISPLAY_ID, &selected),
            Ok(BlogAction::Display {
                url: "https://go.dev/blog/go1.21".to_string()
            })
        );
        assert_eq!(
            BlogAction::decode(DISPLAY_ID, &[]),
            Err(ActionError::NoSelection)
        );
    }

    #[test]
    fn test_decode_rejects_bad_identifiers() {
        assert!(matches!(
            BlogAction::decode("docs.next.abc", &[]),
            Err(ActionError::ForeignNamespace(_))
        ));
        assert!(matches!(
            BlogAction::decode("blogs.next.abc", &[]),
            Err(ActionError::ForeignNamespace(_))
        ));
        assert!(matches!(
            BlogAction::decode("blog.jump.abc", &[]),
            Err(ActionError::UnknownAction(_))
        ));
        assert!(matches!(
            BlogAction::decode("blog.next", &[]),
            Err(ActionError::MissingPayload(_))
        ));
    }

    #[test]
    fn test_custom_id_decodes_back() {
        for action in [
            BlogAction::paging(Direction::Prev, "generics"),
            BlogAction::paging(Direction::Next, "a.b.c"),
        ] {
            assert_eq!(BlogAction::decode(&action.custom_id(), &[]), Ok(action));
        }
    }
}
