//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Blog search command
pub mod blog;

/// General utility commands
pub mod general;

// Export commands
pub use blog::blog;
pub use general::*;
