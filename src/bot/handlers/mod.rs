//! Discord interaction handlers
//!
//! This module provides handlers for Discord interactions that are not slash
//! commands, such as select menu choices and button clicks.

/// Select menu and button handling for blog result messages
pub mod component;
