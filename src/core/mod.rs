//! Core business logic - framework-agnostic article retrieval, matching and pagination.

/// Interaction identifier decoding
pub mod action;
/// Article model and index parsing
pub mod article;
/// Article snapshot and periodic refresher
pub mod cache;
/// Query matching
pub mod matcher;
/// Query validation and page state
pub mod pagination;
/// Search outcomes and page navigation
pub mod search;
