//! `BlogBuddy` - A Discord bot for searching the Go blog
//!
//! This crate keeps a periodically refreshed, in-memory list of Go blog articles and
//! exposes it through a `/blog` slash command with paginated, interactive results.
//! Pagination state lives in the rendered messages themselves, so no sessions are kept.

#![deny(
    unsafe_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links,
)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::panic,
    clippy::todo,
    clippy::wildcard_imports,
    rust_2018_idioms,
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
)]

/// Discord bot interface - commands, handlers, and bot context
pub mod bot;
/// Configuration management for blog sources and Discord settings
pub mod config;
/// Core business logic - framework-agnostic article retrieval, matching and pagination
pub mod core;
/// Unified error types and result handling
pub mod errors;

#[cfg(test)]
pub mod test_utils;
