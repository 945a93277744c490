//! # Sahayak
//!
//! A keyword-driven advisory engine for Indian rural welfare schemes.
//!
//! ## Features
//!
//! - Static scheme and village catalogs loaded from JSON
//! - Priority-ordered keyword classification of free-text queries
//! - Rule-based per-village scheme recommendations
//! - In-memory chat sessions for interactive shells
//!
//! The core is two pure functions over read-only catalogs: the query
//! classifier and the recommendation engine. Both are synchronous,
//! deterministic, and total; they never fail and never mutate state.

pub mod catalog;
pub mod chat;
pub mod classify;
pub mod cli;
pub mod error;
pub mod recommend;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
