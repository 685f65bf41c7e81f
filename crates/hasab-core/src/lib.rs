//! # hasab-core
//!
//! Core types and error definitions for hasab-rs.
//!
//! This crate provides the building blocks shared across the other crates in
//! the workspace: the error hierarchy with its `ensure!` / `ensure_post!` macros,
//! and the per-year memo cache used by the computus.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Memoisation keyed by calendar year (`YearCache`).
pub mod cache;

/// Error types and the `ensure!` / `ensure_post!` macros.
pub mod errors;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use cache::YearCache;
pub use errors::{Error, Result};
