//! # persona-observability
//!
//! Tracing subscriber setup, span macros, and structured events for the
//! persona engine. Library crates only emit; the embedding application
//! decides whether to install a subscriber.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_with_filter};
