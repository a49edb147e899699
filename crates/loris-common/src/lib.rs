//! Common utilities for the Loris tokenizer.
//!
//! This crate provides shared infrastructure used by the library and the CLI:
//! - **Warning System** - deduplicated reports of lenient markup recovery
//! - **Logging** - one-shot `tracing` subscriber setup

pub mod logging;
pub mod warning;
