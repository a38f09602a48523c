//! Common utilities for the stave layout engine.
//!
//! This crate provides shared infrastructure used by all stave components:
//! - **Warning System** - deduplicated warnings routed through the `log` facade

pub mod warning;
