//! designlint-core: shared foundation for the designlint engine.
//!
//! Errors, configuration, tracing, events, cancellation, identifiers and constants.
//! Nothing in this crate knows how a document is shaped.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod traits;
pub mod types;
