//! Applying a chosen style or variable to a finding's node.
//!
//! The only code path that mutates the document, and only on an explicit
//! user command.

pub mod apply;

pub use apply::Remediator;
