//! Request/response boundary with the presentation layer.

pub mod messages;
pub mod session;

pub use messages::{Request, Response};
pub use session::Session;
