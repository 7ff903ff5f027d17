//! Request routing
//!
//! This module maps a parsed request onto one of the built-in handlers
//! (root, echo, user-agent, files) and owns the file-serving root directory.

pub mod handlers;
pub mod route;
pub mod router;

pub use route::{FileOp, Route};
pub use router::Router;
