//! Courier - minimal HTTP/1.1 server
//!
//! Core library: request parsing, routing, handlers, gzip negotiation and
//! response serialization.

pub mod config;
pub mod http;
pub mod routing;
pub mod server;
