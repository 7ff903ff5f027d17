//! HTTP protocol implementation.
//!
//! One request per connection: the stream is read once, answered, and
//! closed. There is no keep-alive and no chunked encoding.
//!
//! # Architecture
//!
//! - **`parser`**: turns a read buffer into a [`request::Request`]
//! - **`request`**: request representation and header helpers
//! - **`response`**: response representation with builder
//! - **`encoding`**: gzip negotiation on `Accept-Encoding`
//! - **`writer`**: serializes and writes responses
//! - **`connection`**: per-connection state machine
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Single read of the request bytes
//!        └──────┬──────┘
//!               │ Request parsed (malformed or empty → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Route, handle, negotiate encoding
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!            Closed
//! ```

pub mod connection;
pub mod encoding;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
