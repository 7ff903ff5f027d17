//! Route resolution
//!
//! Turns the first path segment of a request into a typed [`Route`] so that
//! handlers receive their parameters directly instead of indexing segments.

use crate::http::request::{Method, Request};

/// What to do with a file under the root directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    /// GET: send the file back
    Read,
    /// POST: persist the request body
    Write,
}

/// The handler selected for a request, with its extracted parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Root,
    Echo(String),
    UserAgent,
    File { name: String, op: FileOp },
    NotFound,
}

impl Route {
    /// Selects a route from the first path segment.
    ///
    /// The method only matters for `files`, where GET reads and POST writes.
    /// A route that needs a parameter but has no second segment resolves to
    /// [`Route::NotFound`].
    pub fn resolve(req: &Request) -> Route {
        let segments = req.path_segments();
        let param = segments.get(1).map(|s| s.to_string());

        match (segments[0], param) {
            ("", _) => Route::Root,
            ("echo", Some(text)) => Route::Echo(text),
            ("user-agent", _) => Route::UserAgent,
            ("files", Some(name)) => match req.method {
                Method::GET => Route::File { name, op: FileOp::Read },
                Method::POST => Route::File { name, op: FileOp::Write },
                _ => Route::NotFound,
            },
            _ => Route::NotFound,
        }
    }

    /// Short label used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Root => "root",
            Route::Echo(_) => "echo",
            Route::UserAgent => "user-agent",
            Route::File { op: FileOp::Read, .. } => "files:read",
            Route::File { op: FileOp::Write, .. } => "files:write",
            Route::NotFound => "not-found",
        }
    }
}
