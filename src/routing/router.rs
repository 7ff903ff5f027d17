//! Dispatch of parsed requests.
//!
//! The router is immutable after construction and shared between connection
//! tasks behind an `Arc`. Its only state is the file-serving root directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::http::encoding;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::routing::handlers;
use crate::routing::route::{FileOp, Route};

#[derive(Debug, Clone)]
pub struct Router {
    root: PathBuf,
}

impl Router {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Runs the selected handler and applies content negotiation.
    pub async fn handle(&self, req: &Request) -> Response {
        let route = Route::resolve(req);
        debug!("{} {} -> {}", req.method, req.path, route.name());

        let response = self.dispatch(route, req).await;
        encoding::negotiate(req, response)
    }

    async fn dispatch(&self, route: Route, req: &Request) -> Response {
        match route {
            Route::Root => handlers::root(),
            Route::Echo(text) => handlers::echo(&text),
            Route::UserAgent => handlers::user_agent(req),
            Route::File { name, op: FileOp::Read } => {
                handlers::read_file(&self.root, &name).await
            }
            Route::File { name, op: FileOp::Write } => {
                handlers::write_file(&self.root, &name, &req.body).await
            }
            Route::NotFound => handlers::not_found(),
        }
    }
}
