//! Built-in handlers
//!
//! Each handler produces an unserialized [`Response`]. Handler-internal
//! failures never escape as errors; they turn into a plain 404.

use std::path::Path;

use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};

pub const OCTET_STREAM: &str = "application/octet-stream";

pub fn root() -> Response {
    Response::ok()
}

pub fn echo(text: &str) -> Response {
    Response::text(text)
}

/// Reflects the `User-Agent` header, empty when the client sent none.
pub fn user_agent(req: &Request) -> Response {
    Response::text(req.user_agent())
}

pub fn not_found() -> Response {
    Response::not_found()
}

/// Sends back `<root>/<name>` as raw bytes.
pub async fn read_file(root: &Path, name: &str) -> Response {
    let path = root.join(name);

    match tokio::fs::read(&path).await {
        Ok(contents) => {
            debug!("read {} bytes from {}", contents.len(), path.display());
            ResponseBuilder::new(StatusCode::Ok)
                .content(OCTET_STREAM, contents)
                .build()
        }
        Err(e) => {
            warn!("cannot read {}: {}", path.display(), e);
            not_found()
        }
    }
}

/// Persists a request body to `<root>/<name>`, truncating any existing file.
///
/// NUL bytes and carriage returns are stripped before writing. A failed
/// write answers 404, the same as a missing route.
pub async fn write_file(root: &Path, name: &str, body: &[u8]) -> Response {
    let path = root.join(name);
    let contents = strip_control(body);

    match persist(&path, &contents).await {
        Ok(()) => {
            debug!("wrote {} bytes to {}", contents.len(), path.display());
            Response::created()
        }
        Err(e) => {
            warn!("cannot write {}: {}", path.display(), e);
            not_found()
        }
    }
}

async fn persist(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(contents).await?;
    file.flush().await
}

/// Drops `\0` and `\r` from a body bound for disk.
pub fn strip_control(body: &[u8]) -> Vec<u8> {
    body.iter()
        .copied()
        .filter(|&b| b != b'\0' && b != b'\r')
        .collect()
}
