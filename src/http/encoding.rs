//! Response compression driven by the client's `Accept-Encoding` header.
//!
//! Only gzip is offered. Tokens are matched exactly: no `*` wildcard, no
//! quality values, no case folding.

use std::io::{self, Write};

use flate2::Compression;
use flate2::write::GzEncoder;
use tracing::{debug, warn};

use crate::http::request::Request;
use crate::http::response::Response;

pub const GZIP: &str = "gzip";

/// Compresses the response body when the request offers `gzip`.
///
/// Without an `Accept-Encoding` header, or when `gzip` is not among its
/// tokens, the response comes back untouched. Empty bodies are never
/// encoded, so `GET /` keeps answering 200 with no `Content-Length` even for
/// gzip-capable clients.
pub fn negotiate(req: &Request, resp: Response) -> Response {
    negotiate_with(req, resp, gzip)
}

/// [`negotiate`] with the compressor supplied by the caller.
///
/// If `compress` fails the body is dropped to empty rather than failing the
/// exchange; the gzip headers are still set.
pub fn negotiate_with<F>(req: &Request, mut resp: Response, compress: F) -> Response
where
    F: FnOnce(&[u8]) -> io::Result<Vec<u8>>,
{
    if !accepts_gzip(req) || resp.body.is_empty() {
        return resp;
    }

    let body = match compress(&resp.body) {
        Ok(compressed) => {
            debug!(
                "gzip {} -> {} bytes",
                resp.body.len(),
                compressed.len()
            );
            compressed
        }
        Err(e) => {
            warn!("gzip encoding failed, sending empty body: {}", e);
            Vec::new()
        }
    };

    resp.headers
        .insert("Content-Encoding".to_string(), GZIP.to_string());
    resp.headers
        .insert("Content-Length".to_string(), body.len().to_string());
    resp.body = body;
    resp
}

pub fn accepts_gzip(req: &Request) -> bool {
    req.accept_encodings()
        .map(|mut tokens| tokens.any(|t| t == GZIP))
        .unwrap_or(false)
}

/// Wraps `data` in a gzip container.
pub fn gzip(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::request::RequestBuilder;

    #[test]
    fn gzip_output_has_magic_header() {
        let out = gzip(b"abc").unwrap();
        assert_eq!(&out[..2], &[0x1f, 0x8b]);
    }

    #[test]
    fn wildcard_is_not_gzip() {
        let req = RequestBuilder::new()
            .path("/")
            .header("Accept-Encoding", "*")
            .build()
            .unwrap();
        assert!(!accepts_gzip(&req));
    }
}
