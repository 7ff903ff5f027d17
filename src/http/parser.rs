use crate::http::request::{Method, Request};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed request line: {0:?}")]
    MalformedRequest(String),
}

/// Where the parser currently is inside the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    RequestLine,
    Headers,
    Body,
}

/// Parses one request out of a single read buffer.
///
/// The buffer is walked line by line through the `RequestLine -> Headers ->
/// Body` states. The first empty line moves to `Body`, and everything after it
/// is taken verbatim. A buffer that ends before the blank line simply yields
/// an empty body; this parser never asks for more input.
///
/// The request line and headers must be UTF-8. Bytes are never substituted:
/// a non-UTF-8 request line is malformed, a non-UTF-8 header line is skipped.
pub fn parse_http_request(buf: &[u8]) -> Result<Request, ParseError> {
    let mut state = State::RequestLine;
    let mut pos = 0;

    let mut method = None;
    let mut path = String::new();
    let mut version = None;
    let mut headers = HashMap::new();

    while state != State::Body && pos < buf.len() {
        let (line, next) = next_line(buf, pos);
        pos = next;

        match state {
            State::RequestLine => {
                let Ok(line) = std::str::from_utf8(line) else {
                    return Err(ParseError::MalformedRequest(
                        String::from_utf8_lossy(line).into_owned(),
                    ));
                };

                let mut parts = line.split_whitespace();
                let (m, target) = match (parts.next(), parts.next()) {
                    (Some(m), Some(t)) if t.starts_with('/') => (m, t),
                    _ => return Err(ParseError::MalformedRequest(line.to_string())),
                };

                method = Some(Method::parse(m));
                path = target.to_string();
                version = parts.next().map(str::to_string);
                state = State::Headers;
            }

            State::Headers => {
                if line.is_empty() {
                    state = State::Body;
                    continue;
                }

                let Ok(text) = std::str::from_utf8(line) else {
                    debug!("skipping non-UTF-8 header line {:?}", String::from_utf8_lossy(line));
                    continue;
                };

                match parse_header(text) {
                    Some((key, value)) => {
                        headers.insert(key.to_string(), value.to_string());
                    }
                    None => debug!("skipping header line {:?}", text),
                }
            }

            State::Body => break,
        }
    }

    let method = method.ok_or_else(|| ParseError::MalformedRequest(String::new()))?;

    let body = if state == State::Body {
        buf[pos..].to_vec()
    } else {
        Vec::new()
    };

    Ok(Request {
        method,
        path,
        version: version.unwrap_or_else(|| "HTTP/1.1".to_string()),
        headers,
        body,
    })
}

/// Returns the line starting at `start` without its terminator, and the
/// offset just past the terminator. `\n` ends a line; a `\r` before it is
/// dropped.
fn next_line(buf: &[u8], start: usize) -> (&[u8], usize) {
    let rest = &buf[start..];
    match rest.iter().position(|&b| b == b'\n') {
        Some(i) => {
            let line = &rest[..i];
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            (line, start + i + 1)
        }
        None => (rest, buf.len()),
    }
}

/// A header line must carry exactly one colon.
fn parse_header(line: &str) -> Option<(&str, &str)> {
    if line.matches(':').count() != 1 {
        return None;
    }

    let (key, value) = line.split_once(':')?;
    Some((key.trim(), value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let parsed = parse_http_request(req).unwrap();

        assert_eq!(parsed.path, "/");
        assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
        assert!(parsed.body.is_empty());
    }

    #[test]
    fn next_line_without_terminator_runs_to_end() {
        let buf = b"abc";
        assert_eq!(next_line(buf, 0), (&b"abc"[..], 3));
    }

    #[test]
    fn header_with_two_colons_is_rejected() {
        assert_eq!(parse_header("Host: localhost:4221"), None);
        assert_eq!(parse_header(" Accept :  */* "), Some(("Accept", "*/*")));
    }
}
