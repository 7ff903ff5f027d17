use std::sync::Arc;

use anyhow::Context;
use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::http::parser::parse_http_request;
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;
use crate::routing::Router;

/// A request must fit in a single read of this size.
pub const READ_BUFFER_SIZE: usize = 4096;

pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    router: Arc<Router>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, router: Arc<Router>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(READ_BUFFER_SIZE),
            router,
            state: ConnectionState::Reading,
        }
    }

    /// Handles exactly one exchange, then shuts the stream down.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        Some(req) => ConnectionState::Processing(req),
                        None => ConnectionState::Closed,
                    };
                }

                ConnectionState::Processing(req) => {
                    let response = self.router.handle(req).await;
                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        // The peer may already be gone; nothing left to report either way.
        let _ = self.stream.shutdown().await;
        Ok(())
    }

    /// Reads once and parses whatever arrived.
    ///
    /// Returns `None` when the client closed without sending anything, or
    /// when the request line is malformed. In both cases no response is
    /// written.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        self.buffer.resize(READ_BUFFER_SIZE, 0);
        let n = self
            .stream
            .read(&mut self.buffer[..])
            .await
            .context("reading request")?;
        self.buffer.truncate(n);

        if n == 0 {
            debug!("client closed before sending a request");
            return Ok(None);
        }

        match parse_http_request(&self.buffer) {
            Ok(req) => Ok(Some(req)),
            Err(e) => {
                warn!("dropping connection: {}", e);
                Ok(None)
            }
        }
    }
}
