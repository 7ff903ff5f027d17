use std::fmt;
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::{TcpListener, TcpStream};
use tracing::{error, info};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::routing::Router;

/// Pause after a failed accept so fd exhaustion doesn't spin the loop.
pub const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Source of accepted connections for [`serve`].
pub trait Accept {
    type Stream: AsyncRead + AsyncWrite + Unpin + Send + 'static;
    type Peer: fmt::Display + Send + 'static;

    fn accept(&mut self) -> impl Future<Output = io::Result<(Self::Stream, Self::Peer)>> + Send;
}

impl Accept for TcpListener {
    type Stream = TcpStream;
    type Peer = SocketAddr;

    fn accept(&mut self) -> impl Future<Output = io::Result<(TcpStream, SocketAddr)>> + Send {
        TcpListener::accept(self)
    }
}

pub async fn bind(cfg: &Config) -> anyhow::Result<TcpListener> {
    let listener = TcpListener::bind(&cfg.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.listen_addr))?;
    info!("Listening on {}", listener.local_addr()?);
    info!("Serving files from {}", cfg.directory.display());
    Ok(listener)
}

/// Binding is the only failure that ends the process.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = bind(cfg).await?;
    serve(listener, Arc::new(Router::new(cfg.directory.clone()))).await;
    Ok(())
}

/// Accepts forever, one task per connection.
///
/// A failed accept (aborted handshake, fd exhaustion) is logged and the loop
/// carries on after [`ACCEPT_BACKOFF`].
pub async fn serve<A>(mut listener: A, router: Arc<Router>)
where
    A: Accept + Send,
{
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("Accept failed: {}", e);
                tokio::time::sleep(ACCEPT_BACKOFF).await;
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let router = Arc::clone(&router);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, router);
            if let Err(e) = conn.run().await {
                error!("Connection error from {}: {:#}", peer, e);
            }
        });
    }
}
