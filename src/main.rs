use std::path::PathBuf;

use clap::Parser;
use courier::config::Config;
use courier::server;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "courier", about = "Minimal HTTP/1.1 file and echo server")]
struct Args {
    /// Address to listen on, e.g. 127.0.0.1:4221
    #[arg(long)]
    listen: Option<String>,

    /// Directory served under /files/
    #[arg(long)]
    directory: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true)
        .init();

    let args = Args::parse();
    let cfg = Config::load()?.with_overrides(args.listen, args.directory);

    tokio::select! {
        res = server::listener::run(&cfg) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
