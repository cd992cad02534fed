//! # Tweetgram
//!
//! HTTP service that answers per-hour tweet histograms for a user and day.

use clap::Parser;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tweetgram_api::create_api_routes;
use tweetgram_domain::CliOverrides;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "tweetgram")]
#[command(version)]
#[command(about = "Per-hour tweet histograms over the Twitter timeline API")]
struct Cli {
    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(
        cli.config.as_deref(),
        CliOverrides {
            web_port: cli.web_port,
            bind_address: cli.bind,
        },
    )?;
    bootstrap::init_logging(&config);
    bootstrap::validate_config(&config, cli.config.as_deref())?;

    let state = di::build_state(&config)?;
    let app = create_api_routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.web_port)
        .parse()?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Web server listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
