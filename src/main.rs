use anyhow::{Context, Result};
use clap::Parser;
use grant_forecast::api::{AppState, create_router};
use grant_forecast::config::ConfigLoader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "grant-forecast")]
#[command(about = "Salary and fringe cost forecasting server for grant budgets")]
#[command(version)]
struct Cli {
    /// Directory holding program.yaml and schedule.yaml
    #[arg(long, default_value = "./config/monthly")]
    config: String,

    /// Server bind address
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Server port
    #[arg(long, default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("grant_forecast=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir = std::env::var("FORECAST_CONFIG_DIR").unwrap_or(cli.config);
    let host = std::env::var("FORECAST_HOST").unwrap_or(cli.host);
    let port = std::env::var("FORECAST_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(cli.port);

    let loader = ConfigLoader::load(&config_dir)
        .with_context(|| format!("loading configuration from {}", config_dir))?;
    if loader.credential().is_none() {
        tracing::warn!("No credentials.yaml found; forecast endpoints are unrestricted");
    }

    let app = create_router(AppState::new(loader));
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    tracing::info!("Grant forecast server listening on {}", addr);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
