mod config;
mod error;
mod routes;

use config::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ServerConfig::from_env()?;
    let app = routes::router(&config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(
        addr = %config.addr,
        fetch_timeout = config.fetch.timeout,
        request_timeout = ?config.request_timeout,
        "credence server listening"
    );

    axum::serve(listener, app).with_graceful_shutdown(routes::shutdown_signal()).await?;

    Ok(())
}
