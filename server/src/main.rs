mod config;
mod routes;

use config::ServerConfig;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid server configuration");
            std::process::exit(2);
        }
    };

    if !config.site_dir.join(routes::INDEX_FILE).is_file() {
        tracing::warn!(site_dir = %config.site_dir.display(), "index.html not found; build the client first");
    }

    let addr = config.socket_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(%addr, site_dir = %config.site_dir.display(), "bhardwaj site listening");
    if let Err(e) = axum::serve(listener, routes::app(&config.site_dir)).await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}
