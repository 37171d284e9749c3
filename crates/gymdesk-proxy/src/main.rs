use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gymdesk_proxy::{app, config::Config, upstream::Upstream, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load();
    info!(
        backend = %config.backend_url,
        dev_fallback = config.dev_fallback,
        "starting gymdesk proxy"
    );

    let state = AppState {
        upstream: Upstream::new(config.backend_url),
        dev_fallback: config.dev_fallback,
    };

    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .expect("Port misconfigured!");
    info!("listening on port {}", config.port);

    axum::serve(listener, app(state))
        .await
        .expect("Server failed!");
}
