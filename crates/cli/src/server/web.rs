use axum::Router;
use querytail_api::{create_api_routes, AppState};
use querytail_domain::config::ServerConfig;
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

/// API routes first, dashboard assets for everything else.
pub fn create_app(state: AppState, ui_dir: &str) -> Router {
    create_api_routes(state)
        .fallback_service(ServeDir::new(ui_dir))
        .layer(TraceLayer::new_for_http())
}

pub async fn start_web_server(
    cfg: &ServerConfig,
    state: AppState,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let web_addr: SocketAddr = format!("{}:{}", cfg.bind_address, cfg.web_port).parse()?;

    let app = create_app(state, &cfg.ui_dir);
    let listener = tokio::net::TcpListener::bind(web_addr).await?;

    info!(bind_address = %web_addr, ui_dir = %cfg.ui_dir, "Web server listening");
    info!("   Dashboard: http://{}", web_addr);
    info!("   Stream:    ws://{}/ws", web_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    Ok(())
}
