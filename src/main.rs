use std::process::ExitCode;

use pagemeta::{config, pages, routes, state};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let (site, server) = match (config::SiteConfig::from_env(), config::ServerConfig::from_env()) {
        (Ok(site), Ok(server)) => (site, server),
        (Err(e), _) | (_, Err(e)) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let pages = match pages::PageRegistry::standard() {
        Ok(pages) => pages,
        Err(e) => {
            tracing::error!(error = %e, "page registration failed");
            return ExitCode::FAILURE;
        }
    };
    // Surface metadata authoring mistakes at startup rather than per request.
    if let Err(e) = pages.validate(&site) {
        tracing::error!(error = %e, "page metadata invalid");
        return ExitCode::FAILURE;
    }

    tracing::info!(
        origin = %site.base_origin,
        site = %site.site_name,
        pages = ?pages.paths().collect::<Vec<_>>(),
        "site configured"
    );

    let state = state::AppState::new(site, pages);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(server.addr)
        .await
        .expect("failed to bind");

    tracing::info!(addr = %server.addr, "pagemeta listening");
    axum::serve(listener, app).await.expect("server failed");
    ExitCode::SUCCESS
}
