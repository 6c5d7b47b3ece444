use axum::{
    Extension, Router, middleware,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{api, config, error, types::ProxyState};

/// Builds the proxy router.
///
/// `/device/{nr}` sits behind the bearer-token gate; the OAuth and health
/// routes are open. Unmatched routes fall through to a plain 404.
pub fn app(state: Arc<ProxyState>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route(
            "/device/{nr}",
            post(api::device_status).layer(middleware::from_fn(api::require_bearer)),
        )
        .route("/oauth/authorize", get(api::authorize))
        .route("/oauth/callback", get(api::callback))
        .fallback(api::not_found)
        .layer(Extension(state))
}

pub async fn start_api_server(state: Arc<ProxyState>) {
    let app = app(state);

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
