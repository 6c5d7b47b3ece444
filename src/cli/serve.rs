use std::sync::Arc;

use crate::{config, error, server, success, types::ProxyState};

/// Starts the proxy server.
///
/// Loads the pre-shared token and the machine-to-device-id table once and
/// hands them to the router as immutable shared state. The table never
/// changes while the server runs; reconfiguration means a restart.
pub async fn serve() {
    let device_ids = config::washer_device_ids();
    if device_ids.is_empty() {
        error!("WASHER_DEVICE_IDS contains no device ids.");
    }

    // Upstream credentials are resolved here so a bad environment fails at
    // startup, not inside a request handler.
    let state = Arc::new(ProxyState {
        api_token: config::api_token(),
        device_ids,
        upstream_token: config::smartthings_access_token(),
    });

    success!(
        "Tracking {} machines, listening on {}",
        state.device_ids.len(),
        config::server_addr()
    );

    server::start_api_server(state).await;
}
