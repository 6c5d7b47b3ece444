use reqwest::Client;

use crate::{config, types::DeviceStatus};

/// Polls the proxy for one machine's status.
///
/// Issues a single bearer-authenticated `POST /device/{nr}` and decodes the
/// normalized response. Every call is isolated: no retries, no backoff, no
/// shared state with other polls.
pub(crate) async fn poll_machine(client: &Client, nr: usize) -> Result<DeviceStatus, String> {
    let url = format!("{base}/device/{nr}", base = &config::proxy_url());

    let response = client
        .post(&url)
        .bearer_auth(config::api_token())
        .send()
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?;

    response
        .json::<DeviceStatus>()
        .await
        .map_err(|e| e.to_string())
}
