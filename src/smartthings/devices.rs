use reqwest::Client;

use crate::{
    config,
    types::{DeviceStatus, DeviceStatusResponse},
};

/// Fetches the full status document for a device from the SmartThings API.
///
/// Issues a bearer-authenticated GET against the device status endpoint and
/// decodes the response. Any network failure or non-success HTTP status is
/// propagated as a `reqwest::Error`; the caller decides how to surface it.
pub async fn get_status(
    device_id: &str,
    token: &str,
) -> Result<DeviceStatusResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/devices/{device_id}/status",
        uri = &config::smartthings_api_url(),
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<DeviceStatusResponse>().await
}

/// Normalizes an upstream status document into the proxy's output contract.
///
/// Returns `None` when the payload carries no washer operating state (the
/// device is not a washer, or the upstream shape changed). A machine state of
/// `"stop"` maps to `stopped: true`; every other state counts as running. The
/// completion estimate is passed through untouched.
pub fn normalize(response: DeviceStatusResponse) -> Option<DeviceStatus> {
    let operating_state = response.components.main.washer_operating_state?;

    Some(DeviceStatus {
        stopped: operating_state.machine_state.value == "stop",
        completion_time: operating_state.completion_time,
    })
}
