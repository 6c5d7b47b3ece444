//! Configuration management for the laundry cycle monitor.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including the pre-shared proxy token, the
//! machine-to-device-id table, SmartThings API credentials and endpoint URLs.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `washcli/.env`. This allows users to store
/// configuration securely without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/washcli/.env`
/// - macOS: `~/Library/Application Support/washcli/.env`
/// - Windows: `%LOCALAPPDATA%/washcli/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded, or an
/// error string if directory creation or file loading fails.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("washcli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(path).map_err(|e| e.to_string())?;
    Ok(())
}

/// Returns the bind address for the proxy server.
///
/// Retrieves the `SERVER_ADDRESS` environment variable which specifies the
/// address and port where the proxy HTTP server should listen, e.g.
/// `0.0.0.0:3000`.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the pre-shared bearer token the proxy expects on inbound requests.
///
/// Retrieves the `API_TOKEN` environment variable. Every `POST /device/{nr}`
/// request must carry this value as `Authorization: Bearer <token>`; requests
/// without it are rejected before any upstream call is made.
///
/// # Panics
///
/// Panics if the `API_TOKEN` environment variable is not set.
pub fn api_token() -> String {
    env::var("API_TOKEN").expect("API_TOKEN must be set")
}

/// Returns the machine-number-to-device-id table.
///
/// Retrieves the `WASHER_DEVICE_IDS` environment variable, a comma-separated
/// ordered list of SmartThings device identifiers. Machine numbers are 1-based
/// indices into this list, so `WASHER_DEVICE_IDS=aaa,bbb` makes machine 1
/// resolve to device `aaa` and machine 2 to device `bbb`. The table is loaded
/// once at server startup and never changes afterwards.
///
/// # Panics
///
/// Panics if the `WASHER_DEVICE_IDS` environment variable is not set.
pub fn washer_device_ids() -> Vec<String> {
    env::var("WASHER_DEVICE_IDS")
        .expect("WASHER_DEVICE_IDS must be set")
        .split(',')
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .collect()
}

/// Returns the base URL of the proxy as seen by the display client.
///
/// Retrieves the `PROXY_URL` environment variable, e.g.
/// `http://localhost:3000`. The `watch` and `status` commands poll
/// `{PROXY_URL}/device/{nr}`.
///
/// # Panics
///
/// Panics if the `PROXY_URL` environment variable is not set.
pub fn proxy_url() -> String {
    env::var("PROXY_URL").expect("PROXY_URL must be set")
}

/// Returns the display poll interval in seconds.
///
/// Retrieves the `WATCH_INTERVAL_SECS` environment variable, defaulting to 30
/// seconds when unset or unparsable. Each tracked machine gets its own timer
/// with this period.
pub fn watch_interval_secs() -> u64 {
    env::var("WATCH_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(30)
}

/// Returns the SmartThings access token used for upstream status requests.
///
/// Retrieves the `SMARTTHINGS_ACCESS_TOKEN` environment variable. The proxy
/// attaches this token as a bearer credential when calling the device status
/// endpoint. It can be obtained manually through `washcli auth` and the
/// `/oauth/callback` endpoint.
///
/// # Panics
///
/// Panics if the `SMARTTHINGS_ACCESS_TOKEN` environment variable is not set.
pub fn smartthings_access_token() -> String {
    env::var("SMARTTHINGS_ACCESS_TOKEN").expect("SMARTTHINGS_ACCESS_TOKEN must be set")
}

/// Returns the SmartThings Web API base URL.
///
/// Retrieves the `SMARTTHINGS_API_URL` environment variable, e.g.
/// `https://api.smartthings.com/v1`.
///
/// # Panics
///
/// Panics if the `SMARTTHINGS_API_URL` environment variable is not set.
pub fn smartthings_api_url() -> String {
    env::var("SMARTTHINGS_API_URL").expect("SMARTTHINGS_API_URL must be set")
}

/// Returns the SmartThings OAuth client ID.
///
/// Retrieves the `SMARTTHINGS_CLIENT_ID` environment variable obtained when
/// registering the application with the SmartThings developer workspace.
///
/// # Panics
///
/// Panics if the `SMARTTHINGS_CLIENT_ID` environment variable is not set.
pub fn smartthings_client_id() -> String {
    env::var("SMARTTHINGS_CLIENT_ID").expect("SMARTTHINGS_CLIENT_ID must be set")
}

/// Returns the SmartThings OAuth client secret.
///
/// Retrieves the `SMARTTHINGS_CLIENT_SECRET` environment variable. This is
/// sent to the token endpoint during the authorization-code exchange.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
///
/// # Panics
///
/// Panics if the `SMARTTHINGS_CLIENT_SECRET` environment variable is not set.
pub fn smartthings_client_secret() -> String {
    env::var("SMARTTHINGS_CLIENT_SECRET").expect("SMARTTHINGS_CLIENT_SECRET must be set")
}

/// Returns the OAuth redirect URI.
///
/// Retrieves the `SMARTTHINGS_REDIRECT_URI` environment variable which
/// specifies the callback URL the authorization server redirects to after the
/// user grants access. Must match the URI registered with the application and
/// should point at the proxy's `/oauth/callback` route.
///
/// # Panics
///
/// Panics if the `SMARTTHINGS_REDIRECT_URI` environment variable is not set.
pub fn smartthings_redirect_uri() -> String {
    env::var("SMARTTHINGS_REDIRECT_URI").expect("SMARTTHINGS_REDIRECT_URI must be set")
}

/// Returns the OAuth scope requested during authorization.
///
/// Retrieves the `SMARTTHINGS_SCOPE` environment variable, e.g. `r:devices:*`
/// for read access to device status.
///
/// # Panics
///
/// Panics if the `SMARTTHINGS_SCOPE` environment variable is not set.
pub fn smartthings_scope() -> String {
    env::var("SMARTTHINGS_SCOPE").expect("SMARTTHINGS_SCOPE must be set")
}

/// Returns the SmartThings OAuth authorization URL.
///
/// Retrieves the `SMARTTHINGS_AUTH_URL` environment variable which contains
/// the endpoint users are redirected to when granting the application access,
/// e.g. `https://api.smartthings.com/oauth/authorize`.
///
/// # Panics
///
/// Panics if the `SMARTTHINGS_AUTH_URL` environment variable is not set.
pub fn smartthings_auth_url() -> String {
    env::var("SMARTTHINGS_AUTH_URL").expect("SMARTTHINGS_AUTH_URL must be set")
}

/// Returns the SmartThings OAuth token exchange URL.
///
/// Retrieves the `SMARTTHINGS_TOKEN_URL` environment variable which contains
/// the endpoint for exchanging authorization codes for access tokens, e.g.
/// `https://api.smartthings.com/oauth/token`.
///
/// # Panics
///
/// Panics if the `SMARTTHINGS_TOKEN_URL` environment variable is not set.
pub fn smartthings_token_url() -> String {
    env::var("SMARTTHINGS_TOKEN_URL").expect("SMARTTHINGS_TOKEN_URL must be set")
}
