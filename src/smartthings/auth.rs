use reqwest::Client;
use serde_json::Value;

use crate::{config, types::Token};

/// Constructs the SmartThings authorization URL for the code grant.
///
/// The caller supplies the `state` value so redirects stay side-effect free;
/// see [`crate::utils::generate_state`].
pub fn build_authorize_url(state: &str) -> String {
    format!(
        "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}&state={state}",
        auth_url = &config::smartthings_auth_url(),
        client_id = &config::smartthings_client_id(),
        redirect_uri = &config::smartthings_redirect_uri(),
        scope = &config::smartthings_scope(),
        state = state
    )
}

/// Exchanges an authorization code for an access token.
///
/// Posts the standard authorization-code grant form (code, client id and
/// secret, redirect URI) to the token endpoint and decodes the response into
/// a [`Token`]. The exchange is one-shot: nothing is persisted and no refresh
/// is scheduled.
///
/// # Errors
///
/// Returns an error string when the request fails, the response is not JSON,
/// or the payload carries no `access_token` (expired or already-used codes
/// answer that way).
pub async fn exchange_code(code: &str) -> Result<Token, String> {
    let client_id = config::smartthings_client_id();
    let client_secret = config::smartthings_client_secret();
    let redirect_uri = config::smartthings_redirect_uri();

    let client = Client::new();
    let res = client
        .post(&config::smartthings_token_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("client_id", client_id.as_str()),
            ("client_secret", client_secret.as_str()),
            ("redirect_uri", redirect_uri.as_str()),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let json: Value = res.json().await.map_err(|e| e.to_string())?;

    let access_token = json["access_token"]
        .as_str()
        .ok_or("access_token missing from token response")?
        .to_string();

    Ok(Token { access_token })
}
