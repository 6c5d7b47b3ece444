use std::collections::HashMap;

use axum::{extract::Query, response::Redirect};

use crate::{smartthings, utils, warning};

use super::error::AppError;

/// Redirects the caller to the SmartThings authorization endpoint.
///
/// The URL carries the configured client id, redirect URI, device-read scope,
/// `response_type=code` and a fresh random `state` value.
pub async fn authorize() -> Redirect {
    let url = smartthings::auth::build_authorize_url(&utils::generate_state());
    Redirect::temporary(&url)
}

/// Handles the OAuth callback: exchanges the authorization code for an
/// access token and returns it to the caller as plain text.
///
/// A callback without a `code` query parameter is a `400`; a failed exchange
/// is a `500`. This is a one-shot manual flow, the token is not stored or
/// refreshed anywhere.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
) -> Result<String, AppError> {
    let Some(code) = params.get("code") else {
        return Err(AppError::BadRequest(
            "missing authorization code".to_string(),
        ));
    };

    match smartthings::auth::exchange_code(code).await {
        Ok(token) => Ok(token.access_token),
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Err(AppError::Upstream("token exchange failed".to_string()))
        }
    }
}
