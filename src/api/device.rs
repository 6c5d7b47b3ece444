use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, Request},
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};

use crate::{
    smartthings,
    types::{DeviceStatus, ProxyState},
    warning,
};

use super::error::AppError;

/// Middleware guarding the device status route with the pre-shared token.
///
/// A request without an `Authorization` header is rejected with `401`; a
/// header whose bearer token is missing or does not match the configured
/// secret is rejected with `403`. Matching requests pass through unchanged.
/// Pure per-request string comparison, no session state.
pub async fn require_bearer(
    Extension(state): Extension<Arc<ProxyState>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(auth_header) = request.headers().get("authorization") else {
        return Err(AppError::Unauthorized(
            "authorization header missing".to_string(),
        ));
    };

    let token = auth_header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .unwrap_or_default();

    if !token_matches(token, &state.api_token) {
        return Err(AppError::Forbidden(
            "invalid or missing bearer token".to_string(),
        ));
    }

    Ok(next.run(request).await)
}

/// Compares a presented bearer token against the expected one.
///
/// Compares SHA-256 digests instead of the raw strings so the comparison
/// does not leak how much of the token prefix matched through timing.
pub fn token_matches(presented: &str, expected: &str) -> bool {
    Sha256::digest(presented.as_bytes()) == Sha256::digest(expected.as_bytes())
}

/// Handles `POST /device/{nr}`: translates upstream operating state into the
/// simplified `{stopped, completionTime}` shape.
///
/// The machine number is a 1-based index into the configured device-id table;
/// anything outside that range (or not an integer at all) is a `400`. The
/// resolved device's status is fetched from the SmartThings API; a payload
/// without a washer operating state yields `503`, and any network or HTTP
/// failure upstream yields `500` with the fixed `{"error": "connection
/// error"}` diagnostic.
pub async fn device_status(
    Path(nr): Path<String>,
    Extension(state): Extension<Arc<ProxyState>>,
) -> Result<Json<DeviceStatus>, AppError> {
    let nr: usize = nr
        .parse()
        .map_err(|_| AppError::BadRequest("invalid machine number".to_string()))?;

    if nr < 1 || nr > state.device_ids.len() {
        return Err(AppError::BadRequest("invalid machine number".to_string()));
    }

    // nr is 1-based
    let device_id = &state.device_ids[nr - 1];

    let response = smartthings::devices::get_status(device_id, &state.upstream_token)
        .await
        .map_err(|e| {
            warning!("Upstream status request failed: {}", e);
            AppError::Upstream("connection error".to_string())
        })?;

    match smartthings::devices::normalize(response) {
        Some(status) => Ok(Json(status)),
        None => Err(AppError::Unavailable(
            "operating state missing from upstream payload".to_string(),
        )),
    }
}
