//! # API Module
//!
//! HTTP endpoints for the washcli proxy server. The proxy is a stateless
//! relay between the display client and the SmartThings API, with three
//! responsibilities:
//!
//! - **Inbound auth gate**: [`require_bearer`] rejects requests that do not
//!   carry the pre-shared bearer token (`401` without a header, `403` on a
//!   missing or mismatched token).
//! - **Device status translation**: [`device_status`] resolves a 1-based
//!   machine number to a SmartThings device id, fetches its operating state
//!   upstream and normalizes it into the `{stopped, completionTime}` contract.
//! - **OAuth exchange**: [`authorize`] redirects to the SmartThings consent
//!   page and [`callback`] performs the one-shot authorization-code exchange,
//!   returning the access token as plain text.
//!
//! [`health`] provides a version probe and [`not_found`] covers unmatched
//! routes. All error responses are plain HTTP statuses with a minimal
//! `{"error": ...}` body; nothing is retried or recovered here.
//!
//! The module is built on the [Axum](https://docs.rs/axum) web framework;
//! handlers are async functions wired up in [`crate::server`].

mod device;
mod error;
mod health;
mod oauth;

pub use device::device_status;
pub use device::require_bearer;
pub use device::token_matches;
pub use error::AppError;
pub use health::health;
pub use health::not_found;
pub use oauth::authorize;
pub use oauth::callback;
