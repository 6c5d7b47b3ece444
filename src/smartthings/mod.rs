//! # SmartThings Integration Module
//!
//! Client for the two SmartThings endpoints this application needs: the
//! device status resource and the OAuth 2.0 token exchange.
//!
//! ## Core Modules
//!
//! - [`devices`] - Fetches a device's full status and normalizes the washer
//!   operating state into the proxy's `{stopped, completionTime}` contract.
//! - [`auth`] - Builds the authorization URL and performs the
//!   authorization-code exchange against the token endpoint.
//!
//! ## API Coverage
//!
//! - `GET /devices/{deviceId}/status` - appliance operating state
//! - `POST /oauth/token` - authorization-code exchange
//!
//! All HTTP communication goes through [reqwest](https://docs.rs/reqwest);
//! endpoint URLs and credentials come from [`crate::config`]. Errors are
//! propagated to the caller, there is no retry or token refresh logic here.

pub mod auth;
pub mod devices;
