//! # CLI Module
//!
//! User-facing commands for washcli. Each command is a thin async function
//! over the library layers:
//!
//! - [`serve`] - Runs the proxy server (auth gate, status translation, OAuth
//!   exchange) with the machine table loaded once from configuration.
//! - [`watch`] - Continuous display: one independent timer per tracked
//!   machine, each poll an isolated HTTP call against the proxy, last write
//!   wins. Ctrl-C tears the timers down.
//! - [`status`] - One-shot poll of every machine rendered as a table.
//! - [`auth`] - Opens the SmartThings consent page in the browser to start
//!   the manual token exchange.
//!
//! Commands report progress through the output macros in [`crate`]
//! (`info!`, `success!`, `warning!`, `error!`) and never panic on remote
//! failures: an unreachable proxy degrades into a warning line or an error
//! row for the affected machine.

mod auth;
mod poll;
mod serve;
mod status;
mod watch;

pub use auth::auth;
pub use serve::serve;
pub use status::status;
pub use watch::watch;
