use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use tokio::time::interval;

use crate::{config, error, info, utils, warning};

/// Continuously displays machine status, one line per poll.
///
/// Spawns one timer task per tracked machine (or just the requested one).
/// Timers are not coordinated: each fire issues an isolated call to the
/// proxy, calls may overlap and complete out of order, and only the latest
/// printed line matters. A failed poll prints a warning for that machine and
/// the timer keeps running; there are no retries and no backoff. Ctrl-C
/// aborts all timers.
pub async fn watch(machine: Option<usize>, interval_secs: Option<u64>) {
    let machine_count = config::washer_device_ids().len();

    let machines: Vec<usize> = match machine {
        Some(nr) if nr >= 1 && nr <= machine_count => vec![nr],
        Some(nr) => error!("Machine {} out of range (1..={}).", nr, machine_count),
        None => (1..=machine_count).collect(),
    };

    let period = Duration::from_secs(interval_secs.unwrap_or_else(config::watch_interval_secs));
    info!(
        "Watching {} machine(s) every {}s. Press Ctrl-C to stop.",
        machines.len(),
        period.as_secs()
    );

    let mut handles = Vec::new();
    for nr in machines {
        handles.push(tokio::spawn(async move {
            let client = Client::new();
            let mut ticker = interval(period);
            loop {
                ticker.tick().await;
                match super::poll::poll_machine(&client, nr).await {
                    Ok(status) => {
                        let estimate = utils::estimate_remaining(&status, Utc::now());
                        info!("Machine {}: {}", nr, utils::format_estimate(&estimate));
                    }
                    Err(e) => warning!("Machine {}: poll failed: {}", nr, e),
                }
            }
        }));
    }

    if let Err(e) = tokio::signal::ctrl_c().await {
        warning!("Failed to listen for shutdown signal: {}", e);
    }

    for handle in &handles {
        handle.abort();
    }

    info!("Stopped watching.");
}
