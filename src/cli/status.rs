use std::time::Duration;

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tabled::Table;

use crate::{
    config, error,
    types::MachineTableRow,
    utils::{self, Estimate},
};

/// One-shot status table for the tracked machines.
///
/// Polls every machine (or just the requested one) once and renders the
/// results as a table. A machine whose poll fails gets an `error` row; the
/// others are still shown.
pub async fn status(machine: Option<usize>) {
    let machine_count = config::washer_device_ids().len();

    let machines: Vec<usize> = match machine {
        Some(nr) if nr >= 1 && nr <= machine_count => vec![nr],
        Some(nr) => error!("Machine {} out of range (1..={}).", nr, machine_count),
        None => (1..=machine_count).collect(),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching machine status...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let client = Client::new();
    let mut rows = Vec::new();
    for nr in machines {
        let row = match super::poll::poll_machine(&client, nr).await {
            Ok(status) => to_row(nr, utils::estimate_remaining(&status, Utc::now())),
            Err(_) => MachineTableRow {
                machine: nr,
                state: "error".to_string(),
                remaining: "-".to_string(),
                staleness: "-".to_string(),
            },
        };
        rows.push(row);
    }

    pb.finish_and_clear();
    println!("{}", Table::new(rows));
}

fn to_row(nr: usize, estimate: Estimate) -> MachineTableRow {
    match estimate {
        Estimate::Running {
            remaining_minutes,
            staleness_minutes,
        } => MachineTableRow {
            machine: nr,
            state: "running".to_string(),
            remaining: format!("{} min", remaining_minutes),
            staleness: format!("{} min", staleness_minutes),
        },
        Estimate::Stopped { staleness_minutes } => MachineTableRow {
            machine: nr,
            state: "stopped".to_string(),
            remaining: "-".to_string(),
            staleness: staleness_minutes
                .map(|s| format!("{} min", s))
                .unwrap_or_else(|| "-".to_string()),
        },
        Estimate::Unknown => MachineTableRow {
            machine: nr,
            state: "running".to_string(),
            remaining: "?".to_string(),
            staleness: "-".to_string(),
        },
    }
}
