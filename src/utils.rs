use chrono::{DateTime, Utc};
use rand::{Rng, distr::Alphanumeric};

use crate::types::DeviceStatus;

/// Client-side view of a machine, derived from a proxy response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Estimate {
    Running {
        remaining_minutes: i64,
        staleness_minutes: i64,
    },
    Stopped {
        staleness_minutes: Option<i64>,
    },
    /// Machine reports running but no usable completion estimate.
    Unknown,
}

pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Extrapolates remaining minutes from a proxy status response.
///
/// The upstream estimate is a pair: an absolute estimated finish time
/// (`value`) and the moment that estimate was sampled (`timestamp`). The
/// remaining time as of the sample is `value - timestamp`; by `now` another
/// `now - timestamp` minutes (the staleness) have passed, so the adjusted
/// remainder is the difference of the two. A remainder of zero or less means
/// the cycle has run out since the sample and the machine is reported as
/// stopped. Linear extrapolation, no correction for upstream re-sampling
/// drift.
pub fn estimate_remaining(status: &DeviceStatus, now: DateTime<Utc>) -> Estimate {
    let Some(completion) = &status.completion_time else {
        return if status.stopped {
            Estimate::Stopped {
                staleness_minutes: None,
            }
        } else {
            Estimate::Unknown
        };
    };

    let (Some(finish), Some(sampled)) = (
        parse_timestamp(&completion.value),
        parse_timestamp(&completion.timestamp),
    ) else {
        return Estimate::Unknown;
    };

    let staleness_minutes = (now - sampled).num_minutes();

    if status.stopped {
        return Estimate::Stopped {
            staleness_minutes: Some(staleness_minutes),
        };
    }

    let remaining_at_sample = (finish - sampled).num_minutes();
    let adjusted = remaining_at_sample - staleness_minutes;

    if adjusted > 0 {
        Estimate::Running {
            remaining_minutes: adjusted,
            staleness_minutes,
        }
    } else {
        Estimate::Stopped {
            staleness_minutes: Some(staleness_minutes),
        }
    }
}

pub fn format_estimate(estimate: &Estimate) -> String {
    match estimate {
        Estimate::Running {
            remaining_minutes,
            staleness_minutes,
        } => format!(
            "{} min left (sampled {} min ago)",
            remaining_minutes, staleness_minutes
        ),
        Estimate::Stopped {
            staleness_minutes: Some(staleness),
        } => format!("stopped (sampled {} min ago)", staleness),
        Estimate::Stopped {
            staleness_minutes: None,
        } => "stopped".to_string(),
        Estimate::Unknown => "running (no estimate available)".to_string(),
    }
}
