//! Clock and timestamp helpers for reminders.

use chrono::{DateTime, Duration, Local, Utc};

const SECONDS_PER_DAY: f64 = 24.0 * 60.0 * 60.0;

/// Source of "now". `Fixed` keeps tests deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// Current time as epoch seconds, millisecond precision.
    pub fn now_epoch(&self) -> f64 {
        to_epoch_seconds(self.now())
    }

    /// Moves a fixed clock forward. No effect on the system clock.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }
}

pub fn to_epoch_seconds(at: DateTime<Utc>) -> f64 {
    at.timestamp_millis() as f64 / 1000.0
}

/// Epoch seconds `days` whole days after `from`.
pub fn days_after(from: f64, days: u32) -> f64 {
    from + f64::from(days) * SECONDS_PER_DAY
}

/// Formats epoch seconds as a local `YYYY-MM-DD` date.
pub fn format_date(epoch_seconds: f64) -> String {
    let millis = (epoch_seconds * 1000.0).round() as i64;
    match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(at) => at.with_timezone(&Local).format("%Y-%m-%d").to_string(),
        None => format!("{epoch_seconds}"),
    }
}
