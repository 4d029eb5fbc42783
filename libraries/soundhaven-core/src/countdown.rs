//! Countdown to the next daily set
//!
//! Cards refresh at 00:00 UTC. The countdown is recomputed from wall-clock
//! time on every tick; the only thing kept between ticks is which midnight
//! is being counted down to, so that reaching it fires exactly once.

use chrono::{DateTime, Days, Utc};

/// The first 00:00 UTC strictly after `now`
pub fn next_utc_midnight(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive()
        .checked_add_days(Days::new(1))
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Whole seconds left until the next 00:00 UTC (rounded down)
pub fn seconds_until_next_utc_midnight(now: DateTime<Utc>) -> i64 {
    (next_utc_midnight(now) - now).num_seconds()
}

/// Format seconds as `HHh MMm SSs`. Negative input is shown as zero.
pub fn format_countdown(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!(
        "{:02}h {:02}m {:02}s",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

/// Result of one countdown poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownTick {
    /// Text to show, e.g. `"07h 12m 03s"`
    pub display: String,
    /// The day boundary was reached on this tick
    pub expired: bool,
}

/// Edge-triggered countdown to the end of the current day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    target: DateTime<Utc>,
}

impl Countdown {
    /// Count down to the midnight following `now`
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            target: next_utc_midnight(now),
        }
    }

    /// The boundary currently being counted down to
    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    /// Seconds left until the target, rounded up so that zero is only
    /// shown once the boundary has actually passed.
    pub fn remaining_seconds(&self, now: DateTime<Utc>) -> i64 {
        let millis = (self.target - now).num_milliseconds();
        if millis <= 0 {
            0
        } else {
            (millis + 999) / 1000
        }
    }

    pub fn display(&self, now: DateTime<Utc>) -> String {
        format_countdown(self.remaining_seconds(now))
    }

    /// Poll the countdown.
    ///
    /// When the target has been reached the tick reports `expired` and the
    /// countdown re-arms for the following midnight. A poll that arrives
    /// late (the host was suspended) still fires only once.
    pub fn tick(&mut self, now: DateTime<Utc>) -> CountdownTick {
        let display = self.display(now);
        let expired = now >= self.target;
        if expired {
            self.target = next_utc_midnight(now);
        }

        CountdownTick { display, expired }
    }
}
