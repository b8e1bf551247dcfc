use chrono::{DateTime, Duration, Utc};

/// Source of the current time, with an optional offset for time simulation.
#[derive(Clone, Copy, Default, Debug)]
pub struct TimeState {
    /// Time offset from the current UTC time.
    time_offset: Duration,
}

impl TimeState {
    /// Creates a `TimeState` running `offset` ahead of the current time.
    pub fn with_offset(offset: Duration) -> Self {
        Self {
            time_offset: offset,
        }
    }

    /// Returns the current simulation time.
    pub fn time(&self) -> DateTime<Utc> {
        Utc::now() + self.time_offset
    }
}
