use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::Timestamp;

impl Timestamp {
    /// Builds a timestamp from a wall-clock time, truncated to whole seconds.
    /// Times before the Unix epoch collapse to zero.
    pub fn from_system_time(t: SystemTime) -> Self {
        let seconds = t
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);

        Self { seconds }
    }

    /// Converts back to a wall-clock time.
    pub fn to_system_time(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(self.seconds.max(0) as u64)
    }
}
