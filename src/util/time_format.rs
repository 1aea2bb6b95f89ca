use chrono::NaiveTime;

/// Formats solar-clock readings for the per-index console report.
pub struct TimeFormat {}

impl TimeFormat {
    pub fn new() -> Self {
        TimeFormat {}
    }

    pub fn format(&self, time: &NaiveTime) -> String {
        time.format("%H:%M:%S").to_string()
    }
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self::new()
    }
}
