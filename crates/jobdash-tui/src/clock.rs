use chrono::{DateTime, Local};

const REFRESH_INTERVAL_SECS: i64 = 5;

/// Wall-clock display, refreshed at most every five seconds so redraws
/// stay cheap while the rest of the UI idles.
pub struct ClockState {
    now: DateTime<Local>,
}

impl ClockState {
    pub fn new() -> Self {
        Self { now: Local::now() }
    }

    pub fn tick(&mut self) {
        let current = Local::now();
        if (current - self.now).num_seconds() >= REFRESH_INTERVAL_SECS {
            self.now = current;
        }
    }

    pub fn time_line(&self) -> String {
        self.now.format("%-I:%M:%S %p").to_string()
    }

    pub fn date_line(&self) -> String {
        self.now.format("%A, %B %-d, %Y").to_string()
    }
}

impl Default for ClockState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn clock_at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> ClockState {
        ClockState {
            now: Local.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap(),
        }
    }

    #[test]
    fn test_time_line_is_twelve_hour() {
        let clock = clock_at(2025, 3, 22, 15, 4, 5);
        assert_eq!(clock.time_line(), "3:04:05 PM");

        let clock = clock_at(2025, 3, 22, 0, 30, 0);
        assert_eq!(clock.time_line(), "12:30:00 AM");
    }

    #[test]
    fn test_date_line_is_long_form() {
        let clock = clock_at(2025, 3, 22, 9, 0, 0);
        assert_eq!(clock.date_line(), "Saturday, March 22, 2025");
    }
}
