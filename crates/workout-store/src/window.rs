use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

/// A half-open `[start, end)` time range covering one UTC calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DayWindow {
    /// The window for a calendar date, midnight to the following midnight.
    pub fn for_date(date: NaiveDate) -> Self {
        let start = date.and_time(NaiveTime::MIN).and_utc();
        Self {
            start,
            end: start + Duration::days(1),
        }
    }

    /// The window of the day that contains `instant`.
    pub fn containing(instant: DateTime<Utc>) -> Self {
        Self::for_date(instant.date_naive())
    }

    /// The window of the current day.
    pub fn today() -> Self {
        Self::containing(Utc::now())
    }

    /// Returns true if `timestamp` falls inside the window.
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        self.start <= timestamp && timestamp < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn window_spans_midnight_to_midnight() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 10, 15, 42, 7).unwrap();
        let window = DayWindow::containing(instant);

        assert_eq!(window.start, Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap());
        assert_eq!(window.end, Utc.with_ymd_and_hms(2024, 3, 11, 0, 0, 0).unwrap());
    }

    #[test]
    fn start_is_inclusive_and_end_is_exclusive() {
        let window = DayWindow::for_date(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());

        assert!(window.contains(window.start));
        assert!(window.contains(window.end - Duration::nanoseconds(1)));
        assert!(!window.contains(window.end));
        assert!(!window.contains(window.start - Duration::seconds(1)));
    }

    #[test]
    fn window_crosses_month_boundary() {
        let window = DayWindow::for_date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(window.end, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn today_contains_now() {
        let window = DayWindow::today();
        let now = Utc::now();
        // Guard against the test straddling midnight.
        if now.date_naive() == window.start.date_naive() {
            assert!(window.contains(now));
        }
    }
}
