//! The near-term lookahead window used for every search in a ranking run.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

/// Length of the lookahead window in hours.
const LOOKAHEAD_HOURS: i64 = 24;

/// Half-open interval `[start, start + 24h)` in UTC.
///
/// A ranking run builds one window and passes it to every search so that all
/// destinations are priced against the same dates.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use faremeter_core::SearchWindow;
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap();
/// let window = SearchWindow::starting_at(now);
/// assert_eq!(window.first_day().to_string(), "2024-03-01");
/// assert_eq!(window.last_day().to_string(), "2024-03-02");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl SearchWindow {
    /// Build a window opening at `start`.
    #[must_use]
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        let end = start
            .checked_add_signed(TimeDelta::hours(LOOKAHEAD_HOURS))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self { start, end }
    }

    /// Build a window opening at the current instant.
    #[must_use]
    pub fn from_now() -> Self {
        Self::starting_at(Utc::now())
    }

    /// Inclusive start of the window.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Calendar day (UTC) on which the window opens.
    #[must_use]
    pub fn first_day(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// Calendar day (UTC) on which the window closes.
    #[must_use]
    pub fn last_day(&self) -> NaiveDate {
        self.end.date_naive()
    }
}
