use chrono::{Days, NaiveDate};
use js_sys::Date;

use crate::domain::market::ChartPeriod;

/// Source of "today" for history ranges
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Today's date from the browser clock, taken in UTC like `Date.toISOString()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn today(&self) -> NaiveDate {
        let now = Date::new_0();
        NaiveDate::from_ymd_opt(
            now.get_utc_full_year() as i32,
            now.get_utc_month() + 1,
            now.get_utc_date(),
        )
        .unwrap_or_default()
    }
}

/// Clock pinned to a single date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Inclusive date window requested from the history endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl HistoryRange {
    /// `[today - period days, today]` using calendar subtraction
    pub fn ending(today: NaiveDate, period: ChartPeriod) -> Self {
        let start = today
            .checked_sub_days(Days::new(u64::from(period.days())))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end: today }
    }

    pub fn start_param(&self) -> String {
        format_iso_date(self.start)
    }

    pub fn end_param(&self) -> String {
        format_iso_date(self.end)
    }
}

/// `YYYY-MM-DD`
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
