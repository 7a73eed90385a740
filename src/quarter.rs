use std::fmt;

use chrono::{Datelike, NaiveDate};

/// How far a date is into its calendar quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuarterProgress {
    pub year: i32,
    /// 1..=4
    pub quarter: u32,
    /// First day of the quarter.
    pub start: NaiveDate,
    /// First day of the next quarter.
    pub end: NaiveDate,
    /// 1-based day within the quarter; the first day counts as day 1.
    pub day: u32,
    pub days: u32,
}

impl QuarterProgress {
    pub fn for_date(date: NaiveDate) -> Self {
        let quarter = (date.month() - 1) / 3 + 1;
        let start = NaiveDate::from_ymd_opt(date.year(), (quarter - 1) * 3 + 1, 1).unwrap_or(date);
        let end = if quarter == 4 {
            NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(date.year(), quarter * 3 + 1, 1)
        }
        .unwrap_or(date);

        let day = (date - start).num_days() as u32 + 1;
        let days = (end - start).num_days() as u32;
        Self { year: date.year(), quarter, start, end, day, days }
    }

    pub fn remaining(&self) -> u32 {
        self.days.saturating_sub(self.day)
    }

    pub fn percent(&self) -> f64 {
        if self.days == 0 {
            return 100.0;
        }
        (self.day as f64 / self.days as f64 * 100.0).min(100.0)
    }

    /// Fixed-width bar, e.g. `████░░░░░░` for a fifth of the way in.
    pub fn bar(&self, width: usize) -> String {
        let filled = ((self.percent() / 100.0) * width as f64).round() as usize;
        let filled = filled.min(width);
        format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
    }
}

impl fmt::Display for QuarterProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{} {} // DAY {} OF {} // {:.1}%", self.quarter, self.year, self.day, self.days, self.percent())
    }
}
