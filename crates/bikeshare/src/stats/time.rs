//! Most frequent times of travel.

use chrono::{Month, Weekday};

use super::frequency::{FrequencyTable, Share, SmallestTied};
use super::{Popular, ensure_rows};
use crate::error::Result;
use crate::pipeline::TripTable;
use crate::selection::Selectable;

/// Popular month, weekday and start hour.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeReport {
    /// Number of trips in the table.
    pub total: usize,
    /// Most common month number (1-12); the earliest month among ties.
    pub month: Popular<u32>,
    /// Most common ISO weekday (1 = Monday).
    pub day: Popular<u32>,
    /// Most common start hour (0-23).
    pub hour: Popular<u32>,
    /// Every month present, by descending count.
    pub months: Vec<(u32, Share)>,
}

impl TimeReport {
    pub fn compute(table: &TripTable) -> Result<Self> {
        ensure_rows(table, "time-of-travel report")?;

        let months: FrequencyTable<u32> = table.iter().map(|r| r.month).collect();
        let days: FrequencyTable<u32> = table.iter().map(|r| r.day).collect();
        let hours: FrequencyTable<u32> = table.iter().map(|r| r.hour).collect();

        Ok(Self {
            total: table.len(),
            month: Popular::pick(&months, &SmallestTied)?,
            day: Popular::pick(&days, &SmallestTied)?,
            hour: Popular::pick(&hours, &SmallestTied)?,
            months: months
                .ranked()
                .into_iter()
                .map(|(m, count)| (*m, months.share(count)))
                .collect(),
        })
    }

    pub fn month_name(&self) -> &'static str {
        u8::try_from(self.month.value)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map_or("Unknown", |m| Month::name(&m))
    }

    pub fn day_name(&self) -> &'static str {
        (self.day.value as usize)
            .checked_sub(1)
            .and_then(|i| Weekday::OPTIONS.get(i))
            .map_or("Unknown", |d| d.title())
    }

    /// The popular hour as a half-open range `[hour, hour + 1)`, wrapping at midnight.
    pub fn hour_range(&self) -> (u32, u32) {
        (self.hour.value, (self.hour.value + 1) % 24)
    }
}
