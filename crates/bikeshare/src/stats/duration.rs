//! Trip duration aggregates and their natural-language rendering.

use std::fmt;

use super::ensure_rows;
use crate::error::Result;
use crate::pipeline::TripTable;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
/// No leap-year adjustment.
const YEAR: u64 = 365 * DAY;

/// Whole seconds split into calendar-free units.
///
/// `top` is the largest unit the value reaches; units above it are zero and
/// are not rendered, every unit from `top` down is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationBreakdown {
    pub years: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub top: DurationUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DurationUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Years,
}

impl DurationBreakdown {
    /// Split a duration, flooring to whole seconds. Negative and NaN inputs
    /// count as zero.
    pub fn from_seconds(seconds: f64) -> Self {
        let whole = if seconds.is_nan() || seconds <= 0.0 {
            0
        } else {
            seconds.floor() as u64
        };

        let top = match whole {
            s if s >= YEAR => DurationUnit::Years,
            s if s >= DAY => DurationUnit::Days,
            s if s >= HOUR => DurationUnit::Hours,
            s if s >= MINUTE => DurationUnit::Minutes,
            _ => DurationUnit::Seconds,
        };

        Self {
            years: whole / YEAR,
            days: whole % YEAR / DAY,
            hours: whole % DAY / HOUR,
            minutes: whole % HOUR / MINUTE,
            seconds: whole % MINUTE,
            top,
        }
    }

    /// Total whole seconds the components add up to.
    pub fn total_seconds(&self) -> u64 {
        self.years * YEAR + self.days * DAY + self.hours * HOUR + self.minutes * MINUTE + self.seconds
    }
}

impl fmt::Display for DurationBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = [
            (DurationUnit::Years, self.years, "years"),
            (DurationUnit::Days, self.days, "days"),
            (DurationUnit::Hours, self.hours, "hours"),
            (DurationUnit::Minutes, self.minutes, "minutes"),
        ];
        for (unit, value, label) in units {
            if unit <= self.top {
                write!(f, "{} {} ", value, label)?;
            }
        }
        write!(f, "{} seconds", self.seconds)
    }
}

/// Render seconds as e.g. `"1 hours 2 minutes 5 seconds"`.
pub fn seconds_to_sentence(seconds: f64) -> String {
    DurationBreakdown::from_seconds(seconds).to_string()
}

/// Median of a sample; the mean of the two middle values for even sizes.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Total, mean and median trip duration in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationReport {
    pub total: f64,
    pub mean: f64,
    pub median: f64,
}

impl DurationReport {
    pub fn compute(table: &TripTable) -> Result<Self> {
        ensure_rows(table, "trip-duration report")?;

        let durations: Vec<f64> = table.iter().map(|r| r.trip_duration).collect();
        let total: f64 = durations.iter().sum();

        Ok(Self {
            total,
            mean: total / durations.len() as f64,
            median: median(&durations).unwrap_or_default(),
        })
    }
}
