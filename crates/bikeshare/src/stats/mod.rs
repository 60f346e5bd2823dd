//! Descriptive statistics over a cleaned [`TripTable`].
//!
//! Four independent reports read the same table; none of them mutates it.

mod duration;
mod frequency;
mod station;
mod time;
mod users;

use std::hash::Hash;
use std::time::{Duration, Instant};

pub use duration::{DurationBreakdown, DurationReport, DurationUnit, median, seconds_to_sentence};
pub use frequency::{FrequencyTable, ModeRule, MostFrequent, Share, SkipSentinel, SmallestTied};
pub use station::StationReport;
pub use time::TimeReport;
pub use users::UserReport;

use crate::error::{BikeshareError, Result};
use crate::pipeline::TripTable;

/// A representative value and how often it occurs.
#[derive(Debug, Clone, PartialEq)]
pub struct Popular<T> {
    pub value: T,
    pub share: Share,
}

impl<T> Popular<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Popular<U> {
        Popular {
            value: f(self.value),
            share: self.share,
        }
    }
}

impl<T: Clone + Hash + Eq> Popular<T> {
    /// The plain mode of a frequency table.
    pub fn mode_of(table: &FrequencyTable<T>) -> Result<Self> {
        Self::pick(table, &MostFrequent)
    }

    /// The value `rule` picks from a frequency table.
    pub fn pick<R: ModeRule<T> + ?Sized>(table: &FrequencyTable<T>, rule: &R) -> Result<Self> {
        let (value, count) = table
            .mode_by(rule)
            .ok_or_else(|| BikeshareError::EmptyData("no values to rank".to_string()))?;
        Ok(Self {
            value: value.clone(),
            share: table.share(count),
        })
    }
}

fn ensure_rows(table: &TripTable, report: &str) -> Result<()> {
    if table.is_empty() {
        return Err(BikeshareError::EmptyData(format!("{report} needs at least one trip")));
    }
    Ok(())
}

/// A report and the wall time spent computing it.
#[derive(Debug, Clone)]
pub struct Timed<T> {
    pub report: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    fn run(f: impl FnOnce() -> Result<T>) -> Result<Self> {
        let started = Instant::now();
        let report = f()?;
        Ok(Self {
            report,
            elapsed: started.elapsed(),
        })
    }
}

/// All four reports for one table.
#[derive(Debug, Clone)]
pub struct Reports {
    pub time: Timed<TimeReport>,
    pub stations: Timed<StationReport>,
    pub durations: Timed<DurationReport>,
    pub users: Timed<UserReport>,
}

impl Reports {
    pub fn compute(table: &TripTable) -> Result<Self> {
        Ok(Self {
            time: Timed::run(|| TimeReport::compute(table))?,
            stations: Timed::run(|| StationReport::compute(table))?,
            durations: Timed::run(|| DurationReport::compute(table))?,
            users: Timed::run(|| UserReport::compute(table))?,
        })
    }
}
