//! Cleaning and filtering of raw city tables.
//!
//! A raw table goes through these steps, in order:
//!
//! 1. parse `Start Time` / `End Time`; malformed values become missing
//! 2. derive the start hour and month
//! 3. apply the month filter
//! 4. derive the ISO weekday (1 = Monday .. 7 = Sunday) and apply the day filter
//! 5. fill `Gender` / `Birth Year` with [`UNKNOWN`] (always for Washington,
//!    which has no such columns, otherwise only where a value is missing)
//! 6. drop rows still missing any retained value

use chrono::{Datelike, Month, NaiveDateTime, Timelike, Weekday};

use super::record::{TripRecord, TripTable, UNKNOWN};
use crate::error::{BikeshareError, Result};
use crate::input::DataTable;
use crate::selection::{Choice, City, FilterSelection, Selectable};

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Accepted timestamp layouts. `%.f` also matches an absent fraction.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a trip timestamp, `None` when the text matches no known layout.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
}

/// Render a birth year as text. Integral numbers lose their fraction
/// (`"1992.0"` becomes `"1992"`); anything else is kept as written.
pub fn normalize_birth_year(value: &str) -> String {
    let trimmed = value.trim();
    match trimmed.parse::<f64>() {
        Ok(year) if year.is_finite() && year.fract() == 0.0 => format!("{}", year as i64),
        _ => trimmed.to_string(),
    }
}

/// Row accounting for one cleaned table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleaningStats {
    /// Rows in the raw table.
    pub raw_rows: usize,
    /// Rows removed by the month or day filter.
    pub filtered_out: usize,
    /// Rows dropped for a missing value.
    pub incomplete: usize,
    /// Rows in the cleaned table.
    pub kept: usize,
}

/// Header positions of the retained columns.
struct Columns {
    start_time: usize,
    end_time: usize,
    trip_duration: usize,
    start_station: usize,
    end_station: usize,
    user_type: usize,
    /// `None` when the value is synthesized as [`UNKNOWN`].
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl Columns {
    fn resolve(city: City, table: &DataTable) -> Result<Self> {
        let required = |name: &str| {
            table
                .column_index(name)
                .ok_or_else(|| BikeshareError::MissingColumn {
                    city: city.title().to_string(),
                    column: name.to_string(),
                })
        };

        let (gender, birth_year) = if city.has_demographics() {
            (Some(required(GENDER)?), Some(required(BIRTH_YEAR)?))
        } else {
            (None, None)
        };

        Ok(Self {
            start_time: required(START_TIME)?,
            end_time: required(END_TIME)?,
            trip_duration: required(TRIP_DURATION)?,
            start_station: required(START_STATION)?,
            end_station: required(END_STATION)?,
            user_type: required(USER_TYPE)?,
            gender,
            birth_year,
        })
    }
}

/// Non-missing, trimmed cell value.
fn cell(row: &[String], index: usize) -> Option<&str> {
    row.get(index)
        .map(|v| v.trim())
        .filter(|v| !DataTable::is_null_value(v))
}

/// Applies the month and day filters and cleans raw city tables.
#[derive(Debug, Clone, Copy)]
pub struct Pipeline {
    month: Choice<Month>,
    day: Choice<Weekday>,
}

impl Pipeline {
    pub fn new(month: Choice<Month>, day: Choice<Weekday>) -> Self {
        Self { month, day }
    }

    pub fn from_selection(selection: &FilterSelection) -> Self {
        Self::new(selection.month, selection.day)
    }

    /// Clean one city's raw table.
    ///
    /// Whether a trip starting at `start_time` passes the month and day filters.
    ///
    /// A missing start time only passes when neither filter is set.
    fn admits(&self, start_time: Option<NaiveDateTime>) -> bool {
        match start_time {
            Some(t) => {
                let month = u8::try_from(t.month())
                    .ok()
                    .and_then(|m| Month::try_from(m).ok());
                month.is_some_and(|m| self.month.allows(m)) && self.day.allows(t.weekday())
            }
            None => self.month == Choice::All && self.day == Choice::All,
        }
    }

    /// The result may be empty; callers decide whether that is an error.
    pub fn clean(&self, city: City, raw: &DataTable) -> Result<(TripTable, CleaningStats)> {
        let columns = Columns::resolve(city, raw)?;
        let mut stats = CleaningStats {
            raw_rows: raw.row_count(),
            ..CleaningStats::default()
        };
        let mut records = Vec::new();

        for row in &raw.rows {
            let start_time = cell(row, columns.start_time).and_then(parse_timestamp);

            if !self.admits(start_time) {
                stats.filtered_out += 1;
                continue;
            }

            match self.build_record(city, row, &columns, start_time) {
                Some(record) => records.push(record),
                None => stats.incomplete += 1,
            }
        }

        stats.kept = records.len();
        Ok((TripTable::new(records), stats))
    }

    /// Clean every loaded table and concatenate the results in order.
    pub fn clean_all(&self, tables: Vec<(City, DataTable)>) -> Result<TripTable> {
        let mut cleaned = Vec::with_capacity(tables.len());
        for (city, raw) in tables {
            let (table, stats) = self.clean(city, &raw)?;
            log::debug!(
                "{}: {} raw rows, {} filtered out, {} incomplete, {} kept",
                city,
                stats.raw_rows,
                stats.filtered_out,
                stats.incomplete,
                stats.kept
            );
            cleaned.push(table);
        }
        Ok(TripTable::concat(cleaned))
    }

    fn build_record(
        &self,
        city: City,
        row: &[String],
        columns: &Columns,
        start_time: Option<NaiveDateTime>,
    ) -> Option<TripRecord> {
        let start_time = start_time?;
        let end_time = cell(row, columns.end_time).and_then(parse_timestamp)?;
        let trip_duration = cell(row, columns.trip_duration)
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|v| v.is_finite())?;

        let gender = columns
            .gender
            .and_then(|i| cell(row, i))
            .unwrap_or(UNKNOWN)
            .to_string();
        let birth_year = columns
            .birth_year
            .and_then(|i| cell(row, i))
            .map(normalize_birth_year)
            .unwrap_or_else(|| UNKNOWN.to_string());

        Some(TripRecord {
            city,
            start_time,
            end_time,
            trip_duration,
            start_station: cell(row, columns.start_station)?.to_string(),
            end_station: cell(row, columns.end_station)?.to_string(),
            user_type: cell(row, columns.user_type)?.to_string(),
            gender,
            birth_year,
            month: start_time.month(),
            day: start_time.weekday().number_from_monday(),
            hour: start_time.hour(),
        })
    }
}
