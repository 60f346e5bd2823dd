//! Cleaning and filtering of raw trip logs into [`TripTable`]s.

mod clean;
mod record;

pub use clean::{
    BIRTH_YEAR, CleaningStats, END_STATION, END_TIME, GENDER, Pipeline, START_STATION,
    START_TIME, TRIP_DURATION, USER_TYPE, normalize_birth_year, parse_timestamp,
};
pub use record::{TripRecord, TripTable, UNKNOWN};

#[cfg(test)]
pub(crate) use record::fixtures;
