//! Bikeshare: descriptive statistics over US bikeshare trip logs.
//!
//! Trip logs for Chicago, New York City and Washington are loaded from CSV,
//! cleaned and filtered by month and weekday, then summarized by four
//! independent reports: popular times of travel, popular stations, trip
//! durations and rider demographics.
//!
//! # Example
//!
//! ```no_run
//! use bikeshare::{Bikeshare, BikeshareConfig, FilterSelection};
//!
//! let bikeshare = Bikeshare::with_config(BikeshareConfig::default().with_data_dir("data"));
//! let selection = FilterSelection::from_codes(1, 6, 0).unwrap();
//! let table = bikeshare.load(&selection).unwrap();
//! let reports = bikeshare.analyze(&table).unwrap();
//!
//! println!("Trips: {}", reports.time.report.total);
//! println!("Popular start station: {}", reports.stations.report.start.value);
//! ```

pub mod error;
pub mod input;
pub mod pipeline;
pub mod selection;
pub mod stats;

mod bikeshare;

pub use crate::bikeshare::{Bikeshare, BikeshareConfig};
pub use error::{BikeshareError, Result};
pub use input::{DataTable, DatasetLoader, Parser, ParserConfig, SourceMetadata};
pub use pipeline::{CleaningStats, Pipeline, TripRecord, TripTable, UNKNOWN};
pub use selection::{Choice, City, FilterSelection, Selectable};
pub use stats::{
    DurationReport, Popular, Reports, StationReport, TimeReport, Timed, UserReport,
    seconds_to_sentence,
};

pub use chrono::{Month, Weekday};
