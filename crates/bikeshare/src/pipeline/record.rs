//! Cleaned trip records and tables.

use chrono::NaiveDateTime;

use crate::selection::City;

/// Placeholder for missing categorical data.
pub const UNKNOWN: &str = "Unknown";

/// One cleaned trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// City whose trip log the row came from.
    pub city: City,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Trip duration in seconds.
    pub trip_duration: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: String,
    /// Gender, or [`UNKNOWN`].
    pub gender: String,
    /// Birth year as text, or [`UNKNOWN`].
    pub birth_year: String,
    /// Calendar month of the start time (1-12).
    pub month: u32,
    /// ISO weekday of the start time (1 = Monday, 7 = Sunday).
    pub day: u32,
    /// Hour of the start time (0-23).
    pub hour: u32,
}

impl TripRecord {
    /// The ordered station pair, `"<start> - <end>"`.
    pub fn trip(&self) -> String {
        format!("{} - {}", self.start_station, self.end_station)
    }
}

/// An ordered sequence of cleaned trips.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripTable {
    records: Vec<TripRecord>,
}

impl TripTable {
    pub fn new(records: Vec<TripRecord>) -> Self {
        Self { records }
    }

    /// Concatenate tables, keeping row order and city labels.
    pub fn concat(tables: impl IntoIterator<Item = TripTable>) -> Self {
        let records = tables.into_iter().flat_map(|t| t.records).collect();
        Self { records }
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TripRecord> {
        self.records.iter()
    }

    /// Number of rows that came from a given city.
    pub fn count_for(&self, city: City) -> usize {
        self.records.iter().filter(|r| r.city == city).count()
    }

    /// Distinct source cities, in first-seen order.
    pub fn cities(&self) -> Vec<City> {
        let mut cities = Vec::new();
        for record in &self.records {
            if !cities.contains(&record.city) {
                cities.push(record.city);
            }
        }
        cities
    }

    /// A copy ordered by start time. Ties keep their original order.
    pub fn sorted_by_start(&self) -> TripTable {
        let mut records = self.records.clone();
        records.sort_by_key(|r| r.start_time);
        Self { records }
    }

    /// Rows `[offset, offset + size)`, clipped to the table.
    pub fn page(&self, offset: usize, size: usize) -> &[TripRecord] {
        let start = offset.min(self.records.len());
        let end = offset.saturating_add(size).min(self.records.len());
        &self.records[start..end]
    }
}

impl<'a> IntoIterator for &'a TripTable {
    type Item = &'a TripRecord;
    type IntoIter = std::slice::Iter<'a, TripRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
