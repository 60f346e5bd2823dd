//! Most popular stations and trip.

use super::frequency::FrequencyTable;
use super::{Popular, ensure_rows};
use crate::error::Result;
use crate::pipeline::TripTable;

#[derive(Debug, Clone, PartialEq)]
pub struct StationReport {
    pub start: Popular<String>,
    pub end: Popular<String>,
    /// Most common `"<start> - <end>"` pair.
    pub trip: Popular<String>,
}

impl StationReport {
    pub fn compute(table: &TripTable) -> Result<Self> {
        ensure_rows(table, "station report")?;

        let starts: FrequencyTable<&str> = table.iter().map(|r| r.start_station.as_str()).collect();
        let ends: FrequencyTable<&str> = table.iter().map(|r| r.end_station.as_str()).collect();
        let trips: FrequencyTable<String> = table.iter().map(|r| r.trip()).collect();

        Ok(Self {
            start: Popular::mode_of(&starts)?.map(str::to_string),
            end: Popular::mode_of(&ends)?.map(str::to_string),
            trip: Popular::mode_of(&trips)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::fixtures::trip;
    use crate::selection::City;

    #[test]
    fn test_station_report() {
        let table = TripTable::new(vec![
            trip(City::Chicago, "2017-01-02 08:00:00", 60.0, "Canal St", "Lake St"),
            trip(City::Chicago, "2017-01-02 09:00:00", 60.0, "Clark St", "Lake St"),
            trip(City::Chicago, "2017-01-02 10:00:00", 60.0, "Clark St", "Canal St"),
            trip(City::Chicago, "2017-01-02 11:00:00", 60.0, "Canal St", "Lake St"),
            trip(City::Chicago, "2017-01-02 12:00:00", 60.0, "Clark St", "State St"),
        ]);
        let report = StationReport::compute(&table).unwrap();

        assert_eq!(report.start.value, "Clark St");
        assert_eq!(report.start.share.count, 3);
        assert_eq!(report.end.value, "Lake St");
        assert_eq!(report.trip.value, "Canal St - Lake St");
        assert_eq!(report.trip.share.count, 2);
    }

    #[test]
    fn test_ties_resolve_to_first_seen() {
        let table = TripTable::new(vec![
            trip(City::Chicago, "2017-01-02 08:00:00", 60.0, "B", "Y"),
            trip(City::Chicago, "2017-01-02 09:00:00", 60.0, "A", "X"),
        ]);
        let report = StationReport::compute(&table).unwrap();

        assert_eq!(report.start.value, "B");
        assert_eq!(report.end.value, "Y");
        assert_eq!(report.trip.value, "B - Y");
    }
}
