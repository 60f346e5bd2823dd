//! Property-based tests for the cleaning pipeline and statistics.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p bikeshare --test property_tests
//! PROPTEST_CASES=10000 cargo test -p bikeshare --test property_tests
//! ```

use proptest::prelude::*;

use bikeshare::stats::{DurationBreakdown, FrequencyTable, SkipSentinel};
use bikeshare::{Choice, City, DataTable, Month, Pipeline, UNKNOWN, Weekday, seconds_to_sentence};

// =============================================================================
// Test Strategies
// =============================================================================

/// Start timestamps in the first half of 2017, as trip logs would have them.
fn start_time() -> impl Strategy<Value = String> {
    (1u32..=6, 1u32..=28, 0u32..24, 0u32..60, 0u32..60).prop_map(|(mo, d, h, mi, s)| {
        format!("2017-{:02}-{:02} {:02}:{:02}:{:02}", mo, d, h, mi, s)
    })
}

fn raw_row() -> impl Strategy<Value = Vec<String>> {
    (
        prop_oneof![start_time(), Just(String::new()), Just("garbage".to_string())],
        0u32..5000,
        prop_oneof![Just("A"), Just("B"), Just("")],
        prop_oneof![Just("Male"), Just("Female"), Just("")],
    )
        .prop_map(|(start, duration, station, gender)| {
            vec![
                start.clone(),
                start,
                duration.to_string(),
                station.to_string(),
                "C".to_string(),
                "Subscriber".to_string(),
                gender.to_string(),
                "1990.0".to_string(),
            ]
        })
}

fn raw_table(rows: Vec<Vec<String>>, with_demographics: bool) -> DataTable {
    let mut headers: Vec<String> = [
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
        "Gender",
        "Birth Year",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    if !with_demographics {
        headers.truncate(6);
        let rows = rows
            .into_iter()
            .map(|mut r| {
                r.truncate(6);
                r
            })
            .collect();
        return DataTable::new(headers, rows);
    }
    DataTable::new(headers, rows)
}

// =============================================================================
// Pipeline Properties
// =============================================================================

proptest! {
    #[test]
    fn filtered_rows_match_selection(
        rows in prop::collection::vec(raw_row(), 0..60),
        month_code in 0usize..=6,
        day_code in 0usize..=7,
    ) {
        let month = Choice::<Month>::from_code(month_code).unwrap();
        let day = Choice::<Weekday>::from_code(day_code).unwrap();
        let raw = raw_table(rows, true);
        let (table, stats) = Pipeline::new(month, day).clean(City::Chicago, &raw).unwrap();

        prop_assert_eq!(stats.raw_rows, stats.filtered_out + stats.incomplete + stats.kept);
        prop_assert_eq!(stats.kept, table.len());

        for record in &table {
            prop_assert!((1..=7).contains(&record.day));
            prop_assert!(record.hour <= 23);
            if let Choice::Only(m) = month {
                prop_assert_eq!(record.month, m.number_from_month());
            }
            if let Choice::Only(d) = day {
                prop_assert_eq!(record.day, d.number_from_monday());
            }
            prop_assert!(!record.start_station.is_empty());
        }
    }

    #[test]
    fn washington_rows_have_unknown_demographics(
        rows in prop::collection::vec(raw_row(), 0..40),
    ) {
        let raw = raw_table(rows, false);
        let (table, _) = Pipeline::new(Choice::All, Choice::All)
            .clean(City::Washington, &raw)
            .unwrap();

        for record in &table {
            prop_assert_eq!(record.gender.as_str(), UNKNOWN);
            prop_assert_eq!(record.birth_year.as_str(), UNKNOWN);
        }
    }
}

// =============================================================================
// Statistics Properties
// =============================================================================

proptest! {
    #[test]
    fn duration_breakdown_round_trips(seconds in 0.0f64..1.0e10) {
        let breakdown = DurationBreakdown::from_seconds(seconds);
        prop_assert_eq!(breakdown.total_seconds(), seconds.floor() as u64);
        prop_assert!(breakdown.days < 365);
        prop_assert!(breakdown.hours < 24);
        prop_assert!(breakdown.minutes < 60);
        prop_assert!(breakdown.seconds < 60);
        prop_assert!(seconds_to_sentence(seconds).ends_with(" seconds"));
    }

    #[test]
    fn skip_sentinel_prefers_real_values(
        values in prop::collection::vec(prop_oneof![Just("Unknown"), Just("1990"), Just("1985")], 1..50),
    ) {
        let table: FrequencyTable<&str> = values.iter().copied().collect();
        let (picked, _) = table.mode_by(&SkipSentinel(UNKNOWN)).unwrap();

        if values.iter().any(|v| *v != UNKNOWN) {
            prop_assert_ne!(*picked, UNKNOWN);
        } else {
            prop_assert_eq!(*picked, UNKNOWN);
        }
    }

    #[test]
    fn shares_sum_to_total(values in prop::collection::vec(1u32..=6, 1..100)) {
        let table: FrequencyTable<u32> = values.iter().copied().collect();
        let ranked = table.ranked();
        let counted: usize = ranked.iter().map(|(_, c)| *c).sum();
        let percent: f64 = ranked.iter().map(|(_, c)| table.share(*c).percent()).sum();

        prop_assert_eq!(counted, values.len());
        prop_assert!((percent - 100.0).abs() < 1e-6);
    }
}
