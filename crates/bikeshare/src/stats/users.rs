//! Rider demographics.

use super::frequency::{FrequencyTable, SkipSentinel};
use super::{Popular, ensure_rows};
use crate::error::Result;
use crate::pipeline::{TripTable, UNKNOWN};

#[derive(Debug, Clone, PartialEq)]
pub struct UserReport {
    /// User types by descending count.
    pub user_types: Vec<(String, usize)>,
    /// Genders by descending count.
    pub genders: Vec<(String, usize)>,
    /// Most common birth year, preferring any real year over [`UNKNOWN`].
    pub birth_year: Popular<String>,
}

impl UserReport {
    pub fn compute(table: &TripTable) -> Result<Self> {
        ensure_rows(table, "user report")?;

        let user_types: FrequencyTable<&str> = table.iter().map(|r| r.user_type.as_str()).collect();
        let genders: FrequencyTable<&str> = table.iter().map(|r| r.gender.as_str()).collect();
        let birth_years: FrequencyTable<&str> = table.iter().map(|r| r.birth_year.as_str()).collect();

        Ok(Self {
            user_types: owned_ranking(&user_types),
            genders: owned_ranking(&genders),
            birth_year: Popular::pick(&birth_years, &SkipSentinel(UNKNOWN))?.map(str::to_string),
        })
    }
}

fn owned_ranking(table: &FrequencyTable<&str>) -> Vec<(String, usize)> {
    table
        .ranked()
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect()
}
