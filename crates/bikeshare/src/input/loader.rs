//! Loads per-city trip logs from the data directory.

use std::path::PathBuf;

use super::parser::{Parser, ParserConfig};
use super::source::DataTable;
use crate::error::Result;
use crate::selection::{Choice, City};

/// Reads raw city tables from a data directory.
///
/// Nothing is cached; each call re-reads the files.
pub struct DatasetLoader {
    data_dir: PathBuf,
    parser: Parser,
}

impl DatasetLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self::with_parser_config(data_dir, ParserConfig::default())
    }

    pub fn with_parser_config(data_dir: impl Into<PathBuf>, config: ParserConfig) -> Self {
        Self {
            data_dir: data_dir.into(),
            parser: Parser::with_config(config),
        }
    }

    /// Path of a city's trip log.
    pub fn source_path(&self, city: City) -> PathBuf {
        self.data_dir.join(city.file_name())
    }

    /// Load a single city's raw table.
    pub fn load_city(&self, city: City) -> Result<DataTable> {
        let (table, metadata) = self.parser.parse_file(self.source_path(city))?;
        log::debug!(
            "loaded {} ({} bytes, {} rows, {} columns, {})",
            metadata.file,
            metadata.size_bytes,
            metadata.row_count,
            metadata.column_count,
            metadata.hash
        );
        Ok(table)
    }

    /// Load every table the choice covers, each tagged with its city.
    ///
    /// `All` loads Chicago, New York City and Washington in that order.
    pub fn load(&self, city: Choice<City>) -> Result<Vec<(City, DataTable)>> {
        city.options()
            .into_iter()
            .map(|c| Ok((c, self.load_city(c)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BikeshareError;

    #[test]
    fn test_source_paths() {
        let loader = DatasetLoader::new("/data");
        assert_eq!(
            loader.source_path(City::NewYorkCity),
            PathBuf::from("/data/new_york_city.csv")
        );
    }

    #[test]
    fn test_load_tags_each_city() {
        let dir = tempfile::TempDir::new().unwrap();
        for city in [City::Chicago, City::NewYorkCity, City::Washington] {
            let body = format!("Start Time,Source\n2017-01-01 00:00:00,{}\n", city.file_name());
            std::fs::write(dir.path().join(city.file_name()), body).unwrap();
        }
        let loader = DatasetLoader::new(dir.path());

        let one = loader.load(Choice::Only(City::Washington)).unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].0, City::Washington);

        let all = loader.load(Choice::All).unwrap();
        let cities: Vec<City> = all.iter().map(|(c, _)| *c).collect();
        assert_eq!(cities, vec![City::Chicago, City::NewYorkCity, City::Washington]);
        for (city, table) in &all {
            assert_eq!(table.get(0, 1), Some(city.file_name()));
        }
    }

    #[test]
    fn test_missing_city_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = DatasetLoader::new(dir.path()).load_city(City::Chicago).unwrap_err();
        assert!(matches!(err, BikeshareError::Io { .. }));
    }
}
