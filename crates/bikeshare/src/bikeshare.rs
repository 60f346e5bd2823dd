//! Main `Bikeshare` struct and public API.

use std::path::PathBuf;

use crate::error::{BikeshareError, Result};
use crate::input::{DatasetLoader, ParserConfig};
use crate::pipeline::{Pipeline, TripTable};
use crate::selection::FilterSelection;
use crate::stats::Reports;

/// Configuration for loading trip logs.
#[derive(Debug, Clone)]
pub struct BikeshareConfig {
    /// Directory holding `chicago.csv`, `new_york_city.csv` and `washington.csv`.
    pub data_dir: PathBuf,
    /// Parser configuration.
    pub parser: ParserConfig,
}

impl Default for BikeshareConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            parser: ParserConfig::default(),
        }
    }
}

impl BikeshareConfig {
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_parser(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }

    /// Check that the data directory exists.
    pub fn validate(&self) -> Result<()> {
        if !self.data_dir.is_dir() {
            return Err(BikeshareError::Config(format!(
                "data directory '{}' does not exist",
                self.data_dir.display()
            )));
        }
        Ok(())
    }
}

/// Loads, cleans and summarizes bikeshare trip logs.
pub struct Bikeshare {
    loader: DatasetLoader,
}

impl Bikeshare {
    /// Read from the current directory with default parser settings.
    pub fn new() -> Self {
        Self::with_config(BikeshareConfig::default())
    }

    pub fn with_config(config: BikeshareConfig) -> Self {
        Self {
            loader: DatasetLoader::with_parser_config(config.data_dir, config.parser),
        }
    }

    /// Load and clean every trip the selection covers.
    ///
    /// For all cities, each one is cleaned on its own and the results are
    /// concatenated in Chicago, New York City, Washington order. A selection
    /// that leaves no trips at all is an [`BikeshareError::EmptySelection`].
    pub fn load(&self, selection: &FilterSelection) -> Result<TripTable> {
        let raw = self.loader.load(selection.city)?;
        let table = Pipeline::from_selection(selection).clean_all(raw)?;

        if table.is_empty() {
            return Err(BikeshareError::EmptySelection {
                selection: selection.to_string(),
            });
        }

        log::info!("{} trips match {}", table.len(), selection);
        Ok(table)
    }

    /// Compute all four reports for a loaded table.
    pub fn analyze(&self, table: &TripTable) -> Result<Reports> {
        Reports::compute(table)
    }
}

impl Default for Bikeshare {
    fn default() -> Self {
        Self::new()
    }
}
