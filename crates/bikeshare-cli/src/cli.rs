//! CLI argument definitions using clap.

use std::path::PathBuf;

use bikeshare::{BikeshareConfig, Choice, City, Month, ParserConfig, Weekday};
use clap::Parser;

/// Bikeshare: explore US bikeshare trip data
#[derive(Parser)]
#[command(name = "bikeshare")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory containing chicago.csv, new_york_city.csv and washington.csv
    #[arg(short, long, env = "BIKESHARE_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// City to explore: 0-3 or a name (all, chicago, new_york_city, washington)
    #[arg(long)]
    pub city: Option<Choice<City>>,

    /// Month filter: 0-6 or a name (all, january ... june)
    #[arg(long)]
    pub month: Option<Choice<Month>>,

    /// Day-of-week filter: 0-7 or a name (all, monday ... sunday)
    #[arg(long)]
    pub day: Option<Choice<Weekday>>,

    /// Number of raw rows shown per page
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u16).range(1..))]
    pub page_size: u16,

    /// Read at most this many trips from each city file
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_rows: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Library configuration built from the flags.
    pub fn config(&self) -> BikeshareConfig {
        BikeshareConfig::default()
            .with_data_dir(&self.data_dir)
            .with_parser(ParserConfig {
                max_rows: self.max_rows.and_then(|n| usize::try_from(n).ok()),
            })
    }

    /// All three filters were given, so no prompts are needed.
    pub fn is_scripted(&self) -> bool {
        self.city.is_some() && self.month.is_some() && self.day.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filters_by_name_and_code() {
        let cli = Cli::try_parse_from([
            "bikeshare",
            "--city",
            "new_york_city",
            "--month",
            "3",
            "--day",
            "all",
        ])
        .unwrap();

        assert_eq!(cli.city, Some(Choice::Only(City::NewYorkCity)));
        assert_eq!(cli.month, Some(Choice::Only(Month::March)));
        assert_eq!(cli.day, Some(Choice::All));
        assert!(cli.is_scripted());
        assert_eq!(cli.page_size, 5);
    }

    #[test]
    fn test_config_from_flags() {
        let cli =
            Cli::try_parse_from(["bikeshare", "--data-dir", "/srv/trips", "--max-rows", "100"])
                .unwrap();
        let config = cli.config();
        assert_eq!(config.data_dir, PathBuf::from("/srv/trips"));
        assert_eq!(config.parser.max_rows, Some(100));

        let cli = Cli::try_parse_from(["bikeshare"]).unwrap();
        assert_eq!(cli.config().parser.max_rows, None);
        assert!(Cli::try_parse_from(["bikeshare", "--max-rows", "0"]).is_err());
    }

    #[test]
    fn test_partial_filters_are_not_scripted() {
        let cli = Cli::try_parse_from(["bikeshare", "--city", "1"]).unwrap();
        assert!(!cli.is_scripted());
    }

    #[test]
    fn test_out_of_range_filter_is_rejected() {
        assert!(Cli::try_parse_from(["bikeshare", "--month", "7"]).is_err());
        assert!(Cli::try_parse_from(["bikeshare", "--page-size", "0"]).is_err());
    }
}
