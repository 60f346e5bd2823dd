//! Filter selection: which city, month and weekday to explore.
//!
//! Each dimension is a [`Choice`] over a fixed, immutable option table.
//! Codes are what the interactive prompt accepts: `0` always means "all",
//! and `1..=N` index into the option table.

use std::fmt;
use std::str::FromStr;

use chrono::{Month, Weekday};

use crate::error::{BikeshareError, Result};

/// A value that can be picked by code or by name from a fixed option table.
pub trait Selectable: Copy + PartialEq + 'static {
    /// Human-readable kind, used in error messages ("city", "month", ...).
    const KIND: &'static str;
    /// Options in code order; code `n` selects `OPTIONS[n - 1]`.
    const OPTIONS: &'static [Self];

    /// Lowercase name, as accepted on the command line.
    fn name(&self) -> &'static str;

    /// Title-cased name for display.
    fn title(&self) -> &'static str;
}

/// A city with a published trip log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// File name of the city's trip log inside the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Whether the source has `Gender` and `Birth Year` columns.
    pub fn has_demographics(&self) -> bool {
        !matches!(self, City::Washington)
    }
}

impl Selectable for City {
    const KIND: &'static str = "city";
    const OPTIONS: &'static [Self] = &[City::Chicago, City::NewYorkCity, City::Washington];

    fn name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

// Trip logs only cover the first half of the year.
impl Selectable for Month {
    const KIND: &'static str = "month";
    const OPTIONS: &'static [Self] = &[
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    fn name(&self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
            Month::July => "july",
            Month::August => "august",
            Month::September => "september",
            Month::October => "october",
            Month::November => "november",
            Month::December => "december",
        }
    }

    fn title(&self) -> &'static str {
        Month::name(self)
    }
}

impl Selectable for Weekday {
    const KIND: &'static str = "day";
    const OPTIONS: &'static [Self] = &[
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    fn name(&self) -> &'static str {
        match self {
            Weekday::Mon => "monday",
            Weekday::Tue => "tuesday",
            Weekday::Wed => "wednesday",
            Weekday::Thu => "thursday",
            Weekday::Fri => "friday",
            Weekday::Sat => "saturday",
            Weekday::Sun => "sunday",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }
}

/// Either every option or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T: Selectable> Choice<T> {
    /// Highest valid code.
    pub fn max_code() -> usize {
        T::OPTIONS.len()
    }

    /// Resolve an integer code.
    pub fn from_code(code: usize) -> Result<Self> {
        match code {
            0 => Ok(Choice::All),
            n if n <= T::OPTIONS.len() => Ok(Choice::Only(T::OPTIONS[n - 1])),
            _ => Err(BikeshareError::OutOfRange {
                kind: T::KIND,
                code,
                max: T::OPTIONS.len(),
            }),
        }
    }

    /// Parse a line of user input as a code.
    ///
    /// Non-numeric input yields [`BikeshareError::InvalidInput`], a number
    /// outside `0..=max_code()` yields [`BikeshareError::OutOfRange`]. Both
    /// are retryable.
    pub fn parse_code(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let code = trimmed
            .parse::<usize>()
            .map_err(|_| BikeshareError::InvalidInput(trimmed.to_string()))?;
        Self::from_code(code)
    }

    /// The code that selects this choice.
    pub fn code(&self) -> usize {
        match self {
            Choice::All => 0,
            Choice::Only(value) => T::OPTIONS
                .iter()
                .position(|o| o == value)
                .map_or(0, |i| i + 1),
        }
    }

    /// Whether a value passes this choice.
    pub fn allows(&self, value: T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => *wanted == value,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Choice::All => "all",
            Choice::Only(value) => value.name(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Choice::All => "All",
            Choice::Only(value) => value.title(),
        }
    }

    /// `(code, title)` pairs in code order, for rendering a menu.
    pub fn menu() -> Vec<(usize, &'static str)> {
        std::iter::once((0, "ALL"))
            .chain(T::OPTIONS.iter().enumerate().map(|(i, o)| (i + 1, o.title())))
            .collect()
    }

    /// Iterate the concrete options this choice covers.
    pub fn options(&self) -> Vec<T> {
        match self {
            Choice::All => T::OPTIONS.to_vec(),
            Choice::Only(value) => vec![*value],
        }
    }
}

impl<T: Selectable> FromStr for Choice<T> {
    type Err = BikeshareError;

    /// Accepts either a code (`"2"`) or a name (`"new york city"`,
    /// `"new_york_city"`, `"New-York-City"`).
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<usize>() {
            return Self::from_code(code);
        }

        let wanted = trimmed.to_lowercase().replace(['_', '-'], " ");
        if wanted == "all" {
            return Ok(Choice::All);
        }
        T::OPTIONS
            .iter()
            .find(|o| o.name() == wanted)
            .map(|o| Choice::Only(*o))
            .ok_or_else(|| BikeshareError::InvalidInput(trimmed.to_string()))
    }
}

impl<T: Selectable> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// The filters for one exploration session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: Choice<City>,
    pub month: Choice<Month>,
    pub day: Choice<Weekday>,
}

impl FilterSelection {
    pub fn new(city: Choice<City>, month: Choice<Month>, day: Choice<Weekday>) -> Self {
        Self { city, month, day }
    }

    /// Every city, every month, every day.
    pub fn all() -> Self {
        Self::new(Choice::All, Choice::All, Choice::All)
    }

    /// Build a selection from the three prompt codes.
    pub fn from_codes(city: usize, month: usize, day: usize) -> Result<Self> {
        Ok(Self::new(
            Choice::from_code(city)?,
            Choice::from_code(month)?,
            Choice::from_code(day)?,
        ))
    }
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "City: {}, Month: {}, Day: {}", self.city, self.month, self.day)
    }
}
