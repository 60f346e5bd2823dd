//! Line-based prompts for the interactive session.

use std::io::{self, BufRead, Write};

use bikeshare::{BikeshareError, Choice, City, FilterSelection, Month, Selectable, Weekday};
use colored::Colorize;

/// Preset filters from the command line; `None` means ask.
#[derive(Debug, Clone, Copy, Default)]
pub struct Preset {
    pub city: Option<Choice<City>>,
    pub month: Option<Choice<Month>>,
    pub day: Option<Choice<Weekday>>,
}

/// Reads answers from `input` and writes questions to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Next line of input, `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Ask for a numbered choice until a valid code is entered.
    ///
    /// Returns `None` if input ends first.
    pub fn choose<T: Selectable>(&mut self, question: &str) -> io::Result<Option<Choice<T>>> {
        loop {
            writeln!(self.output, "\n{}", question)?;
            for (code, title) in Choice::<T>::menu() {
                writeln!(self.output, "{} - {}", code, title)?;
            }

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match Choice::<T>::parse_code(&line) {
                Ok(choice) => return Ok(Some(choice)),
                Err(BikeshareError::InvalidInput(_)) => writeln!(
                    self.output,
                    "{}",
                    "Sorry, not a valid input. Please try again with a single digit number".red()
                )?,
                Err(e) if e.is_retryable() => writeln!(
                    self.output,
                    "{}",
                    "Sorry, not a valid input. Please try again".red()
                )?,
                Err(e) => return Err(io::Error::other(e)),
            }
        }
    }

    /// Ask for each filter the preset leaves open.
    ///
    /// Returns `None` if input ends before all three are known.
    pub fn selection(&mut self, preset: Preset) -> io::Result<Option<FilterSelection>> {
        let city = match preset.city {
            Some(city) => city,
            None => match self.choose::<City>("Select one or more cities by entering a number")? {
                Some(city) => city,
                None => return Ok(None),
            },
        };
        let month = match preset.month {
            Some(month) => month,
            None => match self.choose::<Month>("Select your filter for month by entering a number")? {
                Some(month) => month,
                None => return Ok(None),
            },
        };
        let day = match preset.day {
            Some(day) => day,
            None => match self
                .choose::<Weekday>("Select your filter for day of the week by entering a number")?
            {
                Some(day) => day,
                None => return Ok(None),
            },
        };
        Ok(Some(FilterSelection::new(city, month, day)))
    }

    /// Ask a free-form question; the answer is trimmed and lowercased.
    /// End of input reads as an empty answer.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        writeln!(self.output, "\n{}", question)?;
        Ok(self
            .read_line()?
            .map(|line| line.trim().to_lowercase())
            .unwrap_or_default())
    }

    /// Whether the answer to `question` is "yes".
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        Ok(self.ask(question)? == "yes")
    }
}
