//! The interactive session loop: select, load, view rows, report, restart.

use std::io::{self, BufRead, Write};

use bikeshare::{Bikeshare, TripTable};

use crate::cli::Cli;
use crate::prompt::{Preset, Prompter};
use crate::render;

pub fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli.config();
    config.validate()?;
    log::debug!("reading trip logs from {}", config.data_dir.display());

    let bikeshare = Bikeshare::with_config(config);
    let preset = Preset {
        city: cli.city,
        month: cli.month,
        day: cli.day,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    explore(
        &bikeshare,
        &mut prompter,
        preset,
        usize::from(cli.page_size),
        cli.is_scripted(),
    )
}

/// Run sessions until the user declines to restart or input ends.
///
/// A scripted run makes a single pass without asking anything.
pub fn explore<R: BufRead, W: Write>(
    bikeshare: &Bikeshare,
    prompter: &mut Prompter<R, W>,
    preset: Preset,
    page_size: usize,
    scripted: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        render::greeting(prompter.output())?;

        let Some(selection) = prompter.selection(preset)? else {
            return Ok(());
        };
        render::selection(prompter.output(), &selection)?;

        let table = bikeshare.load(&selection)?;

        if !scripted {
            view_rows(prompter, &table, page_size)?;
        }

        let reports = bikeshare.analyze(&table)?;
        render::reports(prompter.output(), &reports)?;

        if scripted || !prompter.confirm("Would you like to restart? Enter yes or no.")? {
            return Ok(());
        }
    }
}

/// Offer to page through the raw rows, optionally sorted by start time.
pub fn view_rows<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    table: &TripTable,
    page_size: usize,
) -> io::Result<()> {
    let answer = prompter.ask(&format!(
        "Would you like to see the first {page_size} rows of data in addition to the stats? \
         Enter yes or no. Or enter yess to also sort by Start Date"
    ))?;

    let sorted;
    let view = match answer.as_str() {
        "yes" => {
            writeln!(prompter.output(), "\nFirst rows of data:\n")?;
            table
        }
        "yess" => {
            writeln!(prompter.output(), "\nFirst rows of data sorted by Start Date:\n")?;
            sorted = table.sorted_by_start();
            &sorted
        }
        _ => {
            writeln!(prompter.output(), "\nI will take that as a no.\n")?;
            return Ok(());
        }
    };

    let mut offset = 0;
    loop {
        render::rows(prompter.output(), view.page(offset, page_size))?;
        offset += page_size;

        if offset >= view.len() {
            writeln!(prompter.output(), "\nNo more rows.")?;
            return Ok(());
        }
        if !prompter.confirm(&format!(
            "Would you like to see {page_size} more rows? Enter yes or no."
        ))? {
            return Ok(());
        }
    }
}
