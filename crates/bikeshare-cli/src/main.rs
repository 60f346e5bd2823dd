//! Bikeshare CLI - interactive exploration of US bikeshare data.

mod cli;
mod prompt;
mod render;
mod session;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = session::run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
