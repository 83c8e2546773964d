use anyhow::{Context, Result};
use aoc_runner::output;
use clap::Parser;
use report_repair::{solve_all, Entries};
use std::path::PathBuf;

fn main() -> Result<()> {
    let app: App = App::parse();
    app.run()?;
    Ok(())
}

/// Advent of code 2020, day 1: Report Repair
#[derive(Debug, Parser)]
struct App {
    /// Path to the expense report, one entry per line.
    #[clap(short = 'i', long, default_value = "input_1.txt")]
    input: PathBuf,
}

impl App {
    fn run(&self) -> Result<()> {
        let entries = Entries::load(&self.input).with_context(|| {
            format!("unable to load {}", self.input.display())
        })?;

        output::print_header("Advent of Code 2020");
        output::print_day(1);

        solve_all(&entries)?;
        Ok(())
    }
}
