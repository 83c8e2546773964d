use colored::Colorize;
use std::{error::Error, time::Duration};

pub const NUMBER_DASHES: usize = 80;
pub const SEPARATOR_DASHES: usize = 15;

pub fn print_header(title: &str) {
    let padding = NUMBER_DASHES.saturating_sub(title.len() + 2);
    println!("{}", "-".repeat(NUMBER_DASHES).green().bold());
    println!(
        "{} {} {}",
        "-".repeat(padding / 2).red().bold(),
        title.bold(),
        "-".repeat(padding - padding / 2).red().bold()
    );
    println!("{}", "-".repeat(NUMBER_DASHES).green().bold());
}

pub fn print_day(day: usize) {
    println!("- {}", format!("Day {day:02}").bold());
}

pub fn print_part(title: &str) {
    println!("{}", format!("{title}:").bold());
}

pub fn print_failure(err: &dyn Error) {
    println!("{}: {err}", "No solution".red().bold());
}

pub fn print_separator() {
    println!("{}", "-".repeat(SEPARATOR_DASHES));
}

pub fn print_time(d: Duration) {
    println!(
        "Time taken: {}.{}{}{} {}",
        format!("{:03}", d.as_secs()).bright_red(),
        format!("{:03}", d.subsec_millis()).red(),
        format!("{:03}", d.subsec_micros() % 1_000).yellow(),
        format!("{:03}", d.subsec_nanos() % 1_000).green(),
        "seconds".bold(),
    );
}
