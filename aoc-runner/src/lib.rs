#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod output;

use std::{
    error::Error,
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader},
    iter::FromIterator,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};
use cpu_time::ProcessTime;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("unable to open input file `{}`", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("`{}` is a directory", .path.display())]
    IsDirectory { path: PathBuf },
    #[error("unable to read input")]
    Read(#[from] io::Error),
    #[error("invalid entry {value:?} on line {line}")]
    Parse {
        line: usize,
        value: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

pub type FRead = BufReader<File>;

pub fn file_reader<P: AsRef<Path>>(path: P) -> Result<FRead, InputError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let meta = file.metadata()?;

    if meta.is_dir() {
        return Err(InputError::IsDirectory {
            path: path.to_path_buf(),
        });
    }

    Ok(BufReader::new(file))
}

/// Parses every line of `r` as a `T`, ignoring surrounding whitespace.
///
/// Line numbers in [`InputError::Parse`] are 1-based.
pub fn read_to_iter<R, T>(r: R) -> impl Iterator<Item = Result<T, InputError>>
where
    R: io::Read,
    T: FromStr,
    T::Err: Error + Send + Sync + 'static,
{
    BufReader::new(r).lines().enumerate().map(|(idx, line)| {
        let line = line?;
        let value = line.trim();
        value.parse::<T>().map_err(|source| InputError::Parse {
            line: idx + 1,
            value: value.to_owned(),
            source: Box::new(source),
        })
    })
}

pub fn parse_to<R, T, C>(r: R) -> Result<C, InputError>
where
    R: io::Read,
    T: FromStr,
    T::Err: Error + Send + Sync + 'static,
    C: FromIterator<T>,
{
    read_to_iter(r).collect()
}

/// Runs `f`, returning its result and the CPU time the process spent on it.
#[must_use]
pub fn timed<T, F: FnOnce() -> T>(f: F) -> (T, Duration) {
    let start = ProcessTime::now();
    let value = f();
    (value, start.elapsed())
}

pub trait Solver {
    type Input;
    type Output: Display;
    type Error: Error;

    fn title(&self) -> &str;
    fn solve(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;

    /// Solves `input`, printing the outcome and how long the search took.
    fn run(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        output::print_part(self.title());

        let (outcome, elapsed) = timed(|| self.solve(input));

        match &outcome {
            Ok(answer) => println!("{answer}"),
            Err(e) => output::print_failure(e),
        }
        output::print_time(elapsed);

        outcome
    }
}

pub type DynSolver<'a, I, O, E> =
    &'a dyn Solver<Input = I, Output = O, Error = E>;

#[must_use]
pub fn run_all<I, O, E>(
    solvers: &[DynSolver<'_, I, O, E>],
    input: &I,
) -> Vec<Result<O, E>>
where
    O: Display,
    E: Error,
{
    solvers
        .iter()
        .enumerate()
        .map(|(idx, solver)| {
            if idx > 0 {
                output::print_separator();
            }
            solver.run(input)
        })
        .collect()
}
