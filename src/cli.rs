//! Command-line surface: `<input> <output> <filter>`.

use std::path::PathBuf;

use thiserror::Error;
use tracing::warn;

use crate::image_pipeline::{Filter, FilterError};

/// Environment variable overriding the blur worker count.
pub const THREADS_ENV: &str = "IMGFILTER_THREADS";

/// Exit status for usage errors and failed runs.
pub const FAILURE_EXIT_CODE: u8 = 1;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("expected <input> <output> <filter>")]
    MissingArguments { program: String },

    #[error(transparent)]
    InvalidFilter(#[from] FilterError),
}

/// A fully parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub input: PathBuf,
    pub output: PathBuf,
    pub filter: Filter,
}

/// Parses the raw process arguments, program name included.
///
/// Arguments past the third positional one are ignored.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Invocation, CliError> {
    let mut args = args.into_iter();
    let program = args.next().unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    let (Some(input), Some(output), Some(filter)) = (args.next(), args.next(), args.next()) else {
        return Err(CliError::MissingArguments { program });
    };

    Ok(Invocation {
        input: PathBuf::from(input),
        output: PathBuf::from(output),
        filter: filter.parse()?,
    })
}

pub fn usage(program: &str) -> String {
    let filters: Vec<&str> = Filter::ALL.iter().map(|f| f.flag()).collect();
    format!(
        "Usage: {program} <input.jpg> <output.jpg> <filter>\nFilters: {}\n",
        filters.join(", ")
    )
}

/// Worker count from [`THREADS_ENV`], if set to a positive integer.
pub fn threads_from_env() -> Option<usize> {
    let raw = std::env::var(THREADS_ENV).ok()?;
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Some(n),
        _ => {
            warn!("Ignoring {}={:?}: expected a positive integer", THREADS_ENV, raw);
            None
        }
    }
}
