//! Run counter handling and the cyclic index used to rotate documentation mirrors.

use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// Environment variable carrying the CI run number.
pub const RUN_COUNTER_ENV: &str = "GITHUB_RUN_NUMBER";

/// Value used when the run counter is not supplied. Selects the canonical URL.
pub const RUN_COUNTER_SENTINEL: &str = "0";

/// Map a 1-based run identifier onto `[1, max_index]`, wrapping every `max_index` runs.
///
/// Uses Euclidean remainder, so `run = 0` maps to `max_index` and negative runs
/// keep cycling instead of going out of range.
pub fn cyclic_index(run: i64, max_index: u32) -> Result<u32, AppError> {
    if max_index == 0 {
        return Err(AppError::invalid_input("max index", "must be greater than 0"));
    }
    let index = (i128::from(run) - 1).rem_euclid(i128::from(max_index)) + 1;
    // Bounded by max_index above.
    Ok(index as u32)
}

/// Parse the textual run identifier and compute its cyclic index.
pub fn parse_cyclic_index(run: &str, max_index: u32) -> Result<u32, AppError> {
    cyclic_index(parse_run_number(run)?, max_index)
}

/// Integer literal as `int()` reads it: surrounding whitespace, an optional sign, and
/// single underscores between digits.
fn parse_run_number(raw: &str) -> Result<i64, AppError> {
    let invalid = |reason: String| {
        AppError::invalid_input("run counter", format!("'{}' is not an integer ({})", raw, reason))
    };

    let text = raw.trim();
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return Err(invalid("misplaced digit separator".into()));
    }
    text.replace('_', "").parse::<i64>().map_err(|err| invalid(err.to_string()))
}

/// The run counter read once from the environment at process start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunCounter {
    /// Counter absent or equal to the sentinel.
    Unset,
    /// A concrete run number.
    Run(i64),
}

impl RunCounter {
    /// Interpret an optional environment value, falling back to the sentinel when absent.
    pub fn from_env_value(value: Option<&str>) -> Result<Self, AppError> {
        value.unwrap_or(RUN_COUNTER_SENTINEL).parse()
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, RunCounter::Unset)
    }

    /// Mirror slot for this run, or `None` when the canonical URL applies.
    pub fn mirror_index(&self, max_index: u32) -> Result<Option<u32>, AppError> {
        match self {
            RunCounter::Unset => Ok(None),
            RunCounter::Run(run) => cyclic_index(*run, max_index).map(Some),
        }
    }
}

impl FromStr for RunCounter {
    type Err = AppError;

    /// The sentinel is compared textually: `"0"` is unset, while `"00"` parses as run 0.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw == RUN_COUNTER_SENTINEL {
            return Ok(RunCounter::Unset);
        }
        parse_run_number(raw).map(RunCounter::Run)
    }
}

impl fmt::Display for RunCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunCounter::Unset => f.write_str(RUN_COUNTER_SENTINEL),
            RunCounter::Run(run) => write!(f, "{}", run),
        }
    }
}
