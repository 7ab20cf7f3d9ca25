//! Chapter-1 stream exercises from "The C Programming Language", each one a
//! rule set and an accumulator driven by [`scanner_framework::Scanner`], plus
//! the small table reports from chapter 2.

pub mod counting;
pub mod error;
pub mod exercise;
pub mod filters;
pub mod histogram;
pub mod longest_line;
pub mod report;
pub mod tables;

pub use error::{ExerciseError, Result};
pub use exercise::Exercise;

use scanner_framework::{RuleSet, ScanContext, Scanner, Tally};
use tracing::debug;

/// Space, tab and newline: the word delimiters used throughout chapter 1.
pub fn is_delimiter(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n')
}

/// Runs `rules` over the whole input and returns the filled tally.
pub fn scan_into<Ctx, Cat, T>(ctx: Ctx, rules: RuleSet<Ctx, Cat>, mut tally: T) -> Result<T>
where
    Ctx: ScanContext,
    T: Tally<Cat>,
{
    let mut scanner = Scanner::new(ctx, rules);
    let summary = scanner.tally_into(&mut tally);
    debug!(
        classified = summary.classified,
        unclassified = summary.unclassified,
        binned = tally.total(),
        "scan complete"
    );
    scanner.finish()?;
    Ok(tally)
}
