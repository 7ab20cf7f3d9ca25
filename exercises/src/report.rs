//! Fixed-format reports for the accumulators.
//!
//! Everything renders into a `fmt::Write`, so reports are plain strings in
//! tests and are copied to stdout by the CLI.

use crate::counting::{ClassCounts, SpacingCounts};
use crate::histogram::{CharFrequencies, WordLengths};
use std::fmt::{self, Display, Write};

pub const DEFAULT_BAR: char = '|';

pub fn count<W: Write + ?Sized>(out: &mut W, n: u64) -> fmt::Result {
    writeln!(out, "{n}")
}

pub fn spacing<W: Write + ?Sized>(out: &mut W, counts: &SpacingCounts) -> fmt::Result {
    writeln!(out, "Here are the results: ")?;
    writeln!(out, "Blanks: {}", counts.blanks)?;
    writeln!(out, "Tabs: {}", counts.tabs)?;
    writeln!(out, "Newlines: {}", counts.newlines)
}

pub fn char_classes<W: Write + ?Sized>(out: &mut W, counts: &ClassCounts) -> fmt::Result {
    out.write_str("digits = ")?;
    for digit in counts.digits {
        write!(out, " {digit}")?;
    }
    writeln!(
        out,
        ", whitespace = {}, other = {}",
        counts.whitespace, counts.other
    )
}

/// Horizontal bar histogram: one row per bin, the bar symbol repeated once
/// per count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarChart {
    symbol: char,
    skip_empty: bool,
}

impl BarChart {
    pub fn new(symbol: char) -> Self {
        Self {
            symbol,
            skip_empty: true,
        }
    }

    /// Whether bins with a zero count still get a row.
    pub fn show_empty(mut self, show: bool) -> Self {
        self.skip_empty = !show;
        self
    }

    pub fn render<W, L, I>(&self, out: &mut W, title: &str, rows: I) -> fmt::Result
    where
        W: Write + ?Sized,
        L: Display,
        I: IntoIterator<Item = (L, u64)>,
    {
        writeln!(out, "{title}")?;
        for (label, count) in rows {
            if count == 0 && self.skip_empty {
                continue;
            }
            write!(out, "{label}: ")?;
            for _ in 0..count {
                out.write_char(self.symbol)?;
            }
            out.write_char('\n')?;
        }
        Ok(())
    }
}

impl Default for BarChart {
    fn default() -> Self {
        Self::new(DEFAULT_BAR)
    }
}

pub fn word_lengths<W: Write + ?Sized>(
    out: &mut W,
    lengths: &WordLengths,
    chart: BarChart,
) -> fmt::Result {
    let rows = (1..lengths.max()).map(|length| (format!("{length:>2}"), lengths.count(length)));
    chart.render(out, "Word length histogram:", rows)
}

pub fn char_frequencies<W: Write + ?Sized>(
    out: &mut W,
    frequencies: &CharFrequencies,
    chart: BarChart,
) -> fmt::Result {
    let rows = frequencies
        .iter()
        .map(|(byte, count)| (char::from(byte), count));
    chart.render(out, "Character frequency histogram:", rows)
}
