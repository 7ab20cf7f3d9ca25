use crate::counting;
use crate::error::Result;
use crate::filters;
use crate::histogram::{self, OverlongPolicy, DEFAULT_MAX_WORD_LENGTH};
use crate::longest_line::{self, DEFAULT_LINE_CAPACITY};
use crate::report::{self, BarChart, DEFAULT_BAR};
use crate::tables::{self, TemperatureTable};
use clap::Subcommand;
use scanner_framework::ScanContext;
use std::io::Write;
use tracing::{debug, info};

/// Every runnable exercise. Flag defaults reproduce the textbook behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Exercise {
    /// Copy input to output unchanged.
    Copy,
    /// Count input characters.
    CountChars {
        /// Print the running count after every character.
        #[arg(long)]
        running: bool,
    },
    /// Count input lines.
    CountLines,
    /// Count blanks, tabs and newlines.
    CountBlanks,
    /// Count each digit, whitespace, and all other characters.
    CountClasses,
    /// Histogram of word lengths.
    WordLengths {
        /// Words this long or longer are not binned.
        #[arg(
            long,
            default_value_t = DEFAULT_MAX_WORD_LENGTH as u16,
            value_parser = clap::value_parser!(u16).range(1..)
        )]
        max: u16,
        #[arg(long, value_enum, default_value_t = OverlongPolicy::DropAtDelimiter)]
        policy: OverlongPolicy,
        #[arg(long, default_value_t = DEFAULT_BAR)]
        symbol: char,
    },
    /// Histogram of printable ASCII character frequencies.
    CharFrequency {
        #[arg(long, default_value_t = DEFAULT_BAR)]
        symbol: char,
    },
    /// Print the longest input line.
    LongestLine {
        /// Bytes kept from the longest line.
        #[arg(long, default_value_t = DEFAULT_LINE_CAPACITY)]
        capacity: usize,
    },
    /// Print input one word per line.
    EchoWords,
    /// Replace runs of blanks with a single blank.
    SqueezeBlanks,
    /// Make tabs, backspaces and backslashes visible.
    ShowEscapes,
    /// Read to end of input and print the end-of-file value.
    EofValue,
    /// Print a temperature conversion table.
    Temperature {
        #[arg(long, value_enum, default_value_t = TemperatureTable::FahrFloat)]
        table: TemperatureTable,
    },
    /// Print the ranges of the integer types.
    TypeRanges,
    /// Print the sizes of the fundamental types.
    TypeSizes,
}

impl Exercise {
    /// Whether the exercise consumes input at all.
    pub fn reads_input(&self) -> bool {
        !matches!(
            self,
            Exercise::Temperature { .. } | Exercise::TypeRanges | Exercise::TypeSizes
        )
    }

    /// Runs the exercise over `ctx`, writing its output to `out`.
    pub fn run<Ctx, W>(&self, ctx: Ctx, out: &mut W) -> Result<()>
    where
        Ctx: ScanContext,
        W: Write + ?Sized,
    {
        debug!(exercise = ?self, "running exercise");
        let mut text = String::new();
        match *self {
            Exercise::Copy => {
                filters::copy(ctx, out)?;
            }
            Exercise::CountChars { running: true } => {
                counting::count_chars_running(ctx, out)?;
            }
            Exercise::CountChars { running: false } => {
                report::count(&mut text, counting::count_chars(ctx)?)?;
            }
            Exercise::CountLines => {
                report::count(&mut text, counting::count_lines(ctx)?)?;
            }
            Exercise::CountBlanks => {
                report::spacing(&mut text, &counting::count_spacing(ctx)?)?;
            }
            Exercise::CountClasses => {
                report::char_classes(&mut text, &counting::count_classes(ctx)?)?;
            }
            Exercise::WordLengths {
                max,
                policy,
                symbol,
            } => {
                let lengths = histogram::word_lengths(ctx, usize::from(max), policy)?;
                if lengths.dropped() > 0 {
                    info!(
                        dropped = lengths.dropped(),
                        max,
                        "words at or over the maximum length were not binned"
                    );
                }
                report::word_lengths(&mut text, &lengths, BarChart::new(symbol))?;
            }
            Exercise::CharFrequency { symbol } => {
                let frequencies = histogram::char_frequencies(ctx)?;
                report::char_frequencies(&mut text, &frequencies, BarChart::new(symbol))?;
            }
            Exercise::LongestLine { capacity } => {
                let tracker = longest_line::longest_line(ctx, capacity)?;
                if tracker.truncated() > 0 {
                    info!(
                        length = tracker.max_len(),
                        kept = capacity,
                        "longest line truncated to buffer capacity"
                    );
                }
                if let Some(line) = tracker.longest() {
                    out.write_all(line)?;
                }
            }
            Exercise::EchoWords => {
                filters::echo_words(ctx, out)?;
            }
            Exercise::SqueezeBlanks => {
                filters::squeeze_blanks(ctx, out)?;
            }
            Exercise::ShowEscapes => {
                filters::show_escapes(ctx, out)?;
            }
            Exercise::EofValue => {
                let value = counting::read_to_eof(ctx)?;
                use std::fmt::Write as _;
                write!(text, "The value of c is: {value:2}")?;
            }
            Exercise::Temperature { table } => table.render(&mut text)?,
            Exercise::TypeRanges => tables::render_type_ranges(&mut text)?,
            Exercise::TypeSizes => tables::render_type_sizes(&mut text)?,
        }
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
