//! Word-length and character-frequency histograms (exercises 1-13 and 1-14).

use crate::error::Result;
use crate::{is_delimiter, scan_into};
use clap::ValueEnum;
use scanner_framework::{Bins, ByteRule, ClassifyRule, RuleSet, ScanContext, Tally};
use tracing::warn;

pub const DEFAULT_MAX_WORD_LENGTH: usize = 20;

/// Largest word-length bound a histogram accepts; bigger bounds are clamped.
pub const WORD_LENGTH_LIMIT: usize = u16::MAX as usize;

/// First and last printable ASCII codes.
pub const PRINTABLE_FIRST: u8 = b' ';
pub const PRINTABLE_LAST: u8 = b'~';

/// What happens to words of `max` bytes or more.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OverlongPolicy {
    /// The whole word is discarded when its delimiter arrives.
    #[default]
    DropAtDelimiter,
    /// The running length wraps back to zero each time it reaches `max`;
    /// whatever remains of the word is binned normally.
    ResetMidWord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordUnit {
    /// A run of non-delimiter bytes with its length as seen by the policy.
    /// `terminated` is false when the run was cut off by end of input.
    Word { length: usize, terminated: bool },
    Delimiter,
}

/// Consumes a run of non-delimiter bytes and measures it.
pub struct WordRule {
    max: usize,
    policy: OverlongPolicy,
}

impl WordRule {
    pub fn new(max: usize, policy: OverlongPolicy) -> Self {
        Self { max, policy }
    }
}

impl<Ctx> ClassifyRule<Ctx, WordUnit> for WordRule
where
    Ctx: ScanContext,
{
    fn quick_check(&self, first_byte: u8) -> Option<bool> {
        Some(!is_delimiter(first_byte))
    }

    fn try_classify(&mut self, ctx: &mut Ctx) -> Option<WordUnit> {
        if is_delimiter(ctx.peek()?) {
            return None;
        }
        // Counted byte by byte; the word itself is never buffered.
        let mut length = 0usize;
        while let Some(byte) = ctx.peek() {
            if is_delimiter(byte) {
                break;
            }
            ctx.advance();
            ctx.commit();
            length += 1;
            if self.policy == OverlongPolicy::ResetMidWord && length >= self.max {
                length = 0;
            }
        }
        Some(WordUnit::Word {
            length,
            terminated: !ctx.is_eof(),
        })
    }

    fn priority(&self) -> i32 {
        10
    }
}

pub fn word_rules<Ctx: ScanContext>(max: usize, policy: OverlongPolicy) -> RuleSet<Ctx, WordUnit> {
    vec![
        Box::new(WordRule::new(max, policy)),
        Box::new(ByteRule::new(|b: u8| {
            is_delimiter(b).then_some(WordUnit::Delimiter)
        })),
    ]
}

/// Word counts indexed by length, `0..=max`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLengths {
    bins: Bins,
    max: usize,
    dropped: u64,
}

impl WordLengths {
    pub fn new(max: usize) -> Self {
        let max = max.min(WORD_LENGTH_LIMIT);
        Self {
            bins: Bins::new(max + 1),
            max,
            dropped: 0,
        }
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn bins(&self) -> &Bins {
        &self.bins
    }

    pub fn count(&self, length: usize) -> u64 {
        self.bins.get(length)
    }

    /// Words discarded for reaching `max`.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

impl Tally<WordUnit> for WordLengths {
    fn record(&mut self, category: &WordUnit) {
        match *category {
            // only a delimiter completes a word
            WordUnit::Delimiter
            | WordUnit::Word { length: 0, .. }
            | WordUnit::Word {
                terminated: false, ..
            } => {}
            WordUnit::Word { length, .. } if length < self.max => {
                self.bins.increment(length);
            }
            WordUnit::Word { .. } => self.dropped += 1,
        }
    }

    fn total(&self) -> u64 {
        self.bins.total()
    }
}

pub fn word_lengths<Ctx: ScanContext>(
    ctx: Ctx,
    max: usize,
    policy: OverlongPolicy,
) -> Result<WordLengths> {
    let lengths = WordLengths::new(max);
    if lengths.max() < max {
        warn!(requested = max, used = lengths.max(), "word length bound clamped");
    }
    scan_into(ctx, word_rules(lengths.max(), policy), lengths)
}

/// Printable ASCII bytes map to themselves; everything else is left
/// unclassified.
pub fn classify_printable(byte: u8) -> Option<u8> {
    (PRINTABLE_FIRST..=PRINTABLE_LAST)
        .contains(&byte)
        .then_some(byte)
}

/// Frequency of each printable ASCII byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharFrequencies {
    bins: Bins,
}

impl CharFrequencies {
    pub fn new() -> Self {
        Self {
            bins: Bins::new(usize::from(PRINTABLE_LAST - PRINTABLE_FIRST) + 1),
        }
    }

    pub fn count(&self, byte: u8) -> u64 {
        match byte.checked_sub(PRINTABLE_FIRST) {
            Some(index) if byte <= PRINTABLE_LAST => self.bins.get(usize::from(index)),
            _ => 0,
        }
    }

    /// `(byte, count)` for every printable byte, in ASCII order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        (PRINTABLE_FIRST..=PRINTABLE_LAST).zip(self.bins.as_slice().iter().copied())
    }
}

impl Default for CharFrequencies {
    fn default() -> Self {
        Self::new()
    }
}

impl Tally<u8> for CharFrequencies {
    fn record(&mut self, category: &u8) {
        if let Some(index) = category.checked_sub(PRINTABLE_FIRST) {
            self.bins.increment(usize::from(index));
        }
    }

    fn total(&self) -> u64 {
        self.bins.total()
    }
}

pub fn char_frequencies<Ctx: ScanContext>(ctx: Ctx) -> Result<CharFrequencies> {
    let rules: RuleSet<Ctx, u8> = vec![Box::new(ByteRule::new(classify_printable))];
    scan_into(ctx, rules, CharFrequencies::new())
}
