//! Longest-line tracker (section 1.9).

use crate::error::Result;
use crate::scan_into;
use scanner_framework::{BoundedBuffer, ClassifyRule, RuleSet, ScanContext, Tally};

/// Size of the saved-line buffer. One slot is held back for an end marker,
/// so at most `MAXLINE - 1` bytes of a line are kept.
pub const MAXLINE: usize = 1000;

/// Bytes kept from the longest line by default.
pub const DEFAULT_LINE_CAPACITY: usize = MAXLINE - 1;

/// A line of input. `body` holds at most the rule's capacity; `len` is the
/// full length, counting the newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub body: BoundedBuffer,
    pub len: usize,
    pub terminated: bool,
}

impl Line {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Reads one line, keeping only its first `capacity` bytes.
pub struct LineRule {
    capacity: usize,
}

impl LineRule {
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl<Ctx> ClassifyRule<Ctx, Line> for LineRule
where
    Ctx: ScanContext,
{
    fn try_classify(&mut self, ctx: &mut Ctx) -> Option<Line> {
        ctx.peek()?;
        let mut line = Line {
            body: BoundedBuffer::with_capacity(self.capacity),
            len: 0,
            terminated: false,
        };
        while let Some(byte) = ctx.advance() {
            ctx.commit();
            line.len += 1;
            if byte == b'\n' {
                line.terminated = true;
                break;
            }
            line.body.push(byte);
        }
        Some(line)
    }
}

/// Keeps a copy of the longest line seen so far. On ties the earlier line
/// wins. Lines longer than the buffer are still compared by their full
/// length, but only the first `capacity` bytes are kept.
#[derive(Debug, Clone)]
pub struct LongestLine {
    longest: BoundedBuffer,
    max: usize,
    lines: u64,
}

impl LongestLine {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            longest: BoundedBuffer::with_capacity(capacity),
            max: 0,
            lines: 0,
        }
    }

    /// The saved line, or `None` if there was no input.
    pub fn longest(&self) -> Option<&[u8]> {
        (self.max > 0).then(|| self.longest.as_bytes())
    }

    /// Full length of the longest line, including bytes the buffer dropped.
    pub fn max_len(&self) -> usize {
        self.max
    }

    /// Bytes of the longest line that did not fit.
    pub fn truncated(&self) -> usize {
        self.max - self.longest.len()
    }
}

impl Default for LongestLine {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_LINE_CAPACITY)
    }
}

impl Tally<Line> for LongestLine {
    fn record(&mut self, category: &Line) {
        self.lines += 1;
        let len = category.len();
        if len > self.max {
            self.max = len;
            self.longest.overwrite(category.body.as_bytes());
            if category.terminated {
                self.longest.push(b'\n');
            }
        }
    }

    fn total(&self) -> u64 {
        self.lines
    }
}

pub fn longest_line<Ctx: ScanContext>(ctx: Ctx, capacity: usize) -> Result<LongestLine> {
    let rules: RuleSet<Ctx, Line> = vec![Box::new(LineRule::new(capacity))];
    scan_into(ctx, rules, LongestLine::with_capacity(capacity))
}
