//! Counting exercises: characters, lines, blanks/tabs/newlines, and the
//! digit/whitespace/other census.

use crate::error::Result;
use crate::{is_delimiter, scan_into};
use scanner_framework::{ByteRule, ClassifyRule, Counter, RuleSet, ScanContext, Scanner, Tally};
use std::io::Write;

/// Value `getchar` hands back once input is exhausted.
pub const EOF: i32 = -1;

fn every_byte<Ctx: ScanContext>() -> RuleSet<Ctx, ()> {
    vec![Box::new(ByteRule::new(|_: u8| Some(())))]
}

/// Counts every byte of input.
pub fn count_chars<Ctx: ScanContext>(ctx: Ctx) -> Result<u64> {
    Ok(scan_into(ctx, every_byte(), Counter::default())?.get())
}

/// Counts every byte, writing the running total after each one.
pub fn count_chars_running<Ctx, W>(ctx: Ctx, out: &mut W) -> Result<u64>
where
    Ctx: ScanContext,
    W: Write + ?Sized,
{
    let mut scanner = Scanner::new(ctx, every_byte());
    let mut count = 0u64;
    while let Some(scanned) = scanner.next_scanned() {
        if scanned.category().is_some() {
            count += 1;
            writeln!(out, "{count}")?;
        }
    }
    scanner.finish()?;
    Ok(count)
}

/// Counts newline bytes.
pub fn count_lines<Ctx: ScanContext>(ctx: Ctx) -> Result<u64> {
    let rules: RuleSet<Ctx, ()> = vec![Box::new(ByteRule::new(|b: u8| {
        (b == b'\n').then_some(())
    }))];
    Ok(scan_into(ctx, rules, Counter::default())?.get())
}

/// Reads until end of input and returns the sentinel that ended it.
pub fn read_to_eof<Ctx: ScanContext>(ctx: Ctx) -> Result<i32> {
    let mut scanner: Scanner<Ctx, ()> = Scanner::new(ctx, Vec::new());
    scanner.by_ref().for_each(drop);
    scanner.finish()?;
    Ok(EOF)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
    Blank,
    Tab,
    Newline,
}

pub fn classify_spacing(byte: u8) -> Option<Spacing> {
    match byte {
        b' ' => Some(Spacing::Blank),
        b'\t' => Some(Spacing::Tab),
        b'\n' => Some(Spacing::Newline),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpacingCounts {
    pub blanks: u64,
    pub tabs: u64,
    pub newlines: u64,
}

impl Tally<Spacing> for SpacingCounts {
    fn record(&mut self, category: &Spacing) {
        match category {
            Spacing::Blank => self.blanks += 1,
            Spacing::Tab => self.tabs += 1,
            Spacing::Newline => self.newlines += 1,
        }
    }

    fn total(&self) -> u64 {
        self.blanks + self.tabs + self.newlines
    }
}

/// Counts blanks, tabs and newlines; everything else is left unclassified.
pub fn count_spacing<Ctx: ScanContext>(ctx: Ctx) -> Result<SpacingCounts> {
    let rules: RuleSet<Ctx, Spacing> = vec![Box::new(ByteRule::new(classify_spacing))];
    scan_into(ctx, rules, SpacingCounts::default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Decimal digit, carrying its value 0-9.
    Digit(u8),
    Whitespace,
    Other,
}

/// Matches ASCII digits
pub struct DigitRule;

impl<Ctx> ClassifyRule<Ctx, CharClass> for DigitRule
where
    Ctx: ScanContext,
{
    fn quick_check(&self, first_byte: u8) -> Option<bool> {
        Some(first_byte.is_ascii_digit())
    }

    fn try_classify(&mut self, ctx: &mut Ctx) -> Option<CharClass> {
        let byte = ctx.peek().filter(u8::is_ascii_digit)?;
        ctx.advance();
        Some(CharClass::Digit(byte - b'0'))
    }

    fn priority(&self) -> i32 {
        20
    }
}

/// Matches space, tab and newline
pub struct WhitespaceRule;

impl<Ctx> ClassifyRule<Ctx, CharClass> for WhitespaceRule
where
    Ctx: ScanContext,
{
    fn quick_check(&self, first_byte: u8) -> Option<bool> {
        Some(is_delimiter(first_byte))
    }

    fn try_classify(&mut self, ctx: &mut Ctx) -> Option<CharClass> {
        ctx.peek().filter(|&b| is_delimiter(b))?;
        ctx.advance();
        Some(CharClass::Whitespace)
    }

    fn priority(&self) -> i32 {
        10
    }
}

/// Catch-all: any byte the higher priority rules passed on, including
/// non-ASCII bytes.
pub struct OtherRule;

impl<Ctx> ClassifyRule<Ctx, CharClass> for OtherRule
where
    Ctx: ScanContext,
{
    fn try_classify(&mut self, ctx: &mut Ctx) -> Option<CharClass> {
        ctx.advance().map(|_| CharClass::Other)
    }

    fn priority(&self) -> i32 {
        -10
    }
}

pub fn char_class_rules<Ctx: ScanContext>() -> RuleSet<Ctx, CharClass> {
    vec![
        Box::new(DigitRule),
        Box::new(WhitespaceRule),
        Box::new(OtherRule),
    ]
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassCounts {
    /// Occurrences of each digit, indexed by value.
    pub digits: [u64; 10],
    pub whitespace: u64,
    pub other: u64,
}

impl Tally<CharClass> for ClassCounts {
    fn record(&mut self, category: &CharClass) {
        match *category {
            CharClass::Digit(value) => self.digits[usize::from(value)] += 1,
            CharClass::Whitespace => self.whitespace += 1,
            CharClass::Other => self.other += 1,
        }
    }

    fn total(&self) -> u64 {
        self.digits.iter().sum::<u64>() + self.whitespace + self.other
    }
}

pub fn count_classes<Ctx: ScanContext>(ctx: Ctx) -> Result<ClassCounts> {
    scan_into(ctx, char_class_rules(), ClassCounts::default())
}
