//! Copy-style filters: input is rewritten unit by unit to the output.
//!
//! Each filter is a rule set whose categories know how to write themselves.
//! Bytes no rule claims are copied through unchanged.

use crate::error::Result;
use scanner_framework::{
    ByteRule, ClassifyRule, RuleSet, ScanContext, ScanSummary, Scanned, Scanner,
};
use std::io::Write;

/// A category that renders itself to the filter output.
pub trait Emit {
    fn emit<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()>;
}

/// Runs a filter to end-of-stream.
pub fn run_filter<Ctx, Cat, W>(
    ctx: Ctx,
    rules: RuleSet<Ctx, Cat>,
    out: &mut W,
) -> Result<ScanSummary>
where
    Ctx: ScanContext,
    Cat: Emit,
    W: Write + ?Sized,
{
    let mut scanner = Scanner::new(ctx, rules);
    while let Some(scanned) = scanner.next_scanned() {
        match scanned {
            Scanned::Classified { category, .. } => category.emit(out)?,
            Scanned::Unclassified { byte, .. } => out.write_all(&[byte])?,
        }
    }
    Ok(scanner.finish()?)
}

/// Byte copied verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal(pub u8);

impl Emit for Literal {
    fn emit<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        out.write_all(&[self.0])
    }
}

pub fn copy_rules<Ctx: ScanContext>() -> RuleSet<Ctx, Literal> {
    vec![Box::new(ByteRule::new(|b: u8| Some(Literal(b))))]
}

/// Copies input to output byte for byte.
pub fn copy<Ctx, W>(ctx: Ctx, out: &mut W) -> Result<ScanSummary>
where
    Ctx: ScanContext,
    W: Write + ?Sized,
{
    run_filter(ctx, copy_rules(), out)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EchoUnit {
    /// Space or tab: ends the current word.
    Break,
    /// Newline: swallowed.
    Newline,
    /// `.`, `;` or `:` printed on a line of its own.
    Punctuation(u8),
    Literal(u8),
}

impl Emit for EchoUnit {
    fn emit<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        match *self {
            EchoUnit::Break => out.write_all(b"\n"),
            EchoUnit::Newline => Ok(()),
            EchoUnit::Punctuation(mark) => out.write_all(&[b'\n', mark, b'\n']),
            EchoUnit::Literal(byte) => out.write_all(&[byte]),
        }
    }
}

pub fn classify_echo(byte: u8) -> EchoUnit {
    match byte {
        b' ' | b'\t' => EchoUnit::Break,
        b'\n' => EchoUnit::Newline,
        b'.' | b';' | b':' => EchoUnit::Punctuation(byte),
        _ => EchoUnit::Literal(byte),
    }
}

/// Prints input one word per line (exercise 1-12).
pub fn echo_words<Ctx, W>(ctx: Ctx, out: &mut W) -> Result<ScanSummary>
where
    Ctx: ScanContext,
    W: Write + ?Sized,
{
    let rules: RuleSet<Ctx, EchoUnit> =
        vec![Box::new(ByteRule::new(|b: u8| Some(classify_echo(b))))];
    run_filter(ctx, rules, out)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlankRun {
    /// One or more blanks followed by more input: printed as one blank.
    Squeezed,
    /// Blanks running into end of input are never printed.
    Trailing,
}

impl Emit for BlankRun {
    fn emit<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        match self {
            BlankRun::Squeezed => out.write_all(b" "),
            BlankRun::Trailing => Ok(()),
        }
    }
}

/// Consumes a run of blanks. Only the space byte counts as a blank here,
/// tabs pass through.
pub struct BlankRunRule;

impl<Ctx> ClassifyRule<Ctx, BlankRun> for BlankRunRule
where
    Ctx: ScanContext,
{
    fn quick_check(&self, first_byte: u8) -> Option<bool> {
        Some(first_byte == b' ')
    }

    fn try_classify(&mut self, ctx: &mut Ctx) -> Option<BlankRun> {
        if ctx.peek()? != b' ' {
            return None;
        }
        while ctx.peek() == Some(b' ') {
            ctx.advance();
            ctx.commit();
        }
        if ctx.is_eof() {
            Some(BlankRun::Trailing)
        } else {
            Some(BlankRun::Squeezed)
        }
    }
}

/// Replaces each string of blanks by a single blank (exercise 1-9).
pub fn squeeze_blanks<Ctx, W>(ctx: Ctx, out: &mut W) -> Result<ScanSummary>
where
    Ctx: ScanContext,
    W: Write + ?Sized,
{
    let rules: RuleSet<Ctx, BlankRun> = vec![Box::new(BlankRunRule)];
    run_filter(ctx, rules, out)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    Tab,
    Backspace,
    Backslash,
}

impl Emit for Escape {
    fn emit<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        out.write_all(match self {
            Escape::Tab => br"\t",
            Escape::Backspace => br"\b",
            Escape::Backslash => br"\\",
        })
    }
}

pub fn classify_escape(byte: u8) -> Option<Escape> {
    match byte {
        b'\t' => Some(Escape::Tab),
        0x08 => Some(Escape::Backspace),
        b'\\' => Some(Escape::Backslash),
        _ => None,
    }
}

/// Makes tabs, backspaces and backslashes visible (exercise 1-10).
pub fn show_escapes<Ctx, W>(ctx: Ctx, out: &mut W) -> Result<ScanSummary>
where
    Ctx: ScanContext,
    W: Write + ?Sized,
{
    let rules: RuleSet<Ctx, Escape> = vec![Box::new(ByteRule::new(classify_escape))];
    run_filter(ctx, rules, out)
}
