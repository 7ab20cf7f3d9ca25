use crate::context::ScanContext;
use std::marker::PhantomData;

/// A classification rule that operates on a scan context.
///
/// Rules are generic over the context so the same rule runs against an
/// in-memory buffer or a streaming reader.
pub trait ClassifyRule<Ctx, Cat>
where
    Ctx: ScanContext,
{
    /// Attempts to classify the input at the cursor.
    /// Returns Some(category) and consumes the classified bytes on a match.
    /// On `None` the scanner restores the cursor, so a rule may consume
    /// speculatively. A rule that calls [`ScanContext::commit`] must then
    /// return `Some`.
    fn try_classify(&mut self, ctx: &mut Ctx) -> Option<Cat>;

    /// Higher priority rules are tried first. Default priority is 0.
    fn priority(&self) -> i32 {
        0
    }

    /// Quick check on the first byte.
    ///
    /// - `Some(true)`  - This rule might match
    /// - `Some(false)` - This rule definitely won't match
    /// - `None`        - Unknown, need to try full match
    #[inline]
    fn quick_check(&self, first_byte: u8) -> Option<bool> {
        let _ = first_byte;
        None
    }
}

/// An accumulator fed with one category per classified unit.
pub trait Tally<Cat> {
    fn record(&mut self, category: &Cat);

    /// Sum of every bin this tally keeps.
    fn total(&self) -> u64;
}

/// Adapts a pure `u8 -> Option<Cat>` function into a single-byte rule.
pub struct ByteRule<F, Cat> {
    classify: F,
    priority: i32,
    _category: PhantomData<fn() -> Cat>,
}

impl<F, Cat> ByteRule<F, Cat>
where
    F: FnMut(u8) -> Option<Cat>,
{
    pub fn new(classify: F) -> Self {
        Self {
            classify,
            priority: 0,
            _category: PhantomData,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl<Ctx, Cat, F> ClassifyRule<Ctx, Cat> for ByteRule<F, Cat>
where
    Ctx: ScanContext,
    F: FnMut(u8) -> Option<Cat>,
{
    fn try_classify(&mut self, ctx: &mut Ctx) -> Option<Cat> {
        let category = (self.classify)(ctx.peek()?)?;
        ctx.advance();
        Some(category)
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}
