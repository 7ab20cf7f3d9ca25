use crate::context::{DefaultContext, ScanContext};
use crate::error::ScanError;
use crate::traits::{ClassifyRule, Tally};
use common_framework::Position;
use std::cmp::Reverse;
use tracing::{debug, warn};

pub type RuleSet<Ctx, Cat> = Vec<Box<dyn ClassifyRule<Ctx, Cat>>>;

/// One step of a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scanned<Cat> {
    /// A rule claimed `len` bytes starting at `position`.
    Classified {
        category: Cat,
        position: Position,
        len: usize,
    },
    /// No rule matched; exactly one byte was consumed.
    Unclassified { byte: u8, position: Position },
}

impl<Cat> Scanned<Cat> {
    pub fn category(&self) -> Option<&Cat> {
        match self {
            Scanned::Classified { category, .. } => Some(category),
            Scanned::Unclassified { .. } => None,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Scanned::Classified { position, .. } | Scanned::Unclassified { position, .. } => {
                *position
            }
        }
    }
}

/// Units seen by a scanner so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub classified: u64,
    pub unclassified: u64,
}

/// Pulls input from a context until end-of-stream, classifying each unit
/// with the first rule (in priority order) that matches.
pub struct Scanner<Ctx, Cat>
where
    Ctx: ScanContext,
{
    context: Ctx,
    rules: RuleSet<Ctx, Cat>,
    summary: ScanSummary,
    done: bool,
}

impl<Ctx, Cat> Scanner<Ctx, Cat>
where
    Ctx: ScanContext,
{
    pub fn new(context: Ctx, rules: RuleSet<Ctx, Cat>) -> Self {
        let mut sorted_rules = rules;
        sorted_rules.sort_by_key(|rule| Reverse(rule.priority()));

        Self {
            context,
            rules: sorted_rules,
            summary: ScanSummary::default(),
            done: false,
        }
    }

    pub fn context(&self) -> &Ctx {
        &self.context
    }

    pub fn summary(&self) -> ScanSummary {
        self.summary
    }

    /// Classifies the next unit of input, or returns `None` at end-of-stream.
    pub fn next_scanned(&mut self) -> Option<Scanned<Cat>> {
        if self.done {
            return None;
        }
        let Some(first_byte) = self.context.peek() else {
            self.done = true;
            debug!(
                classified = self.summary.classified,
                unclassified = self.summary.unclassified,
                "end of stream"
            );
            return None;
        };
        let position = self.context.position();
        let offset_before = self.context.offset();

        for rule in &mut self.rules {
            if let Some(false) = rule.quick_check(first_byte) {
                continue;
            }

            let checkpoint = self.context.checkpoint();
            if let Some(category) = rule.try_classify(&mut self.context) {
                let len = self.context.offset() - offset_before;
                if len == 0 {
                    warn!(offset = offset_before, "rule matched without consuming input");
                    self.done = true;
                    return None;
                }
                self.context.commit();
                self.summary.classified += 1;
                return Some(Scanned::Classified {
                    category,
                    position,
                    len,
                });
            }
            self.context.restore(checkpoint);
        }

        let byte = self.context.advance()?;
        self.context.commit();
        self.summary.unclassified += 1;
        Some(Scanned::Unclassified { byte, position })
    }

    /// Drains the input, recording every classified unit into `tally`.
    pub fn tally_into<T>(&mut self, tally: &mut T) -> ScanSummary
    where
        T: Tally<Cat> + ?Sized,
    {
        while let Some(scanned) = self.next_scanned() {
            if let Scanned::Classified { category, .. } = &scanned {
                tally.record(category);
            }
        }
        self.summary
    }

    /// Ends the scan, surfacing any read error that cut the stream short.
    pub fn finish(mut self) -> Result<ScanSummary, ScanError> {
        match self.context.take_error() {
            Some(err) => Err(err),
            None => Ok(self.summary),
        }
    }
}

impl<Cat> Scanner<DefaultContext, Cat> {
    /// Creates a scanner over an in-memory copy of `input`.
    pub fn from_bytes<B: AsRef<[u8]>>(input: B, rules: RuleSet<DefaultContext, Cat>) -> Self {
        Self::new(DefaultContext::new(input), rules)
    }
}

impl<Ctx, Cat> Iterator for Scanner<Ctx, Cat>
where
    Ctx: ScanContext,
{
    type Item = Scanned<Cat>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_scanned()
    }
}
