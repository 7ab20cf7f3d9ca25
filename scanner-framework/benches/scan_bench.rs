use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use scanner_framework::{
    ByteRule, ClassifyRule, Counter, DefaultContext, ReaderContext, RuleSet, ScanContext, Scanner,
};
use std::io::Cursor;

#[derive(Debug, Clone, Copy, PartialEq)]
enum BenchClass {
    Digit,
    Space,
    Word,
    Other,
}

// --- Rules ---

struct DigitRule;
impl<Ctx: ScanContext> ClassifyRule<Ctx, BenchClass> for DigitRule {
    fn try_classify(&mut self, ctx: &mut Ctx) -> Option<BenchClass> {
        ctx.advance()
            .filter(|b| b.is_ascii_digit())
            .map(|_| BenchClass::Digit)
    }
    fn priority(&self) -> i32 {
        20
    }
    fn quick_check(&self, first_byte: u8) -> Option<bool> {
        Some(first_byte.is_ascii_digit())
    }
}

struct WordRule;
impl<Ctx: ScanContext> ClassifyRule<Ctx, BenchClass> for WordRule {
    fn try_classify(&mut self, ctx: &mut Ctx) -> Option<BenchClass> {
        let run = ctx.consume_while(|b| b.is_ascii_alphabetic());
        (!run.is_empty()).then_some(BenchClass::Word)
    }
    fn priority(&self) -> i32 {
        10
    }
    fn quick_check(&self, first_byte: u8) -> Option<bool> {
        Some(first_byte.is_ascii_alphabetic())
    }
}

fn bench_rules<Ctx: ScanContext>() -> RuleSet<Ctx, BenchClass> {
    vec![
        Box::new(DigitRule),
        Box::new(WordRule),
        Box::new(ByteRule::new(|b: u8| {
            matches!(b, b' ' | b'\t' | b'\n').then_some(BenchClass::Space)
        })),
        Box::new(ByteRule::new(|_: u8| Some(BenchClass::Other)).with_priority(-10)),
    ]
}

// --- Data Generation ---

fn generate_text(size_kb: usize) -> Vec<u8> {
    let line = b"while ((c = getchar()) != EOF) ++ndigit[c - '0'];\t/* 0123456789 */\n";
    let mut data = Vec::with_capacity(size_kb * 1024);
    while data.len() < size_kb * 1024 {
        data.extend_from_slice(line);
    }
    data
}

// --- Benchmarks ---

fn bench_scanner(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner");
    let text = generate_text(100);
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("in_memory_100kb", |b| {
        b.iter(|| {
            let mut scanner: Scanner<DefaultContext, BenchClass> =
                Scanner::from_bytes(&text, bench_rules());
            let mut counter = Counter::default();
            scanner.tally_into(&mut counter);
            counter
        })
    });

    group.bench_function("reader_100kb", |b| {
        b.iter(|| {
            let context = ReaderContext::new(Cursor::new(text.as_slice()));
            let mut scanner = Scanner::new(context, bench_rules());
            let mut counter = Counter::default();
            scanner.tally_into(&mut counter);
            counter
        })
    });

    group.finish();
}

criterion_group!(benches, bench_scanner);
criterion_main!(benches);
