use proptest::prelude::*;
use scanner_framework::{
    Bins, BoundedBuffer, ByteRule, DefaultContext, ReaderContext, RuleSet, ScanContext, Scanned,
    Scanner,
};
use std::io::{self, Read};

/// Serves the input in reads of varying size.
struct ChoppyReader {
    data: Vec<u8>,
    offset: usize,
    sizes: Vec<usize>,
    call: usize,
}

impl Read for ChoppyReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let size = self.sizes[self.call % self.sizes.len()];
        self.call += 1;
        let n = size.min(buf.len()).min(self.data.len() - self.offset);
        buf[..n].copy_from_slice(&self.data[self.offset..self.offset + n]);
        self.offset += n;
        Ok(n)
    }
}

fn digits_only<Ctx: ScanContext>() -> RuleSet<Ctx, u8> {
    vec![Box::new(ByteRule::new(|b: u8| b.is_ascii_digit().then(|| b - b'0')))]
}

fn collect<Ctx: ScanContext>(ctx: Ctx) -> Vec<Scanned<u8>> {
    Scanner::new(ctx, digits_only()).collect()
}

proptest! {
    #[test]
    fn reader_and_memory_contexts_agree(
        data in proptest::collection::vec(any::<u8>(), 0..4096),
        sizes in proptest::collection::vec(1usize..64, 1..8),
    ) {
        let reader = ChoppyReader { data: data.clone(), offset: 0, sizes, call: 0 };
        let streamed = collect(ReaderContext::new(reader));
        let buffered = collect(DefaultContext::new(data.as_slice()));
        prop_assert_eq!(streamed.len(), data.len());
        prop_assert_eq!(streamed, buffered);
    }

    #[test]
    fn bounded_buffer_never_exceeds_capacity(
        capacity in 0usize..32,
        chunks in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..16), 0..8),
    ) {
        let mut buffer = BoundedBuffer::with_capacity(capacity);
        let mut offered = 0;
        for chunk in &chunks {
            buffer.extend_from_slice(chunk);
            offered += chunk.len();
        }
        prop_assert!(buffer.len() <= capacity);
        prop_assert_eq!(buffer.len() + buffer.truncated(), offered);
    }

    #[test]
    fn bins_total_matches_accepted_increments(
        len in 0usize..16,
        indices in proptest::collection::vec(0usize..24, 0..64),
    ) {
        let mut bins = Bins::new(len);
        let accepted = indices.iter().filter(|&&index| bins.increment(index)).count();
        prop_assert_eq!(bins.total(), accepted as u64);
        prop_assert_eq!(bins.len(), len);
    }
}
