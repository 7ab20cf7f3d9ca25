use crate::traits::Tally;

/// Fixed number of counters indexed from zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bins {
    counts: Box<[u64]>,
}

impl Bins {
    pub fn new(len: usize) -> Self {
        Self {
            counts: vec![0; len].into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Increments bin `index`. Returns false, leaving every bin untouched, if
    /// the index is out of range.
    pub fn increment(&mut self, index: usize) -> bool {
        match self.counts.get_mut(index) {
            Some(count) => {
                *count += 1;
                true
            }
            None => false,
        }
    }

    /// Count in bin `index`, zero when out of range.
    pub fn get(&self, index: usize) -> u64 {
        self.counts.get(index).copied().unwrap_or(0)
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(index, count)` pairs for every bin.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts.iter().copied().enumerate()
    }
}

/// Scalar accumulator counting every recorded unit regardless of category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter(pub u64);

impl Counter {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl<Cat> Tally<Cat> for Counter {
    fn record(&mut self, _category: &Cat) {
        self.0 += 1;
    }

    fn total(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bins_are_zero() {
        let bins = Bins::new(4);
        assert_eq!(bins.as_slice(), &[0, 0, 0, 0]);
        assert_eq!(bins.total(), 0);
    }

    #[test]
    fn test_increment_out_of_range() {
        let mut bins = Bins::new(2);
        assert!(bins.increment(1));
        assert!(!bins.increment(2));
        assert_eq!(bins.as_slice(), &[0, 1]);
        assert_eq!(bins.get(7), 0);
    }

    #[test]
    fn test_counter_counts_any_category() {
        let mut counter = Counter::default();
        Tally::<char>::record(&mut counter, &'x');
        Tally::<u8>::record(&mut counter, &3);
        assert_eq!(counter.get(), 2);
    }
}
