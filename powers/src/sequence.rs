use crate::Accumulator;
use std::convert::TryFrom;
use std::iter::FusedIterator;

/// Lazily produces `base^1, base^2, ..., base^exponent`.
///
/// Nothing is computed until the sequence is pulled. Each call to `next`
/// performs exactly one multiplication and then hands the running product
/// back, so the iterator is suspended between emitting a value and computing
/// the one after it.
///
/// Cloning a `Powers` snapshots its progress: the clone carries on from the
/// same point without affecting the original.
#[derive(Clone, Debug)]
pub struct Powers<T> {
    base: T,
    product: T,
    produced: u64,
    remaining: u64,
}

/// Builds a fresh power sequence starting from a running product of 1.
///
/// A zero or negative `exponent` gives an empty sequence.
///
/// ```rust
/// let values: Vec<i32> = powers::powers(2, 8).collect();
/// assert_eq!(values, vec![2, 4, 8, 16, 32, 64, 128, 256]);
/// ```
pub fn powers<T: Accumulator>(base: T, exponent: i64) -> Powers<T> {
    Powers::new(base, exponent)
}

impl<T: Accumulator> Powers<T> {
    pub fn new(base: T, exponent: i64) -> Powers<T> {
        Powers {
            base,
            product: T::ONE,
            produced: 0,
            remaining: exponent.max(0) as u64,
        }
    }

    pub fn base(&self) -> T {
        self.base
    }

    /// Number of values handed out so far.
    pub fn produced(&self) -> u64 {
        self.produced
    }

    /// The most recently produced value, or `None` before the first pull.
    pub fn current(&self) -> Option<T> {
        if self.produced == 0 {
            None
        } else {
            Some(self.product)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }
}

impl<T: Accumulator> Iterator for Powers<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }

        self.product = self.product.accumulate(self.base);
        self.produced += 1;
        self.remaining -= 1;
        Some(self.product)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // NOTE Saturates on targets where usize is narrower than the exponent.
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl<T: Accumulator> ExactSizeIterator for Powers<T> {}

impl<T: Accumulator> FusedIterator for Powers<T> {}
