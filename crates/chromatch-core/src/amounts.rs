//! Per-color unit counts.

use std::ops::Index;

/// How many units of each palette color are in a mix.
///
/// The vector has one entry per palette color, in palette order. Entries are
/// unsigned, so the non-negativity invariant holds by construction; the
/// length invariant is established by [`AmountVector::zeroed`] and preserved
/// by every mutating method.
///
/// # Examples
///
/// ```
/// use chromatch_core::AmountVector;
///
/// let mut amounts = AmountVector::zeroed(3);
/// amounts.increment(0);
/// amounts.increment(0);
/// amounts.increment(2);
///
/// assert_eq!(amounts.total(), 3);
/// assert_eq!(amounts.as_slice(), &[2, 0, 1]);
/// assert!((amounts.proportion(0) - 2.0 / 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AmountVector(Vec<u32>);

impl AmountVector {
    /// Creates an all-zero vector for a palette of `len` colors.
    #[must_use]
    pub fn zeroed(len: usize) -> Self {
        Self(vec![0; len])
    }

    /// Wraps existing counts.
    #[must_use]
    pub fn from_vec(amounts: Vec<u32>) -> Self {
        Self(amounts)
    }

    /// Number of entries (the palette length).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the vector has no entries at all.
    ///
    /// This is about the length, not the mix; see [`is_empty_mix`](Self::is_empty_mix).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the count at `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.0.get(index).copied()
    }

    /// Returns the counts as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Iterates over the counts in palette order.
    pub fn iter(&self) -> impl Iterator<Item = u32> {
        self.0.iter().copied()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.iter().map(|&amount| u64::from(amount)).sum()
    }

    /// Returns `true` if no units have been added.
    #[must_use]
    pub fn is_empty_mix(&self) -> bool {
        self.0.iter().all(|&amount| amount == 0)
    }

    /// Number of colors with a non-zero count.
    #[must_use]
    pub fn non_zero_count(&self) -> usize {
        self.0.iter().filter(|&&amount| amount > 0).count()
    }

    /// Share of the total contributed by `index`, in `0.0..=1.0`.
    ///
    /// Returns `0.0` for an empty mix or an out-of-range index.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn proportion(&self, index: usize) -> f64 {
        let total = self.total();
        match self.get(index) {
            Some(amount) if total > 0 => f64::from(amount) / total as f64,
            _ => 0.0,
        }
    }

    /// [`proportion`](Self::proportion) scaled to a percentage.
    #[must_use]
    pub fn percentage(&self, index: usize) -> f64 {
        self.proportion(index) * 100.0
    }

    /// Adds one unit at `index`, saturating at `u32::MAX`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn increment(&mut self, index: usize) {
        self.0[index] = self.0[index].saturating_add(1);
    }

    /// Removes one unit at `index` if there is one.
    ///
    /// Returns `true` if the count changed. Decrementing a zero count is a
    /// no-op, not an error.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn decrement(&mut self, index: usize) -> bool {
        let Some(next) = self.0[index].checked_sub(1) else {
            return false;
        };
        self.0[index] = next;
        true
    }

    /// Sets every count to zero, keeping the length.
    pub fn reset(&mut self) {
        self.0.fill(0);
    }
}

impl Index<usize> for AmountVector {
    type Output = u32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<Vec<u32>> for AmountVector {
    fn from(amounts: Vec<u32>) -> Self {
        Self(amounts)
    }
}

impl<'a> IntoIterator for &'a AmountVector {
    type Item = u32;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, u32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_zeroed_is_empty_mix() {
        let amounts = AmountVector::zeroed(6);
        assert_eq!(amounts.len(), 6);
        assert!(amounts.is_empty_mix());
        assert_eq!(amounts.total(), 0);
        assert_eq!(amounts.non_zero_count(), 0);
        assert!((amounts.percentage(0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_decrement_floor() {
        let mut amounts = AmountVector::zeroed(2);
        assert!(!amounts.decrement(0));
        assert_eq!(amounts[0], 0);

        amounts.increment(1);
        assert!(amounts.decrement(1));
        assert!(!amounts.decrement(1));
        assert_eq!(amounts[1], 0);
    }

    #[test]
    fn test_increment_saturates() {
        let mut amounts = AmountVector::from_vec(vec![u32::MAX - 1]);
        amounts.increment(0);
        amounts.increment(0);
        assert_eq!(amounts[0], u32::MAX);
    }

    #[test]
    fn test_reset_keeps_length() {
        let mut amounts = AmountVector::from_vec(vec![3, 0, 7]);
        amounts.reset();
        assert_eq!(amounts, AmountVector::zeroed(3));
    }

    #[test]
    fn test_percentage() {
        let amounts = AmountVector::from_vec(vec![1, 3, 0]);
        assert!((amounts.percentage(0) - 25.0).abs() < 1e-9);
        assert!((amounts.percentage(1) - 75.0).abs() < 1e-9);
        assert!(amounts.percentage(2).abs() < f64::EPSILON);
        assert!(amounts.percentage(99).abs() < f64::EPSILON);
    }

    proptest! {
        #[test]
        fn prop_proportions_sum_to_one(values in prop::collection::vec(0u32..1000, 1..8)) {
            let amounts = AmountVector::from_vec(values);
            prop_assume!(amounts.total() > 0);
            let sum: f64 = (0..amounts.len()).map(|i| amounts.proportion(i)).sum();
            prop_assert!((sum - 1.0).abs() < 1e-9, "sum = {sum}");
        }
    }
}
