use crate::OrderStatisticTree;

/// Maintains the median of a stream of integers.
///
/// Each [`RunningMedian::push()`] is O(log n) in the number of distinct values
/// observed, and [`RunningMedian::median()`] performs at most two rank queries.
///
/// ```
/// use osavl::RunningMedian;
///
/// let mut m = RunningMedian::new();
/// assert_eq!(m.median(), None);
///
/// m.push(2);
/// m.push(1);
/// assert_eq!(m.median(), Some(1.5));
/// ```
#[derive(Debug, Default, Clone)]
pub struct RunningMedian {
    tree: OrderStatisticTree<i64>,
}

impl RunningMedian {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: i64) {
        self.tree.insert(value);
    }

    /// Remove one occurrence of `value`, returning true if it had been pushed.
    pub fn remove(&mut self, value: i64) -> bool {
        self.tree.remove(&value)
    }

    /// The median of all values currently held, or [`None`] if empty.
    ///
    /// For an even number of values, the median is the mean of the two middle
    /// values.
    pub fn median(&self) -> Option<f64> {
        let n = self.tree.len();
        let mid = n / 2;

        if n % 2 == 1 {
            return self.tree.select(mid).ok().map(|&v| v as f64);
        }

        let lo = *self.tree.select(mid.checked_sub(1)?).ok()?;
        let hi = *self.tree.select(mid).ok()?;

        // Sum the exact integers before the single rounding to f64.
        Some((lo as i128 + hi as i128) as f64 / 2.0)
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

/// Return the median of each prefix of `values`, in stream order.
///
/// ```
/// assert_eq!(osavl::running_medians([2, 1, 3, 4]), [2.0, 1.5, 2.0, 2.5]);
/// ```
pub fn running_medians<I>(values: I) -> Vec<f64>
where
    I: IntoIterator<Item = i64>,
{
    let mut m = RunningMedian::new();

    values
        .into_iter()
        .map(|v| {
            m.push(v);

            // Invariant: the tree holds at least the value just pushed.
            m.median().expect("median of a non-empty stream")
        })
        .collect()
}
