use crate::{
    compare::{Comparator, Natural},
    error::OutOfRange,
    node::{remove, Node},
};

/// An AVL tree of values augmented with subtree occurrence counts, supporting
/// O(log n) rank queries over a multiset.
///
/// Repeated insertions of an equal value (as determined by the tree's
/// [`Comparator`]) are collapsed into a single node holding an occurrence
/// count, so the height of the tree is bounded by the number of distinct
/// values, and rank queries count each occurrence individually.
///
/// ```
/// use osavl::OrderStatisticTree;
///
/// let mut t = OrderStatisticTree::new();
/// t.insert(3);
/// t.insert(1);
/// t.insert(3);
///
/// assert_eq!(t.len(), 3);
/// assert_eq!(t.select(0), Ok(&1));
/// assert_eq!(t.select(1), Ok(&3));
/// assert_eq!(t.select(2), Ok(&3));
/// assert!(t.select(3).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct OrderStatisticTree<T, C = Natural> {
    root: Option<Box<Node<T>>>,
    cmp: C,
}

impl<T, C> Default for OrderStatisticTree<T, C>
where
    C: Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T> OrderStatisticTree<T, Natural>
where
    T: Ord,
{
    /// Construct an empty tree ordering values by their [`Ord`]
    /// implementation.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, C> OrderStatisticTree<T, C> {
    /// Construct an empty tree ordering values with `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        Self { root: None, cmp }
    }

    /// The number of values in the tree, counting each occurrence of a
    /// duplicated value.
    pub fn len(&self) -> usize {
        self.root.as_deref().map(Node::len).unwrap_or_default()
    }

    /// An alias of [`OrderStatisticTree::len()`].
    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Return the value at the 0-based `rank` in the ascending order of all
    /// values in the tree, with duplicate occurrences ranked individually.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `rank >= self.len()`.
    pub fn select(&self, rank: usize) -> Result<&T, OutOfRange> {
        self.root
            .as_deref()
            .and_then(|v| v.select(rank))
            .ok_or(OutOfRange {
                rank,
                len: self.len(),
            })
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    #[cfg(test)]
    pub(crate) fn comparator(&self) -> &C {
        &self.cmp
    }
}

impl<T, C> OrderStatisticTree<T, C>
where
    C: Comparator<T>,
{
    /// Add one occurrence of `value` to the tree.
    pub fn insert(&mut self, value: T) {
        match self.root {
            Some(ref mut v) => v.insert(value, &self.cmp),
            None => self.root = Some(Box::new(Node::new(value))),
        }
    }

    /// Remove one occurrence of `value` from the tree, returning true if it
    /// was present.
    ///
    /// Removing a value not in the tree is a no-op.
    pub fn remove(&mut self, value: &T) -> bool {
        remove(&mut self.root, value, &self.cmp)
    }

    /// Returns true if at least one occurrence of `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.root
            .as_ref()
            .map(|v| v.contains(value, &self.cmp))
            .unwrap_or_default()
    }
}

impl<T, C> Extend<T> for OrderStatisticTree<T, C>
where
    C: Comparator<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<T, C> FromIterator<T> for OrderStatisticTree<T, C>
where
    C: Comparator<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}
