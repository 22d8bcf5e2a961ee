use std::cmp::Ordering;

/// A total order over values of type `T`, used to position values within an
/// [`OrderStatisticTree`].
///
/// Two values that compare [`Ordering::Equal`] are treated as occurrences of
/// the same value, and are collapsed into a single tree node.
///
/// Any closure of the form `Fn(&T, &T) -> Ordering` implements this trait.
///
/// [`OrderStatisticTree`]: crate::OrderStatisticTree
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The natural (ascending) [`Ord`] ordering of `T`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Natural;

impl<T> Comparator<T> for Natural
where
    T: Ord + ?Sized,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Adapts a strict "less than" predicate into a [`Comparator`].
///
/// Two values are equal when neither is less than the other, so the predicate
/// must be a strict weak ordering (irreflexive, asymmetric and transitive).
///
/// ```
/// use osavl::{ByLess, OrderStatisticTree};
///
/// // Descending order.
/// let mut t = OrderStatisticTree::with_comparator(ByLess(|a: &i64, b: &i64| a > b));
/// t.extend([1, 3, 2]);
///
/// assert_eq!(t.select(0), Ok(&3));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ByLess<F>(pub F);

impl<T, F> Comparator<T> for ByLess<F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        if (self.0)(a, b) {
            Ordering::Less
        } else if (self.0)(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}
