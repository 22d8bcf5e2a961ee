use std::cmp::Ordering;

use log::trace;

use crate::compare::Comparator;

/// A single distinct value stored in the tree, and the number of times it has
/// been inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node<T> {
    /// Child nodes pointers.
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 0, and an empty subtree is treated as having a
    /// height of -1.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 5.78*10⁷⁶ distinct values.
    height: u8,

    /// The height of the right subtree minus the height of the left subtree.
    ///
    /// Negative when left heavy, positive when right heavy.
    balance: i8,

    /// The number of occurrences held in the children of this node, excluding
    /// the occurrences of `value` held by this node itself.
    subtree_count: usize,

    /// The number of occurrences of `value` collapsed into this node.
    ///
    /// Always >= 1 for a node linked into a tree.
    count: usize,

    value: T,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            count: 1,
            left: None,
            right: None,
            height: 0,
            balance: 0,
            subtree_count: 0,
        }
    }

    /// Add one occurrence of `value` to the subtree rooted at `self`.
    pub(crate) fn insert<C>(self: &mut Box<Self>, value: T, cmp: &C)
    where
        C: Comparator<T>,
    {
        let child = match cmp.compare(&value, &self.value) {
            Ordering::Less => &mut self.left,
            Ordering::Equal => {
                // The value already has a node; the structure beneath it is
                // unchanged and the ancestors recompute their counts as the
                // recursion unwinds.
                self.count += 1;
                return;
            }
            Ordering::Greater => &mut self.right,
        };

        match child {
            Some(v) => v.insert(value, cmp),
            None => *child = Some(Box::new(Self::new(value))),
        }

        rebalance(self);

        // Invariant: the absolute difference between tree heights ("balance
        // factor") cannot exceed 1.
        debug_assert!(self.balance.abs() <= 1);
    }

    pub(crate) fn contains<C>(&self, value: &T, cmp: &C) -> bool
    where
        C: Comparator<T>,
    {
        let node = match cmp.compare(value, &self.value) {
            Ordering::Less => self.left(),
            Ordering::Equal => return true,
            Ordering::Greater => self.right(),
        };

        node.map(|v| v.contains(value, cmp)).unwrap_or_default()
    }

    /// Return the value at the 0-based `rank` within the sorted occurrences of
    /// the subtree rooted at `self`, or [`None`] if the subtree holds `rank`
    /// or fewer occurrences.
    pub(crate) fn select(&self, rank: usize) -> Option<&T> {
        let left_count = len(self.left());
        if rank < left_count {
            return self.left()?.select(rank);
        }

        // Skip the left subtree, and then the occurrences held in this node.
        let rank = rank - left_count;
        if rank < self.count {
            return Some(&self.value);
        }

        self.right()?.select(rank - self.count)
    }

    /// The total number of occurrences held in the subtree rooted at `self`.
    pub(crate) fn len(&self) -> usize {
        self.count + self.subtree_count
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

#[cfg(test)]
impl<T> Node<T> {
    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn balance(&self) -> i8 {
        self.balance
    }

    pub(crate) fn subtree_count(&self) -> usize {
        self.subtree_count
    }
}

/// Height of the (possibly empty) subtree `n`, with an empty subtree having a
/// height of -1.
fn height<T>(n: Option<&Node<T>>) -> i16 {
    n.map(|v| v.height as i16).unwrap_or(-1)
}

fn len<T>(n: Option<&Node<T>>) -> usize {
    n.map(Node::len).unwrap_or_default()
}

/// Recompute the height, balance factor and subtree occurrence count of `n`
/// from its direct children.
fn update<T>(n: &mut Node<T>) {
    let left = height(n.left());
    let right = height(n.right());

    // Correctness: both child heights are >= -1 and fit in a u8 when non-empty,
    // so neither cast can truncate or invert the sign.
    n.height = (1 + left.max(right)) as u8;
    n.balance = (right - left) as i8;
    n.subtree_count = len(n.left()) + len(n.right());
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// # Panics
///
/// Panics if `x` has no right pointer (cannot be rotated).
fn rotate_left<T>(x: &mut Box<Node<T>>) {
    let mut p = x.right.take().unwrap();
    std::mem::swap(x, &mut p);

    // The demoted root's children changed first, so it is updated before the
    // new subtree root that now points to it.
    p.right = x.left.take();
    update(&mut p);

    x.left = Some(p);
    update(x);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// # Panics
///
/// Panics if `y` has no left pointer (cannot be rotated).
fn rotate_right<T>(y: &mut Box<Node<T>>) {
    let mut p = y.left.take().unwrap();
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    update(&mut p);

    y.right = Some(p);
    update(y);
}

/// Update `n` and restore the AVL balance of the subtree rooted at it.
///
/// A single (or double) rotation is sufficient as every ancestor of a modified
/// node is rebalanced as the insert / remove recursion unwinds.
fn rebalance<T>(n: &mut Box<Node<T>>) {
    update(n);

    match (n.balance, n.left(), n.right()) {
        // Left-heavy
        (-2, Some(l), _) if l.balance <= 0 => {
            trace!("rebalance left-left subtree at height {}", n.height);
            rotate_right(n);
        }
        (-2, Some(_l), _) => {
            trace!("rebalance left-right subtree at height {}", n.height);
            if let Some(l) = n.left.as_mut() {
                rotate_left(l);
            }
            rotate_right(n);
        }
        // Right-heavy
        (2, _, Some(r)) if r.balance >= 0 => {
            trace!("rebalance right-right subtree at height {}", n.height);
            rotate_left(n);
        }
        (2, _, Some(_r)) => {
            trace!("rebalance right-left subtree at height {}", n.height);
            if let Some(r) = n.right.as_mut() {
                rotate_right(r);
            }
            rotate_left(n);
        }
        (-1..=1, _, _) => { /* The tree is well balanced */ }
        _ => unreachable!(),
    }

    debug_assert!(n.balance.abs() <= 1);
}

/// Remove a single occurrence of `value` from the subtree rooted at `node`,
/// returning true if it was found.
///
/// If the last occurrence held in a node is removed, the node is unlinked
/// from `node` (or replaced by a descendent), and every node on the path back
/// to the root of `node` is rebalanced as the recursion unwinds.
pub(crate) fn remove<T, C>(node: &mut Option<Box<Node<T>>>, value: &T, cmp: &C) -> bool
where
    C: Comparator<T>,
{
    let Some(v) = node.as_mut() else {
        return false;
    };

    let removed = match cmp.compare(value, &v.value) {
        Ordering::Less => remove(&mut v.left, value, cmp),
        Ordering::Greater => remove(&mut v.right, value, cmp),
        Ordering::Equal => {
            // Invariant: a linked node always holds at least one occurrence.
            debug_assert!(v.count >= 1);

            v.count -= 1;
            if v.count == 0 {
                unlink(node);
            }

            // Dropping a duplicate occurrence changes nothing beneath this
            // node, and a relocation rebalances the replacement in unlink().
            return true;
        }
    };

    if removed {
        rebalance(v);
    }

    removed
}

/// Unlink the node in `slot`, which holds no more occurrences, replacing it
/// with a descendent (if any) that preserves the binary search property.
fn unlink<T>(slot: &mut Option<Box<Node<T>>>) {
    let Some(mut node) = slot.take() else {
        return;
    };

    // This node may have 0, 1 or 2 child node(s):
    //
    //                          +----------+
    //                          |  parent  |
    //                          +----------+
    //                                |
    //                                v
    //                          +----------+
    //                     +----|   node   |----+
    //                     |    +----------+    |
    //                     |                    |
    //                     v                    v
    //               +-----------+       +------------+
    //               | node.left |       | node.right |
    //               +-----------+       +------------+
    //
    // A leaf is dropped, and a node with a single child is replaced by that
    // child (which is already balanced and up-to-date).
    //
    // A node with two children takes the value and count of a donor node: the
    // in-order predecessor (right-most node of node.left) if the left subtree
    // is strictly taller, otherwise the in-order successor (left-most node of
    // node.right). The donor is extracted from the taller side, and the node
    // itself stays linked in place.
    *slot = match (node.left.take(), node.right.take()) {
        (None, None) => None,
        (Some(child), None) | (None, Some(child)) => Some(child),
        (left, right) => {
            node.left = left;
            node.right = right;

            let donor = if height(node.left()) > height(node.right()) {
                trace!("relocating in-order predecessor at height {}", node.height);
                extract_subtree_max(&mut node.left)
            } else {
                trace!("relocating in-order successor at height {}", node.height);
                extract_subtree_min(&mut node.right)
            };

            // Both subtrees are non-empty, so a donor always exists.
            debug_assert!(donor.is_some());
            if let Some(donor) = donor {
                let Node { value, count, .. } = *donor;
                node.value = value;
                node.count = count;
            }

            rebalance(&mut node);
            Some(node)
        }
    };
}

/// Extracts the node holding the minimum value in the subtree rooted at
/// `node`, linking the right subtree of the extracted node in its place.
///
/// Every node on the left edge above the extracted node is rebalanced.
fn extract_subtree_min<T>(node: &mut Option<Box<Node<T>>>) -> Option<Box<Node<T>>> {
    let v = node.as_mut()?;

    // Descend left to the end of the left edge.
    if v.left.is_some() {
        let min = extract_subtree_min(&mut v.left);
        rebalance(v);
        return min;
    }

    // This node is the minimum, and has no left child.
    //
    // ```text
    //                 6
    //                / \
    //    here ->   <4>   7
    //                \
    //                 5
    // ```
    //
    // Unlink it, replacing it with its right child (if any).
    let mut min = node.take()?;
    *node = min.right.take();

    debug_assert!(min.left.is_none());
    Some(min)
}

/// Extracts the node holding the maximum value in the subtree rooted at
/// `node`, linking the left subtree of the extracted node in its place.
///
/// Every node on the right edge above the extracted node is rebalanced.
fn extract_subtree_max<T>(node: &mut Option<Box<Node<T>>>) -> Option<Box<Node<T>>> {
    let v = node.as_mut()?;

    if v.right.is_some() {
        let max = extract_subtree_max(&mut v.right);
        rebalance(v);
        return max;
    }

    let mut max = node.take()?;
    *node = max.left.take();

    debug_assert!(max.right.is_none());
    Some(max)
}
