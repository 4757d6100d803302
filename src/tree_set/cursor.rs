use core::fmt;
use core::iter::FusedIterator;
use core::ptr;

use smallvec::SmallVec;

use super::TreeSet;
use crate::compare::Ascending;
use crate::raw::{Handle, RawTreeSet};

/// Ancestors still waiting for their right subtree to be visited. Trees shallower than this never
/// spill to the heap.
type Pending = SmallVec<[Handle; 16]>;

/// A position in the in-order walk of a [`TreeSet`].
///
/// A cursor is either positioned at an element or exhausted. It is created by [`TreeSet::begin`]
/// (first element) or [`TreeSet::end`] (exhausted) and moved forward with [`advance`](Cursor::advance).
/// The cursor borrows the set, so the set cannot be mutated while the cursor is alive.
///
/// Two cursors are equal when they sit on the same node of the same set, or when both are exhausted.
///
/// # Examples
///
/// ```
/// use treeset::TreeSet;
///
/// let set = TreeSet::from([3, 1, 2]);
/// let mut cursor = set.begin();
/// let mut seen = Vec::new();
/// while cursor != set.end() {
///     seen.push(*cursor.value());
///     cursor.advance();
/// }
/// assert_eq!(seen, [1, 2, 3]);
/// ```
pub struct Cursor<'a, T, C = Ascending> {
    tree: &'a RawTreeSet<T, C>,
    pending: Pending,
    current: Option<Handle>,
}

impl<'a, T, C> Cursor<'a, T, C> {
    pub(super) fn first(tree: &'a RawTreeSet<T, C>) -> Self {
        let mut cursor = Self::end(tree);
        cursor.descend_to_leftmost(tree.root());
        cursor
    }

    pub(super) fn end(tree: &'a RawTreeSet<T, C>) -> Self {
        Self {
            tree,
            pending: SmallVec::new(),
            current: None,
        }
    }

    /// Pushes `from` and its whole left spine, then moves to the last node pushed.
    fn descend_to_leftmost(&mut self, from: Option<Handle>) {
        let mut next = from;
        while let Some(handle) = next {
            self.pending.push(handle);
            next = self.tree.node(handle).left();
        }
        self.current = self.pending.pop();
    }

    /// Moves to the next element in order. Does nothing once the cursor is exhausted.
    ///
    /// Amortized O(1); a single step costs at most the depth of the tree.
    pub fn advance(&mut self) {
        if let Some(current) = self.current {
            let right = self.tree.node(current).right();
            self.descend_to_leftmost(right);
        }
    }

    /// Returns the element under the cursor, or `None` once exhausted.
    #[must_use]
    pub fn get(&self) -> Option<&'a T> {
        let tree = self.tree;
        self.current.map(|handle| tree.node(handle).value())
    }

    /// Returns the element under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is exhausted.
    #[must_use]
    pub fn value(&self) -> &'a T {
        self.get().expect("`Cursor::value()` - cursor is past the end!")
    }

    /// Returns `true` once the walk has passed the last element.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.current.is_none()
    }
}

impl<T, C> PartialEq for Cursor<'_, T, C> {
    fn eq(&self, other: &Self) -> bool {
        match (self.current, other.current) {
            (None, None) => true,
            (Some(a), Some(b)) => a == b && ptr::eq(self.tree, other.tree),
            _ => false,
        }
    }
}

impl<T, C> Eq for Cursor<'_, T, C> {}

impl<T, C> Clone for Cursor<'_, T, C> {
    fn clone(&self) -> Self {
        Cursor {
            tree: self.tree,
            pending: self.pending.clone(),
            current: self.current,
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Cursor<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.get()).finish()
    }
}

/// An iterator over the elements of a [`TreeSet`], in comparator order.
///
/// This `struct` is created by the [`iter`] method on [`TreeSet`].
///
/// [`iter`]: TreeSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T, C = Ascending> {
    cursor: Cursor<'a, T, C>,
    remaining: usize,
}

impl<'a, T, C> Iter<'a, T, C> {
    pub(super) fn new(set: &'a TreeSet<T, C>) -> Self {
        Iter {
            cursor: set.begin(),
            remaining: set.len(),
        }
    }
}

impl<'a, T, C> Iterator for Iter<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let value = self.cursor.get()?;
        self.cursor.advance();
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, C> ExactSizeIterator for Iter<'_, T, C> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T, C> FusedIterator for Iter<'_, T, C> {}

impl<T, C> Clone for Iter<'_, T, C> {
    fn clone(&self) -> Self {
        Iter {
            cursor: self.cursor.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Iter<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::compare::Descending;
    use alloc::vec::Vec;

    #[test]
    fn begin_of_empty_set_is_end() {
        let set: TreeSet<i32> = TreeSet::new();
        let cursor = set.begin();
        assert!(cursor.is_end());
        assert_eq!(cursor, set.end());
        assert_eq!(cursor.get(), None);
    }

    #[test]
    fn advance_past_end_is_idempotent() {
        let set = TreeSet::from([2, 1]);
        let mut cursor = set.begin();
        cursor.advance();
        cursor.advance();
        assert!(cursor.is_end());
        cursor.advance();
        assert!(cursor.is_end());
        assert_eq!(cursor, set.end());
    }

    #[test]
    #[should_panic(expected = "`Cursor::value()` - cursor is past the end!")]
    fn value_at_end_panics() {
        let set = TreeSet::from([1]);
        let _ = set.end().value();
    }

    #[test]
    fn cursor_equality_is_node_identity() {
        let a = TreeSet::from([1, 2]);
        let b = a.clone();
        assert_eq!(a.begin(), a.begin());
        assert_ne!(a.begin(), b.begin());
        assert_eq!(a.end(), b.end());

        let mut second = a.begin();
        second.advance();
        assert_ne!(second, a.begin());
    }

    #[test]
    fn clone_restarts_independently() {
        let set = TreeSet::from([5, 3, 8, 1]);
        let mut cursor = set.begin();
        cursor.advance();
        let saved = cursor.clone();
        cursor.advance();
        assert_eq!(saved.get(), Some(&3));
        assert_eq!(cursor.get(), Some(&5));
    }

    #[test]
    fn iter_counts_down_and_fuses() {
        let set: TreeSet<i32, Descending> = (0..5).collect();
        let mut iter = set.iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(&4));
        assert_eq!(iter.size_hint(), (4, Some(4)));
        assert_eq!(iter.by_ref().collect::<Vec<_>>(), [&3, &2, &1, &0]);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn deep_tree_spills_pending_stack() {
        // Descending inserts build a left spine deeper than the inline stack.
        let set: TreeSet<i32> = (0..100).rev().collect();
        let cursor = set.begin();
        assert!(cursor.pending.spilled());
        assert_eq!(cursor.pending.len(), 99);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn debug_formats() {
        let set = TreeSet::from([2, 1]);
        assert_eq!(alloc::format!("{:?}", set.begin()), "Cursor(Some(1))");
        assert_eq!(alloc::format!("{:?}", set.iter()), "[1, 2]");
    }
}
