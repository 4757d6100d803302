use core::cmp::Ordering::{Equal, Greater, Less};

use alloc::vec::Vec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};
use crate::compare::Compare;

/// The unbalanced binary search tree backing `TreeSet`.
///
/// For every node, values in its left subtree order strictly before its own value and values in its
/// right subtree strictly after it, under `cmp`. No two values in the tree are equivalent.
pub(crate) struct RawTreeSet<T, C> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<T>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Number of nodes reachable from `root`.
    len: usize,
    /// Ordering used for every search, fixed at construction.
    cmp: C,
}

impl<T, C> RawTreeSet<T, C> {
    pub(crate) const fn new(cmp: C) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
            cmp,
        }
    }

    pub(crate) fn with_capacity(capacity: usize, cmp: C) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            len: 0,
            cmp,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) const fn comparator(&self) -> &C {
        &self.cmp
    }

    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node<T> {
        self.nodes.get(handle)
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// Moves every node into a new tree, leaving `self` empty with a copy of the comparator.
    pub(crate) fn take_all(&mut self) -> Self
    where
        C: Clone,
    {
        let cmp = self.cmp.clone();
        core::mem::replace(self, Self::new(cmp))
    }

    /// Follows the chain of `side` links from the root to its end.
    fn extreme(&self, side: Side) -> Option<&T> {
        let mut current = self.root?;
        while let Some(next) = self.nodes.get(current).child(side) {
            current = next;
        }
        Some(self.nodes.get(current).value())
    }

    pub(crate) fn first(&self) -> Option<&T> {
        self.extreme(Side::Left)
    }

    pub(crate) fn last(&self) -> Option<&T> {
        self.extreme(Side::Right)
    }

    /// Height of the tree counted in nodes; an empty tree has depth 0.
    pub(crate) fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(Handle, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((handle, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            let node = self.nodes.get(handle);
            stack.extend(node.left().map(|left| (left, depth + 1)));
            stack.extend(node.right().map(|right| (right, depth + 1)));
        }
        deepest
    }

    /// Joins two subtrees where every value under `small` orders before every value under `big`.
    ///
    /// `small` is hung off the leftmost node of `big`, which becomes the top of the result. No
    /// rebalancing happens, so the depth of `small`'s values grows by the length of `big`'s left spine.
    fn merge(&mut self, small: Option<Handle>, big: Option<Handle>) -> Option<Handle> {
        let (Some(small), Some(big)) = (small, big) else {
            return small.or(big);
        };

        let mut leftmost = big;
        while let Some(next) = self.nodes.get(leftmost).left() {
            leftmost = next;
        }
        self.nodes.get_mut(leftmost).set_child(Side::Left, Some(small));
        Some(big)
    }

    /// Copies the tree into `nodes` (which must be empty), returning the new root.
    fn copy_into(&self, nodes: &mut Arena<Node<T>>) -> Option<Handle>
    where
        T: Clone,
    {
        let root = self.root?;
        let new_root = nodes.alloc(Node::new(self.nodes.get(root).value().clone()));

        // Pairs of (source node, its fresh copy) whose children still need copying.
        let mut stack = alloc::vec![(root, new_root)];
        while let Some((old, new)) = stack.pop() {
            for side in [Side::Left, Side::Right] {
                if let Some(old_child) = self.nodes.get(old).child(side) {
                    let new_child = nodes.alloc(Node::new(self.nodes.get(old_child).value().clone()));
                    nodes.get_mut(new).set_child(side, Some(new_child));
                    stack.push((old_child, new_child));
                }
            }
        }
        Some(new_root)
    }
}

impl<T, C: Compare<T>> RawTreeSet<T, C> {
    /// Finds the node holding a value equivalent to `value`, with its parent if it is not the root.
    fn search(&self, value: &T) -> Option<(Option<Handle>, Handle)> {
        let mut parent = None;
        let mut current = self.root?;

        loop {
            let node = self.nodes.get(current);
            let side = match self.cmp.compare(value, node.value()) {
                Equal => return Some((parent, current)),
                Less => Side::Left,
                Greater => Side::Right,
            };
            parent = Some(current);
            current = node.child(side)?;
        }
    }

    pub(crate) fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    pub(crate) fn get(&self, value: &T) -> Option<&T> {
        self.search(value).map(|(_, handle)| self.nodes.get(handle).value())
    }

    /// Inserts `value` as a new leaf unless an equivalent value is already present.
    /// Returns whether the value was inserted.
    pub(crate) fn add(&mut self, value: T) -> bool {
        let Some(root) = self.root else {
            self.root = Some(self.nodes.alloc(Node::new(value)));
            self.len = 1;
            self.debug_check();
            return true;
        };

        let mut current = root;
        loop {
            let node = self.nodes.get(current);
            let side = match self.cmp.compare(&value, node.value()) {
                Equal => return false,
                Less => Side::Left,
                Greater => Side::Right,
            };

            match node.child(side) {
                Some(next) => current = next,
                None => {
                    let leaf = self.nodes.alloc(Node::new(value));
                    self.nodes.get_mut(current).set_child(side, Some(leaf));
                    self.len += 1;
                    self.debug_check();
                    return true;
                }
            }
        }
    }

    /// Removes the value equivalent to `value`, returning it.
    ///
    /// The removed node is replaced by the merge of its two subtrees rather than by its in-order
    /// successor.
    pub(crate) fn remove(&mut self, value: &T) -> Option<T> {
        let (parent, handle) = self.search(value)?;

        let (removed, left, right) = self.nodes.take(handle).into_parts();
        let merged = self.merge(left, right);
        match parent {
            None => self.root = merged,
            Some(parent) => self.nodes.get_mut(parent).replace_child(handle, merged),
        }

        self.len -= 1;
        self.debug_check();
        Some(removed)
    }

    #[cfg(debug_assertions)]
    #[inline]
    fn debug_check(&self) {
        self.validate_invariants();
    }

    #[cfg(not(debug_assertions))]
    #[inline]
    fn debug_check(&self) {}

    /// Walks the whole tree checking the ordering invariant and the cached length.
    ///
    /// Each node is visited with the open interval `(lower, upper)` its value must fall in; a missing
    /// bound is unbounded. Descending left narrows `upper` to the node's value, descending right
    /// narrows `lower`.
    ///
    /// # Panics
    ///
    /// Panics on the first violation. A violation is a bug in this module, never a caller error.
    #[cfg(any(test, debug_assertions))]
    pub(crate) fn validate_invariants(&self) {
        let mut reachable = 0usize;
        let mut stack: Vec<(Handle, Option<&T>, Option<&T>)> = Vec::new();
        stack.extend(self.root.map(|root| (root, None, None)));

        while let Some((handle, lower, upper)) = stack.pop() {
            let node = self.nodes.get(handle);
            let value = node.value();

            if let Some(lower) = lower {
                assert!(
                    self.cmp.less(lower, value),
                    "`RawTreeSet::validate_invariants()` - node {handle:?} does not order after its lower bound!"
                );
            }
            if let Some(upper) = upper {
                assert!(
                    self.cmp.less(value, upper),
                    "`RawTreeSet::validate_invariants()` - node {handle:?} does not order before its upper bound!"
                );
            }

            reachable += 1;
            stack.extend(node.left().map(|left| (left, lower, Some(value))));
            stack.extend(node.right().map(|right| (right, Some(value), upper)));
        }

        assert_eq!(reachable, self.len, "`RawTreeSet::validate_invariants()` - `len` does not match the tree!");
        assert_eq!(self.nodes.len(), self.len, "`RawTreeSet::validate_invariants()` - arena holds detached nodes!");
    }
}

impl<T: Clone, C: Clone> Clone for RawTreeSet<T, C> {
    fn clone(&self) -> Self {
        let mut nodes = Arena::with_capacity(self.len);
        let root = self.copy_into(&mut nodes);
        Self {
            nodes,
            root,
            len: self.len,
            cmp: self.cmp.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.nodes.clear();
        self.root = source.copy_into(&mut self.nodes);
        self.len = source.len;
        self.cmp.clone_from(&source.cmp);
    }
}
