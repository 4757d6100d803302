use super::handle::Handle;

/// Which child link of a node to follow.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// A tree node: one value and two owning child links into the arena.
///
/// Every handle stored in a child link is referenced from exactly one place (a parent's child slot or
/// the tree's root slot).
pub(crate) struct Node<T> {
    value: T,
    left: Option<Handle>,
    right: Option<Handle>,
}

impl<T> Node<T> {
    /// Creates a leaf holding `value`.
    pub(crate) const fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) const fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Option<Handle>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    /// Points whichever child link currently holds `old` at `new` instead.
    ///
    /// # Panics
    ///
    /// Panics if `old` is not a child of this node.
    pub(crate) fn replace_child(&mut self, old: Handle, new: Option<Handle>) {
        if self.left == Some(old) {
            self.left = new;
        } else {
            assert_eq!(self.right, Some(old), "`Node::replace_child()` - `old` is not a child of this node!");
            self.right = new;
        }
    }

    /// Splits the node into its value and its two child links.
    pub(crate) fn into_parts(self) -> (T, Option<Handle>, Option<Handle>) {
        (self.value, self.left, self.right)
    }
}
