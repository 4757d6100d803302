//! Comparators that order the elements of a [`TreeSet`](crate::TreeSet).
//!
//! A comparator is a strict weak ordering: `less(a, b)` answers "does `a` come before `b`?". Two values
//! for which neither comes before the other are *equivalent* and count as the same set element.

use core::cmp::Ordering;
use core::fmt;

/// A strict weak ordering over `T`.
///
/// # Examples
///
/// ```
/// use treeset::{Compare, TreeSet};
///
/// // Orders strings by length only, so "ab" and "cd" are the same element.
/// #[derive(Clone, Copy, Default)]
/// struct ByLen;
///
/// impl Compare<&str> for ByLen {
///     fn less(&self, a: &&str, b: &&str) -> bool {
///         a.len() < b.len()
///     }
/// }
///
/// let mut set = TreeSet::with_comparator(ByLen);
/// assert!(set.add("ab"));
/// assert!(!set.add("cd"));
/// assert!(set.add("a"));
/// assert_eq!(set.to_string(), "[a,ab]");
/// ```
pub trait Compare<T: ?Sized> {
    /// Returns `true` if `a` is ordered strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool;

    /// Three-way comparison derived from [`less`](Compare::less).
    ///
    /// `Equal` means the two values are equivalent, not necessarily identical.
    fn compare(&self, a: &T, b: &T) -> Ordering {
        if self.less(a, b) {
            Ordering::Less
        } else if self.less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Orders by [`Ord`], smallest first. This is the default comparator.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Ascending;

/// Orders by [`Ord`], greatest first.
///
/// ```
/// use treeset::{Descending, TreeSet};
///
/// let set: TreeSet<i32, Descending> = [4, 1, 3, 2].into_iter().collect();
/// assert_eq!(set.to_string(), "[4,3,2,1]");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Descending;

/// Adapts a `less-than` closure into a [`Compare`].
///
/// ```
/// use treeset::{ByLess, TreeSet};
///
/// let mut set = TreeSet::with_comparator(ByLess(|a: &i32, b: &i32| a.abs() < b.abs()));
/// set.extend([-3, 1, 3, -2]);
/// assert_eq!(set.to_string(), "[1,-2,-3]");
/// ```
#[derive(Clone, Copy, Default)]
pub struct ByLess<F>(pub F);

impl<T: ?Sized + Ord> Compare<T> for Ascending {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }

    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: ?Sized + Ord> Compare<T> for Descending {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        b < a
    }

    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

impl<T: ?Sized, F> Compare<T> for ByLess<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

impl<F> fmt::Debug for ByLess<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ByLess").finish_non_exhaustive()
    }
}
