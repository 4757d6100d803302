use core::cmp::Ordering::{Equal, Greater, Less};
use core::fmt;
use core::ops::{BitAnd, BitOr, Sub};

use crate::compare::{Ascending, Compare};
use crate::raw::RawTreeSet;
use crate::render;

mod cursor;

pub use cursor::{Cursor, Iter};

/// Below this size ratio `intersect` walks both sets side by side; above it, it searches the larger one.
const ITER_PERFORMANCE_TIPPING_SIZE_DIFF: usize = 16;

/// An ordered set based on an unbalanced binary search tree.
///
/// Elements are ordered by the comparator `C` (by default [`Ascending`], i.e. [`Ord`]). Values the
/// comparator considers equivalent are the same element: the first one added is kept.
///
/// The tree is never rebalanced, so every operation is O(depth), and adding values in sorted order
/// degrades the tree to a list with depth n. Removal replaces a node by the merge of its two subtrees,
/// which can also grow the depth.
///
/// It is a logic error for an element to be modified in such a way that its ordering relative to any
/// other element, as determined by the comparator, changes while it is in the set. The behavior
/// resulting from such a logic error is not specified, but will be encapsulated to the `TreeSet` that
/// observed the logic error and not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use treeset::TreeSet;
///
/// let mut books = TreeSet::new();
///
/// books.add("A Dance With Dragons");
/// books.add("To Kill a Mockingbird");
/// books.add("The Odyssey");
/// books.add("The Great Gatsby");
///
/// if !books.contains(&"The Winds of Winter") {
///     println!("We have {} books, but The Winds of Winter ain't one.", books.len());
/// }
///
/// books.del(&"The Odyssey");
///
/// for book in &books {
///     println!("{book}");
/// }
/// ```
///
/// A `TreeSet` with a known list of items can be initialized from an array:
///
/// ```
/// use treeset::TreeSet;
///
/// let set = TreeSet::from([1, 2, 3]);
/// assert_eq!(set.to_string(), "[1,2,3]");
/// ```
pub struct TreeSet<T, C = Ascending> {
    raw: RawTreeSet<T, C>,
}

impl<T> TreeSet<T> {
    /// Makes a new, empty `TreeSet` ordered by [`Ord`].
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let mut set = TreeSet::new();
    /// set.add(1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn new() -> TreeSet<T> {
        TreeSet::with_comparator(Ascending)
    }
}

impl<T, C> TreeSet<T, C> {
    /// Makes a new, empty `TreeSet` ordered by `cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::{Descending, TreeSet};
    ///
    /// let mut set = TreeSet::with_comparator(Descending);
    /// set.extend([1, 3, 2]);
    /// assert_eq!(set.first(), Some(&3));
    /// ```
    #[must_use]
    pub const fn with_comparator(cmp: C) -> Self {
        TreeSet {
            raw: RawTreeSet::new(cmp),
        }
    }

    /// Makes a new, empty `TreeSet` with room for at least `capacity` elements before reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::{Ascending, TreeSet};
    ///
    /// let set: TreeSet<i32> = TreeSet::with_capacity(16, Ascending);
    /// assert!(set.is_empty());
    /// assert!(set.capacity() >= 16);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize, cmp: C) -> Self {
        TreeSet {
            raw: RawTreeSet::with_capacity(capacity, cmp),
        }
    }

    /// Returns the number of elements the set can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Returns the comparator ordering this set.
    #[must_use]
    pub const fn comparator(&self) -> &C {
        self.raw.comparator()
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let mut v = TreeSet::new();
    /// assert_eq!(v.len(), 0);
    /// v.add(1);
    /// assert_eq!(v.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the set contains no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Clears the set, removing all elements.
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Moves every element into a new set, leaving `self` empty but still usable.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let mut source = TreeSet::from([1, 2]);
    /// let moved = source.take_all();
    /// assert!(source.is_empty());
    /// assert_eq!(moved.len(), 2);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use = "use `clear` to drop the elements instead"]
    pub fn take_all(&mut self) -> Self
    where
        C: Clone,
    {
        TreeSet {
            raw: self.raw.take_all(),
        }
    }

    /// Returns a cursor at the first element, or an exhausted cursor if the set is empty.
    ///
    /// # Complexity
    ///
    /// O(depth)
    pub fn begin(&self) -> Cursor<'_, T, C> {
        Cursor::first(&self.raw)
    }

    /// Returns an exhausted cursor, equal to any cursor that has walked past the last element.
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn end(&self) -> Cursor<'_, T, C> {
        Cursor::end(&self.raw)
    }

    /// Gets an iterator that visits the elements in comparator order.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let set = TreeSet::from([3, 1, 2]);
    /// let mut iter = set.iter();
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&3));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T, C> {
        Iter::new(self)
    }

    /// Returns the first element in comparator order, if any.
    ///
    /// # Complexity
    ///
    /// O(depth)
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.raw.first()
    }

    /// Returns the last element in comparator order, if any.
    ///
    /// # Complexity
    ///
    /// O(depth)
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.raw.last()
    }

    /// Returns the height of the underlying tree, counted in nodes. An empty set has depth 0.
    ///
    /// Useful for observing how insertion order shapes the tree.
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let sorted: TreeSet<i32> = (0..8).collect();
    /// assert_eq!(sorted.depth(), 8);
    ///
    /// let shuffled = TreeSet::from([4, 2, 6, 1, 3, 5, 7]);
    /// assert_eq!(shuffled.depth(), 3);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn depth(&self) -> usize {
        self.raw.depth()
    }
}

impl<T, C: Compare<T>> TreeSet<T, C> {
    /// Makes a set from `iter` ordered by `cmp`. Later values equivalent to earlier ones are dropped.
    ///
    /// ```
    /// use treeset::{ByLess, TreeSet};
    ///
    /// let first_letter = ByLess(|a: &&str, b: &&str| a.as_bytes()[0] < b.as_bytes()[0]);
    /// let set = TreeSet::from_iter_with(["bee", "ant", "bat"], first_letter);
    /// assert_eq!(set.to_string(), "[ant,bee]");
    /// ```
    pub fn from_iter_with<I: IntoIterator<Item = T>>(iter: I, cmp: C) -> Self {
        let mut set = TreeSet::with_comparator(cmp);
        set.extend(iter);
        set
    }

    /// Adds a value to the set.
    ///
    /// Returns whether the value was newly inserted. That is:
    ///
    /// - If the set did not previously contain an equivalent value, `true` is returned.
    /// - If the set already contained an equivalent value, `false` is returned, and the set is left
    ///   untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let mut set = TreeSet::new();
    ///
    /// assert_eq!(set.add(2), true);
    /// assert_eq!(set.add(2), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth)
    pub fn add(&mut self, value: T) -> bool {
        self.raw.add(value)
    }

    /// If the set contains an element equivalent to `value`, removes it from the set and drops it.
    /// Returns whether such an element was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let mut set = TreeSet::new();
    /// set.add(2);
    /// assert_eq!(set.del(&2), true);
    /// assert_eq!(set.del(&2), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth)
    pub fn del(&mut self, value: &T) -> bool {
        self.raw.remove(value).is_some()
    }

    /// Removes and returns the element equivalent to `value`, if any.
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let mut set = TreeSet::from([2]);
    /// assert_eq!(set.take(&2), Some(2));
    /// assert_eq!(set.take(&2), None);
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T> {
        self.raw.remove(value)
    }

    /// Returns `true` if the set contains an element equivalent to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let set = TreeSet::from([1, 2, 3]);
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth)
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.raw.contains(value)
    }

    /// Returns the stored element equivalent to `value`, if any.
    #[must_use]
    pub fn get(&self, value: &T) -> Option<&T> {
        self.raw.get(value)
    }

    /// Returns a new set holding every element of `self` and of `other`.
    ///
    /// Elements of `self` are added first, so where both sets hold equivalent elements the one from
    /// `self` is kept. The result uses `self`'s comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let a = TreeSet::from([1, 2, 3]);
    /// let b = TreeSet::from([1, 2, 4]);
    /// assert_eq!(a.plus(&b), TreeSet::from([1, 2, 3, 4]));
    /// ```
    ///
    /// # Complexity
    ///
    /// O((n + m) · depth of the result)
    #[must_use]
    pub fn plus(&self, other: &TreeSet<T, C>) -> TreeSet<T, C>
    where
        T: Clone,
        C: Clone,
    {
        let mut set = TreeSet::with_comparator(self.comparator().clone());
        set.extend(self.iter().cloned());
        set.extend(other.iter().cloned());
        set
    }

    /// Returns a new set holding the elements of `self` that have an equivalent in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let a = TreeSet::from([1, 2, 3]);
    /// let b = TreeSet::from([1, 2, 4]);
    /// assert_eq!(a.intersect(&b), TreeSet::from([1, 2]));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n + m) when the sizes are similar, O(n · depth of `other`) when `other` is much larger.
    #[must_use]
    pub fn intersect(&self, other: &TreeSet<T, C>) -> TreeSet<T, C>
    where
        T: Clone,
        C: Clone,
    {
        let mut set = TreeSet::with_comparator(self.comparator().clone());
        if self.is_empty() || other.is_empty() {
            return set;
        }

        if other.len() > ITER_PERFORMANCE_TIPPING_SIZE_DIFF * self.len() {
            // other is much larger, iterate self and search in other
            set.extend(self.iter().filter(|value| other.contains(value)).cloned());
        } else {
            self.stitch_common(other, |value| {
                set.add(value.clone());
            });
        }
        set
    }

    /// Walks both sets in order at the same time, calling `found` with each element of `self` that has
    /// an equivalent in `other`.
    fn stitch_common<'a>(&'a self, other: &'a TreeSet<T, C>, mut found: impl FnMut(&'a T)) {
        let cmp = self.comparator();
        let mut a = self.iter();
        let mut b = other.iter();
        let (Some(mut a_next), Some(mut b_next)) = (a.next(), b.next()) else {
            return;
        };

        loop {
            match cmp.compare(a_next, b_next) {
                Less => match a.next() {
                    Some(next) => a_next = next,
                    None => return,
                },
                Greater => match b.next() {
                    Some(next) => b_next = next,
                    None => return,
                },
                Equal => {
                    found(a_next);
                    let (Some(x), Some(y)) = (a.next(), b.next()) else {
                        return;
                    };
                    a_next = x;
                    b_next = y;
                }
            }
        }
    }

    /// Returns a new set holding the elements of `self` that have no equivalent in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let a = TreeSet::from([1, 2, 3]);
    /// let b = TreeSet::from([1, 2, 4]);
    /// assert_eq!(a.minus(&b), TreeSet::from([3]));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n · (depth of `other` + depth of the result))
    #[must_use]
    pub fn minus(&self, other: &TreeSet<T, C>) -> TreeSet<T, C>
    where
        T: Clone,
        C: Clone,
    {
        let mut set = TreeSet::with_comparator(self.comparator().clone());
        set.extend(self.iter().filter(|value| !other.contains(value)).cloned());
        set
    }
}

impl<T, C: Compare<T>> PartialEq for TreeSet<T, C> {
    /// Two sets are equal when they visit equivalent elements in the same order, regardless of how
    /// either tree is shaped.
    fn eq(&self, other: &TreeSet<T, C>) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let cmp = self.comparator();
        let mut a = self.begin();
        let mut b = other.begin();
        loop {
            match (a.get(), b.get()) {
                (Some(x), Some(y)) if cmp.compare(x, y) == Equal => {}
                (None, None) => return true,
                _ => return false,
            }
            a.advance();
            b.advance();
        }
    }
}

impl<T, C: Compare<T>> Eq for TreeSet<T, C> {}

impl<T: Clone, C: Clone> Clone for TreeSet<T, C> {
    /// Makes a deep copy: the clone shares no storage with `self`.
    fn clone(&self) -> Self {
        TreeSet {
            raw: self.raw.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.raw.clone_from(&source.raw);
    }
}

impl<T: fmt::Debug, C> fmt::Debug for TreeSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, C> fmt::Display for TreeSet<T, C> {
    /// Writes the elements in order as `[a,b,c]`, with no whitespace. An empty set is `[]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_set(f, self.iter())
    }
}

impl<T, C: Default> Default for TreeSet<T, C> {
    fn default() -> Self {
        TreeSet::with_comparator(C::default())
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for TreeSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        TreeSet::from_iter_with(iter, C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for TreeSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a, T: 'a + Copy, C: Compare<T>> Extend<&'a T> for TreeSet<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &value in iter {
            self.add(value);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for TreeSet<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, T, C> IntoIterator for &'a TreeSet<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, C>;

    fn into_iter(self) -> Iter<'a, T, C> {
        self.iter()
    }
}

impl<T: Clone, C: Compare<T> + Clone> BitOr<&TreeSet<T, C>> for &TreeSet<T, C> {
    type Output = TreeSet<T, C>;

    /// Returns the union of `self` and `rhs` as a new `TreeSet`.
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let a = TreeSet::from([1, 2]);
    /// let b = TreeSet::from([2, 3]);
    /// assert_eq!((&a | &b).to_string(), "[1,2,3]");
    /// ```
    fn bitor(self, rhs: &TreeSet<T, C>) -> TreeSet<T, C> {
        self.plus(rhs)
    }
}

impl<T: Clone, C: Compare<T> + Clone> BitAnd<&TreeSet<T, C>> for &TreeSet<T, C> {
    type Output = TreeSet<T, C>;

    /// Returns the intersection of `self` and `rhs` as a new `TreeSet`.
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let a = TreeSet::from([1, 2, 3]);
    /// let b = TreeSet::from([2, 4]);
    /// assert_eq!((&a & &b).to_string(), "[2]");
    /// ```
    fn bitand(self, rhs: &TreeSet<T, C>) -> TreeSet<T, C> {
        self.intersect(rhs)
    }
}

impl<T: Clone, C: Compare<T> + Clone> Sub<&TreeSet<T, C>> for &TreeSet<T, C> {
    type Output = TreeSet<T, C>;

    /// Returns the difference of `self` and `rhs` as a new `TreeSet`.
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let a = TreeSet::from([1, 2, 3]);
    /// let b = TreeSet::from([2]);
    /// assert_eq!((&a - &b).to_string(), "[1,3]");
    /// ```
    fn sub(self, rhs: &TreeSet<T, C>) -> TreeSet<T, C> {
        self.minus(rhs)
    }
}
