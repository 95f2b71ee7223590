use std::fmt;
use std::iter::FusedIterator;

use crate::list::node::{NodeId, Ring, SENTINEL};
use crate::list::CircularList;

/// An iterator over the elements of a `CircularList`.
///
/// It uses a pair of nodes `start..end` to represent a half-open subrange
/// of the list, where `start` is inclusive and `end` is not.
///
/// The iterator borrows the token immutably, so the list cannot be changed
/// while it is alive; it does not need to check for staleness.
///
/// # Examples
///
/// ```compile_fail
/// use circular_list::{CircularList, GhostToken};
///
/// GhostToken::new(|mut token| {
///     let list = CircularList::from_iter([1, 2, 3]);
///     let mut iter = list.iter(&token);
///
///     // Won't compile, because the token is already borrowed immutably.
///     list.cursor(&token).add(4, &mut token).unwrap();
///     println!("{:?}", iter.next());
/// });
/// ```
pub struct Iter<'t, T> {
    ring: &'t Ring<T>,
    start: NodeId,
    end: NodeId,
    len: usize,
}

impl<'t, T> Iter<'t, T> {
    pub(crate) fn new(ring: &'t Ring<T>) -> Self {
        Self {
            ring,
            start: ring.front(),
            end: SENTINEL,
            len: ring.len,
        }
    }
}

// Not derived: the iterator is cloneable whether or not `T` is.
impl<'t, T> Clone for Iter<'t, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'t, T: fmt::Debug> fmt::Debug for Iter<'t, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'t, T> Iterator for Iter<'t, T> {
    type Item = &'t T;

    /// Return `*start` and reset the iterating range to `(start.next)..end`,
    /// or return `None` if `start..end` is already empty.
    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let current = self.start;
        self.start = self.ring.next_of(current);
        self.len -= 1;
        self.ring.value(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<'t, T> DoubleEndedIterator for Iter<'t, T> {
    /// Reset the iterating range to `start..(end.prev)` and return `*end`,
    /// or return `None` if `start..end` is already empty.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        self.end = self.ring.prev_of(self.end);
        self.len -= 1;
        self.ring.value(self.end)
    }
}

impl<'t, T> ExactSizeIterator for Iter<'t, T> {}

impl<'t, T> FusedIterator for Iter<'t, T> {}

/// An owning iterator over the elements of a `CircularList`.
///
/// This `struct` is created by the [`into_iter`] method on [`CircularList`]
/// (provided by the `IntoIterator` trait).
///
/// [`into_iter`]: CircularList::into_iter
pub struct IntoIter<T> {
    ring: Ring<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.ring).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.ring.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.ring.len, Some(self.ring.len))
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.ring.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'brand, T> IntoIterator for CircularList<'brand, T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            ring: self.into_ring(),
        }
    }
}

impl<'brand, T> FromIterator<T> for CircularList<'brand, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = CircularList::new();
        list.extend(iter);
        list
    }
}

/// Appends elements to the back of the list.
///
/// Appending is a structural change, but since it needs `&mut` access to the
/// list, no cursor can observe it.
impl<'brand, T> Extend<T> for CircularList<'brand, T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let ring = self.ring_exclusive();
        let mut back = ring.back();
        let mut appended = false;
        for item in iter {
            back = ring.insert_after(back, item);
            appended = true;
        }
        if appended {
            ring.bump();
        }
    }
}

impl<'a, 'brand, T: 'a + Copy> Extend<&'a T> for CircularList<'brand, T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}
