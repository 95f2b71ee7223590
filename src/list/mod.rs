use ghost_cell::{GhostCell, GhostToken};

use crate::list::cursor::Cursor;
use crate::list::iterator::Iter;
use crate::list::node::Ring;

pub mod cursor;
pub mod iterator;

pub(crate) mod node;

/// The `CircularList` is a circular doubly-linked list with a sentinel node.
///
/// The list itself exposes no positional mutators. All insertions and removals
/// go through a [`Cursor`] obtained from [`CircularList::cursor`], which starts
/// right before the first element.
///
/// The nodes live in an arena inside a [`GhostCell`] branded by `'brand`. Any
/// number of cursors may borrow the list at the same time; reading through them
/// takes a shared [`GhostToken`], and mutating takes the token mutably. A
/// structural change made by one cursor makes every other live cursor stale
/// (see [`Error::StaleCursor`]).
///
/// # Examples
///
/// ```
/// use circular_list::{CircularList, GhostToken};
///
/// GhostToken::new(|mut token| {
///     let list = CircularList::new();
///
///     let mut cursor = list.cursor(&token);
///     cursor.add("a", &mut token).unwrap();
///     cursor.add("b", &mut token).unwrap();
///     cursor.add("c", &mut token).unwrap();
///     assert_eq!(list.len(&token), 3);
///
///     let mut cursor = list.cursor(&token);
///     assert_eq!(cursor.next(&token), Ok(&"a"));
///     assert_eq!(cursor.next(&token), Ok(&"b"));
///     assert_eq!(cursor.remove(&mut token), Ok("b"));
///
///     assert_eq!(Vec::from_iter(list.iter(&token).copied()), vec!["a", "c"]);
/// });
/// ```
///
/// [`Error::StaleCursor`]: crate::Error::StaleCursor
pub struct CircularList<'brand, T> {
    ring: GhostCell<'brand, Ring<T>>,
}

// private methods
impl<'brand, T> CircularList<'brand, T> {
    pub(crate) fn ring<'t>(&'t self, token: &'t GhostToken<'brand>) -> &'t Ring<T> {
        self.ring.borrow(token)
    }

    pub(crate) fn ring_mut<'t>(&'t self, token: &'t mut GhostToken<'brand>) -> &'t mut Ring<T> {
        self.ring.borrow_mut(token)
    }

    /// Exclusive access needs no token: no cursor can be alive meanwhile.
    pub(crate) fn ring_exclusive(&mut self) -> &mut Ring<T> {
        self.ring.get_mut()
    }

    pub(crate) fn into_ring(self) -> Ring<T> {
        self.ring.into_inner()
    }
}

impl<'brand, T> CircularList<'brand, T> {
    /// Creates an empty `CircularList`, of which the sentinel links to itself.
    #[inline]
    pub fn new() -> Self {
        Self {
            ring: GhostCell::new(Ring::new()),
        }
    }

    /// Returns the number of elements.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn len(&self, token: &GhostToken<'brand>) -> usize {
        self.ring(token).len
    }

    #[inline]
    pub fn is_empty(&self, token: &GhostToken<'brand>) -> bool {
        self.ring(token).is_empty()
    }

    /// Provides a cursor positioned before the first element.
    ///
    /// The cursor sits between the sentinel and the first element, with
    /// `next_index() == 0` and no element targeted for `remove` or `set`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::{CircularList, GhostToken};
    ///
    /// GhostToken::new(|token| {
    ///     let list = CircularList::from_iter([1, 2, 3]);
    ///     let cursor = list.cursor(&token);
    ///     assert_eq!(cursor.has_previous(&token), Ok(false));
    ///     assert_eq!(cursor.has_next(&token), Ok(true));
    ///     assert_eq!(cursor.next_index(&token), Ok(0));
    /// });
    /// ```
    pub fn cursor<'a>(&'a self, token: &GhostToken<'brand>) -> Cursor<'a, 'brand, T> {
        Cursor::new(self, self.ring(token))
    }

    /// Provides a forward iterator.
    ///
    /// The iterator borrows the token, so the list cannot be changed while the
    /// iterator is alive.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::{CircularList, GhostToken};
    ///
    /// GhostToken::new(|token| {
    ///     let list = CircularList::from_iter(0..3);
    ///     let mut iter = list.iter(&token);
    ///     assert_eq!(iter.next(), Some(&0));
    ///     assert_eq!(iter.next_back(), Some(&2));
    ///     assert_eq!(iter.next(), Some(&1));
    ///     assert_eq!(iter.next(), None);
    /// });
    /// ```
    #[inline]
    pub fn iter<'t>(&'t self, token: &'t GhostToken<'brand>) -> Iter<'t, T> {
        Iter::new(self.ring(token))
    }

    /// Consumes the list into a `Vec`, in list order.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl<'brand, T> Default for CircularList<'brand, T> {
    fn default() -> Self {
        Self::new()
    }
}
