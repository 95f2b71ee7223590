use std::fmt;

use ghost_cell::GhostToken;
use snafu::prelude::*;

use crate::error::{IllegalCursorStateSnafu, NoSuchElementSnafu, Result, StaleCursorSnafu};
use crate::list::node::{NodeId, Ring, SENTINEL};
use crate::list::CircularList;

/// A bidirectional cursor over a `CircularList` that can mutate the list.
///
/// A `Cursor` always sits *between* two adjacent ring cells, `prev` and `next`.
/// In a list with length *n*, there are *n* + 1 positions, and
/// [`next_index`] tells which one the cursor is at. The sentinel is never
/// returned as an element: it marks both ends.
///
/// After [`next`] or [`previous`] the element just crossed becomes the
/// *target* of [`remove`] and [`set`]. [`add`] and [`remove`] clear the target.
///
/// # Fail-fast
///
/// Each cursor keeps a snapshot of the list's modification counter. `add` and
/// `remove` advance the list's counter together with the snapshot of the
/// cursor that made the change; every other cursor over the same list is stale
/// from then on, and all of its operations return [`Error::StaleCursor`].
/// `set` is not a structural change and does not make other cursors stale.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The sentinel of the
/// list is denoted by `#`.)
/// ```
/// use circular_list::{CircularList, GhostToken};
///
/// GhostToken::new(|mut token| {
///     // Create a list: [# A B C #]
///     let list = CircularList::from_iter(['A', 'B', 'C']);
///
///     // Create a cursor at start: [#|A B C #] (next_index = 0)
///     let mut cursor = list.cursor(&token);
///     assert_eq!(cursor.next(&token), Ok(&'A'));
///
///     // Now at [# A|B C #] (next_index = 1), targeting A.
///     assert_eq!(cursor.next_index(&token), Ok(1));
///     assert_eq!(cursor.set('a', &mut token), Ok('A'));
///
///     // Insert before B: [# a X|B C #]
///     cursor.add('X', &mut token).unwrap();
///     assert_eq!(cursor.previous_index(&token), Ok(Some(1)));
///
///     // Walk backward over X and remove it: [# a|B C #]
///     assert_eq!(cursor.previous(&token), Ok(&'X'));
///     assert_eq!(cursor.remove(&mut token), Ok('X'));
///     assert_eq!(cursor.next(&token), Ok(&'B'));
///
///     assert_eq!(list.into_vec(), vec!['a', 'B', 'C']);
/// });
/// ```
///
/// A second cursor becomes stale after the first one adds an element:
/// ```
/// use circular_list::{CircularList, Error, GhostToken};
///
/// GhostToken::new(|mut token| {
///     let list = CircularList::from_iter([1, 2]);
///     let mut a = list.cursor(&token);
///     let b = list.cursor(&token);
///
///     a.add(0, &mut token).unwrap();
///     assert!(matches!(b.has_next(&token), Err(Error::StaleCursor { .. })));
///     assert_eq!(a.has_next(&token), Ok(true));
/// });
/// ```
///
/// [`next_index`]: Cursor::next_index
/// [`next`]: Cursor::next
/// [`previous`]: Cursor::previous
/// [`add`]: Cursor::add
/// [`remove`]: Cursor::remove
/// [`set`]: Cursor::set
/// [`Error::StaleCursor`]: crate::Error::StaleCursor
pub struct Cursor<'a, 'brand, T> {
    list: &'a CircularList<'brand, T>,
    /// The index of `next`; the index of `prev` is `index - 1`.
    index: usize,
    prev: NodeId,
    next: NodeId,
    /// The cell most recently crossed by `next` or `previous`, if it is still
    /// eligible for `remove` or `set`.
    last_returned: Option<NodeId>,
    /// Snapshot of the list's modification counter.
    changes: u64,
}

impl<'a, 'brand, T> Cursor<'a, 'brand, T> {
    pub(crate) fn new(list: &'a CircularList<'brand, T>, ring: &Ring<T>) -> Self {
        Self {
            list,
            index: 0,
            prev: SENTINEL,
            next: ring.front(),
            last_returned: None,
            changes: ring.changes,
        }
    }

    /// Fails if another cursor changed the ring since this cursor last
    /// observed it.
    fn check(&self, ring: &Ring<T>) -> Result<()> {
        if self.changes != ring.changes {
            tracing::debug!(observed = self.changes, current = ring.changes, "stale cursor");
            return StaleCursorSnafu {
                observed: self.changes,
                current: ring.changes,
            }
            .fail();
        }
        Ok(())
    }

    fn ring<'t>(&self, token: &'t GhostToken<'brand>) -> Result<&'t Ring<T>>
    where
        'a: 't,
    {
        let ring = self.list.ring(token);
        self.check(ring)?;
        Ok(ring)
    }

    fn ring_mut<'t>(&self, token: &'t mut GhostToken<'brand>) -> Result<&'t mut Ring<T>>
    where
        'a: 't,
    {
        let ring = self.list.ring_mut(token);
        self.check(ring)?;
        Ok(ring)
    }
}

// Traversal
impl<'a, 'brand, T> Cursor<'a, 'brand, T> {
    /// Returns `true` if there is an element after the cursor.
    pub fn has_next(&self, token: &GhostToken<'brand>) -> Result<bool> {
        self.ring(token)?;
        Ok(self.next != SENTINEL)
    }

    /// Returns `true` if there is an element before the cursor.
    pub fn has_previous(&self, token: &GhostToken<'brand>) -> Result<bool> {
        self.ring(token)?;
        Ok(self.prev != SENTINEL)
    }

    /// Moves the cursor forward over the next element and returns it.
    ///
    /// The returned element becomes the target of [`Cursor::remove`] and
    /// [`Cursor::set`].
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::{CircularList, Error, GhostToken};
    ///
    /// GhostToken::new(|token| {
    ///     let list = CircularList::from_iter([1, 2]);
    ///     let mut cursor = list.cursor(&token);
    ///     assert_eq!(cursor.next(&token), Ok(&1));
    ///     assert_eq!(cursor.next(&token), Ok(&2));
    ///
    ///     // The cursor does not wrap around the sentinel.
    ///     assert_eq!(cursor.next(&token), Err(Error::NoSuchElement));
    ///     assert_eq!(cursor.next_index(&token), Ok(2));
    /// });
    /// ```
    pub fn next<'t>(&mut self, token: &'t GhostToken<'brand>) -> Result<&'t T>
    where
        'a: 't,
    {
        let ring = self.ring(token)?;
        ensure!(self.next != SENTINEL, NoSuchElementSnafu);
        let target = self.next;
        let value = ring.value(target).context(NoSuchElementSnafu)?;
        self.last_returned = Some(target);
        self.prev = target;
        self.next = ring.next_of(target);
        self.index += 1;
        Ok(value)
    }

    /// Moves the cursor backward over the previous element and returns it.
    ///
    /// The returned element becomes the target of [`Cursor::remove`] and
    /// [`Cursor::set`].
    ///
    /// This operation should compute in *O*(1) time.
    pub fn previous<'t>(&mut self, token: &'t GhostToken<'brand>) -> Result<&'t T>
    where
        'a: 't,
    {
        let ring = self.ring(token)?;
        ensure!(self.prev != SENTINEL, NoSuchElementSnafu);
        let target = self.prev;
        let value = ring.value(target).context(NoSuchElementSnafu)?;
        self.last_returned = Some(target);
        self.next = target;
        self.prev = ring.prev_of(target);
        self.index -= 1;
        Ok(value)
    }

    /// Returns the index of the element that [`Cursor::next`] would return,
    /// or the length of the list if the cursor is at the end.
    pub fn next_index(&self, token: &GhostToken<'brand>) -> Result<usize> {
        self.ring(token)?;
        Ok(self.index)
    }

    /// Returns the index of the element that [`Cursor::previous`] would
    /// return, or `None` if the cursor is at the start.
    pub fn previous_index(&self, token: &GhostToken<'brand>) -> Result<Option<usize>> {
        self.ring(token)?;
        Ok(self.index.checked_sub(1))
    }
}

// Mutation
impl<'a, 'brand, T> Cursor<'a, 'brand, T> {
    /// Inserts an element right before the cursor.
    ///
    /// After insertion, the new element is before the cursor, so a following
    /// [`Cursor::next`] is unaffected and [`Cursor::previous`] would return the
    /// new element. The cursor's index becomes `index + 1`. The target of
    /// `remove`/`set` is cleared.
    ///
    /// Every other cursor over the list becomes stale.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::{CircularList, Error, GhostToken};
    ///
    /// GhostToken::new(|mut token| {
    ///     let list = CircularList::new();
    ///     let mut cursor = list.cursor(&token);
    ///
    ///     cursor.add(1, &mut token).unwrap();
    ///     cursor.add(2, &mut token).unwrap();
    ///     assert_eq!(cursor.next_index(&token), Ok(2));
    ///     assert_eq!(cursor.has_next(&token), Ok(false));
    ///
    ///     // Nothing to remove right after `add`.
    ///     assert_eq!(cursor.remove(&mut token), Err(Error::IllegalCursorState));
    ///
    ///     assert_eq!(list.into_vec(), vec![1, 2]);
    /// });
    /// ```
    pub fn add(&mut self, value: T, token: &mut GhostToken<'brand>) -> Result<()> {
        let ring = self.ring_mut(token)?;
        #[cfg(debug_assertions)]
        assert_eq!(ring.next_of(self.prev), self.next);
        self.prev = ring.insert_after(self.prev, value);
        self.index += 1;
        self.last_returned = None;
        self.changes = ring.bump();
        tracing::trace!(index = self.index, len = ring.len, "add");
        Ok(())
    }

    /// Removes the element most recently returned by [`Cursor::next`] or
    /// [`Cursor::previous`], and returns it.
    ///
    /// If the element was returned by `next`, the cursor's index becomes
    /// `index - 1`. The target is cleared, so a second `remove` in a row fails.
    ///
    /// Every other cursor over the list becomes stale.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::{CircularList, Error, GhostToken};
    ///
    /// GhostToken::new(|mut token| {
    ///     let list = CircularList::from_iter(0..5);
    ///     let mut cursor = list.cursor(&token);
    ///
    ///     assert_eq!(cursor.next(&token), Ok(&0));
    ///     assert_eq!(cursor.next(&token), Ok(&1));
    ///     assert_eq!(cursor.remove(&mut token), Ok(1));
    ///     assert_eq!(cursor.next_index(&token), Ok(1));
    ///     assert_eq!(cursor.remove(&mut token), Err(Error::IllegalCursorState));
    ///
    ///     assert_eq!(cursor.next(&token), Ok(&2));
    ///     assert_eq!(cursor.previous(&token), Ok(&2));
    ///     assert_eq!(cursor.remove(&mut token), Ok(2));
    ///     assert_eq!(cursor.next_index(&token), Ok(1));
    ///
    ///     assert_eq!(list.into_vec(), vec![0, 3, 4]);
    /// });
    /// ```
    pub fn remove(&mut self, token: &mut GhostToken<'brand>) -> Result<T> {
        let ring = self.ring_mut(token)?;
        let target = self.last_returned.take().context(IllegalCursorStateSnafu)?;
        if self.next == target {
            // crossed by `previous`
            self.next = ring.next_of(target);
        } else {
            // crossed by `next`
            debug_assert_eq!(self.prev, target);
            self.prev = ring.prev_of(target);
            self.index -= 1;
        }
        let value = ring.unlink(target).context(IllegalCursorStateSnafu)?;
        self.changes = ring.bump();
        tracing::trace!(index = self.index, len = ring.len, "remove");
        Ok(value)
    }

    /// Replaces the element most recently returned by [`Cursor::next`] or
    /// [`Cursor::previous`], and returns the old one.
    ///
    /// This is not a structural change: other cursors stay valid, and `set`
    /// may be repeated on the same element.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::{CircularList, GhostToken};
    ///
    /// GhostToken::new(|mut token| {
    ///     let list = CircularList::from_iter([1, 2, 3]);
    ///     let mut a = list.cursor(&token);
    ///     let mut b = list.cursor(&token);
    ///
    ///     assert_eq!(a.next(&token), Ok(&1));
    ///     assert_eq!(a.set(10, &mut token), Ok(1));
    ///     assert_eq!(a.set(100, &mut token), Ok(10));
    ///
    ///     // `b` is still usable and sees the new value.
    ///     assert_eq!(b.next(&token), Ok(&100));
    /// });
    /// ```
    pub fn set(&mut self, value: T, token: &mut GhostToken<'brand>) -> Result<T> {
        let ring = self.ring_mut(token)?;
        let target = self.last_returned.context(IllegalCursorStateSnafu)?;
        let slot = ring.value_mut(target).context(IllegalCursorStateSnafu)?;
        Ok(std::mem::replace(slot, value))
    }
}

impl<'a, 'brand, T> fmt::Debug for Cursor<'a, 'brand, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("prev", &self.prev)
            .field("next", &self.next)
            .field("last_returned", &self.last_returned)
            .field("changes", &self.changes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use ghost_cell::GhostToken;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::error::Error;
    use crate::list::CircularList;

    fn forward<'brand, T: Clone>(
        list: &CircularList<'brand, T>,
        token: &GhostToken<'brand>,
    ) -> Vec<T> {
        let mut cursor = list.cursor(token);
        let mut values = Vec::new();
        while cursor.has_next(token).unwrap() {
            values.push(cursor.next(token).unwrap().clone());
        }
        values
    }

    fn assert_stale<T: std::fmt::Debug>(result: Result<T, Error>) {
        match result {
            Err(error) => assert!(error.is_stale(), "{:?}", error),
            Ok(value) => panic!("expect stale cursor: {:?}", value),
        }
    }

    #[test]
    fn cursor_empty() {
        GhostToken::new(|mut token| {
            let list = CircularList::<&str>::new();
            let mut cursor = list.cursor(&token);
            assert_eq!(cursor.has_next(&token), Ok(false));
            assert_eq!(cursor.has_previous(&token), Ok(false));
            assert_eq!(cursor.next(&token), Err(Error::NoSuchElement));
            assert_eq!(cursor.previous(&token), Err(Error::NoSuchElement));
            assert_eq!(cursor.remove(&mut token), Err(Error::IllegalCursorState));
            assert_eq!(cursor.set("x", &mut token), Err(Error::IllegalCursorState));
            assert_eq!(cursor.next_index(&token), Ok(0));
            assert_eq!(cursor.previous_index(&token), Ok(None));
            assert_eq!(list.len(&token), 0);
        })
    }

    #[test]
    fn cursor_add_then_remove() {
        GhostToken::new(|mut token| {
            let list = CircularList::new();
            let mut cursor = list.cursor(&token);
            cursor.add("a", &mut token).unwrap();
            cursor.add("b", &mut token).unwrap();
            cursor.add("c", &mut token).unwrap();
            assert_eq!(forward(&list, &token), vec!["a", "b", "c"]);
            assert_eq!(list.len(&token), 3);

            let mut cursor = list.cursor(&token);
            assert_eq!(cursor.next(&token), Ok(&"a"));
            assert_eq!(cursor.next(&token), Ok(&"b"));
            assert_eq!(cursor.remove(&mut token), Ok("b"));
            assert_eq!(forward(&list, &token), vec!["a", "c"]);
            assert_eq!(list.len(&token), 2);
        })
    }

    #[test]
    fn cursor_round_trip() {
        GhostToken::new(|token| {
            for len in 0..6 {
                let list = CircularList::from_iter(0..len);
                let mut cursor = list.cursor(&token);
                let mut values = Vec::new();
                while cursor.has_next(&token).unwrap() {
                    values.push(*cursor.next(&token).unwrap());
                }
                assert_eq!(values, Vec::from_iter(0..len));
                assert_eq!(cursor.next_index(&token), Ok(len as usize));
                assert_eq!(cursor.next(&token), Err(Error::NoSuchElement));

                let mut values = Vec::new();
                while cursor.has_previous(&token).unwrap() {
                    values.push(*cursor.previous(&token).unwrap());
                }
                assert_eq!(values, Vec::from_iter((0..len).rev()));
                assert_eq!(cursor.next_index(&token), Ok(0));
                assert_eq!(cursor.previous(&token), Err(Error::NoSuchElement));

                values.reverse();
                assert_eq!(values, Vec::from_iter(0..len));
            }
        })
    }

    #[test]
    fn cursor_indices() {
        GhostToken::new(|mut token| {
            let list = CircularList::from_iter(['a', 'b', 'c']);
            let mut cursor = list.cursor(&token);
            assert_eq!(cursor.previous_index(&token), Ok(None));
            cursor.next(&token).unwrap();
            cursor.next(&token).unwrap();
            assert_eq!(cursor.next_index(&token), Ok(2));
            assert_eq!(cursor.previous_index(&token), Ok(Some(1)));

            cursor.add('x', &mut token).unwrap();
            assert_eq!(cursor.next_index(&token), Ok(3));
            assert_eq!(cursor.next(&token), Ok(&'c'));
            assert_eq!(cursor.next_index(&token), Ok(4));
            assert_eq!(cursor.has_next(&token), Ok(false));

            assert_eq!(cursor.previous(&token), Ok(&'c'));
            assert_eq!(cursor.previous(&token), Ok(&'x'));
            assert_eq!(cursor.previous_index(&token), Ok(Some(1)));
            assert_eq!(forward(&list, &token), vec!['a', 'b', 'x', 'c']);
        })
    }

    #[test]
    fn cursor_remove_both_sides() {
        GhostToken::new(|mut token| {
            let list = CircularList::from_iter(1..=4);
            let mut cursor = list.cursor(&token);

            // Remove an element crossed by `next`.
            assert_eq!(cursor.next(&token), Ok(&1));
            assert_eq!(cursor.remove(&mut token), Ok(1));
            assert_eq!(cursor.next_index(&token), Ok(0));
            assert_eq!(cursor.has_previous(&token), Ok(false));

            // Remove an element crossed by `previous`.
            assert_eq!(cursor.next(&token), Ok(&2));
            assert_eq!(cursor.next(&token), Ok(&3));
            assert_eq!(cursor.previous(&token), Ok(&3));
            assert_eq!(cursor.remove(&mut token), Ok(3));
            assert_eq!(cursor.next_index(&token), Ok(1));
            assert_eq!(cursor.next(&token), Ok(&4));
            assert_eq!(cursor.previous(&token), Ok(&4));
            assert_eq!(cursor.previous(&token), Ok(&2));

            // Remove the last element, then the list is empty.
            assert_eq!(cursor.remove(&mut token), Ok(2));
            assert_eq!(cursor.next(&token), Ok(&4));
            assert_eq!(cursor.remove(&mut token), Ok(4));
            assert_eq!(cursor.has_next(&token), Ok(false));
            assert_eq!(cursor.has_previous(&token), Ok(false));
            assert!(list.is_empty(&token));
        })
    }

    #[test]
    fn cursor_target_state() {
        GhostToken::new(|mut token| {
            let list = CircularList::from_iter([1, 2]);
            let mut cursor = list.cursor(&token);

            assert_eq!(cursor.set(0, &mut token), Err(Error::IllegalCursorState));
            cursor.next(&token).unwrap();
            assert_eq!(cursor.set(5, &mut token), Ok(1));
            assert_eq!(cursor.set(5, &mut token), Ok(5));
            assert_eq!(cursor.remove(&mut token), Ok(5));
            assert_eq!(cursor.remove(&mut token), Err(Error::IllegalCursorState));
            assert_eq!(cursor.set(0, &mut token), Err(Error::IllegalCursorState));

            cursor.next(&token).unwrap();
            cursor.add(3, &mut token).unwrap();
            assert_eq!(cursor.remove(&mut token), Err(Error::IllegalCursorState));
            assert_eq!(cursor.set(0, &mut token), Err(Error::IllegalCursorState));

            assert_eq!(forward(&list, &token), vec![2, 3]);
        })
    }

    #[test]
    fn cursor_set_keeps_others() {
        GhostToken::new(|mut token| {
            let list = CircularList::from_iter(["a", "b", "c"]);
            let mut cursor = list.cursor(&token);
            cursor.next(&token).unwrap();
            cursor.next(&token).unwrap();
            for _ in 0..3 {
                cursor.set("x", &mut token).unwrap();
                assert_eq!(list.len(&token), 3);
                assert_eq!(forward(&list, &token), vec!["a", "x", "c"]);
            }
        })
    }

    #[test]
    fn cursor_fail_fast() {
        GhostToken::new(|mut token| {
            let list = CircularList::from_iter([1, 2, 3]);
            let mut a = list.cursor(&token);
            let mut b = list.cursor(&token);
            let mut c = list.cursor(&token);
            assert_eq!(b.next(&token), Ok(&1));

            // `set` does not invalidate other cursors.
            assert_eq!(b.set(10, &mut token), Ok(1));
            assert_eq!(a.next(&token), Ok(&10));

            // `add` through `a` makes `b` and `c` stale.
            a.add(4, &mut token).unwrap();
            assert_stale(b.has_next(&token));
            assert_stale(b.has_previous(&token));
            assert_stale(b.next(&token));
            assert_stale(b.previous(&token));
            assert_stale(b.next_index(&token));
            assert_stale(b.previous_index(&token));
            assert_stale(b.add(5, &mut token));
            assert_stale(b.remove(&mut token));
            assert_stale(b.set(5, &mut token));
            assert_stale(c.next(&token));

            // `a` keeps working.
            assert_eq!(a.next(&token), Ok(&2));
            assert_eq!(a.remove(&mut token), Ok(2));
            assert_eq!(forward(&list, &token), vec![10, 4, 3]);

            // `remove` through `a` makes a newer cursor stale, too.
            let mut d = list.cursor(&token);
            assert_eq!(a.previous(&token), Ok(&4));
            assert_eq!(a.remove(&mut token), Ok(4));
            assert_stale(d.next(&token));

            // Staleness is reported before anything else.
            let empty = CircularList::<i32>::new();
            let mut e = empty.cursor(&token);
            let mut f = empty.cursor(&token);
            e.add(0, &mut token).unwrap();
            e.previous(&token).unwrap();
            e.remove(&mut token).unwrap();
            assert_stale(f.next(&token));
            assert_stale(f.remove(&mut token));
        })
    }

    #[test]
    fn cursor_add_at_front() {
        GhostToken::new(|mut token| {
            let list = CircularList::new();
            for value in 0..5 {
                list.cursor(&token).add(value, &mut token).unwrap();
            }
            assert_eq!(forward(&list, &token), vec![4, 3, 2, 1, 0]);
        })
    }

    #[test]
    fn cursor_random_ops() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        GhostToken::new(|mut token| {
            for _ in 0..50 {
                let list = CircularList::new();
                let mut cursor = list.cursor(&token);
                let mut model = Vec::new();
                let mut pos = 0;
                let mut last = None;
                for step in 0..200 {
                    match rng.gen_range(0..5) {
                        0 => {
                            cursor.add(step, &mut token).unwrap();
                            model.insert(pos, step);
                            pos += 1;
                            last = None;
                        }
                        1 => {
                            if pos < model.len() {
                                assert_eq!(cursor.next(&token), Ok(&model[pos]));
                                last = Some(pos);
                                pos += 1;
                            } else {
                                assert_eq!(cursor.next(&token), Err(Error::NoSuchElement));
                            }
                        }
                        2 => {
                            if pos > 0 {
                                pos -= 1;
                                assert_eq!(cursor.previous(&token), Ok(&model[pos]));
                                last = Some(pos);
                            } else {
                                assert_eq!(cursor.previous(&token), Err(Error::NoSuchElement));
                            }
                        }
                        3 => match last.take() {
                            Some(at) => {
                                assert_eq!(cursor.remove(&mut token), Ok(model.remove(at)));
                                if at < pos {
                                    pos -= 1;
                                }
                            }
                            None => {
                                assert_eq!(cursor.remove(&mut token), Err(Error::IllegalCursorState));
                            }
                        },
                        _ => match last {
                            Some(at) => {
                                let old = std::mem::replace(&mut model[at], -step);
                                assert_eq!(cursor.set(-step, &mut token), Ok(old));
                            }
                            None => {
                                assert_eq!(cursor.set(-step, &mut token), Err(Error::IllegalCursorState));
                            }
                        },
                    }
                    assert_eq!(cursor.next_index(&token), Ok(pos));
                    assert_eq!(cursor.has_next(&token), Ok(pos < model.len()));
                    assert_eq!(cursor.has_previous(&token), Ok(pos > 0));
                    assert_eq!(list.len(&token), model.len());
                }
                assert_eq!(Vec::from_iter(list.iter(&token).copied()), model);
            }
        })
    }
}
