//! The generic sequential-container contract.
//!
//! Code written against these traits, such as the `expt` driver, reaches a
//! list only through its cursors and never touches the ring directly.

use ghost_cell::GhostToken;

use crate::error::Result;
use crate::list::cursor::Cursor;
use crate::list::CircularList;

/// A bidirectional, mutation-capable cursor over a list.
///
/// See [`Cursor`] for the semantics of each operation.
pub trait ListCursor<'brand> {
    type Item;

    fn has_next(&self, token: &GhostToken<'brand>) -> Result<bool>;

    fn has_previous(&self, token: &GhostToken<'brand>) -> Result<bool>;

    fn next<'t>(&mut self, token: &'t GhostToken<'brand>) -> Result<&'t Self::Item>
    where
        Self: 't;

    fn previous<'t>(&mut self, token: &'t GhostToken<'brand>) -> Result<&'t Self::Item>
    where
        Self: 't;

    fn next_index(&self, token: &GhostToken<'brand>) -> Result<usize>;

    fn previous_index(&self, token: &GhostToken<'brand>) -> Result<Option<usize>>;

    fn add(&mut self, value: Self::Item, token: &mut GhostToken<'brand>) -> Result<()>;

    fn remove(&mut self, token: &mut GhostToken<'brand>) -> Result<Self::Item>;

    fn set(&mut self, value: Self::Item, token: &mut GhostToken<'brand>) -> Result<Self::Item>;
}

/// A list whose contents are reached through cursors.
pub trait SimpleList<'brand> {
    type Item;

    type Cursor<'a>: ListCursor<'brand, Item = Self::Item>
    where
        Self: 'a;

    /// Provides a cursor positioned before the first element.
    fn list_cursor<'a>(&'a self, token: &GhostToken<'brand>) -> Self::Cursor<'a>;

    fn len(&self, token: &GhostToken<'brand>) -> usize;

    fn is_empty(&self, token: &GhostToken<'brand>) -> bool {
        self.len(token) == 0
    }
}

impl<'a, 'brand, T> ListCursor<'brand> for Cursor<'a, 'brand, T> {
    type Item = T;

    fn has_next(&self, token: &GhostToken<'brand>) -> Result<bool> {
        Cursor::has_next(self, token)
    }

    fn has_previous(&self, token: &GhostToken<'brand>) -> Result<bool> {
        Cursor::has_previous(self, token)
    }

    fn next<'t>(&mut self, token: &'t GhostToken<'brand>) -> Result<&'t T>
    where
        Self: 't,
    {
        Cursor::next(self, token)
    }

    fn previous<'t>(&mut self, token: &'t GhostToken<'brand>) -> Result<&'t T>
    where
        Self: 't,
    {
        Cursor::previous(self, token)
    }

    fn next_index(&self, token: &GhostToken<'brand>) -> Result<usize> {
        Cursor::next_index(self, token)
    }

    fn previous_index(&self, token: &GhostToken<'brand>) -> Result<Option<usize>> {
        Cursor::previous_index(self, token)
    }

    fn add(&mut self, value: T, token: &mut GhostToken<'brand>) -> Result<()> {
        Cursor::add(self, value, token)
    }

    fn remove(&mut self, token: &mut GhostToken<'brand>) -> Result<T> {
        Cursor::remove(self, token)
    }

    fn set(&mut self, value: T, token: &mut GhostToken<'brand>) -> Result<T> {
        Cursor::set(self, value, token)
    }
}

impl<'brand, T> SimpleList<'brand> for CircularList<'brand, T> {
    type Item = T;

    type Cursor<'a> = Cursor<'a, 'brand, T>
    where
        Self: 'a;

    fn list_cursor<'a>(&'a self, token: &GhostToken<'brand>) -> Cursor<'a, 'brand, T> {
        self.cursor(token)
    }

    fn len(&self, token: &GhostToken<'brand>) -> usize {
        CircularList::len(self, token)
    }
}
