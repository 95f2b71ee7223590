//! This crate provides a circular doubly-linked list with a sentinel node, and
//! a bidirectional cursor that can mutate the list while traversing it.
//!
//! The [`CircularList`] allows inserting and removing elements at the cursor
//! position in constant time. In compromise, there is no random access: every
//! element is reached by walking a [`Cursor`].
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use circular_list::{CircularList, GhostToken};
//!
//! GhostToken::new(|mut token| {
//!     let list = CircularList::new();
//!
//!     let mut cursor = list.cursor(&token);
//!     cursor.add("a", &mut token).unwrap();
//!     cursor.add("b", &mut token).unwrap();
//!     cursor.add("c", &mut token).unwrap();
//!     assert_eq!(list.len(&token), 3);
//!
//!     let mut cursor = list.cursor(&token);
//!     cursor.next(&token).unwrap();
//!     cursor.next(&token).unwrap();
//!     assert_eq!(cursor.remove(&mut token), Ok("b"));
//!
//!     assert_eq!(Vec::from_iter(list.iter(&token)), vec![&"a", &"c"]);
//! });
//! ```
//!
//! # Memory Layout
//!
//! The nodes of a list live in an arena and link to each other by index:
//! ```text
//!          ┌──────────────────────────────────────────────────────────────┐
//!          ↓                                                              │
//!    ┌───────────┐           ╔═══════════╗                  ╔═══════════╗ │
//!    │   next    │ ────────→ ║   next    ║ ───→ ┄┄ ───────→ ║   next    ║─┘
//!    ├───────────┤           ╟───────────╢                  ╟───────────╢
//! ┌─ │   prev    │ ←──────── ║   prev    ║ ←─── ┄┄ ←─────── ║   prev    ║
//! │  ├───────────┤           ╟───────────╢                  ╟───────────╢
//! │  ┊   None    ┊           ║  Some(T)  ║                  ║  Some(T)  ║
//! │  └╌╌╌╌╌╌╌╌╌╌╌┘           ╚═══════════╝                  ╚═══════════╝
//! │   Sentinel (slot 0)         Element 0                    Element n-1 ↑
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//! Initially, the sentinel is the only node, of which the `next` and `prev`
//! links point to itself. The sentinel is never removed and never holds a
//! value. Slots of removed nodes are recycled by later insertions.
//!
//! # Cursors and Tokens
//!
//! The arena is wrapped in a [`GhostCell`], branded by a lifetime `'brand`
//! that is unique to a [`GhostToken`]. Any number of cursors may borrow the
//! same list at once. Operations that only read take `&GhostToken`, and
//! operations that change the list take `&mut GhostToken`, so the borrow
//! checker serializes them without locks or run-time borrow flags.
//!
//! A [`Cursor`] sits between two elements. [`next`] and [`previous`] move it
//! and return the element crossed, which then becomes the target of
//! [`remove`] and [`set`]. [`add`] inserts right before the cursor.
//!
//! # Fail-fast
//!
//! The list counts its structural changes (`add` and `remove`). Each cursor
//! remembers the count it last saw, and a cursor whose count disagrees with
//! the list's fails every operation with [`Error::StaleCursor`]. The cursor
//! that made a change stays valid; all others become stale and stay stale.
//!
//! ```
//! use circular_list::{CircularList, Error, GhostToken};
//!
//! GhostToken::new(|mut token| {
//!     let list = CircularList::from_iter([1, 2, 3]);
//!     let mut a = list.cursor(&token);
//!     let mut b = list.cursor(&token);
//!
//!     assert_eq!(a.next(&token), Ok(&1));
//!     assert_eq!(a.remove(&mut token), Ok(1));
//!
//!     assert!(matches!(b.next(&token), Err(Error::StaleCursor { .. })));
//!     assert_eq!(a.next(&token), Ok(&2));
//! });
//! ```
//!
//! [`GhostCell`]: ghost_cell::GhostCell
//! [`next`]: crate::Cursor::next
//! [`previous`]: crate::Cursor::previous
//! [`add`]: crate::Cursor::add
//! [`remove`]: crate::Cursor::remove
//! [`set`]: crate::Cursor::set

#[doc(inline)]
pub use contract::{ListCursor, SimpleList};
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use list::cursor::Cursor;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use list::CircularList;

pub use ghost_cell::GhostToken;

pub mod contract;
pub mod error;
pub mod list;
