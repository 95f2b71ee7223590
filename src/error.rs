use snafu::prelude::*;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by cursor operations.
///
/// All of them are contract violations on the caller's side; none is
/// recovered from inside the list.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Another cursor changed the ring since this cursor last looked at it.
    ///
    /// A stale cursor stays stale; there is no way to re-synchronize it.
    #[snafu(display("stale cursor: observed change {observed} but list is at {current}"))]
    StaleCursor { observed: u64, current: u64 },

    #[snafu(display("no such element"))]
    NoSuchElement,

    /// `remove` or `set` was called with no element to target, i.e. before any
    /// `next`/`previous`, or right after `add` or `remove`.
    #[snafu(display("illegal cursor state: no element to update"))]
    IllegalCursorState,
}

impl Error {
    pub fn is_stale(&self) -> bool {
        matches!(self, Error::StaleCursor { .. })
    }
}
