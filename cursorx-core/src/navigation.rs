use crate::cursor::after_last_position;
use crate::error::{Error, Result};

/// Position bookkeeping shared by cursor implementations.
///
/// A `Navigator` owns the current position and the closed flag. It does not know
/// how to reach a row; every move goes through the `on_move` callback handed to
/// [`move_to_position`](Navigator::move_to_position), which does the actual work.
#[derive(Debug)]
pub struct Navigator {
    position: i64,
    closed: bool,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub const BEFORE_FIRST: i64 = -1;

    pub fn new() -> Self {
        Self {
            position: Self::BEFORE_FIRST,
            closed: false,
        }
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    /// Move to `target` in a result of `count` rows.
    ///
    /// `on_move(old, new)` is always invoked, also for targets outside
    /// `0..count`, and its result is returned unchanged. On success the position
    /// becomes `target`; on failure it falls back to the nearest sentinel.
    pub fn move_to_position<F>(&mut self, count: usize, target: i64, on_move: F) -> bool
    where
        F: FnOnce(i64, i64) -> bool,
    {
        let old = self.position;
        let moved = on_move(old, target);

        self.position = if moved {
            target
        } else if target >= after_last_position(count) {
            after_last_position(count)
        } else {
            Self::BEFORE_FIRST
        };

        tracing::trace!(from = old, to = target, moved, position = self.position, "cursor moved");

        moved
    }

    /// Adopt the position the underlying cursor actually reached.
    ///
    /// Cursors that delegate their moves call this after
    /// [`move_to_position`](Self::move_to_position) so a failed move leaves both on the
    /// same sentinel, whichever one the underlying cursor picked.
    pub fn sync_to(&mut self, position: i64) {
        if position != self.position {
            tracing::trace!(from = self.position, to = position, "cursor position resynced");
            self.position = position;
        }
    }

    /// Returns the current row index, or [`Error::RowOutOfRange`] if the position
    /// is a sentinel.
    pub fn check_row(&self, count: usize) -> Result<usize> {
        usize::try_from(self.position)
            .ok()
            .filter(|row| *row < count)
            .ok_or(Error::RowOutOfRange {
                position: self.position,
                count,
            })
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn check_open(&self) -> Result<()> {
        if self.closed {
            Err(Error::CursorClosed)
        } else {
            Ok(())
        }
    }

    /// Mark the navigator closed.
    ///
    /// Returns `true` only for the call that actually closed it.
    pub fn close(&mut self) -> bool {
        !std::mem::replace(&mut self.closed, true)
    }
}
