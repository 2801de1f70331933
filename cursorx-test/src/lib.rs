use std::cell::Cell;
use std::io;
use std::rc::Rc;

use cursorx::{Cursor, Error, MemoryCursor, Result, TypeInfo, Value};

pub fn setup_if_needed() {
    let _ = dotenvy::dotenv();
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The two-row `(name, age)` cursor most tests start from.
pub fn people() -> MemoryCursor {
    let mut cursor = MemoryCursor::new(["name", "age"]);

    for (name, age) in [("Alice", 30_i32), ("Bob", 25)] {
        cursor
            .add_row([Value::from(name), Value::from(age)])
            .expect("row width matches the column count");
    }

    cursor
}

/// Counts how often a [`TrackingCursor`] was closed, and can be shared with the test
/// after the cursor itself has been moved into a decorator.
#[derive(Clone, Debug, Default)]
pub struct CloseCounter(Rc<Cell<usize>>);

impl CloseCounter {
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

/// A cursor that delegates to an inner cursor, records every move and close, and can
/// be told to fail on close or to land after the last row when a move fails.
#[derive(Debug)]
pub struct TrackingCursor<C> {
    inner: C,
    closes: CloseCounter,
    fail_close: bool,
    park_after_last: bool,
    parked: Option<i64>,
    pub moves: Vec<i64>,
}

impl<C: Cursor> TrackingCursor<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            closes: CloseCounter::default(),
            fail_close: false,
            park_after_last: false,
            parked: None,
            moves: Vec::new(),
        }
    }

    /// Make every call to `close` return an error (after closing the inner cursor).
    pub fn failing_close(mut self) -> Self {
        self.fail_close = true;
        self
    }

    /// After a failed move, report the after-last position instead of the inner
    /// cursor's, whatever the target was.
    pub fn parking_after_last(mut self) -> Self {
        self.park_after_last = true;
        self
    }

    pub fn close_counter(&self) -> CloseCounter {
        self.closes.clone()
    }
}

impl<C: Cursor> Cursor for TrackingCursor<C> {
    fn count(&self) -> usize {
        self.inner.count()
    }

    fn column_names(&self) -> Vec<String> {
        self.inner.column_names()
    }

    fn get_string(&self, column: usize) -> Result<String> {
        self.inner.get_string(column)
    }

    fn get_short(&self, column: usize) -> Result<i16> {
        self.inner.get_short(column)
    }

    fn get_int(&self, column: usize) -> Result<i32> {
        self.inner.get_int(column)
    }

    fn get_long(&self, column: usize) -> Result<i64> {
        self.inner.get_long(column)
    }

    fn get_float(&self, column: usize) -> Result<f32> {
        self.inner.get_float(column)
    }

    fn get_double(&self, column: usize) -> Result<f64> {
        self.inner.get_double(column)
    }

    fn is_null(&self, column: usize) -> Result<bool> {
        self.inner.is_null(column)
    }

    fn get_type(&self, column: usize) -> Result<TypeInfo> {
        self.inner.get_type(column)
    }

    fn position(&self) -> i64 {
        self.parked.unwrap_or_else(|| self.inner.position())
    }

    fn move_to_position(&mut self, position: i64) -> bool {
        self.moves.push(position);

        let moved = self.inner.move_to_position(position);

        self.parked = (!moved && self.park_after_last)
            .then(|| i64::try_from(self.inner.count()).unwrap_or(i64::MAX));

        moved
    }

    fn close(&mut self) -> Result<()> {
        self.closes.0.set(self.closes.0.get() + 1);
        self.inner.close()?;

        if self.fail_close {
            return Err(Error::cursor(io::Error::new(
                io::ErrorKind::Other,
                "failed to release cursor",
            )));
        }

        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }
}
