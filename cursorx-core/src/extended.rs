//! A cursor decorator that appends one constant-valued column.

use crate::close::close_quietly;
use crate::cursor::Cursor;
use crate::decode::Decode;
use crate::error::{Error, Result};
use crate::logger::LogSettings;
use crate::navigation::Navigator;
use crate::type_info::TypeInfo;
use crate::value::Value;

/// Wraps a cursor to add an additional column with the same value for all rows.
///
/// The rows, and the columns before the added one, are exactly those of the wrapped
/// cursor. The added column always sits at index `cursor.column_count()`; reads of
/// that index return the constant, every other index is forwarded to the wrapped
/// cursor as-is, including indices that are out of bounds.
///
/// ```rust
/// # use cursorx_core::{Cursor, ExtendedCursor, MemoryCursor, Value};
/// let rows = MemoryCursor::new(["name"]).with_row([Value::from("Alice")])?;
/// let mut cursor = ExtendedCursor::new(rows, "source", "import");
///
/// assert_eq!(cursor.column_names(), ["name", "source"]);
/// assert!(cursor.move_to_first());
/// assert_eq!(cursor.get_string(1)?, "import");
/// # Ok::<(), cursorx_core::Error>(())
/// ```
///
/// Closing the extended cursor closes the wrapped one. The wrapped cursor must not be
/// closed or moved behind the wrapper's back, which is why only shared access to it
/// is available through [`get_ref`](Self::get_ref).
#[derive(Debug)]
pub struct ExtendedCursor<C: Cursor> {
    cursor: C,
    column_name: String,
    value: Value,
    nav: Navigator,
    log_settings: LogSettings,
}

impl<C: Cursor> ExtendedCursor<C> {
    /// Extend `cursor` with a column named `column_name` holding `value` in every row.
    pub fn new(cursor: C, column_name: impl Into<String>, value: impl Into<Value>) -> Self {
        let column_name = column_name.into();
        let value = value.into();

        tracing::trace!(
            column = %column_name,
            kind = %value.type_info(),
            index = cursor.column_count(),
            "extending cursor"
        );

        Self {
            cursor,
            column_name,
            value,
            nav: Navigator::new(),
            log_settings: LogSettings::default(),
        }
    }

    /// Sets the logging behavior of this cursor.
    pub fn log_settings(mut self, settings: LogSettings) -> Self {
        self.log_settings = settings;
        self
    }

    pub fn extra_column_name(&self) -> &str {
        &self.column_name
    }

    pub fn extra_value(&self) -> &Value {
        &self.value
    }

    /// The index of the added column, equal to the wrapped cursor's column count.
    pub fn extra_column_index(&self) -> usize {
        self.cursor.column_count()
    }

    /// Returns a reference to the wrapped cursor.
    pub fn get_ref(&self) -> &C {
        &self.cursor
    }

    /// Decode the constant value as `T`.
    pub fn try_get_extra<T: Decode>(&self) -> Result<T> {
        self.read_extra(self.extra_column_index())
    }

    /// Close the wrapped cursor, then this one. Later calls do nothing.
    fn close_once(&mut self) {
        if self.nav.is_closed() {
            return;
        }

        close_quietly(&mut self.cursor, &self.log_settings);
        self.nav.close();

        tracing::debug!(column = %self.column_name, "closed extended cursor");
    }

    fn is_extra_column(&self, column: usize) -> bool {
        column == self.cursor.column_count()
    }

    fn read_extra<T: Decode>(&self, column: usize) -> Result<T> {
        self.nav.check_open()?;

        self.value.decode().map_err(|source| {
            log_at!(
                target: "cursorx::extended",
                self.log_settings.type_mismatch_level,
                column,
                name = %self.column_name,
                %source,
                "failed to read added column"
            );

            Error::ColumnDecode {
                index: column,
                source,
            }
        })
    }
}

impl<C: Cursor> Cursor for ExtendedCursor<C> {
    fn count(&self) -> usize {
        self.cursor.count()
    }

    fn column_names(&self) -> Vec<String> {
        let mut names = self.cursor.column_names();
        names.push(self.column_name.clone());
        names
    }

    fn column_count(&self) -> usize {
        self.cursor.column_count() + 1
    }

    fn get_string(&self, column: usize) -> Result<String> {
        if self.is_extra_column(column) {
            return self.read_extra(column);
        }

        self.cursor.get_string(column)
    }

    fn get_short(&self, column: usize) -> Result<i16> {
        if self.is_extra_column(column) {
            return self.read_extra(column);
        }

        self.cursor.get_short(column)
    }

    fn get_int(&self, column: usize) -> Result<i32> {
        if self.is_extra_column(column) {
            return self.read_extra(column);
        }

        self.cursor.get_int(column)
    }

    fn get_long(&self, column: usize) -> Result<i64> {
        if self.is_extra_column(column) {
            return self.read_extra(column);
        }

        self.cursor.get_long(column)
    }

    fn get_float(&self, column: usize) -> Result<f32> {
        if self.is_extra_column(column) {
            return self.read_extra(column);
        }

        self.cursor.get_float(column)
    }

    fn get_double(&self, column: usize) -> Result<f64> {
        if self.is_extra_column(column) {
            return self.read_extra(column);
        }

        self.cursor.get_double(column)
    }

    fn is_null(&self, column: usize) -> Result<bool> {
        if self.is_extra_column(column) {
            self.nav.check_open()?;
            return Ok(self.value.is_null());
        }

        self.cursor.is_null(column)
    }

    fn get_type(&self, column: usize) -> Result<TypeInfo> {
        if self.is_extra_column(column) {
            self.nav.check_open()?;
            return Ok(self.value.type_info());
        }

        self.cursor.get_type(column)
    }

    fn position(&self) -> i64 {
        self.nav.position()
    }

    fn move_to_position(&mut self, position: i64) -> bool {
        let count = self.cursor.count();
        let cursor = &mut self.cursor;

        let moved = self
            .nav
            .move_to_position(count, position, |_, new| cursor.move_to_position(new));

        // a failed move may leave the wrapped cursor on either sentinel
        self.nav.sync_to(self.cursor.position());

        moved
    }

    fn close(&mut self) -> Result<()> {
        self.close_once();
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.nav.is_closed()
    }
}

impl<C: Cursor> Drop for ExtendedCursor<C> {
    fn drop(&mut self) {
        self.close_once();
    }
}
