use crate::error::{Error, Result};
use crate::type_info::TypeInfo;

/// A result set that can be walked row by row, with random positional access
/// and typed reads of the columns of the current row.
///
/// Positions are zero-based. A cursor starts at `-1` (before the first row); a
/// position equal to [`count`](Cursor::count) is after the last row. Both are
/// valid places to move to, but reading a column there is an error.
///
/// This trait is object safe; `Box<dyn Cursor>` implements it too, so decorators
/// can wrap any cursor without knowing its concrete type.
pub trait Cursor {
    /// Returns the number of rows.
    fn count(&self) -> usize;

    /// Returns the names of all columns, in order.
    ///
    /// A new `Vec` is returned on every call; modifying it has no effect on the cursor.
    fn column_names(&self) -> Vec<String>;

    /// Returns the number of columns.
    fn column_count(&self) -> usize {
        self.column_names().len()
    }

    /// Returns the name of the column at `column`, if there is one.
    fn column_name(&self, column: usize) -> Option<String> {
        self.column_names().into_iter().nth(column)
    }

    /// Returns the index of the first column named `name`.
    fn column_index(&self, name: &str) -> Option<usize> {
        self.column_names().iter().position(|column| column == name)
    }

    /// Returns the index of the first column named `name`, or
    /// [`Error::ColumnNotFound`] if there is none.
    fn column_index_or_err(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_owned()))
    }

    fn get_string(&self, column: usize) -> Result<String>;

    fn get_short(&self, column: usize) -> Result<i16>;

    fn get_int(&self, column: usize) -> Result<i32>;

    fn get_long(&self, column: usize) -> Result<i64>;

    fn get_float(&self, column: usize) -> Result<f32>;

    fn get_double(&self, column: usize) -> Result<f64>;

    /// Returns `true` if the value at `column` in the current row is `NULL`.
    fn is_null(&self, column: usize) -> Result<bool>;

    /// Returns the storage class of the value at `column` in the current row.
    fn get_type(&self, column: usize) -> Result<TypeInfo>;

    /// Returns the current position.
    fn position(&self) -> i64;

    /// Move to an absolute position.
    ///
    /// Returns `false` if `position` does not name a row; the cursor is then left
    /// before the first row or after the last one.
    fn move_to_position(&mut self, position: i64) -> bool;

    /// Release the resources held by this cursor.
    ///
    /// Closing an already closed cursor is a no-op.
    fn close(&mut self) -> Result<()>;

    fn is_closed(&self) -> bool;

    /// Move by `offset` rows relative to the current position.
    fn move_by(&mut self, offset: i64) -> bool {
        let target = self.position().saturating_add(offset);
        self.move_to_position(target)
    }

    fn move_to_first(&mut self) -> bool {
        self.move_to_position(0)
    }

    fn move_to_last(&mut self) -> bool {
        self.move_to_position(last_position(self.count()))
    }

    fn move_to_next(&mut self) -> bool {
        self.move_by(1)
    }

    fn move_to_previous(&mut self) -> bool {
        self.move_by(-1)
    }

    fn is_first(&self) -> bool {
        self.position() == 0 && self.count() != 0
    }

    fn is_last(&self) -> bool {
        let count = self.count();
        count != 0 && self.position() == last_position(count)
    }

    fn is_before_first(&self) -> bool {
        self.count() == 0 || self.position() == -1
    }

    fn is_after_last(&self) -> bool {
        let count = self.count();
        count == 0 || self.position() == after_last_position(count)
    }
}

/// The position one past the last row.
pub(crate) fn after_last_position(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

fn last_position(count: usize) -> i64 {
    after_last_position(count) - 1
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    fn count(&self) -> usize {
        (**self).count()
    }

    fn column_names(&self) -> Vec<String> {
        (**self).column_names()
    }

    fn column_count(&self) -> usize {
        (**self).column_count()
    }

    fn get_string(&self, column: usize) -> Result<String> {
        (**self).get_string(column)
    }

    fn get_short(&self, column: usize) -> Result<i16> {
        (**self).get_short(column)
    }

    fn get_int(&self, column: usize) -> Result<i32> {
        (**self).get_int(column)
    }

    fn get_long(&self, column: usize) -> Result<i64> {
        (**self).get_long(column)
    }

    fn get_float(&self, column: usize) -> Result<f32> {
        (**self).get_float(column)
    }

    fn get_double(&self, column: usize) -> Result<f64> {
        (**self).get_double(column)
    }

    fn is_null(&self, column: usize) -> Result<bool> {
        (**self).is_null(column)
    }

    fn get_type(&self, column: usize) -> Result<TypeInfo> {
        (**self).get_type(column)
    }

    fn position(&self) -> i64 {
        (**self).position()
    }

    fn move_to_position(&mut self, position: i64) -> bool {
        (**self).move_to_position(position)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }

    fn is_closed(&self) -> bool {
        (**self).is_closed()
    }
}
