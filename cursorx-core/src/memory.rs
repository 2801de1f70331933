//! An in-memory [`Cursor`] over owned rows.

use crate::cursor::Cursor;
use crate::decode::Decode;
use crate::error::{Error, Result};
use crate::navigation::Navigator;
use crate::type_info::TypeInfo;
use crate::value::Value;

/// A cursor over rows that are held in memory.
///
/// ```rust
/// # use cursorx_core::{Cursor, MemoryCursor, Value};
/// let mut cursor = MemoryCursor::new(["name", "age"]);
/// cursor.add_row([Value::from("Alice"), Value::from(30_i32)])?;
///
/// assert!(cursor.move_to_first());
/// assert_eq!(cursor.get_string(0)?, "Alice");
/// # Ok::<(), cursorx_core::Error>(())
/// ```
#[derive(Debug)]
pub struct MemoryCursor {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
    nav: Navigator,
}

impl MemoryCursor {
    pub fn new<I>(columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            nav: Navigator::new(),
        }
    }

    /// Append a row. It must have exactly one value per column.
    pub fn add_row<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = Value>,
    {
        let row: Vec<Value> = values.into_iter().collect();

        if row.len() != self.columns.len() {
            return Err(Error::RowWidth {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }

        self.rows.push(row);
        Ok(())
    }

    /// Builder-style [`add_row`](Self::add_row).
    pub fn with_row<I>(mut self, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = Value>,
    {
        self.add_row(values)?;
        Ok(self)
    }

    /// Returns the value at `column` in the current row.
    pub fn value(&self, column: usize) -> Result<&Value> {
        self.nav.check_open()?;

        if column >= self.columns.len() {
            return Err(Error::ColumnIndexOutOfBounds {
                index: column,
                len: self.columns.len(),
            });
        }

        let row = self.nav.check_row(self.rows.len())?;

        Ok(&self.rows[row][column])
    }

    /// Decode the value at `column` in the current row as `T`.
    pub fn try_get<T: Decode>(&self, column: usize) -> Result<T> {
        self.value(column)?
            .decode()
            .map_err(|source| Error::ColumnDecode {
                index: column,
                source,
            })
    }
}

impl Cursor for MemoryCursor {
    fn count(&self) -> usize {
        self.rows.len()
    }

    fn column_names(&self) -> Vec<String> {
        self.columns.clone()
    }

    fn column_count(&self) -> usize {
        self.columns.len()
    }

    fn get_string(&self, column: usize) -> Result<String> {
        self.try_get(column)
    }

    fn get_short(&self, column: usize) -> Result<i16> {
        self.try_get(column)
    }

    fn get_int(&self, column: usize) -> Result<i32> {
        self.try_get(column)
    }

    fn get_long(&self, column: usize) -> Result<i64> {
        self.try_get(column)
    }

    fn get_float(&self, column: usize) -> Result<f32> {
        self.try_get(column)
    }

    fn get_double(&self, column: usize) -> Result<f64> {
        self.try_get(column)
    }

    fn is_null(&self, column: usize) -> Result<bool> {
        Ok(self.value(column)?.is_null())
    }

    fn get_type(&self, column: usize) -> Result<TypeInfo> {
        Ok(self.value(column)?.type_info())
    }

    fn position(&self) -> i64 {
        self.nav.position()
    }

    fn move_to_position(&mut self, position: i64) -> bool {
        let count = self.rows.len();
        let is_row = !self.nav.is_closed()
            && usize::try_from(position).map_or(false, |row| row < count);

        self.nav.move_to_position(count, position, |_, _| is_row)
    }

    fn close(&mut self) -> Result<()> {
        if self.nav.close() {
            self.rows = Vec::new();
        }

        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.nav.is_closed()
    }
}
