//! Types for working with errors produced by cursors.

use std::any::type_name;
use std::error::Error as StdError;
use std::result::Result as StdResult;

use crate::type_info::TypeInfo;

/// A specialized `Result` type for cursorx.
pub type Result<T, E = Error> = StdResult<T, E>;

// Convenience type alias for usage within cursorx.
pub type BoxDynError = Box<dyn StdError + 'static + Send + Sync>;

/// An unexpected `NULL` was encountered during decoding.
///
/// Returned from a typed read if the stored value is `NULL`
/// and you are not decoding into an `Option`.
#[derive(thiserror::Error, Debug)]
#[error("unexpected null; try decoding as an `Option`")]
pub struct UnexpectedNullError;

/// Represents all the ways a method can fail within cursorx.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Column index was out of bounds.
    #[error("column index out of bounds: the len is {len}, but the index is {index}")]
    ColumnIndexOutOfBounds { index: usize, len: usize },

    /// No column found for the given name.
    #[error("no column found for name: {0}")]
    ColumnNotFound(String),

    /// Error occurred while decoding a value from a specific column.
    ///
    /// This is the error a typed read produces when the requested Rust type
    /// cannot represent the stored value.
    #[error("error occurred while decoding column {index}: {source}")]
    ColumnDecode {
        index: usize,

        #[source]
        source: BoxDynError,
    },

    /// A column was read while the cursor was positioned before the first row
    /// or after the last one.
    #[error("cursor is not positioned on a row: the count is {count}, but the position is {position}")]
    RowOutOfRange { position: i64, count: usize },

    /// A row with the wrong number of values was added to a cursor.
    #[error("row has {actual} values, but the cursor has {expected} columns")]
    RowWidth { expected: usize, actual: usize },

    /// The cursor was used after [`Cursor::close`](crate::cursor::Cursor::close).
    #[error("attempted to use a closed cursor")]
    CursorClosed,

    /// Error returned from a cursor implementation outside of this crate.
    #[error("error returned from cursor: {0}")]
    Cursor(#[source] BoxDynError),
}

impl Error {
    /// Returns `true` if this error came from a typed read whose Rust type does not
    /// match the stored value.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::ColumnDecode { .. })
    }

    #[inline]
    pub fn cursor(err: impl StdError + Send + Sync + 'static) -> Self {
        Error::Cursor(err.into())
    }
}

pub(crate) fn mismatched_types<T>(ty: &TypeInfo) -> BoxDynError {
    format!(
        "mismatched types; Rust type `{}` is not compatible with value of type `{}`",
        type_name::<T>(),
        ty.name()
    )
    .into()
}
