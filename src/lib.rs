#![cfg_attr(docsrs, feature(doc_cfg))]
//! Row cursors with random positional access and typed column reads.
//!
//! The central piece is [`ExtendedCursor`], a decorator that tags every row of an
//! existing [`Cursor`] with one more column holding a constant value, e.g. the name of
//! the source a batch of rows was read from:
//!
//! ```rust
//! use cursorx::{Cursor, ExtendedCursor, MemoryCursor, Value};
//!
//! let rows = MemoryCursor::new(["name", "age"])
//!     .with_row([Value::from("Alice"), Value::from(30_i32)])?
//!     .with_row([Value::from("Bob"), Value::from(25_i32)])?;
//!
//! let mut cursor = ExtendedCursor::new(rows, "source", "import");
//!
//! while cursor.move_to_next() {
//!     assert_eq!(cursor.get_string(2)?, "import");
//! }
//! # Ok::<(), cursorx::Error>(())
//! ```

// Modules
pub use cursorx_core::{close, cursor, decode, error, logger, navigation, type_info, value};

// Types
pub use cursorx_core::{
    Cursor, Decode, Error, ExtendedCursor, LogSettings, MemoryCursor, Navigator, Result,
    TypeInfo, Value,
};

/// Convenience re-export of common traits.
pub mod prelude {
    pub use super::Cursor;
    pub use super::Decode;
}
