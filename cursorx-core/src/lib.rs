//! Core of cursorx, the row cursor toolkit.
//!
//! ### Note: Semver Exempt API
//! The API of this crate is not meant for general use and does *not* follow Semantic Versioning.
//! The only crate that follows Semantic Versioning in the project is the `cursorx` crate itself.
#![warn(future_incompatible, rust_2018_idioms)]
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
pub mod logger;

pub mod error;

pub mod type_info;

pub mod value;

pub mod decode;

pub mod cursor;

pub mod navigation;

pub mod close;

pub mod memory;

pub mod extended;

pub use cursor::Cursor;
pub use decode::Decode;
pub use error::{Error, Result};
pub use extended::ExtendedCursor;
pub use logger::LogSettings;
pub use memory::MemoryCursor;
pub use navigation::Navigator;
pub use type_info::TypeInfo;
pub use value::Value;
