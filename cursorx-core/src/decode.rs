//! Provides [`Decode`] for decoding values out of a [`Value`].

use crate::error::{BoxDynError, UnexpectedNullError};
use crate::value::Value;

/// A type that can be decoded from a [`Value`].
///
/// Decoding succeeds when the value's kind matches the requested type or can be
/// converted to it without loss:
///
/// * any integer kind decodes into any integer type it fits in;
/// * `f32` decodes only from `Real`; `f64` decodes from `Real` (widened) or `Double`;
/// * `String` decodes only from `Text`. Text is never parsed into numbers.
///
/// `Null` decodes into `None` for `Option<T>` and fails with [`UnexpectedNullError`]
/// for every other type.
pub trait Decode: Sized {
    fn decode(value: &Value) -> Result<Self, BoxDynError>;
}

impl<T> Decode for Option<T>
where
    T: Decode,
{
    fn decode(value: &Value) -> Result<Self, BoxDynError> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::decode(value)?))
        }
    }
}

impl Decode for String {
    fn decode(value: &Value) -> Result<Self, BoxDynError> {
        match value {
            Value::Text(text) => Ok(String::from(&**text)),
            Value::Null => Err(UnexpectedNullError.into()),
            other => other.unexpected(),
        }
    }
}

macro_rules! impl_decode_integer {
    ($($ty:ty),*) => {
        $(
            impl Decode for $ty {
                fn decode(value: &Value) -> Result<Self, BoxDynError> {
                    match value {
                        Value::Null => Err(UnexpectedNullError.into()),
                        other => other.try_integer(),
                    }
                }
            }
        )*
    };
}

impl_decode_integer!(i16, i32, i64);

impl Decode for f32 {
    fn decode(value: &Value) -> Result<Self, BoxDynError> {
        match value {
            Value::Real(r) => Ok(*r),
            Value::Null => Err(UnexpectedNullError.into()),
            other => other.unexpected(),
        }
    }
}

impl Decode for f64 {
    fn decode(value: &Value) -> Result<Self, BoxDynError> {
        match value {
            // Widening is safe
            Value::Real(r) => Ok(f64::from(*r)),
            Value::Double(d) => Ok(*d),
            Value::Null => Err(UnexpectedNullError.into()),
            other => other.unexpected(),
        }
    }
}
