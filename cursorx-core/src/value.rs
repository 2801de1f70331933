use std::sync::Arc;

use crate::decode::Decode;
use crate::error::BoxDynError;
use crate::type_info::TypeInfo;

/// A single, owned column value.
///
/// This is a closed set: one case per scalar kind a cursor can hand out through
/// its typed reads. Values are cheap to clone; text is reference counted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Value {
    Null,
    Text(Arc<str>),
    SmallInt(i16),
    Integer(i32),
    BigInt(i64),
    Real(f32),
    Double(f64),
}

impl Value {
    pub fn type_info(&self) -> TypeInfo {
        match self {
            Value::Null => TypeInfo::Null,
            Value::Text(_) => TypeInfo::Text,
            Value::SmallInt(_) => TypeInfo::SmallInt,
            Value::Integer(_) => TypeInfo::Integer,
            Value::BigInt(_) => TypeInfo::BigInt,
            Value::Real(_) => TypeInfo::Real,
            Value::Double(_) => TypeInfo::Double,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Decode this value as `T`.
    ///
    /// See [`Decode`] for which conversions are allowed.
    #[inline]
    pub fn decode<T: Decode>(&self) -> Result<T, BoxDynError> {
        T::decode(self)
    }

    pub(crate) fn unexpected<T>(&self) -> Result<T, BoxDynError> {
        Err(crate::error::mismatched_types::<T>(&self.type_info()))
    }

    pub(crate) fn try_integer<T>(&self) -> Result<T, BoxDynError>
    where
        T: TryFrom<i16> + TryFrom<i32> + TryFrom<i64>,
        BoxDynError: From<<T as TryFrom<i16>>::Error>,
        BoxDynError: From<<T as TryFrom<i32>>::Error>,
        BoxDynError: From<<T as TryFrom<i64>>::Error>,
    {
        Ok(match self {
            Value::SmallInt(i) => (*i).try_into()?,
            Value::Integer(i) => (*i).try_into()?,
            Value::BigInt(i) => (*i).try_into()?,
            _ => return self.unexpected(),
        })
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(value: Arc<str>) -> Self {
        Value::Text(value)
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    };
}

impl_from_scalar! {
    i16 => SmallInt,
    i32 => Integer,
    i64 => BigInt,
    f32 => Real,
    f64 => Double,
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
