use std::fmt::{self, Display, Formatter};

/// The storage class of a single column value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum TypeInfo {
    Null,
    Text,
    SmallInt,
    Integer,
    BigInt,
    Real,
    Double,
}

impl TypeInfo {
    pub fn name(&self) -> &'static str {
        match self {
            TypeInfo::Null => "NULL",
            TypeInfo::Text => "TEXT",
            TypeInfo::SmallInt => "SMALLINT",
            TypeInfo::Integer => "INTEGER",
            TypeInfo::BigInt => "BIGINT",
            TypeInfo::Real => "REAL",
            TypeInfo::Double => "DOUBLE",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, TypeInfo::Null)
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            TypeInfo::SmallInt | TypeInfo::Integer | TypeInfo::BigInt
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(self, TypeInfo::Real | TypeInfo::Double)
    }
}

impl Display for TypeInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
