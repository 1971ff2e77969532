use std::fmt::{Display, Formatter};
use std::ops::BitOr;

use super::Value;

/// A set of wire value shapes, used to describe what a decoder expected
/// and what it found instead.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Kind(u16);

impl BitOr for Kind {
    type Output = Kind;

    fn bitor(self, rhs: Self) -> Self::Output {
        Kind(self.0 | rhs.0)
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if *self == Kind::ANY {
            return f.write_str("any");
        }

        let mut kinds = vec![];

        if self.contains(Kind::STRING) {
            kinds.push("string");
        }

        if self.contains(Kind::INTEGER) {
            kinds.push("integer")
        }

        if self.contains(Kind::DOUBLE) {
            kinds.push("double");
        }

        if self.contains(Kind::BOOLEAN) {
            kinds.push("boolean");
        }

        if self.contains(Kind::DATETIME) {
            kinds.push("datetime");
        }

        if self.contains(Kind::BASE64) {
            kinds.push("base64");
        }

        if self.contains(Kind::ARRAY) {
            kinds.push("array");
        }

        if self.contains(Kind::STRUCT) {
            kinds.push("struct");
        }

        if self.contains(Kind::NULL) {
            kinds.push("null")
        }

        f.write_str(&kinds.join(" or "))
    }
}

impl Kind {
    pub const STRING: Kind = Kind(1 << 1);
    pub const INTEGER: Kind = Kind(1 << 2);
    pub const DOUBLE: Kind = Kind(1 << 3);
    pub const BOOLEAN: Kind = Kind(1 << 4);
    pub const DATETIME: Kind = Kind(1 << 5);
    pub const BASE64: Kind = Kind(1 << 6);
    pub const ARRAY: Kind = Kind(1 << 7);
    pub const STRUCT: Kind = Kind(1 << 8);
    pub const NULL: Kind = Kind(1 << 9);

    pub const NUMERIC: Kind = Kind(1 << 2 | 1 << 3);
    pub const STRING_OR_INTEGER: Kind = Kind(1 << 1 | 1 << 2);
    pub const STRING_OR_NUMERIC: Kind = Kind(1 << 1 | 1 << 2 | 1 << 3);
    pub const STRING_OR_BOOLEAN: Kind = Kind(1 << 1 | 1 << 4);
    pub const STRING_OR_DATETIME: Kind = Kind(1 << 1 | 1 << 5);

    pub const ANY: Kind =
        Kind(1 << 1 | 1 << 2 | 1 << 3 | 1 << 4 | 1 << 5 | 1 << 6 | 1 << 7 | 1 << 8 | 1 << 9);

    #[inline]
    pub const fn or(self, other: Kind) -> Kind {
        Kind(self.0 | other.0)
    }

    #[inline]
    pub fn contains(&self, other: Kind) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn intersects(&self, other: Kind) -> bool {
        self.0 & other.0 > 0
    }
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::String(_) => Kind::STRING,
            Value::Integer(_) => Kind::INTEGER,
            Value::Double(_) => Kind::DOUBLE,
            Value::Boolean(_) => Kind::BOOLEAN,
            Value::DateTime(_) => Kind::DATETIME,
            Value::Base64(_) => Kind::BASE64,
            Value::Array(_) => Kind::ARRAY,
            Value::Struct(_) => Kind::STRUCT,
            Value::Null => Kind::NULL,
        }
    }
}
