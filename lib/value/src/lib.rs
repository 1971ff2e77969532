mod convert;
mod display;
mod kind;
mod serde;

use std::collections::BTreeMap;

use bytes::Bytes;
use chrono::{DateTime, Utc};
pub use kind::Kind;

/// An untyped value as it travels over the XML-RPC wire.
///
/// Nothing about the expected shape is known at this level; typed decoders
/// interpret a `Value` according to the call that produced it.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// `<string>` or untyped text content
    String(String),

    /// `<i4>`, `<int>` or `<i8>`
    Integer(i64),

    /// `<double>`
    Double(f64),

    /// `<boolean>`
    Boolean(bool),

    /// `<dateTime.iso8601>`, always normalized to UTC
    DateTime(DateTime<Utc>),

    /// `<base64>`, already decoded
    Base64(Bytes),

    /// `<array>`
    Array(Vec<Value>),

    /// `<struct>`
    Struct(BTreeMap<String, Value>),

    /// `<nil/>`
    Null,
}

impl Value {
    #[inline]
    pub fn structure() -> Self {
        Self::Struct(BTreeMap::new())
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the member named `key` if self is a `Value::Struct`.
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_struct().and_then(|map| map.get(key))
    }

    /// Inserts a member, turning `Value::Null` into an empty struct first.
    /// Returns the previous member, or `None` if self is not a struct.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Self>) -> Option<Self> {
        if self.is_null() {
            *self = Self::structure();
        }

        match self {
            Value::Struct(map) => map.insert(key.into(), value.into()),
            _ => None,
        }
    }
}

/// Builds a [`Value`] from a JSON-like literal.
///
/// Array elements and struct members must be single token trees: a literal,
/// an identifier, a nested `[...]` or `{...}`, or a parenthesized expression.
/// Struct keys are literals.
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    ({ $($key:literal : $member:tt),* $(,)? }) => {{
        #[allow(unused_mut)]
        let mut members = ::std::collections::BTreeMap::<String, $crate::Value>::new();
        $(
            let _ = members.insert(String::from($key), $crate::value!($member));
        )*
        $crate::Value::Struct(members)
    }};

    // numbers, strings, timestamps and anything else with a `From` impl
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
