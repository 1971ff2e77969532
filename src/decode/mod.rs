//! Conversions from wire values into native types.
//!
//! Every decoder is a pure function of its input. `Null` is never a valid
//! input for a plain type; wrap the target in `Option` to get `None` back
//! instead, which is how absent values are told apart from empty ones.

mod collection;
mod scalar;

use std::collections::BTreeMap;

use thiserror::Error;
use value::{Kind, Value};

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("expected {expected}, found {found}")]
    Unexpected { expected: Kind, found: Kind },

    #[error("invalid integer {0:?}")]
    InvalidInteger(String),
    #[error("invalid double {0:?}")]
    InvalidDouble(String),
    #[error("invalid boolean {0:?}")]
    InvalidBoolean(String),
    #[error("invalid timestamp {0:?}")]
    InvalidDateTime(String),

    #[error("field {field:?}, {source}")]
    Field {
        field: String,
        source: Box<DecodeError>,
    },

    /// The server sent an object class this client has no record shape for.
    #[error("unknown class {0:?}, cannot decode its snapshot")]
    UnknownClass(String),
}

impl DecodeError {
    pub fn unexpected(expected: Kind, found: &Value) -> Self {
        DecodeError::Unexpected {
            expected,
            found: found.kind(),
        }
    }

    /// Wraps self with the wire key of the field being decoded.
    pub fn in_field(self, field: impl Into<String>) -> Self {
        DecodeError::Field {
            field: field.into(),
            source: Box::new(self),
        }
    }
}

/// Conversion from one wire value into `Self`.
pub trait Decode: Sized {
    fn decode(value: &Value) -> Result<Self, DecodeError>;
}

impl Decode for Value {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        Ok(value.clone())
    }
}

/// Decodes a struct member for a record. Missing and `nil` members
/// become the type's default.
pub(crate) fn field<T: Decode + Default>(
    fields: &BTreeMap<String, Value>,
    key: &str,
) -> Result<T, DecodeError> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => T::decode(value).map_err(|err| err.in_field(key)),
    }
}

/// Borrows the members of a struct value.
pub(crate) fn expect_struct(value: &Value) -> Result<&BTreeMap<String, Value>, DecodeError> {
    value
        .as_struct()
        .ok_or_else(|| DecodeError::unexpected(Kind::STRUCT, value))
}

#[cfg(test)]
mod tests {
    use value::value;

    use super::*;

    #[test]
    fn field_defaults() {
        let value = value!({"name_label": "box1", "VCPUs_max": null});
        let fields = expect_struct(&value).unwrap();

        assert_eq!(field::<String>(fields, "name_label").unwrap(), "box1");
        assert_eq!(field::<String>(fields, "missing").unwrap(), "");
        assert_eq!(field::<i64>(fields, "VCPUs_max").unwrap(), 0);
    }

    #[test]
    fn field_error_names_the_key() {
        let value = value!({"VCPUs_max": "many"});
        let fields = expect_struct(&value).unwrap();

        let err = field::<i64>(fields, "VCPUs_max").unwrap_err();
        assert_eq!(err.to_string(), r#"field "VCPUs_max", invalid integer "many""#);
    }

    #[test]
    fn struct_expected() {
        let err = expect_struct(&value!(["a"])).unwrap_err();
        assert_eq!(err.to_string(), "expected struct, found array");
    }
}
