use std::borrow::Cow;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use crate::Value;

impl Value {
    /// Converts self into a String representation, for places that need
    /// text no matter what the server sent (error descriptions, logs).
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        match self {
            Value::String(s) => Cow::Borrowed(s),
            Value::Double(f) => f.to_string().into(),
            Value::Integer(i) => i.to_string().into(),
            Value::Boolean(b) => if *b { "true" } else { "false" }.into(),
            Value::DateTime(ts) => timestamp_to_string(ts).into(),
            Value::Null => "".into(),
            _ => self.to_string().into(),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Double(f) => serializer.serialize_f64(*f),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::DateTime(ts) => serializer.serialize_str(&timestamp_to_string(ts)),
            Value::Base64(b) => serializer.serialize_bytes(b),
            Value::Struct(o) => serializer.collect_map(o),
            Value::Array(a) => serializer.collect_seq(a),
            Value::Null => serializer.serialize_none(),
        }
    }
}

fn timestamp_to_string(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
