use std::fmt;
use std::fmt::Formatter;

use chrono::SecondsFormat;

use crate::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(
                f,
                "\"{}\"",
                s.replace('\\', r"\\")
                    .replace('"', r#"\""#)
                    .replace('\n', r"\n")
            ),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Base64(b) => write!(f, "b'{} bytes'", b.len()),
            Self::Struct(map) => {
                let joined = map
                    .iter()
                    .map(|(key, value)| format!(r#""{key}": {value}"#))
                    .collect::<Vec<_>>()
                    .join(", ");

                write!(f, "{{ {joined} }}")
            }
            Self::Array(array) => {
                let joined = array
                    .iter()
                    .map(|value| value.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");

                write!(f, "[{joined}]")
            }
            Self::DateTime(ts) => {
                write!(f, "t'{}'", ts.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Self::Null => write!(f, "null"),
        }
    }
}
