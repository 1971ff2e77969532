use chrono::{DateTime, Utc};
use value::{Kind, Value};

use super::{Decode, DecodeError};

impl Decode for String {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(DecodeError::unexpected(Kind::STRING, other)),
        }
    }
}

/// 64 bit integers travel as decimal strings, since `<i4>` is too narrow
/// for memory sizes and counters.
impl Decode for i64 {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Integer(i) => Ok(*i),
            Value::String(s) => s
                .trim()
                .parse()
                .map_err(|_| DecodeError::InvalidInteger(s.clone())),
            other => Err(DecodeError::unexpected(Kind::STRING_OR_INTEGER, other)),
        }
    }
}

impl Decode for f64 {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Double(f) => Ok(*f),
            Value::Integer(i) => Ok(*i as f64),
            Value::String(s) => s
                .trim()
                .parse()
                .map_err(|_| DecodeError::InvalidDouble(s.clone())),
            other => Err(DecodeError::unexpected(Kind::STRING_OR_NUMERIC, other)),
        }
    }
}

impl Decode for bool {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Boolean(b) => Ok(*b),
            Value::String(s) => match s.trim() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(DecodeError::InvalidBoolean(s.clone())),
            },
            other => Err(DecodeError::unexpected(Kind::STRING_OR_BOOLEAN, other)),
        }
    }
}

/// The native `dateTime.iso8601` form is expected. Some server versions
/// send a float of seconds since the Unix epoch as a string instead; that
/// form is accepted with millisecond precision.
// TODO: check whether current xapi releases still send the float form in
// event timestamps, and drop the fallback once they don't.
impl Decode for DateTime<Utc> {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::DateTime(ts) => Ok(*ts),
            Value::String(s) => {
                let seconds = s
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| DecodeError::InvalidDateTime(s.clone()))?;

                from_epoch_seconds(seconds).ok_or_else(|| DecodeError::InvalidDateTime(s.clone()))
            }
            Value::Double(seconds) => from_epoch_seconds(*seconds)
                .ok_or_else(|| DecodeError::InvalidDateTime(seconds.to_string())),
            other => Err(DecodeError::unexpected(Kind::STRING_OR_DATETIME, other)),
        }
    }
}

fn from_epoch_seconds(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }

    DateTime::from_timestamp_millis((seconds * 1000.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use value::value;

    use super::*;

    #[test]
    fn strings() {
        assert_eq!(String::decode(&value!("box1")).unwrap(), "box1");
        assert!(String::decode(&value!(1)).is_err());
        assert!(String::decode(&Value::Null).is_err());
    }

    #[test]
    fn integers() {
        assert_eq!(i64::decode(&value!("4294967296")).unwrap(), 4294967296);
        assert_eq!(i64::decode(&value!(" -3 ")).unwrap(), -3);
        assert_eq!(i64::decode(&value!(12)).unwrap(), 12);

        let err = i64::decode(&value!("1.5")).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidInteger(s) if s == "1.5"));
        let err = i64::decode(&value!(true)).unwrap_err();
        assert_eq!(err.to_string(), "expected string or integer, found boolean");
    }

    #[test]
    fn doubles() {
        assert_eq!(f64::decode(&value!(0.25)).unwrap(), 0.25);
        assert_eq!(f64::decode(&value!(2)).unwrap(), 2.0);
        assert_eq!(f64::decode(&value!("1e3")).unwrap(), 1000.0);
        assert!(f64::decode(&value!("fast")).is_err());
    }

    #[test]
    fn booleans() {
        assert!(bool::decode(&value!(true)).unwrap());
        assert!(bool::decode(&value!("true")).unwrap());
        assert!(!bool::decode(&value!("false")).unwrap());
        assert!(bool::decode(&value!("yes")).is_err());
    }

    #[test]
    fn native_timestamp() {
        let ts = Utc.with_ymd_and_hms(2013, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(DateTime::<Utc>::decode(&Value::DateTime(ts)).unwrap(), ts);
    }

    #[test]
    fn epoch_seconds_timestamp() {
        let want = Utc.timestamp_millis_opt(1357000000123).unwrap();
        assert_eq!(
            DateTime::<Utc>::decode(&value!("1357000000.123")).unwrap(),
            want
        );
        assert_eq!(
            DateTime::<Utc>::decode(&value!("1357000000")).unwrap(),
            Utc.timestamp_opt(1357000000, 0).unwrap()
        );

        let err = DateTime::<Utc>::decode(&value!("20130101T00:00:00Z")).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidDateTime(_)));
        assert!(DateTime::<Utc>::decode(&value!("NaN")).is_err());
    }

    #[test]
    fn nil_is_absent() {
        assert_eq!(Option::<String>::decode(&Value::Null).unwrap(), None);
        assert_eq!(Option::<i64>::decode(&Value::Null).unwrap(), None);
        assert_eq!(Option::<f64>::decode(&Value::Null).unwrap(), None);
        assert_eq!(Option::<bool>::decode(&Value::Null).unwrap(), None);
        assert_eq!(Option::<DateTime<Utc>>::decode(&Value::Null).unwrap(), None);

        assert_eq!(
            Option::<String>::decode(&value!("")).unwrap(),
            Some(String::new())
        );
        assert_eq!(Option::<i64>::decode(&value!("0")).unwrap(), Some(0));
    }

    #[test]
    fn distinct_inputs_stay_distinct() {
        let a = i64::decode(&value!("10")).unwrap();
        let b = i64::decode(&value!("11")).unwrap();
        assert_ne!(a, b);

        let a = String::decode(&value!("OpaqueRef:a")).unwrap();
        let b = String::decode(&value!("OpaqueRef:A")).unwrap();
        assert_ne!(a, b);
    }
}
