use std::collections::HashMap;
use std::hash::Hash;

use indexmap::IndexSet;
use value::{Kind, Value};

use super::{Decode, DecodeError};

/// `nil` is the only way to say "absent", everything else must decode.
impl<T: Decode> Decode for Option<T> {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Null => Ok(None),
            value => T::decode(value).map(Some),
        }
    }
}

fn elements(value: &Value) -> Result<&[Value], DecodeError> {
    value
        .as_array()
        .ok_or_else(|| DecodeError::unexpected(Kind::ARRAY, value))
}

/// Ordered list, duplicates are kept.
impl<T: Decode> Decode for Vec<T> {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        elements(value)?.iter().map(T::decode).collect()
    }
}

/// Set in wire order, later duplicates collapse into the first one.
impl<T: Decode + Hash + Eq> Decode for IndexSet<T> {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        elements(value)?.iter().map(T::decode).collect()
    }
}

/// Struct members are keyed by strings on the wire, keys are decoded
/// through the key type's own decoder by wrapping them as strings again.
impl<K, V> Decode for HashMap<K, V>
where
    K: Decode + Hash + Eq,
    V: Decode,
{
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let members = value
            .as_struct()
            .ok_or_else(|| DecodeError::unexpected(Kind::STRUCT, value))?;

        members
            .iter()
            .map(|(key, value)| -> Result<(K, V), DecodeError> {
                let k = K::decode(&Value::String(key.clone()))?;
                let v = V::decode(value).map_err(|err| err.in_field(key.as_str()))?;
                Ok((k, v))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use value::value;

    use super::*;

    #[test]
    fn null_is_not_empty() {
        assert_eq!(Option::<Vec<String>>::decode(&Value::Null).unwrap(), None);
        assert_eq!(
            Option::<Vec<String>>::decode(&value!([])).unwrap(),
            Some(vec![])
        );

        assert_eq!(
            Option::<IndexSet<String>>::decode(&Value::Null).unwrap(),
            None
        );
        assert_eq!(
            Option::<IndexSet<String>>::decode(&value!([])).unwrap(),
            Some(IndexSet::new())
        );

        assert_eq!(
            Option::<HashMap<String, String>>::decode(&Value::Null).unwrap(),
            None
        );
        assert_eq!(
            Option::<HashMap<String, String>>::decode(&value!({})).unwrap(),
            Some(HashMap::new())
        );
    }

    #[test]
    fn set_keeps_order_and_collapses() {
        let set = IndexSet::<String>::decode(&value!(["b", "a", "b", "c"])).unwrap();
        assert_eq!(
            set.into_iter().collect::<Vec<_>>(),
            vec!["b".to_string(), "a".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn list_keeps_duplicates() {
        let list = Vec::<String>::decode(&value!(["x", "x"])).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn map_with_typed_keys() {
        let map = HashMap::<i64, f64>::decode(&value!({"0": 0.5, "1": "0.25"})).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map[&0], 0.5);
        assert_eq!(map[&1], 0.25);

        let err = HashMap::<i64, f64>::decode(&value!({"zero": 0.5})).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidInteger(_)));
    }

    #[test]
    fn nested_collections() {
        let map =
            HashMap::<i64, IndexSet<String>>::decode(&value!({"0": ["fpu", "sse"], "1": []}))
                .unwrap();
        assert_eq!(map[&0].len(), 2);
        assert!(map[&1].is_empty());
    }

    #[test]
    fn wrong_shape() {
        let err = Vec::<String>::decode(&value!({})).unwrap_err();
        assert_eq!(err.to_string(), "expected array, found struct");

        let err = HashMap::<String, i64>::decode(&value!({"k": true})).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"field "k", expected string or integer, found boolean"#
        );
    }
}
