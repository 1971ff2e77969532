use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Serialize, Serializer};
use value::{Kind, Value};

use crate::decode::{Decode, DecodeError};
use crate::types::ApiObject;

/// The handle the server uses for "no object".
pub const NULL_HANDLE: &str = "OpaqueRef:NULL";

/// An object class known to the server.
pub trait Class: 'static {
    /// Class name as used in method names and event payloads, e.g. `VM`.
    const NAME: &'static str;

    const OBJECT: ApiObject;

    /// Field set the server returns for `<class>.get_record`.
    type Record: Decode + Default + Clone + Debug + PartialEq;
}

/// An opaque server side handle to an object of class `T`.
///
/// The handle text is never interpreted. Two references are equal when
/// their handles are byte for byte equal.
pub struct Ref<T: Class> {
    handle: String,
    _class: PhantomData<fn() -> T>,
}

impl<T: Class> Ref<T> {
    pub fn new(handle: impl Into<String>) -> Self {
        Ref {
            handle: handle.into(),
            _class: PhantomData,
        }
    }

    /// The reference to no object.
    pub fn null() -> Self {
        Self::new(NULL_HANDLE)
    }

    #[inline]
    pub fn handle(&self) -> &str {
        &self.handle
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.handle == NULL_HANDLE
    }

    pub fn into_handle(self) -> String {
        self.handle
    }
}

impl<T: Class> Default for Ref<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: Class> Clone for Ref<T> {
    fn clone(&self) -> Self {
        Self::new(self.handle.clone())
    }
}

impl<T: Class> PartialEq for Ref<T> {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl<T: Class> Eq for Ref<T> {}

impl<T: Class> Hash for Ref<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.handle.hash(state)
    }
}

impl<T: Class> Debug for Ref<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ref<{}>({})", T::NAME, self.handle)
    }
}

impl<T: Class> Display for Ref<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.handle)
    }
}

impl<T: Class> Serialize for Ref<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.handle)
    }
}

impl<T: Class> Decode for Ref<T> {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::String(handle) => Ok(Self::new(handle.clone())),
            other => Err(DecodeError::unexpected(Kind::STRING, other)),
        }
    }
}

impl<T: Class> From<&Ref<T>> for Value {
    fn from(r: &Ref<T>) -> Self {
        Value::String(r.handle.clone())
    }
}

impl<T: Class> From<Ref<T>> for Value {
    fn from(r: Ref<T>) -> Self {
        Value::String(r.handle)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use value::value;

    use super::*;
    use crate::types::{Sr, Vm};

    #[test]
    fn decode_keeps_handle() {
        let r = Ref::<Vm>::decode(&value!("OpaqueRef:abc")).unwrap();
        assert_eq!(r.handle(), "OpaqueRef:abc");
        assert!(!r.is_null());
        assert_eq!(format!("{r:?}"), "Ref<VM>(OpaqueRef:abc)");

        assert!(Ref::<Vm>::decode(&value!(1)).is_err());
        assert!(Ref::<Vm>::decode(&Value::Null).is_err());
    }

    #[test]
    fn null_reference() {
        let r = Ref::<Sr>::decode(&value!("OpaqueRef:NULL")).unwrap();
        assert!(r.is_null());
        assert_eq!(r, Ref::default());
    }

    #[test]
    fn nil_is_not_the_null_handle() {
        assert_eq!(Option::<Ref<Vm>>::decode(&Value::Null).unwrap(), None);
        assert_eq!(
            Option::<Ref<Vm>>::decode(&value!("OpaqueRef:NULL")).unwrap(),
            Some(Ref::null())
        );
    }

    #[test]
    fn equality_is_by_handle() {
        let mut set = HashSet::new();
        set.insert(Ref::<Vm>::new("OpaqueRef:a"));
        set.insert(Ref::<Vm>::new("OpaqueRef:a"));
        set.insert(Ref::<Vm>::new("OpaqueRef:A"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn back_to_the_wire() {
        let r = Ref::<Vm>::new("OpaqueRef:abc");
        assert_eq!(Value::from(&r), value!("OpaqueRef:abc"));
        assert_eq!(serde_json::to_string(&r).unwrap(), r#""OpaqueRef:abc""#);
    }
}
