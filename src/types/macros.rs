/// Declares a closed set of wire tags.
///
/// Every generated enum carries an extra `Unrecognized` member, which is
/// also its default. Tags are matched ignoring ASCII case, a tag that
/// matches nothing is normalized to `Unrecognized` and never fails.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $tag:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
            /// A tag newer than this client.
            #[default]
            Unrecognized,
        }

        impl $name {
            /// Every known member, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// The canonical wire tag.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $tag,)+
                    $name::Unrecognized => "UNRECOGNIZED",
                }
            }

            /// Looks up a wire tag ignoring ASCII case, `Unrecognized` if unknown.
            pub fn from_tag(tag: &str) -> Self {
                $(
                    if tag.eq_ignore_ascii_case($tag) {
                        return $name::$variant;
                    }
                )+

                tracing::trace!(
                    message = "unrecognized tag normalized",
                    kind = stringify!($name),
                    tag
                );

                $name::Unrecognized
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::decode::Decode for $name {
            fn decode(value: &value::Value) -> Result<Self, $crate::decode::DecodeError> {
                Ok(Self::from_tag(&value.to_string_lossy()))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl From<$name> for value::Value {
            fn from(e: $name) -> Self {
                value::Value::String(e.as_str().to_string())
            }
        }
    };
}

/// Declares the object classes of the pool API.
///
/// One row per class produces the marker type, its record and the record
/// decoder. The whole table additionally produces [`ApiObject`] and the
/// [`Snapshot`] union, so a class can not be known to one of them without
/// the other.
///
/// [`ApiObject`]: crate::types::ApiObject
/// [`Snapshot`]: crate::types::Snapshot
macro_rules! classes {
    (
        $(
            $(#[$meta:meta])*
            $marker:ident => $wire:literal, $record:ident {
                $(
                    $(#[$field_meta:meta])*
                    $field:ident: $typ:ty = $key:literal,
                )*
            }
        )+
    ) => {
        $(
            $(#[$meta])*
            #[derive(Debug)]
            pub enum $marker {}

            impl $crate::reference::Class for $marker {
                const NAME: &'static str = $wire;
                const OBJECT: ApiObject = ApiObject::$marker;
                type Record = $record;
            }

            #[doc = concat!("Field set of one `", $wire, "` object.")]
            #[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
            pub struct $record {
                $(
                    $(#[$field_meta])*
                    #[serde(rename = $key)]
                    pub $field: $typ,
                )*
            }

            impl $crate::decode::Decode for $record {
                fn decode(value: &value::Value) -> Result<Self, $crate::decode::DecodeError> {
                    #[allow(unused_variables)]
                    let fields = $crate::decode::expect_struct(value)?;

                    Ok($record {
                        $($field: $crate::decode::field(fields, $key)?,)*
                    })
                }
            }
        )+

        wire_enum!(
            /// Every object class, as named in event payloads.
            ApiObject {
                $($marker => $wire,)+
            }
        );

        /// The record of an object whose class is only known at runtime.
        #[derive(Clone, Debug, PartialEq, serde::Serialize)]
        #[serde(untagged)]
        pub enum Snapshot {
            $($marker($record),)+
        }

        impl Snapshot {
            /// Decodes `payload` as the record of the class named `class`.
            ///
            /// Unlike plain enum fields, an unknown class is an error, there
            /// is no record shape to fall back to.
            pub fn decode(class: &str, payload: &value::Value) -> Result<Self, $crate::decode::DecodeError> {
                use $crate::decode::Decode;

                match ApiObject::from_tag(class) {
                    $(ApiObject::$marker => $record::decode(payload).map(Snapshot::$marker),)+
                    ApiObject::Unrecognized => Err($crate::decode::DecodeError::UnknownClass(class.to_string())),
                }
            }

            /// The class this snapshot was decoded as.
            pub fn class(&self) -> ApiObject {
                match self {
                    $(Snapshot::$marker(_) => ApiObject::$marker,)+
                }
            }
        }
    };
}
