//! Change notifications as returned by `event.from`.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use value::Value;

use crate::decode::{Decode, DecodeError, expect_struct, field};
use crate::types::{EventOperation, Snapshot};

/// One change to one object.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EventRecord {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    /// Class name as sent by the server, usually lower case.
    pub class: String,
    pub operation: EventOperation,
    /// Handle of the changed object. Kept untyped, since its class is only
    /// known at runtime.
    #[serde(rename = "ref")]
    pub reference: String,
    pub obj_uuid: String,
    /// The object's record after the change, absent for deletions on
    /// older servers.
    pub snapshot: Option<Snapshot>,
}

impl Decode for EventRecord {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = expect_struct(value)?;
        let class: String = field(fields, "class")?;

        let snapshot = match fields.get("snapshot") {
            None | Some(Value::Null) => None,
            Some(payload) => Some(
                Snapshot::decode(&class, payload).map_err(|err| err.in_field("snapshot"))?,
            ),
        };

        Ok(EventRecord {
            id: field(fields, "id")?,
            timestamp: field(fields, "timestamp")?,
            operation: field(fields, "operation")?,
            reference: field(fields, "ref")?,
            obj_uuid: field(fields, "obj_uuid")?,
            class,
            snapshot,
        })
    }
}

/// The result of one `event.from` call.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EventBatch {
    pub events: Vec<EventRecord>,
    pub valid_ref_counts: HashMap<String, i64>,
    /// Pass this to the next `event.from` call to continue where this batch
    /// left off.
    pub token: String,
}

impl Decode for EventBatch {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = expect_struct(value)?;

        Ok(EventBatch {
            events: field(fields, "events")?,
            valid_ref_counts: field(fields, "valid_ref_counts")?,
            token: field(fields, "token")?,
        })
    }
}
