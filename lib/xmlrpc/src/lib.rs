//! A small XML-RPC document codec.
//!
//! Only the document layer lives here: turning `methodResponse` and
//! `<value>` documents into [`Value`]s and back. Sending them anywhere is
//! somebody else's job.

mod de;
mod error;
mod ser;

pub use de::{parse_response, parse_value, parse_value_content};
pub use error::Error;
pub use ser::{encode_call, encode_response, encode_value};

use value::Value;

/// The outcome of one XML-RPC call, as carried by a `methodResponse`.
#[derive(Clone, Debug, PartialEq)]
pub enum Response {
    /// The single `<param>` of a successful response.
    Success(Value),

    /// A protocol level `<fault>`.
    Fault { code: i64, message: String },
}
