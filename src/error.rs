use std::time::Duration;

use thiserror::Error;
use value::Value;

use crate::decode::DecodeError;
use crate::failure::ApiError;
use crate::types::TaskStatusType;

#[derive(Debug, Error)]
pub enum Error {
    /// The server reported a failure.
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("decode response failed, {0}")]
    Decode(#[from] DecodeError),

    #[error("parse xml-rpc document failed, {0}")]
    Xml(#[from] xmlrpc::Error),

    /// A protocol level fault, raised before the call was dispatched.
    #[error("xml-rpc fault {code}, {message}")]
    Fault { code: i64, message: String },

    #[error("unexpected response envelope {0}")]
    BadServerResponse(Value),

    #[error("malformed async result {0:?}")]
    BadAsyncResult(String),

    #[error("task is not finished yet, status {0}")]
    TaskNotFinished(TaskStatusType),

    #[error("task did not finish within {0:?}")]
    Timeout(Duration),

    #[error("transport failed, {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Returns the structured server error, if this is one.
    pub fn api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }
}
