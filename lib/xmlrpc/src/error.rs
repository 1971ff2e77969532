use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed xml, {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("invalid utf8 text, {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("unexpected element <{0}>")]
    UnexpectedElement(String),
    #[error("unexpected closing tag </{0}>")]
    UnexpectedEnd(String),
    #[error("unexpected text {0:?}")]
    UnexpectedText(String),
    #[error("unexpected end of document")]
    UnexpectedEof,

    #[error("invalid integer {0:?}")]
    InvalidInteger(String),
    #[error("invalid double {0:?}")]
    InvalidDouble(String),
    #[error("invalid boolean {0:?}, expect 0 or 1")]
    InvalidBoolean(String),
    #[error("invalid dateTime.iso8601 {0:?}")]
    InvalidDateTime(String),
    #[error("invalid base64, {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("unknown entity reference &{0};")]
    InvalidEntity(String),
}
