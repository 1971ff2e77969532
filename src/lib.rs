//! Typed marshalling for the XenAPI pool management protocol.
//!
//! Responses arrive as untyped [`Value`]s. This crate turns them into
//! references, enums and records, maps failure envelopes onto [`ApiError`]
//! and resolves the results of asynchronous tasks.

mod config;
pub mod decode;
mod error;
pub mod event;
mod failure;
mod reference;
pub mod task;
pub mod types;

pub use config::TaskConfig;
pub use decode::{Decode, DecodeError};
pub use error::Error;
pub use failure::{ApiError, check_document, check_response};
pub use reference::{Class, NULL_HANDLE, Ref};
pub use value::{Value, value};
