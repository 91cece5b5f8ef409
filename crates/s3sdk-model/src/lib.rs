//! Amazon S3 client data model.
//!
//! Most of this crate is generated by `s3sdk-codegen` from the S3 Smithy
//! model: one enum per S3 enum shape, the shared XML shapes, and a request
//! and result struct per operation. The hand-written modules cover the
//! in-memory body type, per-call envelopes and the error types.
#![allow(clippy::too_many_lines)]
#![allow(clippy::struct_excessive_bools)]
#![allow(missing_docs)]

pub mod blob;
pub mod envelope;
pub mod error;
pub mod exception;
pub mod operations;
pub mod request;
pub mod result;
pub mod types;

pub use blob::StreamingBlob;
pub use envelope::{Credentials, ResponseMetadata, S3Request, S3Response};
pub use error::S3ErrorCode;
pub use exception::{
    DuplicateKeyError, Error, ErrorType, MultiObjectDeleteError, ParseEnumError, Result, S3Error,
};
pub use operations::S3Operation;
