//! Auto-generated from AWS S3 Smithy model. DO NOT EDIT.

mod analytics;
mod bucket;
mod config;
mod list;
mod multipart;
mod object;

pub use analytics::*;
pub use bucket::*;
pub use config::*;
pub use list::*;
pub use multipart::*;
pub use object::*;
