//! bsl-storage
//!
//! The document-store collaborator. Records are JSON objects identified by
//! `_id` and grouped into named collections; callers select them with
//! [`query::Query`] filters and write them back whole.
//!
//! Two backends implement [`store::RecordStore`]: [`memory::MemoryStore`]
//! for local runs and tests, and [`s3::S3Store`], which keeps one JSON
//! object per record in an S3 bucket.

pub mod client;
pub mod error;
pub mod memory;
pub mod objects;
pub mod query;
pub mod s3;
pub mod store;
pub mod typed;
