//! bsl-core
//!
//! Pure domain types and collection conventions for the clinic backend.
//! No storage or network dependency. This is the vocabulary shared by the
//! scoring engine, the reminder sweeps and the HTTP service.

pub mod collections;
pub mod error;
pub mod models;
