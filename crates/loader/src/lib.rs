//! Loader for the dashboard's static JSON documents.
//!
//! Every document is a flat JSON array; one fetch attempt per load, no retry.

mod client;
pub mod error;
mod source;


pub use client::{DataLoader, RecordLoader, parse_records, truncate};
pub use error::LoadError;
pub use source::DataSource;
