//! Service layer for the dashboard
//!
//! Owns one pagination engine per view and mediates between the loader,
//! the engine and whoever renders the pages (CLI, HTTP).

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod collection_service;
mod dashboard;
pub mod error;


pub use collection_service::{CollectionRecord, CollectionService};
pub use dashboard::{Collection, Dashboard, ReloadReport};
pub use error::ServiceError;
