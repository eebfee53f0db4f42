//! Core types for the dashboard
//!
//! This crate contains the pagination engine and the record types shared by
//! the loader, service, HTTP and CLI crates.

mod config;
mod constants;
mod env_config;
mod error;
mod format;
mod notify;
mod pagination;
mod records;

pub use config::*;
pub use constants::*;
pub use env_config::env_parse_with_default;
pub use error::*;
pub use format::*;
pub use notify::*;
pub use pagination::*;
pub use records::*;
