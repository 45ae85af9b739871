//! Common types and utilities shared across pagedlist.
//!
//! This module contains the primitives every page is built from:
//! - Configuration constants
//! - Error types
//! - Page requests (index + size)

pub mod config;
pub mod error;
mod page_request;

pub use error::{Error, Result};
pub use page_request::PageRequest;
