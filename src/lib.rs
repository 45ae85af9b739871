//! pagedlist - Page a collection into an immutable page snapshot.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           pagedlist                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            Helpers (pagination)                          │   │
//! │  │   source.to_paged_list(i) / to_mapped_paged_list(i, f)   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            Containers (paged/)                           │   │
//! │  │   PagedList<T>  ←─OR─→  MappedPagedList<S, O>            │   │
//! │  │         PageMeta + Paged (navigation metadata)           │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            Sources (source/)                             │   │
//! │  │   count() + window(offset, len)                          │   │
//! │  │   slices | Vec | VecDeque | IterSource | RwLock<Vec>     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageRequest, Error, config)
//! - [`source`] - The countable, sliceable source abstraction
//! - [`paged`] - Page containers and their metadata
//! - [`pagination`] - Extension methods that build pages from a source
//!
//! # Quick Start
//! ```
//! use pagedlist::Pagination;
//!
//! let products: Vec<u32> = (1..=25).collect();
//!
//! let page = products.to_paged_list(0).unwrap();
//! assert_eq!(page.len(), 10);
//! assert_eq!(page.total_count(), 25);
//! assert!(!page.has_previous_page());
//! assert!(page.has_next_page());
//! ```

pub mod common;
pub mod paged;
pub mod pagination;
pub mod source;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_PAGE_INDEX, DEFAULT_PAGE_SIZE};
pub use common::{Error, PageRequest, Result};

pub use paged::{MappedPagedList, PageMeta, Paged, PagedList};
pub use pagination::Pagination;
pub use source::{IntoPageSource, IterSource, PageSource};
