//! Page containers.
//!
//! # Components
//! - [`PagedList`] - One materialized page plus metadata
//! - [`MappedPagedList`] - A page whose window was transformed in one batch
//! - [`PageMeta`] - Index, size and total count, with derived navigation
//! - [`Paged`] - Read-only metadata surface shared by every container

mod mapped;
mod meta;
mod paged_list;

pub use mapped::MappedPagedList;
pub use meta::{PageMeta, Paged};
pub use paged_list::PagedList;
