//! Configuration constants for pagedlist.

/// Number of items per page when the caller does not ask for a size.
///
/// Used by [`PageRequest::default`](crate::PageRequest) and by the
/// size-less helpers on [`Pagination`](crate::Pagination).
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page index used when the caller does not ask for one (the first page).
pub const DEFAULT_PAGE_INDEX: usize = 0;
