//! Error types for pagedlist.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors when building a page.
///
/// Only malformed page requests are errors. Asking for a page past the end
/// of the source is not: it yields an empty page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested page size was zero.
    ///
    /// A page must hold at least one item, otherwise page arithmetic
    /// divides by zero.
    #[error("Invalid page size: {0} (must be greater than zero)")]
    InvalidPageSize(usize),

    /// `index * page_size` does not fit in a `usize`.
    #[error("Page offset overflows: index {index} × page size {page_size}")]
    OffsetOverflow { index: usize, page_size: usize },
}
