//! Page request type.

use std::fmt;

use super::config::{DEFAULT_PAGE_INDEX, DEFAULT_PAGE_SIZE};
use super::error::{Error, Result};

/// Identifies which page of a source to materialize.
///
/// `index` is zero-based. `size` is the number of items per page and must be
/// non-zero for the request to be usable; [`PageRequest::validate`] checks
/// that and computes the source offset in one go.
///
/// With the `serde` feature a request deserializes from query parameters,
/// falling back to the defaults for missing fields.
///
/// # Example
/// ```
/// use pagedlist::PageRequest;
///
/// let request = PageRequest::new(2).with_size(25);
/// assert_eq!(request.offset().unwrap(), 50);
///
/// let default = PageRequest::default();
/// assert_eq!((default.index, default.size), (0, 10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct PageRequest {
    #[cfg_attr(feature = "serde", serde(default = "default_index"))]
    pub index: usize,
    #[cfg_attr(feature = "serde", serde(default = "default_size"))]
    pub size: usize,
}

#[cfg(feature = "serde")]
fn default_index() -> usize {
    DEFAULT_PAGE_INDEX
}

#[cfg(feature = "serde")]
fn default_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl PageRequest {
    /// Request page `index` with the default page size.
    #[inline]
    pub fn new(index: usize) -> Self {
        Self {
            index,
            size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Replace the page size.
    #[inline]
    pub fn with_size(self, size: usize) -> Self {
        Self { size, ..self }
    }

    /// Offset of the first item of this page in the source.
    ///
    /// Fails with [`Error::OffsetOverflow`] if `index * size` overflows.
    pub fn offset(&self) -> Result<usize> {
        self.index
            .checked_mul(self.size)
            .ok_or(Error::OffsetOverflow {
                index: self.index,
                page_size: self.size,
            })
    }

    /// Check the request and return the source offset it starts at.
    pub fn validate(&self) -> Result<usize> {
        if self.size == 0 {
            return Err(Error::InvalidPageSize(self.size));
        }
        self.offset()
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            index: DEFAULT_PAGE_INDEX,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl fmt::Display for PageRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({} × {})", self.index, self.size)
    }
}
