//! Paging metadata shared by every page container.

use std::fmt;
use std::ops::Range;

/// Read-only view of a page's position within its source.
///
/// This is the surface pager controls render from. Both
/// [`PagedList`](crate::PagedList) and
/// [`MappedPagedList`](crate::MappedPagedList) implement it, so view code
/// can take `&impl Paged` without caring how the items were produced.
pub trait Paged {
    /// The metadata this page was built with.
    fn meta(&self) -> PageMeta;

    /// Zero-based index of this page.
    fn page_index(&self) -> usize {
        self.meta().page_index
    }

    /// Requested number of items per page.
    fn page_size(&self) -> usize {
        self.meta().page_size
    }

    /// Size of the unsliced source when the page was built.
    fn total_count(&self) -> usize {
        self.meta().total_count
    }

    /// Whether a page precedes this one.
    fn has_previous_page(&self) -> bool {
        self.meta().has_previous_page()
    }

    /// Whether a page follows this one.
    fn has_next_page(&self) -> bool {
        self.meta().has_next_page()
    }

    /// Number of pages the source spans at this page size.
    fn page_count(&self) -> usize {
        self.meta().page_count()
    }
}

/// Index, size and total count of one page.
///
/// Fields are set once when a page is built. There are no setters: to look
/// at a different page, build a new one.
///
/// # Example
/// ```
/// use pagedlist::PageMeta;
///
/// let meta = PageMeta::new(1, 10, 25);
/// assert!(meta.has_previous_page());
/// assert!(meta.has_next_page());
/// assert_eq!(meta.item_range(), 10..20);
/// assert_eq!(meta.page_count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageMeta {
    pub(crate) page_index: usize,
    pub(crate) page_size: usize,
    pub(crate) total_count: usize,
}

impl PageMeta {
    /// Metadata for page `page_index` of `total_count` items.
    ///
    /// No validation happens here; page constructors reject a zero
    /// `page_size` before building metadata.
    #[inline]
    pub const fn new(page_index: usize, page_size: usize, total_count: usize) -> Self {
        Self {
            page_index,
            page_size,
            total_count,
        }
    }

    #[inline]
    pub const fn page_index(&self) -> usize {
        self.page_index
    }

    #[inline]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[inline]
    pub const fn total_count(&self) -> usize {
        self.total_count
    }

    /// Offset of the page's first item in the source (saturating).
    #[inline]
    pub const fn offset(&self) -> usize {
        self.page_index.saturating_mul(self.page_size)
    }

    /// `page_index > 0`.
    #[inline]
    pub const fn has_previous_page(&self) -> bool {
        self.page_index > 0
    }

    /// `page_index * page_size < total_count - page_size`.
    ///
    /// Evaluated as `offset + page_size < total_count` so it never
    /// underflows; when `total_count <= page_size` there is no next page.
    pub fn has_next_page(&self) -> bool {
        self.page_index
            .checked_mul(self.page_size)
            .and_then(|offset| offset.checked_add(self.page_size))
            .is_some_and(|end| end < self.total_count)
    }

    /// `ceil(total_count / page_size)`; zero for an empty source.
    pub fn page_count(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total_count.div_ceil(self.page_size)
    }

    /// Source range covered by this page, clamped to the source.
    pub fn item_range(&self) -> Range<usize> {
        let start = self.offset().min(self.total_count);
        let end = self
            .offset()
            .saturating_add(self.page_size)
            .min(self.total_count);
        start..end
    }

    /// Whether the page lies entirely past the end of the source.
    ///
    /// Page 0 of an empty source is in range; any later page is not.
    pub fn is_out_of_range(&self) -> bool {
        if self.total_count == 0 {
            return self.page_index > 0;
        }
        self.offset() >= self.total_count
    }
}

impl Paged for PageMeta {
    #[inline]
    fn meta(&self) -> PageMeta {
        *self
    }
}

impl fmt::Display for PageMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Page {{ index: {}, size: {}, total: {} }}",
            self.page_index, self.page_size, self.total_count
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PageMeta {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("PageMeta", 5)?;
        self.serialize_fields::<S>(&mut state)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl PageMeta {
    /// Write the metadata fields (stored and derived) into a struct being
    /// serialized, so containers can inline them next to their items.
    pub(crate) fn serialize_fields<S: serde::Serializer>(
        &self,
        state: &mut S::SerializeStruct,
    ) -> Result<(), S::Error> {
        use serde::ser::SerializeStruct;

        state.serialize_field("page_index", &self.page_index)?;
        state.serialize_field("page_size", &self.page_size)?;
        state.serialize_field("total_count", &self.total_count)?;
        state.serialize_field("has_previous_page", &self.has_previous_page())?;
        state.serialize_field("has_next_page", &self.has_next_page())?;
        Ok(())
    }
}
