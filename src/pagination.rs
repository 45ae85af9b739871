//! Extension methods for paging any [`PageSource`].

use crate::common::config::DEFAULT_PAGE_SIZE;
use crate::common::Result;
use crate::paged::{MappedPagedList, PagedList};
use crate::source::PageSource;

/// Page a source in place: `source.to_paged_list(index)`.
///
/// Thin factories over [`PagedList::new`] and [`MappedPagedList::new`].
/// The size-less forms use [`DEFAULT_PAGE_SIZE`].
///
/// # Example
/// ```
/// use pagedlist::Pagination;
///
/// let users = vec!["ana", "bo", "cy", "di"];
///
/// let page = users.to_paged_list_with_size(1, 3).unwrap();
/// assert_eq!(page.items(), ["di"]);
///
/// let shouted = users
///     .to_mapped_paged_list(0, |names| names.into_iter().map(str::to_uppercase))
///     .unwrap();
/// assert_eq!(shouted.items(), ["ANA", "BO", "CY", "DI"]);
/// assert_eq!(shouted.page_size(), 10);
/// ```
pub trait Pagination: PageSource {
    /// Page `index` with [`DEFAULT_PAGE_SIZE`] items per page.
    fn to_paged_list(&self, index: usize) -> Result<PagedList<Self::Item>> {
        PagedList::new(self, index, DEFAULT_PAGE_SIZE)
    }

    fn to_paged_list_with_size(
        &self,
        index: usize,
        page_size: usize,
    ) -> Result<PagedList<Self::Item>> {
        PagedList::new(self, index, page_size)
    }

    /// Page `index` with [`DEFAULT_PAGE_SIZE`] items per page, passing the
    /// window through `mapper`.
    fn to_mapped_paged_list<O, F, I>(
        &self,
        index: usize,
        mapper: F,
    ) -> Result<MappedPagedList<Self::Item, O>>
    where
        F: FnOnce(Vec<Self::Item>) -> I,
        I: IntoIterator<Item = O>,
    {
        MappedPagedList::new(self, index, DEFAULT_PAGE_SIZE, mapper)
    }

    fn to_mapped_paged_list_with_size<O, F, I>(
        &self,
        index: usize,
        page_size: usize,
        mapper: F,
    ) -> Result<MappedPagedList<Self::Item, O>>
    where
        F: FnOnce(Vec<Self::Item>) -> I,
        I: IntoIterator<Item = O>,
    {
        MappedPagedList::new(self, index, page_size, mapper)
    }
}

impl<S: PageSource + ?Sized> Pagination for S {}
