//! Pages whose items are transformed from the source's item type.
//!
//! The window is sliced in source form and handed to the caller's mapper in
//! one call. Mappers that need the whole page at once (batch lookups,
//! cross-item context) see every item of the page together, never one at a
//! time.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

use log::trace;

use super::meta::{PageMeta, Paged};
use super::paged_list::{slice_window, PagedList};
use crate::common::{PageRequest, Result};
use crate::source::PageSource;

/// A page of `O` values produced from a window of `S` values.
///
/// Carries the same metadata as [`PagedList`]; the `S` items are dropped
/// once the mapper has consumed them.
///
/// # Example
/// ```
/// use pagedlist::MappedPagedList;
///
/// let source: Vec<u32> = (1..=25).collect();
/// let page: MappedPagedList<u32, String> = MappedPagedList::new(&source, 1, 10, |window| {
///     window.into_iter().map(|n| format!("#{n}"))
/// })
/// .unwrap();
///
/// assert_eq!(page.items()[0], "#11");
/// assert_eq!(page.len(), 10);
/// assert_eq!(page.total_count(), 25);
/// ```
pub struct MappedPagedList<S, O> {
    page: PagedList<O>,
    _source: PhantomData<fn(S)>,
}

impl<S, O> MappedPagedList<S, O> {
    /// Build page `index` of `source` and pass its window to `mapper`.
    ///
    /// `mapper` runs exactly once, with the whole window (empty when the
    /// page is past the end of the source). Validation matches
    /// [`PagedList::new`]; on error the mapper is not called.
    pub fn new<P, F, I>(source: &P, index: usize, page_size: usize, mapper: F) -> Result<Self>
    where
        P: PageSource<Item = S> + ?Sized,
        F: FnOnce(Vec<S>) -> I,
        I: IntoIterator<Item = O>,
    {
        Self::from_request(source, PageRequest::new(index).with_size(page_size), mapper)
    }

    /// Build the page described by `request` and pass its window to `mapper`.
    pub fn from_request<P, F, I>(source: &P, request: PageRequest, mapper: F) -> Result<Self>
    where
        P: PageSource<Item = S> + ?Sized,
        F: FnOnce(Vec<S>) -> I,
        I: IntoIterator<Item = O>,
    {
        let (meta, window) = slice_window(source, request)?;
        let window_len = window.len();
        let items: Vec<O> = mapper(window).into_iter().collect();

        if items.len() != window_len {
            trace!(
                "mapper turned {} source items into {} page items",
                window_len,
                items.len()
            );
        }

        Ok(Self {
            page: PagedList::from_parts(items, meta),
            _source: PhantomData,
        })
    }

    /// The mapped items, in the order the mapper produced them.
    #[inline]
    pub fn items(&self) -> &[O] {
        self.page.items()
    }

    /// Borrow the page without the source type.
    #[inline]
    pub fn as_paged_list(&self) -> &PagedList<O> {
        &self.page
    }

    /// Drop the source type, keeping items and metadata.
    pub fn into_paged_list(self) -> PagedList<O> {
        self.page
    }

    pub fn into_items(self) -> Vec<O> {
        self.page.into_items()
    }
}

impl<S, O> Deref for MappedPagedList<S, O> {
    type Target = PagedList<O>;

    #[inline]
    fn deref(&self) -> &PagedList<O> {
        &self.page
    }
}

impl<S, O> Paged for MappedPagedList<S, O> {
    #[inline]
    fn meta(&self) -> PageMeta {
        self.page.meta()
    }
}

impl<S, O> From<MappedPagedList<S, O>> for PagedList<O> {
    fn from(mapped: MappedPagedList<S, O>) -> Self {
        mapped.page
    }
}

impl<S, O> IntoIterator for MappedPagedList<S, O> {
    type Item = O;
    type IntoIter = std::vec::IntoIter<O>;

    fn into_iter(self) -> Self::IntoIter {
        self.page.into_iter()
    }
}

impl<'a, S, O> IntoIterator for &'a MappedPagedList<S, O> {
    type Item = &'a O;
    type IntoIter = std::slice::Iter<'a, O>;

    fn into_iter(self) -> Self::IntoIter {
        self.page.iter()
    }
}

// Manual impls: derives would demand the same traits of `S`, which is never
// stored.

impl<S, O: Clone> Clone for MappedPagedList<S, O> {
    fn clone(&self) -> Self {
        Self {
            page: self.page.clone(),
            _source: PhantomData,
        }
    }
}

impl<S, O: PartialEq> PartialEq for MappedPagedList<S, O> {
    fn eq(&self, other: &Self) -> bool {
        self.page == other.page
    }
}

impl<S, O: Eq> Eq for MappedPagedList<S, O> {}

impl<S, O: fmt::Debug> fmt::Debug for MappedPagedList<S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappedPagedList")
            .field("items", &self.page.items())
            .field("meta", &self.page.meta())
            .finish()
    }
}

#[cfg(feature = "serde")]
impl<S, O: serde::Serialize> serde::Serialize for MappedPagedList<S, O> {
    fn serialize<Ser: serde::Serializer>(
        &self,
        serializer: Ser,
    ) -> std::result::Result<Ser::Ok, Ser::Error> {
        serde::Serialize::serialize(&self.page, serializer)
    }
}
