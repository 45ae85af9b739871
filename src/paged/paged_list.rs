//! A single materialized page of items.

use std::ops::Deref;

use log::{debug, trace};

use super::meta::{PageMeta, Paged};
use crate::common::{PageRequest, Result};
use crate::source::PageSource;

/// One page of a source plus its paging metadata.
///
/// Built once from a [`PageSource`], then read-only: the items are the
/// contiguous window `page_index * page_size ..` of the source, at most
/// `page_size` long, and `total_count` is the source size at build time.
///
/// The page owns its items. Asking for a page past the end of the source
/// is not an error; it yields an empty page that still reports the full
/// `total_count`.
///
/// # Example
/// ```
/// use pagedlist::PagedList;
///
/// let source: Vec<u32> = (0..25).collect();
/// let page = PagedList::new(&source, 2, 10).unwrap();
///
/// assert_eq!(page.items(), &[20, 21, 22, 23, 24]);
/// assert_eq!(page.total_count(), 25);
/// assert!(page.has_previous_page());
/// assert!(!page.has_next_page());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PagedList<T> {
    items: Vec<T>,
    meta: PageMeta,
}

impl<T> PagedList<T> {
    /// Build page `index` of `source` with `page_size` items per page.
    ///
    /// # Errors
    /// - [`Error::InvalidPageSize`](crate::Error::InvalidPageSize) if
    ///   `page_size` is zero
    /// - [`Error::OffsetOverflow`](crate::Error::OffsetOverflow) if
    ///   `index * page_size` overflows
    pub fn new<S>(source: &S, index: usize, page_size: usize) -> Result<Self>
    where
        S: PageSource<Item = T> + ?Sized,
    {
        Self::from_request(source, PageRequest::new(index).with_size(page_size))
    }

    /// Build the page described by `request`.
    pub fn from_request<S>(source: &S, request: PageRequest) -> Result<Self>
    where
        S: PageSource<Item = T> + ?Sized,
    {
        let (meta, items) = slice_window(source, request)?;
        Ok(Self::from_parts(items, meta))
    }

    /// A page with no items over an empty source.
    pub fn empty(index: usize, page_size: usize) -> Result<Self> {
        let request = PageRequest::new(index).with_size(page_size);
        request.validate()?;
        Ok(Self::from_parts(Vec::new(), PageMeta::new(index, page_size, 0)))
    }

    /// Assemble a page from an already sliced window.
    pub(crate) fn from_parts(items: Vec<T>, meta: PageMeta) -> Self {
        Self { items, meta }
    }

    /// The items on this page, in source order.
    #[inline]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Paging metadata.
    #[inline]
    pub fn meta(&self) -> PageMeta {
        self.meta
    }

    #[inline]
    pub fn page_index(&self) -> usize {
        self.meta.page_index
    }

    #[inline]
    pub fn page_size(&self) -> usize {
        self.meta.page_size
    }

    #[inline]
    pub fn total_count(&self) -> usize {
        self.meta.total_count
    }

    /// See [`PageMeta::has_previous_page`].
    #[inline]
    pub fn has_previous_page(&self) -> bool {
        self.meta.has_previous_page()
    }

    /// See [`PageMeta::has_next_page`].
    #[inline]
    pub fn has_next_page(&self) -> bool {
        self.meta.has_next_page()
    }

    #[inline]
    pub fn page_count(&self) -> usize {
        self.meta.page_count()
    }

    /// Take the items, discarding the metadata.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Split into items and metadata.
    pub fn into_parts(self) -> (Vec<T>, PageMeta) {
        (self.items, self.meta)
    }
}

/// Validate `request`, then count and slice `source` for it.
///
/// Shared by both page containers so they page identically.
pub(crate) fn slice_window<S>(
    source: &S,
    request: PageRequest,
) -> Result<(PageMeta, Vec<S::Item>)>
where
    S: PageSource + ?Sized,
{
    let offset = request.validate().inspect_err(|err| {
        debug!("rejected page request {}: {}", request, err);
    })?;

    let (total_count, items) = source.snapshot(offset, request.size);
    debug_assert!(items.len() <= request.size);
    let meta = PageMeta::new(request.index, request.size, total_count);

    trace!(
        "sliced {} of {} items at offset {} ({})",
        items.len(),
        total_count,
        offset,
        request
    );

    Ok((meta, items))
}

impl<T> Paged for PagedList<T> {
    #[inline]
    fn meta(&self) -> PageMeta {
        self.meta
    }
}

impl<T> Deref for PagedList<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> AsRef<[T]> for PagedList<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> IntoIterator for PagedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PagedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for PagedList<T> {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("PagedList", 6)?;
        state.serialize_field("items", &self.items)?;
        self.meta.serialize_fields::<S>(&mut state)?;
        state.end()
    }
}
