//! Lazily evaluated sources.

use super::PageSource;

/// A lazy, re-iterable sequence used as a page source.
///
/// Each pass (count, then window) runs a fresh clone of the wrapped
/// iterator, so the sequence is enumerated once to count it and again up
/// to the end of the window to slice it. Nothing before `offset` is
/// collected.
///
/// The wrapped iterator must yield the same items on every clone; an
/// iterator over changing state gives a total count that does not match
/// the page.
///
/// # Example
/// ```
/// use pagedlist::{IterSource, PageSource};
///
/// let evens = IterSource::new((0..100).filter(|n| n % 2 == 0));
/// assert_eq!(evens.count(), 50);
/// assert_eq!(evens.window(10, 3), vec![20, 22, 24]);
/// ```
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    iter: I,
}

impl<I> IterSource<I>
where
    I: Iterator + Clone,
{
    /// Wrap a re-iterable sequence.
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: source.into_iter(),
        }
    }

    /// Unwrap the underlying iterator.
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I> PageSource for IterSource<I>
where
    I: Iterator + Clone,
{
    type Item = I::Item;

    fn count(&self) -> usize {
        self.iter.clone().count()
    }

    fn window(&self, offset: usize, len: usize) -> Vec<I::Item> {
        self.iter.clone().skip(offset).take(len).collect()
    }
}

/// Adapter turning any cloneable iterator into an [`IterSource`].
///
/// # Example
/// ```
/// use pagedlist::{IntoPageSource, Pagination};
///
/// let names = ["ada", "grace", "edsger"];
/// let page = names
///     .iter()
///     .map(|name| name.to_uppercase())
///     .into_page_source()
///     .to_paged_list_with_size(1, 2)
///     .unwrap();
///
/// assert_eq!(page.items(), ["EDSGER"]);
/// assert_eq!(page.total_count(), 3);
/// ```
pub trait IntoPageSource: Iterator + Clone + Sized {
    /// Wrap `self` as a lazy page source.
    fn into_page_source(self) -> IterSource<Self> {
        IterSource { iter: self }
    }
}

impl<I: Iterator + Clone> IntoPageSource for I {}
