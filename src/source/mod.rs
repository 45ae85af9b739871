//! Page sources - anything that can be counted and sliced.
//!
//! A page is built from exactly two questions asked of the source: how many
//! items are there, and which items fall in `offset..offset + len`. The
//! [`PageSource`] trait captures those two questions so in-memory
//! collections and lazily evaluated sequences page the same way.
//!
//! # Implementations
//! - `[T]`, `[T; N]`, `Vec<T>`, `VecDeque<T>` - materialized, O(1) count
//! - [`IterSource`] - a re-iterable lazy sequence, enumerated per pass
//! - `parking_lot::RwLock<Vec<T>>` - shared source, counted and sliced
//!   under one read lock

mod iter;
mod shared;
mod slice;

pub use iter::{IntoPageSource, IterSource};

/// A countable, sliceable sequence.
///
/// Implementors hand out owned copies of the window; the source itself is
/// never modified.
///
/// # Example
/// ```
/// use pagedlist::PageSource;
///
/// let source = vec!['a', 'b', 'c', 'd', 'e'];
/// assert_eq!(source.count(), 5);
/// assert_eq!(source.window(3, 10), vec!['d', 'e']);
/// assert!(source.window(9, 2).is_empty());
/// ```
pub trait PageSource {
    /// Type of the items handed out for a page.
    type Item;

    /// Total number of items in the source.
    fn count(&self) -> usize;

    /// Up to `len` items starting at `offset`, in source order.
    ///
    /// An offset at or past the end yields an empty window.
    fn window(&self, offset: usize, len: usize) -> Vec<Self::Item>;

    /// Count and window taken together.
    ///
    /// The default asks [`count`](Self::count) then
    /// [`window`](Self::window). Sources that can change between the two
    /// calls override this to answer both from one consistent view.
    fn snapshot(&self, offset: usize, len: usize) -> (usize, Vec<Self::Item>) {
        (self.count(), self.window(offset, len))
    }
}

impl<S: PageSource + ?Sized> PageSource for &S {
    type Item = S::Item;

    #[inline]
    fn count(&self) -> usize {
        (**self).count()
    }

    #[inline]
    fn window(&self, offset: usize, len: usize) -> Vec<Self::Item> {
        (**self).window(offset, len)
    }

    #[inline]
    fn snapshot(&self, offset: usize, len: usize) -> (usize, Vec<Self::Item>) {
        (**self).snapshot(offset, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Source that records how often each pass runs.
    struct Counting {
        items: Vec<u32>,
        counts: Cell<usize>,
        windows: Cell<usize>,
    }

    impl PageSource for Counting {
        type Item = u32;

        fn count(&self) -> usize {
            self.counts.set(self.counts.get() + 1);
            self.items.len()
        }

        fn window(&self, offset: usize, len: usize) -> Vec<u32> {
            self.windows.set(self.windows.get() + 1);
            self.items.iter().skip(offset).take(len).copied().collect()
        }
    }

    #[test]
    fn test_default_snapshot_runs_both_passes_once() {
        let source = Counting {
            items: (0..8).collect(),
            counts: Cell::new(0),
            windows: Cell::new(0),
        };

        let (total, window) = source.snapshot(4, 3);
        assert_eq!(total, 8);
        assert_eq!(window, vec![4, 5, 6]);
        assert_eq!(source.counts.get(), 1);
        assert_eq!(source.windows.get(), 1);
    }

    #[test]
    fn test_reference_forwards() {
        let items = vec![1, 2, 3];
        let by_ref: &Vec<i32> = &items;

        assert_eq!(PageSource::count(&by_ref), 3);
        assert_eq!(PageSource::window(&by_ref, 1, 1), vec![2]);
        assert_eq!(PageSource::snapshot(&by_ref, 2, 5), (3, vec![3]));
    }
}
