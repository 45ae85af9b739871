//! Shared sources guarded by a `parking_lot::RwLock`.
//!
//! A plain collection is counted and sliced in two separate passes, so a
//! writer sneaking in between them produces a page whose total count does
//! not match its items. Wrapping the collection in a lock lets
//! [`PageSource::snapshot`] hold one read guard across both passes.

use parking_lot::RwLock;

use super::PageSource;

impl<T: Clone> PageSource for RwLock<Vec<T>> {
    type Item = T;

    fn count(&self) -> usize {
        self.read().len()
    }

    fn window(&self, offset: usize, len: usize) -> Vec<T> {
        self.read().as_slice().window(offset, len)
    }

    fn snapshot(&self, offset: usize, len: usize) -> (usize, Vec<T>) {
        let guard = self.read();
        (guard.len(), guard.as_slice().window(offset, len))
    }
}
