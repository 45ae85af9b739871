//! Materialized in-memory sources.

use std::collections::VecDeque;

use super::PageSource;

/// Clamp `offset..offset + len` to a collection of `total` items.
#[inline]
fn clamp(total: usize, offset: usize, len: usize) -> (usize, usize) {
    let start = offset.min(total);
    let end = offset.saturating_add(len).min(total);
    (start, end)
}

impl<T: Clone> PageSource for [T] {
    type Item = T;

    #[inline]
    fn count(&self) -> usize {
        self.len()
    }

    fn window(&self, offset: usize, len: usize) -> Vec<T> {
        let (start, end) = clamp(self.len(), offset, len);
        self[start..end].to_vec()
    }
}

impl<T: Clone, const N: usize> PageSource for [T; N] {
    type Item = T;

    #[inline]
    fn count(&self) -> usize {
        N
    }

    fn window(&self, offset: usize, len: usize) -> Vec<T> {
        self.as_slice().window(offset, len)
    }
}

impl<T: Clone> PageSource for Vec<T> {
    type Item = T;

    #[inline]
    fn count(&self) -> usize {
        self.len()
    }

    fn window(&self, offset: usize, len: usize) -> Vec<T> {
        self.as_slice().window(offset, len)
    }
}

impl<T: Clone> PageSource for VecDeque<T> {
    type Item = T;

    #[inline]
    fn count(&self) -> usize {
        self.len()
    }

    fn window(&self, offset: usize, len: usize) -> Vec<T> {
        let (start, end) = clamp(self.len(), offset, len);
        self.range(start..end).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_window() {
        let items: Vec<u32> = (0..25).collect();

        assert_eq!(items.count(), 25);
        assert_eq!(items.window(0, 10), (0..10).collect::<Vec<u32>>());
        assert_eq!(items.window(20, 10), (20..25).collect::<Vec<u32>>());
        assert!(items.window(25, 10).is_empty());
        assert!(items.window(100, 10).is_empty());
    }

    #[test]
    fn test_window_does_not_overflow() {
        let items = [1u8, 2, 3];
        assert_eq!(items.window(1, usize::MAX), vec![2, 3]);
        assert!(items.window(usize::MAX, usize::MAX).is_empty());
    }

    #[test]
    fn test_array_source() {
        let items = ["a", "b", "c"];
        assert_eq!(PageSource::count(&items), 3);
        assert_eq!(items.window(2, 2), vec!["c"]);
    }

    #[test]
    fn test_vec_deque_window_across_wrap() {
        // Force the ring buffer to wrap so the window spans both halves.
        let mut items: VecDeque<u32> = VecDeque::with_capacity(4);
        items.extend([0, 1, 2, 3]);
        items.pop_front();
        items.pop_front();
        items.push_back(4);
        items.push_back(5);

        assert_eq!(PageSource::count(&items), 4);
        assert_eq!(items.window(1, 2), vec![3, 4]);
        assert_eq!(items.window(2, 10), vec![4, 5]);
    }

    #[test]
    fn test_source_untouched() {
        let items = vec![String::from("x"), String::from("y")];
        let window = items.window(0, 1);

        assert_eq!(window, vec![String::from("x")]);
        assert_eq!(items.len(), 2);
    }
}
