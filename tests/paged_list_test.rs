//! Paged List Tests
//!
//! Scenario tests for the documented paging contract, run against every
//! kind of source the crate knows how to page.

use std::collections::VecDeque;

use pagedlist::{
    Error, IntoPageSource, MappedPagedList, PageRequest, Paged, PagedList, Pagination,
};

const N: u32 = 25;
const PAGE_SIZE: usize = 10;

fn numbers() -> Vec<u32> {
    (0..N).collect()
}

// ============================================================================
// Scenario: first page
// ============================================================================

#[test]
fn test_first_page_of_twenty_five() {
    let page = numbers().to_paged_list_with_size(0, PAGE_SIZE).unwrap();

    assert_eq!(page.items(), (0..10).collect::<Vec<u32>>().as_slice());
    assert_eq!(page.total_count(), 25);
    assert!(!page.has_previous_page());
    assert!(page.has_next_page());
}

// ============================================================================
// Scenario: last, partial page
// ============================================================================

#[test]
fn test_last_page_of_twenty_five() {
    let page = numbers().to_paged_list_with_size(2, PAGE_SIZE).unwrap();

    assert_eq!(page.items(), &[20, 21, 22, 23, 24]);
    assert_eq!(page.total_count(), 25);
    assert!(page.has_previous_page());
    assert!(!page.has_next_page());
}

// ============================================================================
// Scenario: empty source
// ============================================================================

#[test]
fn test_empty_source() {
    let empty: Vec<u32> = Vec::new();
    let page = empty.to_paged_list(0).unwrap();

    assert!(page.items().is_empty());
    assert_eq!(page.total_count(), 0);
    assert!(!page.has_previous_page());
    assert!(!page.has_next_page());
}

// ============================================================================
// Every source kind pages identically
// ============================================================================

#[test]
fn test_all_sources_agree() {
    let vec = numbers();
    let deque: VecDeque<u32> = numbers().into();
    let array: [u32; 25] = std::array::from_fn(|i| i as u32);
    let lazy = (0..N).into_page_source();
    let shared = parking_lot::RwLock::new(numbers());

    for index in 0..4 {
        let expected = PagedList::new(&vec, index, PAGE_SIZE).unwrap();

        assert_eq!(PagedList::new(vec.as_slice(), index, PAGE_SIZE).unwrap(), expected);
        assert_eq!(PagedList::new(&deque, index, PAGE_SIZE).unwrap(), expected);
        assert_eq!(PagedList::new(&array, index, PAGE_SIZE).unwrap(), expected);
        assert_eq!(PagedList::new(&lazy, index, PAGE_SIZE).unwrap(), expected);
        assert_eq!(PagedList::new(&shared, index, PAGE_SIZE).unwrap(), expected);
    }
}

// ============================================================================
// Requests
// ============================================================================

#[test]
fn test_from_request_matches_new() {
    let source = numbers();
    let request = PageRequest::new(1).with_size(7);

    assert_eq!(
        PagedList::from_request(&source, request).unwrap(),
        PagedList::new(&source, 1, 7).unwrap()
    );
    assert_eq!(
        PagedList::from_request(&source, PageRequest::default()).unwrap(),
        source.to_paged_list(0).unwrap()
    );
}

#[test]
fn test_invalid_requests() {
    let source = numbers();

    assert_eq!(
        PagedList::new(&source, 3, 0).unwrap_err(),
        Error::InvalidPageSize(0)
    );
    assert_eq!(
        PagedList::new(&source, usize::MAX, 3).unwrap_err(),
        Error::OffsetOverflow {
            index: usize::MAX,
            page_size: 3,
        }
    );
}

// ============================================================================
// Mapped pages render like plain pages
// ============================================================================

/// What a pager control needs to draw itself.
fn pager(page: &impl Paged) -> String {
    format!(
        "{}{} / {}{}",
        if page.has_previous_page() { "< " } else { "" },
        page.page_index() + 1,
        page.page_count(),
        if page.has_next_page() { " >" } else { "" },
    )
}

#[test]
fn test_pager_rendering() {
    let source = numbers();

    let plain = source.to_paged_list_with_size(1, PAGE_SIZE).unwrap();
    let mapped: MappedPagedList<u32, String> = source
        .to_mapped_paged_list_with_size(1, PAGE_SIZE, |w| w.into_iter().map(|n| n.to_string()))
        .unwrap();

    assert_eq!(pager(&plain), "< 2 / 3 >");
    assert_eq!(pager(&mapped), pager(&plain));
    assert_eq!(pager(&plain.meta()), "< 2 / 3 >");
}

#[test]
fn test_source_left_untouched() {
    let source = numbers();
    let _ = source.to_paged_list_with_size(1, PAGE_SIZE).unwrap();
    let _ = source.to_mapped_paged_list(1, |w| w).unwrap();

    assert_eq!(source, numbers());
}
