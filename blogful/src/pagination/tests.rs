use super::*;

const MAX: u64 = 100;

fn window(page: u64, page_size: u64, total: u64) -> PageWindow {
    PageWindow::compute(
        PageRequest::new(page, page_size, MAX).expect("invalid request"),
        total,
    ).expect("window computation failed")
}

#[test]
fn empty_store_first_page() {
    let w = window(1, 10, 0);
    assert_eq!(w.total_pages, 0);
    assert!(!w.has_next);
    assert!(!w.has_prev);
    assert_eq!((w.start, w.end), (0, 10));
}

#[test]
fn empty_store_has_no_pages_for_any_page_size() {
    for page_size in 1..=MAX {
        assert_eq!(window(1, page_size, 0).total_pages, 0, "page_size {page_size}");
    }
}

#[test]
fn fifteen_entries_second_page() {
    let w = window(2, 10, 15);
    assert_eq!(w.total_pages, 2);
    assert_eq!((w.start, w.end), (10, 20));
    assert!(!w.has_next);
    assert!(w.has_prev);
}

#[test]
fn fifteen_entries_first_page() {
    let w = window(1, 10, 15);
    assert_eq!(w.total_pages, 2);
    assert!(w.has_next);
    assert!(!w.has_prev);
}

#[test]
fn exact_multiple_of_page_size() {
    assert_eq!(window(1, 10, 10).total_pages, 1);
    assert_eq!(window(1, 10, 11).total_pages, 2);
    assert_eq!(window(1, 1, 1).total_pages, 1);
    assert!(!window(1, 10, 10).has_next);
}

#[test]
fn out_of_range_page_is_permissive() {
    let w = window(5, 10, 15);
    assert_eq!(w.total_pages, 2);
    assert_eq!((w.start, w.end), (40, 50));
    assert!(!w.has_next);
    assert!(w.has_prev);
}

#[test]
fn flags_match_page_position() {
    for total in 1..=45u64 {
        for page_size in 1..=12u64 {
            let total_pages = window(1, page_size, total).total_pages;
            for page in 1..=total_pages {
                let w = window(page, page_size, total);
                assert_eq!(w.has_prev, page != 1, "{page}/{page_size}/{total}");
                assert_eq!(w.has_next, page != total_pages, "{page}/{page_size}/{total}");
            }
        }
    }
}

#[test]
fn windows_cover_everything_once() {
    for total in 0..=37u64 {
        for page_size in 1..=9u64 {
            let total_pages = window(1, page_size, total).total_pages;
            let mut covered = Vec::new();
            for page in 1..=total_pages {
                let w = window(page, page_size, total);
                let slice: Vec<u64> = (w.start..w.end.min(total)).collect();
                assert!(slice.len() as u64 <= page_size);
                covered.extend(slice);
            }
            assert_eq!(covered, (0..total).collect::<Vec<_>>(), "{page_size}/{total}");
        }
    }
}

#[test]
fn page_zero_is_rejected() {
    assert_eq!(PageRequest::new(0, 10, MAX), Err(PaginationError::InvalidPage));
}

#[test]
fn page_size_bounds() {
    assert_eq!(
        PageRequest::new(1, 0, MAX),
        Err(PaginationError::InvalidPageSize { page_size: 0, max_page_size: MAX }),
    );
    assert_eq!(
        PageRequest::new(1, MAX + 1, MAX),
        Err(PaginationError::InvalidPageSize { page_size: MAX + 1, max_page_size: MAX }),
    );
    assert!(PageRequest::new(1, MAX, MAX).is_ok());
}

#[test]
fn huge_page_does_not_overflow() {
    let request = PageRequest::new(u64::MAX, 10, MAX).unwrap();
    assert_eq!(
        PageWindow::compute(request, 15),
        Err(PaginationError::PageOutOfRange),
    );
}
