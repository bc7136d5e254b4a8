//! Page selection parsing and canonicalization.

use column_oxide::error::Error;
use column_oxide::tester::{PageRange, PageSelection};

#[test]
fn test_single_page() {
    let selection: PageSelection = "7".parse().unwrap();
    assert_eq!(selection, PageSelection::Single(7));
    assert_eq!(selection.to_pages().unwrap(), vec![7]);
}

#[test]
fn test_list_is_sorted_and_deduplicated() {
    let selection = PageSelection::from(vec![9, 2, 2, 5]);
    assert_eq!(selection.to_pages().unwrap(), vec![2, 5, 9]);

    let parsed: PageSelection = " 3, 1 ,3 ".parse().unwrap();
    assert_eq!(parsed.to_pages().unwrap(), vec![1, 3]);
}

#[test]
fn test_inclusive_range() {
    let range = PageRange::new(3, 6).unwrap();
    assert_eq!(range.start(), 3);
    assert_eq!(range.end(), 6);
    assert_eq!(PageSelection::from(range).to_pages().unwrap(), vec![3, 4, 5, 6]);

    let parsed: PageSelection = "4-4".parse().unwrap();
    assert_eq!(parsed.to_pages().unwrap(), vec![4]);
}

#[test]
fn test_page_zero_rejected() {
    assert!(matches!(
        PageSelection::Single(0).to_pages(),
        Err(Error::InvalidPageSelection(_))
    ));
    assert!(matches!(
        PageSelection::List(vec![1, 0]).to_pages(),
        Err(Error::InvalidPageSelection(_))
    ));
    assert!(matches!(PageRange::new(0, 3), Err(Error::InvalidPageSelection(_))));
}

#[test]
fn test_inverted_range_rejected() {
    assert!(matches!(PageRange::new(5, 2), Err(Error::InvalidPageSelection(_))));
    assert!(matches!("5-2".parse::<PageSelection>(), Err(Error::InvalidPageSelection(_))));
}

#[test]
fn test_garbage_rejected() {
    for input in ["", "abc", "1-x", "1,,2", "-3", "2.5"] {
        assert!(
            matches!(input.parse::<PageSelection>(), Err(Error::InvalidPageSelection(_))),
            "{:?} should be rejected",
            input
        );
    }
}
