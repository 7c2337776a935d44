use super::*;

#[test]
fn test_region_begin_end_normalize() {
    let r = Region::new(7, 3);
    assert_eq!(r.begin(), 3);
    assert_eq!(r.end(), 7);
    assert_eq!(r.size(), 4);
    assert!(r.is_reversed());
    assert!(!r.is_empty());
}

#[test]
fn test_caret_is_empty() {
    let r = Region::caret(5);
    assert!(r.is_empty());
    assert_eq!(r.size(), 0);
    assert_eq!(r.begin(), 5);
}

#[test]
fn test_intersects_overlap_only() {
    let a = Region::new(0, 6);
    let b = Region::new(6, 12);
    let c = Region::new(4, 8);
    assert!(!a.intersects(&b)); // touching
    assert!(a.intersects(&c));
    assert!(c.intersects(&b));
}

#[test]
fn test_intersects_identical_carets() {
    assert!(Region::caret(3).intersects(&Region::caret(3)));
    assert!(!Region::caret(3).intersects(&Region::caret(4)));
    assert!(Region::new(2, 5).intersects(&Region::new(5, 2)));
}

#[test]
fn test_cover() {
    let r = Region::new(8, 4).cover(&Region::new(1, 2));
    assert_eq!(r, Region::new(1, 8));
}

#[test]
fn test_offset_signed() {
    assert_eq!(Region::new(3, 5).offset(4), Region::new(7, 9));
    assert_eq!(Region::new(3, 5).offset(-2), Region::new(1, 3));
    assert_eq!(Region::new(1, 2).offset(-5), Region::new(0, 0));
}

#[test]
fn test_ordering_by_begin_then_end() {
    let mut v = vec![Region::new(5, 1), Region::new(1, 3), Region::caret(1)];
    v.sort();
    assert_eq!(v, vec![Region::caret(1), Region::new(1, 3), Region::new(5, 1)]);
}

#[test]
fn test_region_set_sorts_and_merges() {
    let set = RegionSet::from_regions(vec![
        Region::caret(10),
        Region::new(2, 6),
        Region::caret(4),
        Region::caret(10),
    ]);
    assert_eq!(set.as_slice(), &[Region::new(2, 6), Region::caret(10)]);
}

#[test]
fn test_region_set_keeps_touching_regions() {
    let set = RegionSet::from_regions(vec![Region::new(0, 3), Region::new(3, 6)]);
    assert_eq!(set.len(), 2);
}

#[test]
fn test_region_set_merge_keeps_reversed_direction() {
    let set = RegionSet::from_regions(vec![Region::new(5, 0), Region::new(3, 8)]);
    assert_eq!(set.as_slice(), &[Region::new(8, 0)]);
}

#[test]
fn test_region_set_map_and_display() {
    let set = RegionSet::from_regions(vec![Region::caret(1), Region::new(4, 6)]);
    let moved = set.map(|r| r.offset(1));
    assert_eq!(format!("{moved}"), "2 5:7");
    assert_eq!(moved.bounds(), Some(Region::new(2, 7)));
}
