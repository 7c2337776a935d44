use super::*;
use crate::buffer::{BufferView, TextBuffer};
use crate::demarcation::{CLikeScope, ClassDemarcation, ListItem, PredefinedRegion};

#[test]
fn test_word_movement_scenario() {
    let buf = TextBuffer::new("foo bar baz");
    let alg = RegionAlgebra::new(ClassDemarcation::word(&buf), buf.len());
    let mut caret = Region::caret(0);
    let mut stops = Vec::new();
    for _ in 0..3 {
        caret = alg.movement_next(caret);
        stops.push(caret.active);
    }
    assert_eq!(stops, vec![3, 7, 11]);
    // clamps at the end
    assert_eq!(alg.movement_next(caret), Region::caret(11));
}

#[test]
fn test_word_movement_backward() {
    let buf = TextBuffer::new("foo bar baz");
    let alg = RegionAlgebra::new(ClassDemarcation::word(&buf), buf.len());
    assert_eq!(alg.movement_prev(Region::caret(11)), Region::caret(8));
    assert_eq!(alg.movement_prev(Region::caret(8)), Region::caret(4));
    assert_eq!(alg.movement_prev(Region::caret(0)), Region::caret(0));
}

#[test]
fn test_movement_always_progresses() {
    let buf = TextBuffer::new("let someValue = other_thing(1, 2);\nnext line");
    let alg = RegionAlgebra::new(ClassDemarcation::sub_word(&buf), buf.len());
    for p in 0..buf.len() {
        let moved = alg.movement_next(Region::caret(p));
        assert!(moved.begin() > p, "stalled at {p}");
    }
    for p in 1..=buf.len() {
        let moved = alg.movement_prev(Region::caret(p));
        assert!(moved.begin() < p, "stalled at {p}");
    }
}

#[test]
fn test_completion_is_idempotent() {
    let buf = TextBuffer::new("f(a, bb, ccc) + g(x)");
    let alg = RegionAlgebra::new(ListItem::new(&buf), buf.len());
    for p in 0..=buf.len() {
        for forward in [true, false] {
            let once = alg.completion(forward, Region::caret(p));
            assert_eq!(alg.completion(forward, once), once, "at {p}");
        }
    }
}

#[test]
fn test_list_item_completion_scenario() {
    let buf = TextBuffer::new("f(a, bb, ccc)");
    let alg = RegionAlgebra::new(ListItem::new(&buf), buf.len());
    let r = alg.completion(true, Region::caret(6));
    assert_eq!(r, Region::new(5, 7));
    assert_eq!(buf.substr(r), "bb");
    assert_eq!(alg.completion(false, Region::caret(6)), Region::new(7, 5));
}

#[test]
fn test_expansion_grows_and_collapses() {
    let buf = TextBuffer::new("one two three");
    let alg = RegionAlgebra::new(ClassDemarcation::word(&buf), buf.len());
    let r = alg.expansion_next(Region::caret(0));
    assert_eq!(r, Region::new(0, 3));
    let r = alg.expansion_next(r);
    assert_eq!(r, Region::new(0, 7));

    // shrinking a forward selection back past its anchor collapses
    let r = alg.expansion_prev(Region::new(4, 7));
    assert_eq!(r, Region::new(4, 4));
    assert_eq!(alg.expansion_prev(Region::new(5, 7)), Region::caret(5));
    let r = alg.expansion_prev(Region::new(8, 13));
    assert_eq!(r, Region::caret(8));
    let r = alg.expansion_prev(Region::new(13, 8));
    assert_eq!(r, Region::new(13, 4));
}

#[test]
fn test_traversal_adjacent_functions() {
    let alg = RegionAlgebra::new(CLikeScope::new(vec![0, 6], vec![6, 12], vec![], 12), 12);
    let source = alg.completion(true, Region::caret(3));
    assert_eq!(source, Region::new(0, 6));
    assert_eq!(alg.traversal_next(source), Region::new(6, 12));
    assert_eq!(alg.traversal_prev(Region::new(6, 12)), Region::new(0, 6));
}

#[test]
fn test_block_completion_from_block_start() {
    let buf = TextBuffer::new("a\nb\n\nc\nd");
    let blocks = PredefinedRegion::blocks(&buf);
    let alg = RegionAlgebra::new(&blocks, buf.len());
    assert_eq!(alg.completion(true, Region::caret(1)), Region::new(0, 5));
    assert_eq!(alg.completion(true, Region::caret(0)), Region::new(0, 5));
    assert_eq!(alg.completion(true, Region::caret(5)), Region::new(5, 8));
    assert_eq!(alg.completion(false, Region::caret(5)), Region::new(8, 5));

    let once = alg.completion(true, Region::caret(5));
    assert_eq!(alg.completion(true, once), once);
}

#[test]
fn test_extremum() {
    let pre = PredefinedRegion::new(vec![Region::new(0, 3), Region::new(5, 8), Region::new(10, 14)]);
    let alg = RegionAlgebra::new(&pre, 14);
    assert_eq!(alg.extremum(true), Region::caret(10));
    assert_eq!(alg.extremum(false), Region::caret(5));
}
