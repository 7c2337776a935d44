use super::*;
use crate::buffer::{BufferView, TextBuffer};
use crate::region::Region;

fn flags(text: &str, pos: usize) -> ClassFlags {
    TextBuffer::new(text).classify(pos)
}

#[test]
fn test_char_class() {
    let seps = DEFAULT_WORD_SEPARATORS;
    assert_eq!(char_class('a', seps), CharClass::Word);
    assert_eq!(char_class('_', seps), CharClass::Word);
    assert_eq!(char_class('(', seps), CharClass::Punctuation);
    assert_eq!(char_class('\t', seps), CharClass::Space);
    assert_eq!(char_class('\n', seps), CharClass::Newline);
}

#[test]
fn test_word_boundaries() {
    assert!(flags("foo bar", 0).contains(ClassFlags::WORD_START));
    assert!(flags("foo bar", 3).contains(ClassFlags::WORD_END));
    assert!(flags("foo bar", 4).contains(ClassFlags::WORD_START));
    assert!(!flags("foo bar", 1).intersects(ClassFlags::WORD_START | ClassFlags::WORD_END));
}

#[test]
fn test_punctuation_boundaries() {
    let f = flags("a(b", 1);
    assert!(f.contains(ClassFlags::WORD_END | ClassFlags::PUNCTUATION_START));
    let f = flags("a(b", 2);
    assert!(f.contains(ClassFlags::PUNCTUATION_END | ClassFlags::WORD_START));
}

#[test]
fn test_sub_word_camel_case() {
    assert!(flags("fooBar", 3).contains(ClassFlags::SUB_WORD_START | ClassFlags::SUB_WORD_END));
    assert!(!flags("fooBar", 3).contains(ClassFlags::WORD_START));
    // HTML|Parser
    assert!(flags("HTMLParser", 4).contains(ClassFlags::SUB_WORD_START));
    assert!(!flags("HTMLParser", 3).contains(ClassFlags::SUB_WORD_START));
}

#[test]
fn test_sub_word_underscore() {
    assert!(flags("foo_bar", 3).contains(ClassFlags::SUB_WORD_END));
    assert!(flags("foo_bar", 4).contains(ClassFlags::SUB_WORD_START));
    assert!(!flags("foo__bar", 4).intersects(ClassFlags::SUB_WORD_START | ClassFlags::SUB_WORD_END));
}

#[test]
fn test_line_flags() {
    let text = "ab\n\ncd";
    assert!(flags(text, 0).contains(ClassFlags::LINE_START));
    assert!(flags(text, 2).contains(ClassFlags::LINE_END));
    assert!(flags(text, 3).contains(ClassFlags::EMPTY_LINE));
    assert!(flags(text, 6).contains(ClassFlags::LINE_END));
    assert!(flags("", 0).contains(ClassFlags::EMPTY_LINE));
}

#[test]
fn test_find_by_class_inclusive_and_clamped() {
    let buf = TextBuffer::new("foo bar");
    assert_eq!(find_by_class(&buf, 4, true, ClassFlags::WORD_START), 4);
    assert_eq!(find_by_class(&buf, 5, false, ClassFlags::WORD_START), 4);
    assert_eq!(find_by_class(&buf, 5, true, ClassFlags::WORD_START), 5);
    assert_eq!(find_by_class(&buf, 99, false, ClassFlags::WORD_END), 7);
}

#[test]
fn test_is_escaped_by_scope() {
    let buf = TextBuffer::new("x = 'str' # c").with_annotations(vec![
        Annotation::new(4..9, "string.quoted.single"),
        Annotation::new(10..13, "comment.line"),
        Annotation::new(0..1, "commentary"),
    ]);
    assert!(is_escaped(&buf, 5));
    assert!(is_escaped(&buf, 11));
    assert!(!is_escaped(&buf, 0));
    assert!(!is_escaped(&buf, 9));
}

#[test]
fn test_selector_matches_dotted() {
    assert!(selector_matches("meta.function", "meta.function"));
    assert!(selector_matches("meta.function", "meta.function.python"));
    assert!(!selector_matches("meta.function", "meta.function-call"));
    assert!(!selector_matches("meta.function.python", "meta.function"));
}

#[test]
fn test_annotations_find_by_selector_sorted() {
    let ann = ScopeAnnotations::new(vec![
        Annotation::new(10..20, "meta.function.c"),
        Annotation::new(0..5, "meta.function.c"),
        Annotation::new(3..4, "comment"),
        Annotation::new(7..7, "meta.function"),
    ]);
    assert_eq!(ann.len(), 3);
    assert_eq!(
        ann.find_by_selector("meta.function"),
        vec![Region::new(0, 5), Region::new(10, 20)]
    );
    let mut at3 = ann.scopes_at(3);
    at3.sort();
    assert_eq!(at3, vec!["comment", "meta.function.c"]);
    assert!(ann.scopes_at(5).is_empty());
}

#[test]
fn test_interval_tree_queries() {
    let tree = IntervalTree::new(vec![(0..10, 1), (5..15, 2), (20..30, 3)]);
    assert_eq!(tree.len(), 3);

    let res: Vec<i32> = tree.query(5..10).into_iter().map(|(_, v)| *v).collect();
    assert_eq!(res, vec![1, 2]);
    assert!(tree.query(16..19).is_empty());

    let res: Vec<i32> = tree.query(0..30).into_iter().map(|(_, v)| *v).collect();
    assert_eq!(res, vec![1, 2, 3]);

    let stab: Vec<i32> = tree.stab(25).into_iter().map(|(_, v)| *v).collect();
    assert_eq!(stab, vec![3]);
}

#[test]
fn test_interval_tree_empty() {
    let tree: IntervalTree<i32> = IntervalTree::new(vec![]);
    assert!(tree.is_empty());
    assert!(tree.query(0..10).is_empty());
}

#[test]
fn test_pattern_find_all_with_flags() {
    let found = pattern::find_all("Sub x\nEND sub", "sub/i").unwrap();
    assert_eq!(found, vec![Region::new(0, 3), Region::new(10, 13)]);
}
