use super::*;
use crate::buffer::TextBuffer;
use crate::demarcation::Demarcation;
use crate::oracle::Annotation;

#[test]
fn test_region_kind_parse() {
    assert_eq!("subwords".parse::<RegionKind>().unwrap(), RegionKind::SubWords);
    assert_eq!("braces".parse::<RegionKind>().unwrap(), RegionKind::Braces);
    for kind in RegionKind::ALL {
        assert_eq!(kind.name().parse::<RegionKind>().unwrap(), kind);
    }
    let err = "paragraphs".parse::<RegionKind>().unwrap_err();
    assert_eq!(err.code, "UNKNOWN_REGION_KIND");
}

#[test]
fn test_family_from_extension_and_name() {
    assert_eq!(LanguageFamily::from_extension("py"), LanguageFamily::Python);
    assert_eq!(
        LanguageFamily::from_extension("HPP"),
        LanguageFamily::CLike(CLikeDialect::Cpp)
    );
    assert_eq!(LanguageFamily::from_extension("md"), LanguageFamily::Custom);
    assert_eq!(LanguageFamily::from_extension("zig"), LanguageFamily::default());
    assert_eq!(
        LanguageFamily::from_name("source.c++"),
        Some(LanguageFamily::CLike(CLikeDialect::Cpp))
    );
    assert_eq!(LanguageFamily::from_name("yaml"), Some(LanguageFamily::Indentation));
    assert_eq!(LanguageFamily::from_name("cobol"), None);
    assert_eq!(
        LanguageFamily::from_path(std::path::Path::new("src/main.rs")),
        LanguageFamily::CLike(CLikeDialect::Rust)
    );
}

#[test]
fn test_delimiter_kinds() {
    let buf = TextBuffer::new("a(bc)d");
    let s = build_strategy(LanguageFamily::default(), RegionKind::Parentheses, &buf).unwrap();
    assert_eq!(s.prev_begin(3), 2);
    assert_eq!(s.next_end(3), 4);
}

#[test]
fn test_c_functions_from_annotations() {
    let text = "int a(){x}\n/* doc */\nint b(){y}\n";
    let buf = TextBuffer::new(text).with_annotations(vec![
        Annotation::new(0..10, "meta.function.c"),
        Annotation::new(9..10, "punctuation.section.block.end.c"),
        Annotation::new(11..20, "comment.block.c"),
        Annotation::new(21..31, "meta.function.c"),
        Annotation::new(30..31, "punctuation.section.block.end.c"),
    ]);
    let s = build_strategy(LanguageFamily::CLike(CLikeDialect::C), RegionKind::Functions, &buf).unwrap();
    assert_eq!(s.prev_begin(5), 0);
    assert_eq!(s.next_end(5), 10);
    assert_eq!(s.prev_begin(25), 11);
    assert_eq!(s.next_end(25), 31);
}

#[test]
fn test_javascript_function_keyword_bindings() {
    let text = "var f = function() {\n}\n  obj.g = function() {}\nx: function(){}\n// function\n";
    let closes: Vec<Annotation> = text
        .char_indices()
        .filter(|(_, c)| *c == '}')
        .map(|(i, _)| Annotation::new(i..i + 1, "punctuation.section.block.end.js"))
        .chain(std::iter::once(Annotation::new(63..74, "comment.line.double-slash.js")))
        .collect();
    let buf = TextBuffer::new(text).with_annotations(closes);
    let table = DeclarationTable::for_dialect(CLikeDialect::JavaScript, RegionKind::Functions);
    let begins = table.declarations.collect_begins(&buf).unwrap();
    assert_eq!(begins, vec![0, 23, 47]);
}

#[test]
fn test_fortran_keywords() {
    let text = "SUBROUTINE a\nx\nEND SUBROUTINE a\nsubroutine b\nend subroutine\n";
    let buf = TextBuffer::new(text);
    let table = DeclarationTable::for_dialect(CLikeDialect::Fortran, RegionKind::Functions);
    assert_eq!(table.declarations.collect_begins(&buf).unwrap(), vec![0, 32]);
    assert_eq!(table.closes.collect_ends(&buf).unwrap(), vec![29, 59]);

    let s = build_strategy(LanguageFamily::CLike(CLikeDialect::Fortran), RegionKind::Functions, &buf)
        .unwrap();
    assert_eq!(s.next_end(5), 29);
    assert_eq!(s.prev_begin(40), 32);
}

#[test]
fn test_python_functions_skip_lambdas() {
    let text = "@d\ndef f():\n    g = lambda: 1\n    return g\n";
    let buf = TextBuffer::new(text).with_annotations(vec![
        Annotation::new(0..2, "meta.annotation.python"),
        Annotation::new(3..42, "meta.function.python"),
        Annotation::new(20..29, "meta.function.inline.python"),
    ]);
    let s = build_strategy(LanguageFamily::Python, RegionKind::Functions, &buf).unwrap();
    assert_eq!(s.prev_begin(20), 0);
    assert_eq!(s.next_end(20), 42);
}

#[test]
fn test_custom_family_uses_blocks() {
    let buf = TextBuffer::new("one\ntwo\n\nthree\n");
    let s = build_strategy(LanguageFamily::Custom, RegionKind::Functions, &buf).unwrap();
    assert_eq!(s.prev_begin(5), 0);
    assert_eq!(s.next_end(5), 9);
}

#[test]
fn test_custom_pattern_strategy() {
    let buf = TextBuffer::new("a ; b ; c");
    let s = custom_strategy(&buf, ";").unwrap();
    assert_eq!(s.prev_begin(4), 3);
    assert_eq!(s.next_end(4), 6);
}
