use criterion::{criterion_group, criterion_main, Criterion};
use rift_scope::algebra::RegionAlgebra;
use rift_scope::buffer::{BufferView, TextBuffer};
use rift_scope::demarcation::{ClassDemarcation, Demarcation};
use rift_scope::language::{build_strategy, CLikeDialect, LanguageFamily, RegionKind};
use rift_scope::oracle::Annotation;
use rift_scope::region::Region;
use std::hint::black_box;

fn movement_by_class(c: &mut Criterion) {
    let mut group = c.benchmark_group("movement_by_class");

    // 100 words per line, 1000 lines
    let line = "someWord other_word ".repeat(50) + "\n";
    let buf = TextBuffer::new(&line.repeat(1000));

    group.bench_function("move_word_forward", |b| {
        let algebra = RegionAlgebra::new(ClassDemarcation::word(&buf), buf.len());
        b.iter(|| {
            let mut region = Region::caret(0);
            for _ in 0..1000 {
                region = algebra.movement_next(black_box(region));
            }
            region
        })
    });

    group.bench_function("move_subword_forward", |b| {
        let algebra = RegionAlgebra::new(ClassDemarcation::sub_word(&buf), buf.len());
        b.iter(|| {
            let mut region = Region::caret(0);
            for _ in 0..1000 {
                region = algebra.movement_next(black_box(region));
            }
            region
        })
    });

    group.finish();
}

fn declaration_lists(c: &mut Criterion) {
    let mut group = c.benchmark_group("declaration_lists");

    let function = "int f(){return 1;}\n";
    let count = 5_000;
    let width = function.chars().count();
    let annotations = (0..count).flat_map(|i| {
        let start = i * width;
        [
            Annotation::new(start..start + width - 1, "meta.function.c"),
            Annotation::new(start + width - 2..start + width - 1, "punctuation.section.block.end.c"),
        ]
    });
    let buf = TextBuffer::new(&function.repeat(count)).with_annotations(annotations.collect::<Vec<_>>());

    group.bench_function("build_functions", |b| {
        b.iter(|| {
            build_strategy(
                LanguageFamily::CLike(CLikeDialect::C),
                RegionKind::Functions,
                black_box(&buf),
            )
        })
    });

    group.bench_function("complete_functions", |b| {
        let strategy =
            build_strategy(LanguageFamily::CLike(CLikeDialect::C), RegionKind::Functions, &buf)
                .unwrap();
        b.iter(|| {
            (0..buf.len())
                .step_by(97)
                .map(|p| strategy.next_end(strategy.prev_begin(black_box(p))))
                .sum::<usize>()
        })
    });

    group.finish();
}

criterion_group!(benches, movement_by_class, declaration_lists);
criterion_main!(benches);
