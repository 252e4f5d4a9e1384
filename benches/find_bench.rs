use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mpad::search::find_forward;
use mpad::{Editor, FindNavigator, FindOptions, Offset};

fn document() -> String {
    "The quick brown fox jumps over the lazy dog.\n".repeat(10_000) + "needle\n"
}

fn bench_find_forward(c: &mut Criterion) {
    let text = document();
    let insensitive = FindOptions {
        case_sensitive: false,
    };

    c.bench_function("find_forward case sensitive", |b| {
        b.iter(|| find_forward(black_box(&text), "needle", Offset(0), FindOptions::default()))
    });
    c.bench_function("find_forward case insensitive", |b| {
        b.iter(|| find_forward(black_box(&text), "NEEDLE", Offset(0), insensitive))
    });
}

fn bench_walk_occurrences(c: &mut Criterion) {
    let text = "The quick brown fox jumps over the lazy dog.\n".repeat(1_000);

    c.bench_function("find_next through 1000 matches", |b| {
        b.iter(|| {
            let mut editor = Editor::from_text(&text);
            let mut navigator = FindNavigator::default();
            let mut found = 0;
            while navigator.find_next("fox", &mut editor).is_match() {
                found += 1;
            }
            black_box(found)
        })
    });
}

criterion_group!(benches, bench_find_forward, bench_walk_occurrences);
criterion_main!(benches);
