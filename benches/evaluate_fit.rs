use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crossgen::{enumerate_fits, evaluate_fit, Coord, Crossword, Direction, Word};

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut crossword = Crossword::new(13, 13, 0);
    crossword
        .force_place(&Word::from("астеа"), Coord::new(4, 3), Direction::Right)
        .unwrap();
    crossword
        .force_place(&Word::from("стаж"), Coord::new(6, 4), Direction::Right)
        .unwrap();
    let word = Word::from("тесак");

    c.bench_function("evaluate_fit", |b| {
        b.iter(|| {
            evaluate_fit(
                black_box(crossword.grid()),
                black_box(&word),
                Coord::new(2, 5),
                Direction::Down,
                false,
            )
        })
    });

    c.bench_function("enumerate_fits", |b| {
        b.iter(|| enumerate_fits(black_box(crossword.grid()), black_box(&word), false))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
