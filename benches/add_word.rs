use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use crossgen::{Crossword, Word};

pub fn criterion_benchmark(c: &mut Criterion) {
    let words: Vec<Word> = ["стаж", "жест", "астра", "тесак", "сеть", "тата", "жар", "раса"]
        .iter()
        .map(|w| Word::from(*w))
        .collect();

    c.bench_function("add_word", |b| {
        b.iter_batched(
            || Crossword::new(13, 13, 42),
            |mut crossword| {
                for word in words.iter() {
                    crossword.add_word(black_box(word));
                }
                crossword
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
