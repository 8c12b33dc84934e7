use std::time::Instant;
use crossgen::{
    Coord, Direction, Generator, GeneratorConfig, SeedPlacement, SingleThreadedGenerator, Word,
};

fn main() {
    let now = Instant::now();

    let words: Vec<Word> = [
        "стаж", "жест", "астра", "тесак", "сеть", "тата", "жар", "раса", "сера", "таз", "жатва",
        "вата", "сват", "трест", "рост", "сторож", "тост", "астат", "сажа", "стерх",
    ]
    .iter()
    .map(|w| Word::from(*w))
    .collect();

    let config = GeneratorConfig {
        trials: 2_000,
        checkpoint_interval: 500,
        seed: Some(1),
        placements: vec![
            SeedPlacement::new("астеа", Coord::new(4, 3), Direction::Right),
            SeedPlacement::new("стаж", Coord::new(6, 4), Direction::Right),
        ],
        ..GeneratorConfig::default()
    };

    let best = SingleThreadedGenerator::new(&words, &config)
        .generate(&mut |checkpoint| {
            println!(
                "{} / {}: score {}",
                checkpoint.completed, checkpoint.total, checkpoint.best.score
            )
        })
        .unwrap();

    println!("Generated in {}ms", now.elapsed().as_millis());
    println!("{}", best.crossword);
    println!("Score: {}", best.score);
    println!("Seed: {}", best.seed());
}
