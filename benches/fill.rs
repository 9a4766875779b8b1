use criterion::{black_box, criterion_group, criterion_main, Criterion};
use xfill::{words::parse_words, BacktrackingFiller, Crossword, FillConfig, Filler, Puzzle};

fn puzzle(structure: &str, words: &str) -> Puzzle {
    let crossword = Crossword::new(structure).expect("failed to parse structure");
    let words = parse_words(words).expect("failed to parse words");
    Puzzle::from_crossword(crossword, words).expect("failed to build puzzle")
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let sample = puzzle(
        include_str!("../data/structure0.txt"),
        include_str!("../data/words0.txt"),
    );
    let square = puzzle(
        include_str!("../data/structure1.txt"),
        include_str!("../data/words1.json"),
    );

    for (name, forward_checking) in [("forward_checking", true), ("plain", false)] {
        let config = FillConfig {
            forward_checking,
            step_limit: None,
        };

        c.bench_function(&format!("fill_structure0_{}", name), |b| {
            b.iter(|| {
                let mut filler = BacktrackingFiller::new(config);
                assert!(filler.fill(black_box(&sample)).is_ok());
            });
        });

        c.bench_function(&format!("fill_word_square_{}", name), |b| {
            b.iter(|| {
                let mut filler = BacktrackingFiller::new(config);
                assert!(filler.fill(black_box(&square)).is_ok());
            });
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
