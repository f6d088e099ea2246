use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tubequiz_core::chunker;
use tubequiz_core::question::{parse_question, RawQuestionBlock};

fn bench_parse_question(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_question");

    let well_formed = RawQuestionBlock::new(
        "Q: What is 2+2?\n1) 3\n2) 4\n3) 5\n4) 6\nCorrect Answer: 2",
    );
    let malformed = RawQuestionBlock::new("Sure! Here is a question about the text:\n1) maybe");
    let chatty = RawQuestionBlock::new(format!(
        "Q: {}?\n1) {}\n2) b\n3) c\n4) d\nCorrect Answer: 1\n{}",
        "why ".repeat(40),
        "long option ".repeat(20),
        "Explanation: ".repeat(50)
    ));

    group.bench_function("well_formed", |b| {
        b.iter(|| parse_question(black_box(&well_formed)))
    });

    group.bench_function("malformed", |b| {
        b.iter(|| parse_question(black_box(&malformed)))
    });

    group.bench_function("chatty", |b| b.iter(|| parse_question(black_box(&chatty))));

    group.finish();
}

fn bench_chunker(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunker");

    let transcript = generate_transcript(10_000);
    let no_spaces = "x".repeat(50_000);

    group.bench_function("transcript_10k_words", |b| {
        b.iter(|| chunker::split(black_box(&transcript), 7000, 1000).unwrap())
    });

    group.bench_function("hard_cuts_50k_chars", |b| {
        b.iter(|| chunker::split(black_box(&no_spaces), 7000, 1000).unwrap())
    });

    group.finish();
}

fn generate_transcript(words: usize) -> String {
    let vocab = ["so", "today", "we", "are", "going", "to", "talk", "about", "rust"];
    let mut s = String::new();
    for i in 0..words {
        s.push_str(vocab[i % vocab.len()]);
        s.push(if i % 17 == 16 { '\n' } else { ' ' });
    }
    s
}

criterion_group!(benches, bench_parse_question, bench_chunker);
criterion_main!(benches);
