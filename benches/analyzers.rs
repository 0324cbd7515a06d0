use criterion::{black_box, criterion_group, criterion_main, Criterion};

use web_data_reports::processing::{summarize_posts, summarize_yearly, text_metrics};
use web_data_reports::types::{Post, TableRow};

fn synthetic_rows(months: usize, years: usize) -> Vec<TableRow> {
    (0..months)
        .map(|m| {
            let mut row = TableRow::new();
            row.insert("Month".to_string(), format!("M{m}"));
            for y in 0..years {
                row.insert(format!("{}", 1900 + y), format!("{}", (m * 31 + y * 7) % 1000));
            }
            row
        })
        .collect()
}

fn synthetic_text(words: usize) -> String {
    const VOCAB: [&str; 8] = [
        "requests", "library", "python", "session", "cookies", "http", "the", "elegant",
    ];
    (0..words)
        .map(|i| VOCAB[(i * 7 + i / 3) % VOCAB.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_analyzers(c: &mut Criterion) {
    let rows = synthetic_rows(1_000, 20);
    c.bench_function("summarize_yearly_1k_rows_20_years", |b| {
        b.iter(|| summarize_yearly(black_box(&rows)).unwrap())
    });

    let posts: Vec<Post> = (0..500)
        .map(|i| Post::new(Some(i % 10), synthetic_text(8), synthetic_text(60)))
        .collect();
    c.bench_function("summarize_posts_500", |b| {
        b.iter(|| summarize_posts(black_box(&posts)))
    });

    let text = synthetic_text(50_000);
    c.bench_function("text_metrics_50k_words", |b| {
        b.iter(|| text_metrics(black_box(&text)))
    });
}

criterion_group!(benches, bench_analyzers);
criterion_main!(benches);
