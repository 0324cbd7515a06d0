use web_data_reports::ingestion::decode_text;
use web_data_reports::processing::{text_metrics, TEXT_TOP_N};
use web_data_reports::types::WordCount;

#[test]
fn short_words_are_filtered_from_ranking_only() {
    let m = text_metrics("aa bb ccc dddd eeeee eeeee");
    assert_eq!(m.word_count, 6);
    assert_eq!(m.top_words, vec![WordCount::new("eeeee", 2)]);
}

#[test]
fn readme_fixture_metrics() {
    let bytes = std::fs::read("tests/fixtures/readme.txt").unwrap();
    let text = decode_text(&bytes);
    let m = text_metrics(&text);

    assert_eq!(m.characters, text.chars().count());
    assert_eq!(m.word_count, 28);
    assert_eq!(m.top_words.len(), 11);
    assert_eq!(m.top_words[0], WordCount::new("requests", 3));
    assert_eq!(m.top_words[1], WordCount::new("simple", 1));
    assert!(m.top_words.iter().any(|w| w.word == "there's"));
    assert!(m.top_words.iter().all(|w| w.word.len() >= 5));
}

#[test]
fn ranking_never_exceeds_cap() {
    let text = ('a'..='z')
        .map(|c| c.to_string().repeat(6))
        .collect::<Vec<_>>()
        .join(" ");
    let m = text_metrics(&text);
    assert_eq!(m.word_count, 26);
    assert_eq!(m.top_words.len(), TEXT_TOP_N);
    assert_eq!(m.top_words[0].word, "aaaaaa");
}

#[test]
fn lossy_decoding_counts_replacement_characters() {
    let text = decode_text(&[b'h', b'i', 0xFF, b'!']);
    let m = text_metrics(&text);
    assert_eq!(m.characters, 4);
    assert_eq!(m.word_count, 1);
}
