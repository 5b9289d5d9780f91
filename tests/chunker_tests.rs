use smartdoc::chunker::{Chunker, DEFAULT_MAX_CHUNK_SIZE};

/// Strip the periods the chunker inserts at split points and flatten
/// whitespace, so reconstruction can be compared against the input.
fn normalize(text: &str) -> String {
    text.replace('.', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn sample_text(sentences: usize, sentence_len: usize) -> String {
    (0..sentences)
        .map(|i| format!("{}{}", "word ".repeat(sentence_len / 5), i))
        .collect::<Vec<_>>()
        .join(". ")
}

#[test]
fn empty_input_yields_empty_sequence() {
    for size in [1, 15, 1024] {
        let chunker = Chunker::new(size);
        assert_eq!(chunker.chunks("").count(), 0, "size {size}");
    }
}

#[test]
fn small_budget_splits_on_sentence_boundaries_in_order() {
    let chunker = Chunker::new(15);
    let chunks: Vec<String> = chunker.chunks("Hello world. This is a test. Short.").collect();

    assert_eq!(
        chunks,
        vec![
            "Hello world.".to_string(),
            "This is a test.".to_string(),
            "Short..".to_string(),
        ]
    );
    for chunk in &chunks {
        assert!(chunk.chars().count() <= 15, "chunk too long: {chunk:?}");
    }
}

#[test]
fn chunks_never_exceed_max_except_oversized_single_sentences() {
    let text = sample_text(40, 60);
    for size in [30, 80, 200, 1024] {
        let chunker = Chunker::new(size);
        for chunk in chunker.chunks(&text) {
            let len = chunk.chars().count();
            if len > size {
                // An overflow is only legal when the chunk is one whole
                // sentence that alone exceeds the limit.
                assert!(
                    !chunk.trim_end_matches('.').contains(". "),
                    "multi-sentence chunk over the limit: {chunk:?}"
                );
            }
        }
    }
}

#[test]
fn concatenated_chunks_reconstruct_the_input() {
    let texts = [
        "Hello world. This is a test. Short.".to_string(),
        "One sentence without a final period".to_string(),
        sample_text(25, 80),
        "Line one.\nLine two. Line three.".to_string(),
    ];

    for text in &texts {
        for size in [10, 64, DEFAULT_MAX_CHUNK_SIZE] {
            let chunker = Chunker::new(size);
            let joined: Vec<String> = chunker.chunks(text).collect();
            assert_eq!(
                normalize(&joined.join(" ")),
                normalize(text),
                "reconstruction failed for size {size}"
            );
        }
    }
}

#[test]
fn chunking_is_restartable() {
    let chunker = Chunker::new(100);
    let text = sample_text(12, 40);
    let first: Vec<String> = chunker.chunks(&text).collect();
    let second: Vec<String> = chunker.chunks(&text).collect();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn threshold_below_first_sentence_still_yields_it_whole() {
    let chunker = Chunker::new(5);
    let chunks: Vec<String> = chunker.chunks("An unsplittable opening sentence").collect();
    assert_eq!(chunks, vec!["An unsplittable opening sentence.".to_string()]);
}
