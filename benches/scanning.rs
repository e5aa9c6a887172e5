//! Benchmarks for the per-keystroke work on large documents
//!
//! Run with: cargo bench scanning

use earshot::scan::{last_sentence, last_word};
use earshot::TextBuffer;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

/// A long document with the cursor at the end
fn document(sentences: usize) -> TextBuffer {
    let mut buffer = TextBuffer::new();
    for ch in "The quick brown fox jumps over the lazy dog. "
        .repeat(sentences)
        .chars()
    {
        buffer.insert_char(ch);
    }
    buffer
}

// ============================================================================
// Read-back scans
// ============================================================================

#[divan::bench(args = [10, 1_000, 10_000])]
fn word_at_end(bencher: divan::Bencher, sentences: usize) {
    let buffer = document(sentences);
    bencher.bench(|| last_word(divan::black_box(&buffer)));
}

#[divan::bench(args = [10, 1_000, 10_000])]
fn sentence_at_end(bencher: divan::Bencher, sentences: usize) {
    let buffer = document(sentences);
    bencher.bench(|| last_sentence(divan::black_box(&buffer)));
}

// ============================================================================
// Buffer edits
// ============================================================================

#[divan::bench]
fn insert_at_start_10k_sentences(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| TextBuffer::with_text(&"foo bar baz. ".repeat(10_000)))
        .bench_local_values(|mut buffer| {
            buffer.insert_char(divan::black_box('x'));
            buffer
        });
}

#[divan::bench]
fn remove_at_end_10k_sentences(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| document(10_000))
        .bench_local_values(|mut buffer| {
            buffer.remove_char();
            buffer
        });
}
