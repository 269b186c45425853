//! Sentence-aligned chunking for speech synthesis.
//!
//! Platform speech engines choke on very long utterances, so text is fed to
//! them in bounded pieces. Chunk boundaries align with sentence terminators
//! wherever possible; a single sentence longer than the limit becomes its
//! own oversized chunk rather than being split mid-sentence.

const TERMINATORS: [char; 4] = ['.', '!', '?', '\n'];

pub const DEFAULT_MAX_CHUNK_LEN: usize = 180;

/// Split `text` into non-empty chunks of at most `max_len` characters
/// (except for oversized single sentences). Concatenating the chunks in
/// order reproduces `text` exactly; empty input yields no chunks.
pub fn split_into_chunks(text: &str, max_len: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for span in sentence_spans(text) {
        let span_len = span.chars().count();
        if current_len + span_len > max_len && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        current.push_str(span);
        current_len += span_len;
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Split into sentence-like spans: a run of non-terminator characters plus
/// the terminator run that closes it. A leading terminator run forms its own
/// span, so concatenating the spans always reproduces the input exactly.
fn sentence_spans(text: &str) -> Vec<&str> {
    let mut spans = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let body_end = rest.find(&TERMINATORS[..]).unwrap_or(rest.len());
        let span_end = rest[body_end..]
            .char_indices()
            .find(|(_, c)| !TERMINATORS.contains(c))
            .map(|(i, _)| body_end + i)
            .unwrap_or(rest.len());
        spans.push(&rest[..span_end]);
        rest = &rest[span_end..];
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_input_yields_no_chunks() {
        assert!(split_into_chunks("", 180).is_empty());
    }

    #[test]
    fn short_text_is_a_single_chunk() {
        assert_eq!(split_into_chunks("Hello there.", 180), vec!["Hello there."]);
    }

    #[test]
    fn splits_at_sentence_boundaries() {
        let chunks = split_into_chunks("One sentence. Another sentence. Third one.", 20);
        assert_eq!(
            chunks,
            vec!["One sentence.", " Another sentence.", " Third one."]
        );
    }

    #[test]
    fn packs_sentences_up_to_the_limit() {
        let chunks = split_into_chunks("Aa. Bb. Cc. Dd.", 8);
        assert_eq!(chunks, vec!["Aa. Bb.", " Cc. Dd."]);
    }

    #[test]
    fn oversized_sentence_stays_whole() {
        let long = "this sentence just keeps going and going without a break.";
        let chunks = split_into_chunks(long, 10);
        assert_eq!(chunks, vec![long]);
    }

    #[test]
    fn newline_counts_as_terminator() {
        let chunks = split_into_chunks("first line\nsecond line", 12);
        assert_eq!(chunks, vec!["first line\n", "second line"]);
    }

    #[test]
    fn leading_terminators_are_preserved() {
        let chunks = split_into_chunks("...wait. What?", 8);
        assert_eq!(chunks.concat(), "...wait. What?");
        assert_eq!(chunks[0], "...wait.");
    }

    #[test]
    fn trailing_terminator_run_attaches_to_its_sentence() {
        assert_eq!(split_into_chunks("Really?!", 180), vec!["Really?!"]);
    }

    proptest! {
        #[test]
        fn chunks_form_an_exact_partition(text in "[ -~\n]{0,300}", max in 10usize..120) {
            let chunks = split_into_chunks(&text, max);
            prop_assert_eq!(chunks.concat(), text);
            for chunk in &chunks {
                prop_assert!(!chunk.is_empty());
            }
        }

        #[test]
        fn only_single_span_chunks_exceed_the_limit(text in "[ -~\n]{0,300}", max in 10usize..120) {
            for chunk in split_into_chunks(&text, max) {
                if chunk.chars().count() > max {
                    prop_assert_eq!(sentence_spans(&chunk).len(), 1);
                }
            }
        }
    }
}
