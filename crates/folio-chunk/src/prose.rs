//! Character-bounded chunking of prose on paragraph and sentence boundaries.

/// Default character bound per prose chunk.
pub const DEFAULT_MAX_CHARS: usize = 1000;

/// Splits prose into chunks of roughly `max_chars` characters.
///
/// Paragraphs (blank-line delimited) pack greedily; a paragraph that alone
/// exceeds the bound is split on sentence terminators and its sentences pack
/// greedily instead, joined by single spaces with the terminators consumed.
/// A single sentence longer than the bound is emitted whole: accepted
/// overflow, the one case the bound does not hold. Lengths are counted in
/// chars. The bound check ignores the joiner, so a packed chunk may run over
/// by the joiner's width.
#[must_use]
pub fn chunk_prose(content: &str, max_chars: usize) -> Vec<String> {
    if char_len(content) <= max_chars {
        return vec![content.to_owned()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();

    for paragraph in content.split("\n\n") {
        if char_len(paragraph) > max_chars {
            pack_sentences(paragraph, max_chars, &mut current, &mut chunks);
        } else if char_len(&current) + char_len(paragraph) > max_chars {
            flush(&mut current, &mut chunks);
            current.push_str(paragraph);
        } else {
            if !current.is_empty() {
                current.push_str("\n\n");
            }
            current.push_str(paragraph);
        }
    }

    flush(&mut current, &mut chunks);
    chunks
}

/// Packs the sentences of one oversized paragraph into the running chunk.
fn pack_sentences(paragraph: &str, max_chars: usize, current: &mut String, chunks: &mut Vec<String>) {
    let sentences = paragraph
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty());
    for sentence in sentences {
        if char_len(current) + char_len(sentence) > max_chars {
            flush(current, chunks);
            current.push_str(sentence);
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(sentence);
        }
    }
}

/// Seals the accumulator as a trimmed chunk; whitespace-only content is
/// dropped rather than emitted.
fn flush(current: &mut String, chunks: &mut Vec<String>) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_owned());
    }
    current.clear();
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_is_one_verbatim_chunk() {
        let content = "A sentence.\n\nAnother paragraph.";
        assert_eq!(chunk_prose(content, 1000), vec![content.to_owned()]);
    }

    #[test]
    fn paragraphs_pack_until_the_bound() {
        let first = "a".repeat(400);
        let second = "b".repeat(400);
        let third = "c".repeat(400);
        let content = format!("{first}\n\n{second}\n\n{third}");
        let chunks = chunk_prose(&content, 1000);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], format!("{first}\n\n{second}"));
        assert_eq!(chunks[1], third);
    }

    #[test]
    fn oversized_paragraph_splits_on_sentences() {
        let sentence = format!("{} end", "word ".repeat(120)); // ~600 chars
        let content = format!("{sentence}. {sentence}. {sentence}.");
        let chunks = chunk_prose(&content, 1000);
        assert_eq!(chunks.len(), 3);
        for chunk in &chunks {
            assert!(char_len(chunk) <= 1000);
            assert!(!chunk.ends_with('.'), "terminators are consumed");
        }
    }

    #[test]
    fn sentence_terminators_are_consumed_and_runs_collapse() {
        let a = "x".repeat(600);
        let b = "y".repeat(600);
        let content = format!("{a}!! {b}?");
        let chunks = chunk_prose(&content, 1000);
        assert_eq!(chunks, vec![a, b]);
    }

    #[test]
    fn single_oversized_sentence_is_emitted_whole() {
        let content = "z".repeat(1500);
        let chunks = chunk_prose(&content, 1000);
        assert_eq!(chunks.len(), 1);
        assert_eq!(char_len(&chunks[0]), 1500);
    }

    #[test]
    fn oversized_sentence_between_normal_ones_still_flushes_neighbors() {
        let small = "short one";
        let big = "w".repeat(1200);
        let content = format!("{small}. {big}. {small}.");
        let chunks = chunk_prose(&content, 1000);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0], small);
        assert_eq!(char_len(&chunks[1]), 1200);
        assert_eq!(chunks[2], small);
    }

    #[test]
    fn emitted_chunks_are_trimmed() {
        let first = "a".repeat(995);
        let content = format!("{first}\n\n  padded  ");
        let chunks = chunk_prose(&content, 1000);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], first);
        assert_eq!(chunks[1], "padded");
    }

    #[test]
    fn lengths_are_chars_not_bytes() {
        // 600 two-byte chars: over the bound in bytes, under it in chars.
        let content = "é".repeat(600);
        let chunks = chunk_prose(&content, 1000);
        assert_eq!(chunks, vec![content]);
    }

    mod proptest_prose {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn never_panics(content in "[ -~\n]{0,400}", max_chars in 1usize..200) {
                let _ = chunk_prose(&content, max_chars);
            }

            #[test]
            fn words_pack_within_the_bound_or_alone(
                words in proptest::collection::vec("[a-z]{1,30}", 1..40),
                max_chars in 20usize..80,
            ) {
                // The length check ignores the joiner, so a packed chunk can
                // run one space past the bound. Anything further must be a
                // single word too long to ever fit.
                let content = words.join(". ");
                for chunk in chunk_prose(&content, max_chars) {
                    let within = char_len(&chunk) <= max_chars + 1;
                    let lone_overflow = !chunk.contains(' ') && char_len(&chunk) > max_chars;
                    prop_assert!(within || lone_overflow);
                }
            }

            #[test]
            fn no_word_is_lost(words in proptest::collection::vec("[a-z]{2,12}", 1..40)) {
                let content = words.join(".\n\n");
                let chunks = chunk_prose(&content, 25);
                let rejoined = chunks.join(" ");
                for word in &words {
                    prop_assert!(rejoined.contains(word.as_str()));
                }
            }
        }
    }
}
