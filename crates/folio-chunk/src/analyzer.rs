//! Descriptive statistics attached to chunks as metadata.

use crate::types::{TableStructure, TextStructure};

/// Counts paragraphs, sentences, and words in a prose chunk.
///
/// Paragraphs are blank-line-delimited segments with non-whitespace content,
/// sentences are non-empty segments between terminator runs, words are
/// whitespace-delimited tokens.
#[must_use]
pub fn analyze_text(text: &str) -> TextStructure {
    TextStructure {
        paragraph_count: text.split("\n\n").filter(|p| !p.trim().is_empty()).count(),
        sentence_count: text
            .split(['.', '!', '?'])
            .filter(|s| !s.trim().is_empty())
            .count(),
        word_count: text.split_whitespace().count(),
    }
}

/// Estimates the shape of a tabular chunk from its non-blank lines.
///
/// Column count is the highest per-line separator count plus one; a header is
/// assumed when the first two lines agree on a nonzero separator count.
#[must_use]
pub fn analyze_table(text: &str) -> TableStructure {
    let rows: Vec<&str> = text.split('\n').filter(|l| !l.trim().is_empty()).collect();

    let estimated_columns = rows.iter().copied().map(separator_count).max().unwrap_or(0) + 1;
    let has_header = match rows.as_slice() {
        [first, second, ..] => {
            let count = separator_count(first);
            count > 0 && count == separator_count(second)
        }
        _ => false,
    };

    TableStructure {
        estimated_columns,
        row_count: rows.len(),
        has_header,
    }
}

/// Separator count of one line: pipes unless the line has none, then tabs.
fn separator_count(line: &str) -> usize {
    let pipes = line.matches('|').count();
    if pipes > 0 {
        pipes
    } else {
        line.matches('\t').count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_counts_paragraphs_sentences_words() {
        let text = "First sentence. Second one!\n\nThird here?";
        let info = analyze_text(text);
        assert_eq!(info.paragraph_count, 2);
        assert_eq!(info.sentence_count, 3);
        assert_eq!(info.word_count, 6);
    }

    #[test]
    fn blank_paragraphs_do_not_count() {
        let info = analyze_text("one\n\n   \n\ntwo");
        assert_eq!(info.paragraph_count, 2);
    }

    #[test]
    fn terminator_runs_count_as_one_boundary() {
        let info = analyze_text("Wait... what?!");
        assert_eq!(info.sentence_count, 2);
    }

    #[test]
    fn unterminated_text_is_one_sentence() {
        assert_eq!(analyze_text("no terminators here").sentence_count, 1);
    }

    #[test]
    fn empty_text_is_all_zeros() {
        let info = analyze_text("");
        assert_eq!(info.paragraph_count, 0);
        assert_eq!(info.sentence_count, 0);
        assert_eq!(info.word_count, 0);
    }

    #[test]
    fn pipe_table_shape() {
        let info = analyze_table("a | b | c\n1 | 2 | 3");
        assert_eq!(info.estimated_columns, 3);
        assert_eq!(info.row_count, 2);
        assert!(info.has_header);
    }

    #[test]
    fn tab_table_shape() {
        let info = analyze_table("a\tb\tc\nd\te\tf");
        assert_eq!(info.estimated_columns, 3);
        assert!(info.has_header);
    }

    #[test]
    fn pipes_take_precedence_over_tabs_within_a_line() {
        let info = analyze_table("a|b\tc\td\nx|y\tz\tw");
        assert_eq!(info.estimated_columns, 2);
        assert!(info.has_header);
    }

    #[test]
    fn column_estimate_takes_the_widest_line() {
        let info = analyze_table("a | b\n1 | 2 | 3 | 4\nx");
        assert_eq!(info.estimated_columns, 4);
        assert_eq!(info.row_count, 3);
    }

    #[test]
    fn header_needs_matching_nonzero_counts() {
        assert!(!analyze_table("a | b | c\nplain").has_header);
        assert!(!analyze_table("plain\ntext").has_header);
        assert!(!analyze_table("a | b | c").has_header);
    }

    #[test]
    fn blank_lines_are_ignored_everywhere() {
        let info = analyze_table("\n\n| a | b |\n\n| 1 | 2 |\n");
        assert_eq!(info.row_count, 2);
        assert!(info.has_header);
    }

    #[test]
    fn empty_table_text_is_a_single_column_nothing() {
        let info = analyze_table("");
        assert_eq!(info.estimated_columns, 1);
        assert_eq!(info.row_count, 0);
        assert!(!info.has_header);
    }
}
