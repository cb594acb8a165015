//! Row-bounded chunking of tabular content.

/// Default row bound per table chunk.
pub const DEFAULT_MAX_ROWS: usize = 10;
/// Leading non-blank lines probed for a header.
const HEADER_PROBE: usize = 3;

/// Splits tabular content into groups of at most `max_rows` non-blank lines.
///
/// Content that fits the bound comes back verbatim as a single chunk, blank
/// lines included. Larger content is partitioned after locating a header:
/// the first of the leading three non-blank lines carrying a `|` or tab.
/// Every group after the first gets the header prepended, so each fragment
/// of the table stays independently interpretable. A header spanning more
/// than one line is out of contract; exactly one line is ever selected.
#[must_use]
pub fn chunk_table(content: &str, max_rows: usize) -> Vec<String> {
    // A zero bound would never advance through the body.
    let max_rows = max_rows.max(1);

    let non_blank: Vec<&str> = content
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect();
    if non_blank.len() <= max_rows {
        return vec![content.to_owned()];
    }

    let header_pos = non_blank
        .iter()
        .take(HEADER_PROBE)
        .position(|line| line.contains('|') || line.contains('\t'));
    let (header, body_start) = match header_pos {
        Some(i) => (Some(non_blank[i]), i + 1),
        None => (None, 0),
    };

    let mut chunks = Vec::new();
    let mut start = body_start;
    while start < non_blank.len() {
        let end = (start + max_rows).min(non_blank.len());
        let group = non_blank[start..end].join("\n");
        match header {
            Some(header) if start > body_start => chunks.push(format!("{header}\n{group}")),
            _ => chunks.push(group),
        }
        start = end;
    }
    chunks
}
