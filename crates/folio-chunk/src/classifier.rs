//! Tabular/prose classification from line-level separator statistics.
//!
//! The decision is a fixed-threshold policy over separator ratios, separator
//! count consistency, and a small domain keyword list. The constants below
//! are load-bearing: changing any of them changes classification results and
//! therefore chunk shapes, ids, and everything indexed downstream.

use std::collections::HashMap;

/// Share of lines carrying at least two pipes that makes content tabular.
const PIPE_RATIO_TABULAR: f64 = 0.4;
/// Share of lines carrying a tab that makes content tabular.
const TAB_RATIO_TABULAR: f64 = 0.3;
/// Minimum share of the dominant separator count for the consistency route.
const CONSISTENCY_TABULAR: f64 = 0.6;
/// Lowered pipe-ratio bar when a table keyword is present.
const KEYWORD_PIPE_RATIO: f64 = 0.2;
/// Lowered tab-ratio bar when a table keyword is present.
const KEYWORD_TAB_RATIO: f64 = 0.2;
/// Case-insensitive substrings whose presence lowers the separator bars.
const TABLE_KEYWORDS: [&str; 7] = [
    "table", "column", "row", "premium", "coverage", "benefit", "amount",
];

/// Decides whether section content is tabular.
///
/// Deterministic: same content, same answer. Ratios divide by the full line
/// count of the `'\n'` split, blanks included; content under two lines is
/// never tabular.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn is_tabular(content: &str) -> bool {
    let lines: Vec<&str> = content.split('\n').collect();
    if lines.len() < 2 {
        return false;
    }
    let total = lines.len() as f64;

    let pipe_lines = lines.iter().filter(|l| l.matches('|').count() >= 2).count();
    let tab_lines = lines.iter().filter(|l| l.contains('\t')).count();
    let pipe_ratio = pipe_lines as f64 / total;
    let tab_ratio = tab_lines as f64 / total;

    let separator_counts: Vec<usize> = lines
        .iter()
        .filter_map(|l| {
            if l.contains('|') {
                Some(l.matches('|').count())
            } else if l.contains('\t') {
                Some(l.matches('\t').count())
            } else {
                None
            }
        })
        .collect();
    let consistency = dominant_share(&separator_counts);

    let lowered = content.to_lowercase();
    let keyword_present = TABLE_KEYWORDS.iter().any(|k| lowered.contains(k));

    pipe_ratio > PIPE_RATIO_TABULAR
        || tab_ratio > TAB_RATIO_TABULAR
        || (consistency > CONSISTENCY_TABULAR && separator_counts.len() > 1)
        || (keyword_present && (pipe_ratio > KEYWORD_PIPE_RATIO || tab_ratio > KEYWORD_TAB_RATIO))
}

/// Share of the most frequent value in `counts`, 0 when empty.
#[allow(clippy::cast_precision_loss)]
fn dominant_share(counts: &[usize]) -> f64 {
    if counts.is_empty() {
        return 0.0;
    }
    let mut freq: HashMap<usize, usize> = HashMap::new();
    for &count in counts {
        *freq.entry(count).or_insert(0) += 1;
    }
    let dominant = freq.values().copied().max().unwrap_or(0);
    dominant as f64 / counts.len() as f64
}
