//! Header-aware sectioning of page text.
//!
//! A page is scanned line by line against an ordered table of header shapes;
//! each detected header seals the running section and opens a new one. When
//! the scan seals nothing (empty page, headers with no body text), a single
//! fallback section holds the page verbatim, so callers always get at least
//! one section back.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::Section;

/// Title of the implicit section preceding the first detected header.
pub const LEADING_TITLE: &str = "Introduction";
/// Title of the single fallback section when no header is ever detected.
pub const FALLBACK_TITLE: &str = "Document Content";

/// Line-level header shapes, named for auditability of the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderShape {
    Markdown,
    Numbered,
    AllCaps,
    TitleColon,
    BoldAsterisk,
    BoldUnderscore,
}

/// Ordered rule table; evaluation is top-to-bottom, first match wins.
/// Order is a behavioral contract: an all-caps numbered line is `Numbered`,
/// never `AllCaps`.
static HEADER_RULES: LazyLock<Vec<(Regex, HeaderShape)>> = LazyLock::new(|| {
    [
        (r"^#{1,6}\s+.+$", HeaderShape::Markdown),
        (r"^\d+\.[\d.]*\s+.+$", HeaderShape::Numbered),
        (r"^[A-Z][A-Z\s]{5,}:?$", HeaderShape::AllCaps),
        (r"^[A-Z][a-z][\w\s]{3,}:$", HeaderShape::TitleColon),
        (r"^\*\*[^*]+\*\*$", HeaderShape::BoldAsterisk),
        (r"^__[^_]+__$", HeaderShape::BoldUnderscore),
    ]
    .into_iter()
    .map(|(pattern, shape)| {
        let regex = Regex::new(pattern).expect("header pattern compiles");
        (regex, shape)
    })
    .collect()
});

/// Matches a trimmed line against the rule table.
#[must_use]
pub fn detect_header(line: &str) -> Option<HeaderShape> {
    HEADER_RULES
        .iter()
        .find(|(regex, _)| regex.is_match(line))
        .map(|(_, shape)| *shape)
}

/// Splits page text into titled sections. Never returns an empty vec: when
/// the scan seals no section at all, the whole input comes back verbatim as
/// one [`FALLBACK_TITLE`] section.
#[must_use]
pub fn split_sections(text: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut title = LEADING_TITLE.to_owned();
    let mut content = String::new();

    for raw in text.split('\n') {
        let line = raw.trim();
        if line.is_empty() {
            // Keeps paragraph boundaries visible to the prose chunker.
            content.push('\n');
            continue;
        }
        if detect_header(line).is_some() {
            if content.trim().is_empty() {
                content.clear();
            } else {
                sections.push(Section {
                    title,
                    content: std::mem::take(&mut content),
                });
            }
            title = strip_title(line);
            continue;
        }
        content.push_str(line);
        content.push('\n');
    }

    if !content.trim().is_empty() {
        sections.push(Section { title, content });
    }

    if sections.is_empty() {
        return vec![Section {
            title: FALLBACK_TITLE.to_owned(),
            content: text.to_owned(),
        }];
    }
    sections
}

fn strip_title(line: &str) -> String {
    line.trim_matches(|c: char| matches!(c, '#' | '*' | '_' | ':' | ' '))
        .to_owned()
}
