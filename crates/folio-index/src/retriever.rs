//! Shapes index hits for the answer-generation collaborator.

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::store::{DocumentIndex, ScoredChunk};

/// Default number of chunks fetched per question.
pub const DEFAULT_TOP_K: usize = 5;

/// Clause reference snippet length, in chars.
const SNIPPET_CHARS: usize = 200;

/// A retrieved chunk with presentation defaults applied.
#[derive(Debug, Clone, Serialize)]
pub struct RetrievedChunk {
    pub text: String,
    pub title: String,
    pub page_number: u32,
    pub chunk_id: String,
    pub score: f32,
}

/// A pointer back into the source document.
#[derive(Debug, Clone, Serialize)]
pub struct ClauseReference {
    pub title: String,
    pub page_number: u32,
    pub text_snippet: String,
}

/// Queries a [`DocumentIndex`] and shapes the hits for presentation.
pub struct Retriever<'a, I: DocumentIndex> {
    index: &'a I,
}

impl<'a, I: DocumentIndex> Retriever<'a, I> {
    #[must_use]
    pub fn new(index: &'a I) -> Self {
        Self { index }
    }

    /// Fetches up to `top_k` chunks for `question`, best first. Blank titles
    /// become `Section {rank}` labels and page numbers are at least 1, so
    /// every hit can be cited.
    ///
    /// # Errors
    ///
    /// Returns an error if the index query fails.
    pub async fn retrieve(
        &self,
        document_id: &str,
        question: &str,
        top_k: usize,
    ) -> Result<Vec<RetrievedChunk>> {
        let hits = self.index.query(document_id, question, top_k).await?;
        debug!(document_id = %document_id, hits = hits.len(), "retrieved chunks");
        Ok(hits
            .into_iter()
            .enumerate()
            .map(|(rank, hit)| shape_hit(rank, hit))
            .collect())
    }
}

fn shape_hit(rank: usize, hit: ScoredChunk) -> RetrievedChunk {
    let ScoredChunk { record, score } = hit;
    let title = if record.title.trim().is_empty() {
        format!("Section {}", rank + 1)
    } else {
        record.title
    };
    RetrievedChunk {
        text: record.text,
        title,
        page_number: record.page_number.max(1),
        chunk_id: record.chunk_id,
        score,
    }
}

/// Formats retrieved chunks as one context window for answer generation:
/// `[Source {n} - Page {page}]` blocks joined by blank lines.
#[must_use]
pub fn build_context(chunks: &[RetrievedChunk]) -> String {
    chunks
        .iter()
        .enumerate()
        .map(|(i, chunk)| {
            format!("[Source {} - Page {}]\n{}", i + 1, chunk.page_number, chunk.text)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Builds clause references pointing back into the source document.
#[must_use]
pub fn clause_references(chunks: &[RetrievedChunk]) -> Vec<ClauseReference> {
    chunks
        .iter()
        .map(|chunk| ClauseReference {
            title: chunk.title.clone(),
            page_number: chunk.page_number,
            text_snippet: snippet(&chunk.text, SNIPPET_CHARS),
        })
        .collect()
}

/// First `max_chars` chars of `text`, `...`-suffixed when truncated.
fn snippet(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(text: &str, title: &str, page_number: u32) -> RetrievedChunk {
        RetrievedChunk {
            text: text.to_owned(),
            title: title.to_owned(),
            page_number,
            chunk_id: "d1_p1_s0_c0".to_owned(),
            score: 0.5,
        }
    }

    #[test]
    fn context_labels_sources_in_order() {
        let chunks = vec![chunk("First text.", "Intro", 1), chunk("Second text.", "Terms", 3)];
        let context = build_context(&chunks);
        assert_eq!(
            context,
            "[Source 1 - Page 1]\nFirst text.\n\n[Source 2 - Page 3]\nSecond text."
        );
    }

    #[test]
    fn empty_retrieval_is_an_empty_context() {
        assert_eq!(build_context(&[]), "");
    }

    #[test]
    fn references_carry_title_page_and_snippet() {
        let refs = clause_references(&[chunk("Short clause text.", "Exclusions", 4)]);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].title, "Exclusions");
        assert_eq!(refs[0].page_number, 4);
        assert_eq!(refs[0].text_snippet, "Short clause text.");
    }

    #[test]
    fn long_text_snippets_are_truncated_with_ellipsis() {
        let long = "x".repeat(350);
        let refs = clause_references(&[chunk(&long, "Terms", 1)]);
        assert_eq!(refs[0].text_snippet.chars().count(), 203);
        assert!(refs[0].text_snippet.ends_with("..."));
    }

    #[test]
    fn snippet_cuts_on_char_boundaries() {
        let text = "é".repeat(250);
        let cut = snippet(&text, 200);
        assert_eq!(cut.chars().count(), 203);
        assert!(cut.starts_with('é'));
    }

    fn scored(title: &str, page_number: u32, text: &str) -> ScoredChunk {
        use folio_chunk::{ChunkKind, ChunkRecord, StructureInfo, TextStructure};

        ScoredChunk {
            record: ChunkRecord {
                document_id: "d1".to_owned(),
                document_name: "doc.txt".to_owned(),
                file_path: "/docs/doc.txt".to_owned(),
                title: title.to_owned(),
                page_number,
                section_index: 0,
                chunk_id: format!("d1_p{page_number}_s0_c0"),
                kind: ChunkKind::Text,
                text: text.to_owned(),
                created_at: 0,
                structure_info: StructureInfo::Text(TextStructure {
                    paragraph_count: 1,
                    sentence_count: 1,
                    word_count: 2,
                }),
            },
            score: 0.5,
        }
    }

    #[test]
    fn blank_titles_get_section_labels() {
        let shaped = shape_hit(0, scored("  ", 2, "clause text"));
        assert_eq!(shaped.title, "Section 1");
        let shaped = shape_hit(3, scored("", 2, "clause text"));
        assert_eq!(shaped.title, "Section 4");
    }

    #[test]
    fn real_titles_pass_through() {
        let shaped = shape_hit(0, scored("Exclusions", 2, "clause text"));
        assert_eq!(shaped.title, "Exclusions");
    }

    #[test]
    fn page_number_is_at_least_one() {
        let shaped = shape_hit(0, scored("Terms", 0, "clause text"));
        assert_eq!(shaped.page_number, 1);
    }

    #[cfg(feature = "mock")]
    #[tokio::test]
    async fn retrieve_queries_and_shapes_hits() {
        use crate::mock::MemoryIndex;

        let index = MemoryIndex::new();
        let first = scored("", 1, "The deductible is 500.");
        let second = scored("Limits", 2, "Unrelated wording.");
        index
            .ingest(&[first.record, second.record])
            .await
            .unwrap();

        let retriever = Retriever::new(&index);
        let hits = retriever.retrieve("d1", "deductible", 5).await.unwrap();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].chunk_id, "d1_p1_s0_c0");
        assert_eq!(hits[0].title, "Section 1");
        assert_eq!(hits[1].title, "Limits");
        assert!(hits[0].score > hits[1].score);
    }
}
