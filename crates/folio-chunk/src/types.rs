//! Record types shared across the chunking pipeline.

use serde::{Deserialize, Serialize};

/// A titled, contiguous run of page text produced by the section splitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub content: String,
}

/// Whether a chunk came from tabular or prose content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkKind {
    Text,
    Table,
}

impl ChunkKind {
    /// Single-letter code embedded in chunk ids: `c` for text, `t` for table.
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Self::Text => 'c',
            Self::Table => 't',
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Table => "table",
        }
    }
}

impl std::fmt::Display for ChunkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape counts for a prose chunk, computed from the chunk's own text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStructure {
    pub paragraph_count: usize,
    pub sentence_count: usize,
    pub word_count: usize,
}

/// Shape estimate for a tabular chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStructure {
    pub estimated_columns: usize,
    pub row_count: usize,
    pub has_header: bool,
}

/// Structure metadata matching the chunk's kind.
///
/// Serialized untagged: the two variants have disjoint required fields, so
/// the JSON side stays flat and still round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StructureInfo {
    Text(TextStructure),
    Table(TableStructure),
}

/// The terminal unit handed to the indexing collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRecord {
    pub document_id: String,
    pub document_name: String,
    pub file_path: String,
    pub title: String,
    /// 1-based page the chunk came from.
    pub page_number: u32,
    /// 0-based section index within the page.
    pub section_index: usize,
    /// `{document_id}_p{page}_s{section}_{t|c}{sub}`, unique per document.
    pub chunk_id: String,
    #[serde(rename = "type")]
    pub kind: ChunkKind,
    pub text: String,
    /// Unix seconds, stamped once per chunking run.
    pub created_at: i64,
    pub structure_info: StructureInfo,
}
