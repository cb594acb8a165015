//! Orchestrates splitting, classification, and chunking across a document.

use std::path::Path;

use chrono::Utc;
use tracing::debug;

use crate::analyzer;
use crate::classifier::is_tabular;
use crate::identity::DocumentIdentity;
use crate::prose::{DEFAULT_MAX_CHARS, chunk_prose};
use crate::sections::split_sections;
use crate::table::{DEFAULT_MAX_ROWS, chunk_table};
use crate::types::{ChunkKind, ChunkRecord, Section, StructureInfo};

/// Bounds applied while chunking a document.
#[derive(Debug, Clone)]
pub struct ChunkerConfig {
    /// Character bound for prose chunks.
    pub max_chars: usize,
    /// Data-row bound for table chunks.
    pub max_rows: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

/// Turns a document's pages into a flat, ordered sequence of chunk records.
#[derive(Debug, Clone, Default)]
pub struct DocumentChunker {
    config: ChunkerConfig,
}

impl DocumentChunker {
    #[must_use]
    pub fn new(config: ChunkerConfig) -> Self {
        Self { config }
    }

    /// Chunks `pages`, deriving the document identity and timestamp from the
    /// current clock. Never fails; pages with no content yield no records.
    #[must_use]
    pub fn chunk_document(&self, pages: &[String], source: Option<&Path>) -> Vec<ChunkRecord> {
        let created_at = Utc::now().timestamp();
        let identity = DocumentIdentity::derive_at(source, created_at);
        self.chunk_with_identity(pages, &identity, created_at)
    }

    /// Deterministic core of [`Self::chunk_document`]: the caller supplies
    /// the identity and timestamp, so output depends only on `pages` and the
    /// configured bounds.
    #[must_use]
    pub fn chunk_with_identity(
        &self,
        pages: &[String],
        identity: &DocumentIdentity,
        created_at: i64,
    ) -> Vec<ChunkRecord> {
        let mut records = Vec::new();

        for (page_idx, page) in pages.iter().enumerate() {
            let page_number = u32::try_from(page_idx + 1).unwrap_or(u32::MAX);
            let sections = split_sections(page);
            debug!(page = page_number, sections = sections.len(), "split page");

            for (section_index, section) in sections.iter().enumerate() {
                self.chunk_section(
                    section,
                    identity,
                    page_number,
                    section_index,
                    created_at,
                    &mut records,
                );
            }
        }

        debug!(
            document_id = %identity.document_id,
            chunks = records.len(),
            "chunked document"
        );
        records
    }

    fn chunk_section(
        &self,
        section: &Section,
        identity: &DocumentIdentity,
        page_number: u32,
        section_index: usize,
        created_at: i64,
        records: &mut Vec<ChunkRecord>,
    ) {
        let (kind, parts) = if is_tabular(&section.content) {
            (ChunkKind::Table, chunk_table(&section.content, self.config.max_rows))
        } else {
            (ChunkKind::Text, chunk_prose(&section.content, self.config.max_chars))
        };

        // Blank parts are dropped before numbering so sub indices stay dense.
        let kept = parts.into_iter().filter(|t| !t.trim().is_empty());
        for (sub_index, text) in kept.enumerate() {
            let structure_info = match kind {
                ChunkKind::Table => StructureInfo::Table(analyzer::analyze_table(&text)),
                ChunkKind::Text => StructureInfo::Text(analyzer::analyze_text(&text)),
            };
            let chunk_id = format!(
                "{}_p{page_number}_s{section_index}_{}{sub_index}",
                identity.document_id,
                kind.tag(),
            );
            records.push(ChunkRecord {
                document_id: identity.document_id.clone(),
                document_name: identity.document_name.clone(),
                file_path: identity.file_path.clone(),
                title: section.title.clone(),
                page_number,
                section_index,
                chunk_id,
                kind,
                text,
                created_at,
                structure_info,
            });
        }
    }
}
