//! File-to-index ingestion: load pages, chunk, replace, store.

use std::path::Path;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

use folio_chunk::{DocumentChunker, DocumentIdentity};

use crate::error::Result;
use crate::loader::PageLoader;
use crate::store::DocumentIndex;

/// Outcome of one file ingestion.
#[derive(Debug, Clone, Serialize)]
pub struct IngestReport {
    pub document_id: String,
    pub document_name: String,
    pub pages: usize,
    pub chunks_created: usize,
    pub chunks_removed: usize,
}

/// Chunks documents and feeds them to a [`DocumentIndex`].
pub struct IngestionPipeline<I: DocumentIndex> {
    loader: PageLoader,
    chunker: DocumentChunker,
    index: I,
}

impl<I: DocumentIndex> IngestionPipeline<I> {
    #[must_use]
    pub fn new(loader: PageLoader, chunker: DocumentChunker, index: I) -> Self {
        Self {
            loader,
            chunker,
            index,
        }
    }

    /// The backing index, for running queries after ingestion.
    #[must_use]
    pub fn index(&self) -> &I {
        &self.index
    }

    /// Loads, chunks, and indexes one file. Chunks of the same document are
    /// removed first so re-ingestion replaces rather than duplicates.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded or the index rejects
    /// an operation.
    pub async fn ingest_file(&self, path: &Path) -> Result<IngestReport> {
        let pages = self.loader.load(path).await?;
        let created_at = Utc::now().timestamp();
        let identity = DocumentIdentity::derive_at(Some(path), created_at);
        self.ingest_pages(&pages, &identity, created_at).await
    }

    /// Deterministic core of [`Self::ingest_file`]: chunks `pages` under a
    /// caller-supplied identity and replaces that document in the index.
    ///
    /// # Errors
    ///
    /// Returns an error if the index rejects an operation.
    pub async fn ingest_pages(
        &self,
        pages: &[String],
        identity: &DocumentIdentity,
        created_at: i64,
    ) -> Result<IngestReport> {
        let records = self.chunker.chunk_with_identity(pages, identity, created_at);

        if records.is_empty() {
            info!(document_id = %identity.document_id, "no chunks produced, nothing to ingest");
            return Ok(IngestReport {
                document_id: identity.document_id.clone(),
                document_name: identity.document_name.clone(),
                pages: pages.len(),
                chunks_created: 0,
                chunks_removed: 0,
            });
        }

        let chunks_removed = self.index.delete_document(&identity.document_id).await?;
        debug!(
            document_id = %identity.document_id,
            removed = chunks_removed,
            "cleared previous chunks"
        );

        let chunks_created = self.index.ingest(&records).await?;
        info!(
            document_id = %identity.document_id,
            pages = pages.len(),
            chunks = chunks_created,
            "ingested document"
        );

        Ok(IngestReport {
            document_id: identity.document_id.clone(),
            document_name: identity.document_name.clone(),
            pages: pages.len(),
            chunks_created,
            chunks_removed,
        })
    }
}
