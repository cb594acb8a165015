//! Storage seam: the contract an embedding/index backend must satisfy.

use folio_chunk::ChunkRecord;

use crate::error::Result;

/// A chunk returned from a query, with its similarity score.
#[derive(Debug, Clone)]
pub struct ScoredChunk {
    pub record: ChunkRecord,
    pub score: f32,
}

/// Contract for the downstream chunk store.
///
/// Implementations persist chunk records keyed by `chunk_id`, remove whole
/// documents so re-ingestion replaces them, and answer similarity queries
/// scoped to one document.
pub trait DocumentIndex: Send + Sync {
    /// Stores a batch of chunk records, returning how many were written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the batch.
    fn ingest(&self, records: &[ChunkRecord]) -> impl Future<Output = Result<usize>> + Send;

    /// Removes every chunk of `document_id`, returning how many went away.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails.
    fn delete_document(&self, document_id: &str) -> impl Future<Output = Result<usize>> + Send;

    /// Returns up to `top_k` chunks of `document_id` ranked by similarity
    /// to `question`, best first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails.
    fn query(
        &self,
        document_id: &str,
        question: &str,
        top_k: usize,
    ) -> impl Future<Output = Result<Vec<ScoredChunk>>> + Send;
}
