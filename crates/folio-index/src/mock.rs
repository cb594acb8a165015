//! Test-only in-memory index. Backs unit tests and the CLI dry-run path;
//! it is a stand-in for a real vector store, not one itself.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use folio_chunk::ChunkRecord;

use crate::error::{IndexError, Result};
use crate::store::{DocumentIndex, ScoredChunk};

#[derive(Debug, Clone, Default)]
pub struct MemoryIndex {
    chunks: Arc<Mutex<HashMap<String, ChunkRecord>>>,
    pub fail_ops: bool,
}

impl MemoryIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail_ops: true,
            ..Self::default()
        }
    }

    /// Number of chunks currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chunks.lock().map_or(0, |chunks| chunks.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DocumentIndex for MemoryIndex {
    async fn ingest(&self, records: &[ChunkRecord]) -> Result<usize> {
        if self.fail_ops {
            return Err(IndexError::Store("mock store error".into()));
        }
        let mut chunks = self.chunks.lock().unwrap();
        for record in records {
            chunks.insert(record.chunk_id.clone(), record.clone());
        }
        Ok(records.len())
    }

    async fn delete_document(&self, document_id: &str) -> Result<usize> {
        if self.fail_ops {
            return Err(IndexError::Store("mock store error".into()));
        }
        let mut chunks = self.chunks.lock().unwrap();
        let before = chunks.len();
        chunks.retain(|_, record| record.document_id != document_id);
        Ok(before - chunks.len())
    }

    #[allow(clippy::cast_precision_loss)]
    async fn query(
        &self,
        document_id: &str,
        question: &str,
        top_k: usize,
    ) -> Result<Vec<ScoredChunk>> {
        if self.fail_ops {
            return Err(IndexError::Store("mock store error".into()));
        }
        let lowered = question.to_lowercase();
        let terms: HashSet<&str> = lowered.split_whitespace().collect();

        let chunks = self.chunks.lock().unwrap();
        let mut hits: Vec<ScoredChunk> = chunks
            .values()
            .filter(|record| record.document_id == document_id)
            .map(|record| {
                let text = record.text.to_lowercase();
                let overlap = terms.iter().filter(|t| text.contains(*t)).count();
                ScoredChunk {
                    record: record.clone(),
                    score: overlap as f32 / terms.len().max(1) as f32,
                }
            })
            .collect();
        // Ties break on chunk id so ranking is stable across runs.
        hits.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.record.chunk_id.cmp(&b.record.chunk_id))
        });
        hits.truncate(top_k);
        Ok(hits)
    }
}
