//! Document ingestion and retrieval seams around the chunking engine.
//!
//! Pages load from extracted text files, `folio-chunk` turns them into chunk
//! records, and a [`DocumentIndex`] implementation stores them for scoped
//! similarity queries. Retrieval shapes hits into context windows and clause
//! references for an answer-generation collaborator.

pub mod error;
pub mod loader;
#[cfg(feature = "mock")]
pub mod mock;
pub mod pipeline;
pub mod retriever;
pub mod store;

pub use error::{IndexError, Result};
pub use loader::PageLoader;
pub use pipeline::{IngestReport, IngestionPipeline};
pub use retriever::{ClauseReference, RetrievedChunk, Retriever, build_context, clause_references};
pub use store::{DocumentIndex, ScoredChunk};

#[cfg(feature = "mock")]
pub use mock::MemoryIndex;
