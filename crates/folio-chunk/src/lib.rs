//! Document structuring and chunking for retrieval pipelines.
//!
//! Pages of extracted text are split into titled sections, each section is
//! classified as tabular or prose and chunked under row or character bounds,
//! and the result is emitted as a flat ordered sequence of chunk records
//! carrying identity, position, and structure metadata for an external index.

pub mod analyzer;
pub mod assembler;
pub mod classifier;
pub mod identity;
pub mod prose;
pub mod sections;
pub mod table;
pub mod types;

pub use assembler::{ChunkerConfig, DocumentChunker};
pub use identity::DocumentIdentity;
pub use types::{
    ChunkKind, ChunkRecord, Section, StructureInfo, TableStructure, TextStructure,
};
