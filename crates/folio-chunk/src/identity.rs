//! Per-run document identity.

use std::path::Path;

use chrono::Utc;

/// Hex chars of the hash kept as a document id.
const ID_LEN: usize = 12;
/// Name used when the source path is missing or has no final component.
const UNKNOWN_NAME: &str = "unknown_document";

/// Identity stamped on every chunk of one chunking run.
///
/// Derived exactly once per run and reused for all records; a later run over
/// the same file gets a fresh id, which is what lets re-ingestion replace the
/// previous run's chunks wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentIdentity {
    pub document_id: String,
    pub document_name: String,
    pub file_path: String,
}

impl DocumentIdentity {
    /// Derives an identity from an optional source path at the current time.
    #[must_use]
    pub fn derive(source: Option<&Path>) -> Self {
        Self::derive_at(source, Utc::now().timestamp())
    }

    /// Clock-pinned variant. `unix_time` feeds both the id hash and the
    /// no-path fallback id, so a fixed clock gives a fixed identity. An
    /// empty path counts as no path.
    #[must_use]
    pub fn derive_at(source: Option<&Path>, unix_time: i64) -> Self {
        match source.filter(|path| !path.as_os_str().is_empty()) {
            Some(path) => {
                let document_name = path.file_name().map_or_else(
                    || UNKNOWN_NAME.to_owned(),
                    |name| name.to_string_lossy().into_owned(),
                );
                Self {
                    document_id: short_hash(&format!("{document_name}_{unix_time}")),
                    document_name,
                    file_path: path.display().to_string(),
                }
            }
            None => Self {
                document_id: format!("doc_{unix_time}"),
                document_name: UNKNOWN_NAME.to_owned(),
                file_path: String::new(),
            },
        }
    }
}

fn short_hash(input: &str) -> String {
    let mut hex = blake3::hash(input.as_bytes()).to_hex().to_string();
    hex.truncate(ID_LEN);
    hex
}
