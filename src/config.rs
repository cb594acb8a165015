//! TOML configuration with environment variable overrides.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

fn default_max_chars() -> usize {
    folio_chunk::prose::DEFAULT_MAX_CHARS
}

fn default_max_rows() -> usize {
    folio_chunk::table::DEFAULT_MAX_ROWS
}

fn default_max_file_size() -> u64 {
    folio_index::loader::DEFAULT_MAX_FILE_SIZE
}

fn default_top_k() -> usize {
    folio_index::retriever::DEFAULT_TOP_K
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub loader: LoaderConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ChunkingConfig {
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_chars: default_max_chars(),
            max_rows: default_max_rows(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LoaderConfig {
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_file_size: default_max_file_size(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RetrievalConfig {
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file with env var overrides.
    ///
    /// Falls back to defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str::<Self>(&content).context("failed to parse config file")?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("FOLIO_MAX_CHARS")
            && let Ok(n) = v.parse::<usize>()
        {
            self.chunking.max_chars = n;
        }
        if let Ok(v) = std::env::var("FOLIO_MAX_ROWS")
            && let Ok(n) = v.parse::<usize>()
        {
            self.chunking.max_rows = n;
        }
        if let Ok(v) = std::env::var("FOLIO_MAX_FILE_SIZE")
            && let Ok(n) = v.parse::<u64>()
        {
            self.loader.max_file_size = n;
        }
        if let Ok(v) = std::env::var("FOLIO_TOP_K")
            && let Ok(n) = v.parse::<usize>()
        {
            self.retrieval.top_k = n;
        }
    }
}
