//! Reads extracted document text and splits it into pages.

use std::path::Path;

use crate::error::{IndexError, Result};

/// Default maximum file size: 10 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Form feed, the page-break marker in text extracted from paginated sources.
const PAGE_BREAK: char = '\u{0C}';

pub struct PageLoader {
    pub max_file_size: u64,
}

impl Default for PageLoader {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl PageLoader {
    /// Reads a UTF-8 text file and splits its content into pages.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, exceeds the size limit,
    /// or is not valid UTF-8.
    pub async fn load(&self, path: &Path) -> Result<Vec<String>> {
        let meta = tokio::fs::metadata(path).await?;
        if meta.len() > self.max_file_size {
            return Err(IndexError::FileTooLarge(meta.len()));
        }

        let bytes = tokio::fs::read(path).await?;
        let content = String::from_utf8(bytes).map_err(|_| IndexError::InvalidUtf8 {
            path: path.display().to_string(),
        })?;

        Ok(split_pages(&content))
    }
}

/// Splits text into pages on form feeds. No form feed means one page.
/// Trailing all-blank pages are dropped so a file ending in a form feed
/// does not grow a phantom page.
#[must_use]
pub fn split_pages(content: &str) -> Vec<String> {
    let mut pages: Vec<String> = content.split(PAGE_BREAK).map(str::to_owned).collect();
    while pages.last().is_some_and(|p| p.trim().is_empty()) {
        pages.pop();
    }
    pages
}
