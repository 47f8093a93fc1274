use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{ConversionError, DocumentConverter};
use crate::domain::ConvertedDocument;

/// Returns a fixed document and remembers every path it was asked to convert.
#[derive(Default)]
pub struct MockConverter {
    document: ConvertedDocument,
    seen: Mutex<Vec<PathBuf>>,
}

impl MockConverter {
    pub fn new(document: ConvertedDocument) -> Self {
        Self {
            document,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen_paths(&self) -> Vec<PathBuf> {
        self.seen.lock().map(|paths| paths.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl DocumentConverter for MockConverter {
    async fn convert(&self, path: &Path) -> Result<ConvertedDocument, ConversionError> {
        if !path.exists() {
            return Err(ConversionError::InvalidOutput(format!(
                "staged file missing: {}",
                path.display()
            )));
        }
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(path.to_path_buf());
        }
        Ok(self.document.clone())
    }

    fn engine(&self) -> &'static str {
        "mock"
    }
}
