use std::path::Path;

use bytes::Bytes;

const DEFAULT_SUFFIX: &str = ".pdf";

/// File part received through a multipart upload.
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub file_name: Option<String>,
    pub bytes: Bytes,
}

/// Raw intake fields as sent by the client, before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Submission {
    pub upload: Option<Upload>,
    pub file_base64: Option<String>,
    pub file_name: Option<String>,
    pub extract_tables: Option<bool>,
    pub extract_images: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionOptions {
    pub extract_tables: bool,
    pub extract_images: bool,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            extract_tables: true,
            extract_images: false,
        }
    }
}

/// A validated request: non-empty content and the name it was submitted under.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionRequest {
    pub file_name: String,
    pub content: Bytes,
    pub options: ExtractionOptions,
}

impl ExtractionRequest {
    /// Staging suffix derived from the file name's extension, `.pdf` when absent.
    pub fn staging_suffix(&self) -> String {
        staging_suffix(&self.file_name)
    }

    pub fn size_bytes(&self) -> u64 {
        self.content.len() as u64
    }
}

pub fn staging_suffix(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_else(|| DEFAULT_SUFFIX.to_string())
}
