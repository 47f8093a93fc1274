use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{ConversionError, DocumentConverter};
use crate::domain::{ContentItem, ConvertedDocument};

/// Local engine for UTF-8 text files: one text item per non-blank line, no tables.
#[derive(Default)]
pub struct PlainTextConverter;

impl PlainTextConverter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentConverter for PlainTextConverter {
    async fn convert(&self, path: &Path) -> Result<ConvertedDocument, ConversionError> {
        let data = tokio::fs::read(path).await?;

        let text = String::from_utf8(data).map_err(|_| {
            ConversionError::UnsupportedFormat(format!(
                "{} is not UTF-8 text",
                path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default()
            ))
        })?;

        let items = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ContentItem::text)
            .collect();

        Ok(ConvertedDocument {
            markdown: text,
            items,
            ..ConvertedDocument::default()
        })
    }

    fn engine(&self) -> &'static str {
        "plain_text"
    }
}
