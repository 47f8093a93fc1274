use serde::Serialize;

use crate::domain::{ConvertedDocument, ExtractionRequest, TableFrame};

/// Endpoint-independent projection of a converted document.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub file_name: String,
    pub file_size: u64,
    pub plain_text: String,
    /// Character count of `plain_text`.
    pub text_length: usize,
    pub markdown_text: String,
    pub tables: Vec<TableProjection>,
    pub pictures: Vec<PictureSummary>,
    pub page_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableProjection {
    pub index: usize,
    pub markdown: String,
    /// Absent when the table could not be split into headers and rows.
    pub frame: Option<TableFrame>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PictureSummary {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_no: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl Extraction {
    pub fn project(request: &ExtractionRequest, document: &ConvertedDocument) -> Self {
        let plain_text = document.accumulated_text().trim().to_string();
        let text_length = plain_text.chars().count();

        let tables = if request.options.extract_tables {
            document
                .tables
                .iter()
                .enumerate()
                .map(|(index, table)| {
                    let frame = match table.to_frame() {
                        Ok(frame) => Some(frame),
                        Err(e) => {
                            tracing::debug!(
                                table_index = index,
                                error = %e,
                                "Table kept as markdown only"
                            );
                            None
                        }
                    };
                    TableProjection {
                        index,
                        markdown: table.to_markdown(),
                        frame,
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        let pictures = if request.options.extract_images {
            document
                .pictures
                .iter()
                .enumerate()
                .map(|(index, picture)| PictureSummary {
                    index,
                    page_no: picture.page_no,
                    caption: picture.caption.clone(),
                    uri: picture.uri.clone(),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            file_name: request.file_name.clone(),
            file_size: request.size_bytes(),
            plain_text,
            text_length,
            markdown_text: document.markdown.trim().to_string(),
            tables,
            pictures,
            page_count: document.page_count,
        }
    }
}
