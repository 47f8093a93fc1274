use serde::Serialize;

use crate::application::services::{Extraction, PictureSummary};
use crate::domain::{ExtractionOptions, ExtractionProfile, TableFrame};

#[derive(Serialize)]
pub struct DetailResponse {
    pub detail: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}

#[derive(Serialize)]
pub struct ExtractResponse {
    pub success: bool,
    pub file_name: String,
    pub file_size: u64,
    pub plain_text: String,
    pub markdown_text: String,
    pub text_length: usize,
    pub tables: Vec<ExtractTable>,
    pub table_count: usize,
    pub page_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<PictureSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_count: Option<usize>,
}

#[derive(Serialize)]
pub struct ExtractTable {
    pub index: usize,
    pub markdown: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_count: Option<usize>,
}

#[derive(Serialize)]
pub struct BankStatementResponse {
    pub success: bool,
    pub file_name: String,
    pub plain_text: String,
    pub tables_markdown: Vec<String>,
    pub tables_structured: Vec<TableFrame>,
    pub table_count: usize,
    pub text_length: usize,
}

#[derive(Serialize)]
pub struct InvoiceResponse {
    pub success: bool,
    pub file_name: String,
    pub plain_text: String,
    pub markdown_text: String,
    pub tables: Vec<InvoiceTable>,
    pub table_count: usize,
    pub text_length: usize,
}

#[derive(Serialize)]
pub struct InvoiceTable {
    pub markdown: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<Vec<String>>>,
}

/// Success body of an extraction endpoint, shaped by its profile.
#[derive(Serialize)]
#[serde(untagged)]
pub enum ExtractionResponse {
    General(ExtractResponse),
    BankStatement(BankStatementResponse),
    Invoice(InvoiceResponse),
}

impl ExtractionResponse {
    pub fn project(
        profile: ExtractionProfile,
        extraction: Extraction,
        options: ExtractionOptions,
    ) -> Self {
        match profile {
            ExtractionProfile::General => Self::General(general(extraction, options)),
            ExtractionProfile::BankStatement => Self::BankStatement(bank_statement(extraction)),
            ExtractionProfile::Invoice => Self::Invoice(invoice(extraction)),
        }
    }

    pub fn table_count(&self) -> usize {
        match self {
            Self::General(r) => r.table_count,
            Self::BankStatement(r) => r.table_count,
            Self::Invoice(r) => r.table_count,
        }
    }
}

fn general(extraction: Extraction, options: ExtractionOptions) -> ExtractResponse {
    let tables: Vec<ExtractTable> = extraction
        .tables
        .into_iter()
        .map(|table| {
            let (headers, rows, row_count) = match table.frame {
                Some(frame) => {
                    let row_count = frame.rows.len();
                    (Some(frame.headers), Some(frame.rows), Some(row_count))
                }
                None => (None, None, None),
            };
            ExtractTable {
                index: table.index,
                markdown: table.markdown,
                headers,
                rows,
                row_count,
            }
        })
        .collect();

    let (images, image_count) = if options.extract_images {
        let count = extraction.pictures.len();
        (Some(extraction.pictures), Some(count))
    } else {
        (None, None)
    };

    ExtractResponse {
        success: true,
        file_name: extraction.file_name,
        file_size: extraction.file_size,
        plain_text: extraction.plain_text,
        markdown_text: extraction.markdown_text,
        text_length: extraction.text_length,
        table_count: tables.len(),
        tables,
        page_count: extraction.page_count,
        images,
        image_count,
    }
}

fn bank_statement(extraction: Extraction) -> BankStatementResponse {
    let mut tables_markdown = Vec::with_capacity(extraction.tables.len());
    let mut tables_structured = Vec::new();
    for table in extraction.tables {
        tables_markdown.push(table.markdown);
        if let Some(frame) = table.frame {
            tables_structured.push(frame);
        }
    }

    BankStatementResponse {
        success: true,
        file_name: extraction.file_name,
        plain_text: extraction.plain_text,
        table_count: tables_markdown.len(),
        tables_markdown,
        tables_structured,
        text_length: extraction.text_length,
    }
}

fn invoice(extraction: Extraction) -> InvoiceResponse {
    let tables: Vec<InvoiceTable> = extraction
        .tables
        .into_iter()
        .map(|table| {
            let (headers, rows) = match table.frame {
                Some(frame) => (Some(frame.headers), Some(frame.rows)),
                None => (None, None),
            };
            InvoiceTable {
                markdown: table.markdown,
                headers,
                rows,
            }
        })
        .collect();

    InvoiceResponse {
        success: true,
        file_name: extraction.file_name,
        plain_text: extraction.plain_text,
        markdown_text: extraction.markdown_text,
        table_count: tables.len(),
        tables,
        text_length: extraction.text_length,
    }
}
