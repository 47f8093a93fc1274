use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::application::ports::{ConversionError, DocumentConverter};
use crate::domain::ConvertedDocument;

use super::docling_document::DoclingDocumentJson;

pub const CONVERT_FILE_PATH: &str = "/v1/convert/file";
pub const API_KEY_HEADER: &str = "X-Api-Key";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Sends staged files to a docling-serve instance.
pub struct DoclingServeConverter {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl DoclingServeConverter {
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self, ConversionError> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| {
                ConversionError::Unavailable(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    async fn submit(&self, path: &Path) -> Result<ConvertResponse, ConversionError> {
        let data = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document.pdf")
            .to_string();

        let form = Form::new()
            .part("files", Part::bytes(data).file_name(file_name))
            .text("to_formats", "md")
            .text("to_formats", "json")
            .text("image_export_mode", "placeholder");

        let url = format!("{}{}", self.base_url, CONVERT_FILE_PATH);
        let mut request = self.client.post(&url).multipart(form);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await.map_err(|e| {
            ConversionError::EngineFailed(format!("docling-serve request failed: {e}"))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ConversionError::EngineFailed(format!(
                "docling-serve returned {status}: {text}"
            )));
        }

        response.json().await.map_err(|e| {
            ConversionError::InvalidOutput(format!("docling-serve response parse failed: {e}"))
        })
    }
}

#[async_trait]
impl DocumentConverter for DoclingServeConverter {
    #[tracing::instrument(skip(self), fields(base_url = %self.base_url))]
    async fn convert(&self, path: &Path) -> Result<ConvertedDocument, ConversionError> {
        let response = self.submit(path).await?;

        if response.status == "failure" || response.status == "skipped" {
            let reasons: Vec<&str> = response
                .errors
                .iter()
                .map(|e| e.error_message.as_str())
                .filter(|m| !m.is_empty())
                .collect();
            return Err(ConversionError::EngineFailed(format!(
                "docling-serve status {}: {}",
                response.status,
                reasons.join("; ")
            )));
        }

        if response.status == "partial_success" {
            tracing::warn!(errors = response.errors.len(), "docling-serve partial success");
        }

        let json = response.document.json_content.ok_or_else(|| {
            ConversionError::InvalidOutput("docling-serve response has no json_content".to_string())
        })?;
        let document: DoclingDocumentJson = serde_json::from_value(json).map_err(|e| {
            ConversionError::InvalidOutput(format!("failed to parse Docling JSON: {e}"))
        })?;

        Ok(document.into_converted(response.document.md_content.unwrap_or_default()))
    }

    fn engine(&self) -> &'static str {
        "docling_serve"
    }
}

#[derive(Deserialize)]
pub struct ConvertResponse {
    pub document: ExportedDocument,
    pub status: String,
    #[serde(default)]
    pub errors: Vec<ConversionErrorItem>,
}

#[derive(Deserialize)]
pub struct ExportedDocument {
    #[serde(default)]
    pub md_content: Option<String>,
    #[serde(default)]
    pub json_content: Option<serde_json::Value>,
}

#[derive(Deserialize)]
pub struct ConversionErrorItem {
    #[serde(default)]
    pub error_message: String,
}
