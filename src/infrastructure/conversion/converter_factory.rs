use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{ConversionError, DocumentConverter};
use crate::presentation::config::{ConverterEngine, ConverterSettings};

use super::docling_cli_converter::DoclingCliConverter;
use super::docling_serve_converter::DoclingServeConverter;
use super::plain_text_converter::PlainTextConverter;

#[derive(Debug, thiserror::Error)]
pub enum ConverterFactoryError {
    #[error("serve_url is required for the docling_serve engine")]
    MissingServeUrl,
    #[error("docling binary does not exist: {0}")]
    MissingBinary(String),
    #[error("converter initialization failed: {0}")]
    InitializationFailed(String),
}

impl From<ConverterFactoryError> for ConversionError {
    fn from(e: ConverterFactoryError) -> Self {
        ConversionError::Unavailable(e.to_string())
    }
}

pub struct ConverterFactory;

impl ConverterFactory {
    pub fn create(
        settings: &ConverterSettings,
    ) -> Result<Arc<dyn DocumentConverter>, ConverterFactoryError> {
        match settings.engine {
            ConverterEngine::DoclingCli => {
                let binary = settings.docling_binary.as_str();
                if binary.contains(std::path::MAIN_SEPARATOR) && !Path::new(binary).exists() {
                    return Err(ConverterFactoryError::MissingBinary(binary.to_string()));
                }
                tracing::info!(binary, args = ?settings.docling_args, "Loading Docling CLI engine");
                Ok(Arc::new(DoclingCliConverter::new(
                    binary,
                    settings.docling_args.clone(),
                )))
            }
            ConverterEngine::DoclingServe => {
                let base_url = settings
                    .serve_url
                    .as_deref()
                    .ok_or(ConverterFactoryError::MissingServeUrl)?;
                tracing::info!(base_url, "Loading docling-serve engine");
                let converter = DoclingServeConverter::new(base_url, settings.serve_api_key.clone())
                    .map_err(|e| ConverterFactoryError::InitializationFailed(e.to_string()))?;
                Ok(Arc::new(converter))
            }
            ConverterEngine::PlainText => {
                tracing::info!("Loading plain text engine");
                Ok(Arc::new(PlainTextConverter::new()))
            }
        }
    }
}
