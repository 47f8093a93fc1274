use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Semaphore;

use crate::application::ports::{ConversionError, StagingArea, StagingError};
use crate::domain::{ConvertedDocument, ExtractionRequest};

use super::lazy_converter::LazyConverter;
use super::projection::Extraction;

/// Stages request content, runs it through the shared engine and projects the result.
pub struct ExtractionService {
    staging: Arc<dyn StagingArea>,
    converter: Arc<LazyConverter>,
    permits: Semaphore,
    timeout: Duration,
}

impl ExtractionService {
    pub fn new(
        staging: Arc<dyn StagingArea>,
        converter: Arc<LazyConverter>,
        max_concurrent: usize,
        timeout: Duration,
    ) -> Self {
        Self {
            staging,
            converter,
            permits: Semaphore::new(max_concurrent.max(1)),
            timeout,
        }
    }

    #[tracing::instrument(
        skip(self, request),
        fields(file_name = %request.file_name, size_bytes = request.size_bytes())
    )]
    pub async fn extract(
        &self,
        request: &ExtractionRequest,
    ) -> Result<Extraction, ExtractionError> {
        let staged = self
            .staging
            .stage(&request.staging_suffix(), &request.content)
            .await?;

        let converted = self.convert(staged.path()).await;

        if let Err(e) = staged.release() {
            tracing::warn!(error = %e, "Failed to remove staged file");
        }

        let document = converted?;
        Ok(Extraction::project(request, &document))
    }

    async fn convert(&self, path: &Path) -> Result<ConvertedDocument, ConversionError> {
        let converter = self.converter.get().await?;

        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| ConversionError::Unavailable("conversion queue closed".to_string()))?;

        let started = Instant::now();
        let document = tokio::time::timeout(self.timeout, converter.convert(path))
            .await
            .map_err(|_| ConversionError::TimedOut(self.timeout))??;

        tracing::info!(
            engine = converter.engine(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            items = document.items.len(),
            tables = document.tables.len(),
            page_count = ?document.page_count,
            "Document converted"
        );

        Ok(document)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("staging: {0}")]
    Staging(#[from] StagingError),
    #[error("{0}")]
    Conversion(#[from] ConversionError),
}

impl ExtractionError {
    /// Tag reported to callers as `error_type`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Staging(_) => "StagingError",
            Self::Conversion(e) => e.kind(),
        }
    }
}
