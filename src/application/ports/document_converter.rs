use std::io;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::ConvertedDocument;

#[async_trait]
pub trait DocumentConverter: Send + Sync {
    async fn convert(&self, path: &Path) -> Result<ConvertedDocument, ConversionError>;

    /// Short engine name used in logs.
    fn engine(&self) -> &'static str;
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("conversion engine unavailable: {0}")]
    Unavailable(String),
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),
    #[error("conversion failed: {0}")]
    EngineFailed(String),
    #[error("conversion engine returned invalid output: {0}")]
    InvalidOutput(String),
    #[error("conversion timed out after {}s", .0.as_secs())]
    TimedOut(Duration),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl ConversionError {
    /// Stable tag reported to callers as `error_type`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unavailable(_) => "EngineUnavailable",
            Self::UnsupportedFormat(_) => "UnsupportedFormat",
            Self::EngineFailed(_) => "EngineFailed",
            Self::InvalidOutput(_) => "InvalidOutput",
            Self::TimedOut(_) => "ConversionTimeout",
            Self::Io(_) => "IoError",
        }
    }
}
