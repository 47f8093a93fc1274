use std::io;
use std::path::Path;

use async_trait::async_trait;

/// Writes request content somewhere the conversion engine can read it by path.
#[async_trait]
pub trait StagingArea: Send + Sync {
    async fn stage(
        &self,
        suffix: &str,
        content: &[u8],
    ) -> Result<Box<dyn StagedFile>, StagingError>;
}

/// A staged file owned by one request. Dropping it removes the file.
pub trait StagedFile: Send + Sync {
    fn path(&self) -> &Path;

    /// Removes the file now, reporting failures instead of swallowing them.
    fn release(self: Box<Self>) -> Result<(), StagingError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StagingError {
    #[error("failed to create staged file: {0}")]
    CreateFailed(io::Error),
    #[error("failed to write staged file: {0}")]
    WriteFailed(io::Error),
    #[error("failed to remove staged file: {0}")]
    RemoveFailed(io::Error),
}
