use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::TempPath;
use tokio::io::AsyncWriteExt;

use crate::application::ports::{StagedFile, StagingArea, StagingError};

const STAGED_PREFIX: &str = "docling-";

/// Stages content as uniquely named temporary files.
pub struct TempStagingArea {
    directory: PathBuf,
}

impl TempStagingArea {
    pub fn new(directory: PathBuf) -> Result<Self, StagingError> {
        std::fs::create_dir_all(&directory).map_err(StagingError::CreateFailed)?;
        Ok(Self { directory })
    }

    /// Stages into the system temporary directory.
    pub fn system() -> Self {
        Self {
            directory: std::env::temp_dir(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

#[async_trait]
impl StagingArea for TempStagingArea {
    async fn stage(
        &self,
        suffix: &str,
        content: &[u8],
    ) -> Result<Box<dyn StagedFile>, StagingError> {
        let named = tempfile::Builder::new()
            .prefix(STAGED_PREFIX)
            .suffix(suffix)
            .tempfile_in(&self.directory)
            .map_err(StagingError::CreateFailed)?;

        // The path guard is taken before writing so a failed write still removes the file.
        let (file, path) = named.into_parts();
        let staged = TempStagedFile { path };

        let mut file = tokio::fs::File::from_std(file);
        file.write_all(content)
            .await
            .map_err(StagingError::WriteFailed)?;
        file.flush().await.map_err(StagingError::WriteFailed)?;
        drop(file);

        tracing::debug!(path = %staged.path.display(), bytes = content.len(), "File staged");

        Ok(Box::new(staged))
    }
}

/// Removes its file when released or dropped.
pub struct TempStagedFile {
    path: TempPath,
}

impl StagedFile for TempStagedFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn release(self: Box<Self>) -> Result<(), StagingError> {
        self.path.close().map_err(StagingError::RemoveFailed)
    }
}
