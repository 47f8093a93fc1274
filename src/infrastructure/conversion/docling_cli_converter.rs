use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{ConversionError, DocumentConverter};
use crate::domain::ConvertedDocument;

use super::docling_document::DoclingDocumentJson;

const STDERR_TAIL_CHARS: usize = 2000;

/// Runs the `docling` command line tool and reads back its JSON and markdown exports.
pub struct DoclingCliConverter {
    binary: PathBuf,
    extra_args: Vec<String>,
}

impl DoclingCliConverter {
    pub fn new(binary: impl Into<PathBuf>, extra_args: Vec<String>) -> Self {
        Self {
            binary: binary.into(),
            extra_args,
        }
    }

    fn command(&self, input: &Path, output_dir: &Path) -> Command {
        let mut command = Command::new(&self.binary);
        command
            .arg(input)
            .args(["--to", "json", "--to", "md"])
            .args(["--image-export-mode", "placeholder"])
            .arg("--output")
            .arg(output_dir)
            .args(&self.extra_args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }

    async fn read_export(path: &Path) -> Result<Vec<u8>, ConversionError> {
        tokio::fs::read(path).await.map_err(|e| {
            ConversionError::InvalidOutput(format!(
                "missing Docling export {}: {e}",
                path.display()
            ))
        })
    }
}

#[async_trait]
impl DocumentConverter for DoclingCliConverter {
    #[tracing::instrument(skip(self), fields(binary = %self.binary.display()))]
    async fn convert(&self, path: &Path) -> Result<ConvertedDocument, ConversionError> {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                ConversionError::UnsupportedFormat(format!(
                    "staged path has no usable file name: {}",
                    path.display()
                ))
            })?
            .to_string();

        let output_dir = tempfile::Builder::new()
            .prefix("docling-out-")
            .tempdir()?;

        let output = self
            .command(path, output_dir.path())
            .output()
            .await
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => ConversionError::Unavailable(format!(
                    "docling binary not found: {}",
                    self.binary.display()
                )),
                _ => ConversionError::Io(e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!(status = %output.status, "Docling exited with failure");
            return Err(ConversionError::EngineFailed(format!(
                "docling exited with {}: {}",
                output.status,
                tail(stderr.trim(), STDERR_TAIL_CHARS)
            )));
        }

        let json = Self::read_export(&output_dir.path().join(format!("{stem}.json"))).await?;
        let markdown = Self::read_export(&output_dir.path().join(format!("{stem}.md"))).await?;
        let markdown = String::from_utf8_lossy(&markdown).into_owned();

        Ok(DoclingDocumentJson::parse(&json)?.into_converted(markdown))
    }

    fn engine(&self) -> &'static str {
        "docling_cli"
    }
}

fn tail(text: &str, max_chars: usize) -> &str {
    let count = text.chars().count();
    if count <= max_chars {
        return text;
    }
    let skip = count - max_chars;
    match text.char_indices().nth(skip) {
        Some((offset, _)) => &text[offset..],
        None => text,
    }
}
