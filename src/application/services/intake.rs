use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::domain::{ExtractionOptions, ExtractionProfile, ExtractionRequest, Submission};

/// Faults in what the caller sent, answered with 400.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ClientInputError {
    #[error("Either file or file_base64 is required")]
    MissingContent,
    #[error("Empty file")]
    EmptyContent,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IntakeError {
    #[error(transparent)]
    Client(#[from] ClientInputError),
    /// `file_base64` is not padded standard base64.
    #[error("Invalid base64-encoded string: {0}")]
    Decode(String),
}

impl IntakeError {
    /// Tag reported to callers as `error_type`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Client(_) => "ClientInputError",
            Self::Decode(_) => "DecodeError",
        }
    }
}

/// Validates raw intake fields into an extraction request.
///
/// An uploaded file wins over `file_base64`; an empty base64 string counts as
/// absent. The file name falls back from the upload's name to the `file_name`
/// field to the profile default.
pub fn accept(
    submission: Submission,
    profile: ExtractionProfile,
) -> Result<ExtractionRequest, IntakeError> {
    let Submission {
        upload,
        file_base64,
        file_name,
        extract_tables,
        extract_images,
    } = submission;

    let file_name = file_name.filter(|name| !name.is_empty());

    let (file_name, content) = if let Some(upload) = upload {
        let name = upload.file_name.filter(|name| !name.is_empty()).or(file_name);
        (name, upload.bytes)
    } else if let Some(encoded) = file_base64.filter(|value| !value.is_empty()) {
        (file_name, decode_base64(&encoded)?.into())
    } else {
        return Err(ClientInputError::MissingContent.into());
    };

    if content.is_empty() {
        return Err(ClientInputError::EmptyContent.into());
    }

    let options = if profile.honours_options() {
        let defaults = ExtractionOptions::default();
        ExtractionOptions {
            extract_tables: extract_tables.unwrap_or(defaults.extract_tables),
            extract_images: extract_images.unwrap_or(defaults.extract_images),
        }
    } else {
        ExtractionOptions::default()
    };

    Ok(ExtractionRequest {
        file_name: file_name.unwrap_or_else(|| profile.default_file_name().to_string()),
        content,
        options,
    })
}

/// Strict padded decoding; only ASCII whitespace (line wrapping) is tolerated.
fn decode_base64(encoded: &str) -> Result<Vec<u8>, IntakeError> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| IntakeError::Decode(e.to_string()))
}
