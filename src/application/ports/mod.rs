mod document_converter;
mod staging_area;

pub use document_converter::{ConversionError, DocumentConverter};
pub use staging_area::{StagedFile, StagingArea, StagingError};
