mod converted_document;
mod document_table;
mod extraction_profile;
mod submission;

pub use converted_document::{ContentItem, ContentKind, ConvertedDocument, DocumentPicture};
pub use document_table::{DocumentTable, TableCell, TableFrame, TableProjectionError};
pub use extraction_profile::ExtractionProfile;
pub use submission::{ExtractionOptions, ExtractionRequest, Submission, Upload, staging_suffix};
