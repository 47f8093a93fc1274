mod extraction_service;
mod intake;
mod lazy_converter;
mod projection;

pub use extraction_service::{ExtractionError, ExtractionService};
pub use intake::{ClientInputError, IntakeError, accept};
pub use lazy_converter::LazyConverter;
pub use projection::{Extraction, PictureSummary, TableProjection};
