mod converter_factory;
mod docling_cli_converter;
mod docling_document;
mod docling_serve_converter;
mod mock_converter;
mod plain_text_converter;

pub use converter_factory::{ConverterFactory, ConverterFactoryError};
pub use docling_cli_converter::DoclingCliConverter;
pub use docling_document::DoclingDocumentJson;
pub use docling_serve_converter::{API_KEY_HEADER, CONVERT_FILE_PATH, DoclingServeConverter};
pub use mock_converter::MockConverter;
pub use plain_text_converter::PlainTextConverter;
