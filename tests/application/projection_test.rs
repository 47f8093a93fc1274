use bytes::Bytes;

use docling_extract::application::services::Extraction;
use docling_extract::domain::{
    ContentItem, ConvertedDocument, DocumentPicture, DocumentTable, ExtractionOptions,
    ExtractionRequest, TableCell,
};

fn request(options: ExtractionOptions) -> ExtractionRequest {
    ExtractionRequest {
        file_name: "report.pdf".to_string(),
        content: Bytes::from_static(b"%PDF"),
        options,
    }
}

fn document() -> ConvertedDocument {
    ConvertedDocument {
        markdown: "\n\n## Report\n\n".to_string(),
        items: vec![ContentItem::text("Report"), ContentItem::text("Total: 3")],
        tables: vec![
            DocumentTable::from_grid(vec![
                vec![TableCell::header("k"), TableCell::header("v")],
                vec![TableCell::new("a"), TableCell::new("1")],
            ]),
            DocumentTable {
                num_rows: 2,
                num_cols: 2,
                grid: vec![
                    vec![TableCell::new("x"), TableCell::new("y")],
                    vec![TableCell::new("z")],
                ],
            },
        ],
        pictures: vec![DocumentPicture {
            page_no: Some(3),
            caption: None,
            uri: Some("data:image/png;base64,AAAA".to_string()),
        }],
        page_count: Some(4),
    }
}

#[test]
fn given_document_when_projecting_then_trims_text_and_counts_chars() {
    let extraction = Extraction::project(&request(ExtractionOptions::default()), &document());

    assert_eq!(extraction.plain_text, "Report\nTotal: 3");
    assert_eq!(extraction.text_length, 15);
    assert_eq!(extraction.markdown_text, "## Report");
    assert_eq!(extraction.file_size, 4);
    assert_eq!(extraction.page_count, Some(4));
}

#[test]
fn given_ragged_table_when_projecting_then_keeps_markdown_without_frame() {
    let extraction = Extraction::project(&request(ExtractionOptions::default()), &document());

    assert_eq!(extraction.tables.len(), 2);
    assert!(extraction.tables[0].frame.is_some());
    assert_eq!(extraction.tables[1].index, 1);
    assert!(extraction.tables[1].frame.is_none());
    assert!(!extraction.tables[1].markdown.is_empty());
}

#[test]
fn given_tables_disabled_when_projecting_then_skips_tables() {
    let options = ExtractionOptions {
        extract_tables: false,
        extract_images: false,
    };

    let extraction = Extraction::project(&request(options), &document());

    assert!(extraction.tables.is_empty());
    assert!(extraction.pictures.is_empty());
}

#[test]
fn given_images_enabled_when_projecting_then_summarises_pictures() {
    let options = ExtractionOptions {
        extract_tables: true,
        extract_images: true,
    };

    let extraction = Extraction::project(&request(options), &document());

    assert_eq!(extraction.pictures.len(), 1);
    assert_eq!(extraction.pictures[0].page_no, Some(3));
    assert!(extraction.pictures[0].uri.is_some());
}
