use docling_extract::application::ports::ConversionError;
use docling_extract::domain::ContentKind;
use docling_extract::infrastructure::conversion::DoclingDocumentJson;

use super::fixtures::{DOCLING_JSON, DOCLING_MARKDOWN};

#[test]
fn given_docling_export_when_converting_then_walks_body_in_reading_order() {
    let document = DoclingDocumentJson::parse(DOCLING_JSON.as_bytes())
        .unwrap()
        .into_converted(DOCLING_MARKDOWN.to_string());

    let kinds: Vec<ContentKind> = document.items.iter().map(|item| item.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ContentKind::Text,
            ContentKind::Group,
            ContentKind::Text,
            ContentKind::Text,
            ContentKind::Table,
            ContentKind::Picture,
            ContentKind::Text,
        ]
    );
    assert_eq!(
        document.accumulated_text(),
        "Monthly statement\nAccount 42\nClosing balance\n"
    );
    assert_eq!(document.markdown, DOCLING_MARKDOWN);
}

#[test]
fn given_docling_export_when_converting_then_skips_furniture() {
    let document = DoclingDocumentJson::parse(DOCLING_JSON.as_bytes())
        .unwrap()
        .into_converted(String::new());

    assert!(!document.accumulated_text().contains("ACME Bank"));
}

#[test]
fn given_docling_export_when_converting_then_keeps_tables_pictures_and_pages() {
    let document = DoclingDocumentJson::parse(DOCLING_JSON.as_bytes())
        .unwrap()
        .into_converted(String::new());

    assert_eq!(document.tables.len(), 1);
    let frame = document.tables[0].to_frame().unwrap();
    assert_eq!(frame.headers, vec!["Date", "Amount"]);
    assert_eq!(frame.rows, vec![vec!["2024-01-02", "12.50"]]);

    assert_eq!(document.pictures.len(), 1);
    assert_eq!(document.pictures[0].page_no, Some(2));
    assert_eq!(document.pictures[0].caption.as_deref(), Some("Figure 1"));
    assert_eq!(
        document.pictures[0].uri.as_deref(),
        Some("data:image/png;base64,AAAA")
    );

    assert_eq!(document.page_count, Some(2));
}

#[test]
fn given_dangling_and_repeated_refs_when_converting_then_ignores_them() {
    let json = r##"{
        "body": {"children": [
            {"$ref": "#/texts/0"},
            {"$ref": "#/texts/0"},
            {"$ref": "#/texts/9"},
            {"$ref": "#/key_value_items/0"}
        ]},
        "texts": [{"text": "once"}]
    }"##;

    let document = DoclingDocumentJson::parse(json.as_bytes())
        .unwrap()
        .into_converted(String::new());

    assert_eq!(document.items.len(), 1);
    assert_eq!(document.page_count, None);
}

#[test]
fn given_malformed_json_when_parsing_then_reports_invalid_output() {
    let result = DoclingDocumentJson::parse(b"{not json");

    assert!(matches!(result, Err(ConversionError::InvalidOutput(_))));
}
