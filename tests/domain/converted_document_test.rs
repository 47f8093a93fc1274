use docling_extract::domain::{ContentItem, ContentKind, ConvertedDocument};

#[test]
fn given_mixed_items_when_accumulating_text_then_skips_empty_and_structural_items() {
    let document = ConvertedDocument {
        items: vec![
            ContentItem::text("Title"),
            ContentItem::structural(ContentKind::Group),
            ContentItem::text(""),
            ContentItem::text("Body"),
        ],
        ..ConvertedDocument::default()
    };

    assert_eq!(document.accumulated_text(), "Title\nBody\n");
}

#[test]
fn given_no_items_when_accumulating_text_then_returns_empty() {
    assert_eq!(ConvertedDocument::default().accumulated_text(), "");
}
