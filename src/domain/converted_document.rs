use super::document_table::DocumentTable;

/// Structured output of a conversion engine for one file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvertedDocument {
    pub markdown: String,
    /// Content items in reading order.
    pub items: Vec<ContentItem>,
    pub tables: Vec<DocumentTable>,
    pub pictures: Vec<DocumentPicture>,
    pub page_count: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Text,
    Group,
    Table,
    Picture,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    pub kind: ContentKind,
    pub text: Option<String>,
}

impl ContentItem {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: ContentKind::Text,
            text: Some(text.into()),
        }
    }

    pub fn structural(kind: ContentKind) -> Self {
        Self { kind, text: None }
    }

    /// Text carried by the item, if any and non-empty.
    pub fn non_empty_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentPicture {
    pub page_no: Option<u32>,
    pub caption: Option<String>,
    pub uri: Option<String>,
}

impl ConvertedDocument {
    /// Concatenates the text of every item carrying non-empty text, one item per line.
    pub fn accumulated_text(&self) -> String {
        let mut text = String::new();
        for item in &self.items {
            if let Some(item_text) = item.non_empty_text() {
                text.push_str(item_text);
                text.push('\n');
            }
        }
        text
    }
}
