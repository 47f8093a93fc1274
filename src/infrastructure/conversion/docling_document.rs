//! Subset of Docling's `DoclingDocument` JSON export needed to project text,
//! tables and pictures.

use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

use crate::application::ports::ConversionError;
use crate::domain::{
    ContentItem, ContentKind, ConvertedDocument, DocumentPicture, DocumentTable, TableCell,
};

const FURNITURE_LAYER: &str = "furniture";
const MAX_TREE_DEPTH: usize = 64;

#[derive(Debug, Deserialize)]
pub struct DoclingDocumentJson {
    #[serde(default)]
    pub body: NodeJson,
    #[serde(default)]
    pub groups: Vec<NodeJson>,
    #[serde(default)]
    pub texts: Vec<TextJson>,
    #[serde(default)]
    pub tables: Vec<TableJson>,
    #[serde(default)]
    pub pictures: Vec<PictureJson>,
    #[serde(default)]
    pub pages: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NodeJson {
    #[serde(default)]
    pub children: Vec<ItemRef>,
    #[serde(default)]
    pub content_layer: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemRef {
    #[serde(rename = "$ref")]
    pub ref_path: String,
}

#[derive(Debug, Deserialize)]
pub struct TextJson {
    #[serde(default)]
    pub children: Vec<ItemRef>,
    #[serde(default)]
    pub content_layer: Option<String>,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct TableJson {
    #[serde(default)]
    pub children: Vec<ItemRef>,
    #[serde(default)]
    pub content_layer: Option<String>,
    #[serde(default)]
    pub data: TableDataJson,
}

#[derive(Debug, Default, Deserialize)]
pub struct TableDataJson {
    #[serde(default)]
    pub num_rows: usize,
    #[serde(default)]
    pub num_cols: usize,
    #[serde(default)]
    pub grid: Vec<Vec<TableCellJson>>,
}

#[derive(Debug, Deserialize)]
pub struct TableCellJson {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub column_header: bool,
}

#[derive(Debug, Deserialize)]
pub struct PictureJson {
    #[serde(default)]
    pub children: Vec<ItemRef>,
    #[serde(default)]
    pub content_layer: Option<String>,
    #[serde(default)]
    pub captions: Vec<ItemRef>,
    #[serde(default)]
    pub prov: Vec<ProvenanceJson>,
    #[serde(default)]
    pub image: Option<ImageRefJson>,
}

#[derive(Debug, Deserialize)]
pub struct ProvenanceJson {
    pub page_no: u32,
}

#[derive(Debug, Deserialize)]
pub struct ImageRefJson {
    #[serde(default)]
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum NodeKey {
    Text(usize),
    Group(usize),
    Table(usize),
    Picture(usize),
}

impl NodeKey {
    fn parse(ref_path: &str) -> Option<Self> {
        let mut parts = ref_path.strip_prefix("#/")?.splitn(2, '/');
        let collection = parts.next()?;
        let index = parts.next()?.parse().ok()?;
        match collection {
            "texts" => Some(Self::Text(index)),
            "groups" => Some(Self::Group(index)),
            "tables" => Some(Self::Table(index)),
            "pictures" => Some(Self::Picture(index)),
            _ => None,
        }
    }
}

impl DoclingDocumentJson {
    pub fn parse(json: &[u8]) -> Result<Self, ConversionError> {
        serde_json::from_slice(json).map_err(|e| {
            ConversionError::InvalidOutput(format!("failed to parse Docling JSON: {e}"))
        })
    }

    /// Builds the engine-neutral document, pairing this JSON with the markdown export.
    pub fn into_converted(self, markdown: String) -> ConvertedDocument {
        let items = self.reading_order();

        let pictures = self
            .pictures
            .iter()
            .map(|picture| DocumentPicture {
                page_no: picture.prov.first().map(|p| p.page_no),
                caption: self.caption_for(&picture.captions),
                uri: picture.image.as_ref().and_then(|image| image.uri.clone()),
            })
            .collect();

        let tables = self
            .tables
            .into_iter()
            .map(|table| DocumentTable {
                num_rows: table.data.num_rows,
                num_cols: table.data.num_cols,
                grid: table
                    .data
                    .grid
                    .into_iter()
                    .map(|row| {
                        row.into_iter()
                            .map(|cell| TableCell {
                                text: cell.text,
                                column_header: cell.column_header,
                            })
                            .collect()
                    })
                    .collect(),
            })
            .collect();

        let page_count = match self.pages.len() {
            0 => None,
            n => Some(n as u32),
        };

        ConvertedDocument {
            markdown,
            items,
            tables,
            pictures,
            page_count,
        }
    }

    /// Depth-first walk of the body tree, skipping furniture and dangling refs.
    fn reading_order(&self) -> Vec<ContentItem> {
        let mut items = Vec::new();
        let mut visited = HashSet::new();
        self.walk(&self.body.children, 0, &mut visited, &mut items);
        items
    }

    fn walk(
        &self,
        children: &[ItemRef],
        depth: usize,
        visited: &mut HashSet<NodeKey>,
        items: &mut Vec<ContentItem>,
    ) {
        if depth >= MAX_TREE_DEPTH {
            return;
        }

        for child in children {
            let Some(key) = NodeKey::parse(&child.ref_path) else {
                continue;
            };
            if !visited.insert(key) {
                continue;
            }

            let (item, layer, grandchildren) = match key {
                NodeKey::Text(i) => match self.texts.get(i) {
                    Some(t) => (
                        ContentItem::text(t.text.clone()),
                        &t.content_layer,
                        &t.children,
                    ),
                    None => continue,
                },
                NodeKey::Group(i) => match self.groups.get(i) {
                    Some(g) => (
                        ContentItem::structural(ContentKind::Group),
                        &g.content_layer,
                        &g.children,
                    ),
                    None => continue,
                },
                NodeKey::Table(i) => match self.tables.get(i) {
                    Some(t) => (
                        ContentItem::structural(ContentKind::Table),
                        &t.content_layer,
                        &t.children,
                    ),
                    None => continue,
                },
                NodeKey::Picture(i) => match self.pictures.get(i) {
                    Some(p) => (
                        ContentItem::structural(ContentKind::Picture),
                        &p.content_layer,
                        &p.children,
                    ),
                    None => continue,
                },
            };

            if layer.as_deref() == Some(FURNITURE_LAYER) {
                continue;
            }

            items.push(item);
            self.walk(grandchildren, depth + 1, visited, items);
        }
    }

    fn caption_for(&self, captions: &[ItemRef]) -> Option<String> {
        let parts: Vec<&str> = captions
            .iter()
            .filter_map(|caption| match NodeKey::parse(&caption.ref_path) {
                Some(NodeKey::Text(i)) => self.texts.get(i).map(|t| t.text.as_str()),
                _ => None,
            })
            .filter(|text| !text.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}
