//! Notebook document model (nbformat v4)
//!
//! Only the fields the pipeline rewrites are typed. Everything else a cell or
//! notebook carries is kept in a flattened map so it survives a round trip.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A notebook document: ordered cells plus untouched top-level fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,

    /// `metadata`, `nbformat`, `nbformat_minor` and anything else
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Notebook {
    pub fn new(cells: Vec<Cell>) -> Self {
        Notebook {
            cells,
            rest: Map::new(),
        }
    }
}

/// Cell kind, as stored in the `cell_type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellType {
    Markdown,
    Code,
    Raw,
}

/// Fields shared by markdown and raw cells
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextCell {
    #[serde(default)]
    pub metadata: Map<String, Value>,

    #[serde(with = "multiline")]
    pub source: String,

    /// `id`, `attachments`, ...
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A code cell with its stored outputs and execution counter
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CodeCell {
    #[serde(default)]
    pub metadata: Map<String, Value>,

    #[serde(with = "multiline")]
    pub source: String,

    #[serde(default)]
    pub outputs: Vec<Value>,

    #[serde(default)]
    pub execution_count: Option<u64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One unit of a notebook document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub enum Cell {
    Markdown(TextCell),
    Code(CodeCell),
    Raw(TextCell),
}

impl Cell {
    pub fn markdown(source: &str) -> Self {
        Cell::Markdown(TextCell {
            source: source.to_string(),
            ..TextCell::default()
        })
    }

    pub fn code(source: &str) -> Self {
        Cell::Code(CodeCell {
            source: source.to_string(),
            ..CodeCell::default()
        })
    }

    /// Builder-style helper attaching `metadata.tags`
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        let tags = tags.iter().map(|t| Value::String(t.to_string())).collect();
        self.metadata_mut()
            .insert("tags".to_string(), Value::Array(tags));
        self
    }

    pub fn cell_type(&self) -> CellType {
        match self {
            Cell::Markdown(_) => CellType::Markdown,
            Cell::Code(_) => CellType::Code,
            Cell::Raw(_) => CellType::Raw,
        }
    }

    pub fn is_markdown(&self) -> bool {
        self.cell_type() == CellType::Markdown
    }

    pub fn is_code(&self) -> bool {
        self.cell_type() == CellType::Code
    }

    pub fn source(&self) -> &str {
        match self {
            Cell::Markdown(cell) | Cell::Raw(cell) => &cell.source,
            Cell::Code(cell) => &cell.source,
        }
    }

    pub fn set_source(&mut self, source: String) {
        match self {
            Cell::Markdown(cell) | Cell::Raw(cell) => cell.source = source,
            Cell::Code(cell) => cell.source = source,
        }
    }

    pub fn metadata(&self) -> &Map<String, Value> {
        match self {
            Cell::Markdown(cell) | Cell::Raw(cell) => &cell.metadata,
            Cell::Code(cell) => &cell.metadata,
        }
    }

    fn metadata_mut(&mut self) -> &mut Map<String, Value> {
        match self {
            Cell::Markdown(cell) | Cell::Raw(cell) => &mut cell.metadata,
            Cell::Code(cell) => &mut cell.metadata,
        }
    }

    /// Tags from `metadata.tags`, in stored order
    pub fn tags(&self) -> Vec<&str> {
        self.metadata()
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| tags.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().contains(&tag)
    }

    /// Remove every occurrence of `tag`. Returns true if anything was removed.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let Some(Value::Array(tags)) = self.metadata_mut().get_mut("tags") else {
            return false;
        };

        let before = tags.len();
        tags.retain(|t| t.as_str() != Some(tag));
        tags.len() != before
    }

    /// Blank the source. Code cells also lose their outputs and execution
    /// counter; the two are always cleared together.
    pub fn blank(&mut self) {
        match self {
            Cell::Markdown(cell) | Cell::Raw(cell) => cell.source.clear(),
            Cell::Code(cell) => {
                cell.source.clear();
                cell.outputs.clear();
                cell.execution_count = None;
            }
        }
    }
}

/// nbformat stores text either as one string or as a list of lines.
/// Reads accept both; writes always produce the list form.
mod multiline {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Multiline {
        Joined(String),
        Lines(Vec<String>),
    }

    pub fn serialize<S: Serializer>(source: &str, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(source.split_inclusive('\n'))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(match Multiline::deserialize(deserializer)? {
            Multiline::Joined(source) => source,
            Multiline::Lines(lines) => lines.concat(),
        })
    }
}
