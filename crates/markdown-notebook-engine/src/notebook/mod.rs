//! # Notebook Serialization
//!
//! Wraps segmented cells in an nbformat 4 document envelope.
//!
//! Prose cells become `markdown` cells and code cells become unexecuted `code`
//! cells with no outputs. The kernel descriptor in the envelope is a constant
//! per conversion, taken from [`NotebookOptions`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::parsing::{Cell, CellKind, SegmentOptions, cells::DEFAULT_CODE_LANGUAGE, segment_with};

pub const NBFORMAT: u32 = 4;
pub const NBFORMAT_MINOR: u32 = 2;

/// The `kernelspec` block of notebook metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelSpec {
    pub display_name: String,
    pub language: String,
    pub name: String,
}

impl Default for KernelSpec {
    fn default() -> Self {
        Self {
            display_name: "Python 3".to_string(),
            language: DEFAULT_CODE_LANGUAGE.to_string(),
            name: "python3".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookMetadata {
    pub kernelspec: KernelSpec,
    pub language_info: LanguageInfo,
}

/// A single notebook cell in nbformat 4 shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub enum NotebookCell {
    Markdown {
        metadata: Map<String, Value>,
        source: Vec<String>,
    },
    Code {
        /// Always `null`: cells are never run during conversion.
        execution_count: Option<u32>,
        metadata: Map<String, Value>,
        outputs: Vec<Value>,
        source: Vec<String>,
    },
}

impl NotebookCell {
    pub fn source(&self) -> &[String] {
        match self {
            NotebookCell::Markdown { source, .. } | NotebookCell::Code { source, .. } => source,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, NotebookCell::Code { .. })
    }
}

impl From<&Cell> for NotebookCell {
    fn from(cell: &Cell) -> Self {
        match cell.kind {
            CellKind::Prose => NotebookCell::Markdown {
                metadata: Map::new(),
                source: cell.lines.clone(),
            },
            CellKind::Code { .. } => NotebookCell::Code {
                execution_count: None,
                metadata: Map::new(),
                outputs: vec![],
                source: cell.lines.clone(),
            },
        }
    }
}

/// Settings that shape a converted notebook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotebookOptions {
    pub kernel: KernelSpec,
    /// Fence tag that marks executable blocks.
    pub code_language: String,
}

impl Default for NotebookOptions {
    fn default() -> Self {
        Self {
            kernel: KernelSpec::default(),
            code_language: DEFAULT_CODE_LANGUAGE.to_string(),
        }
    }
}

impl NotebookOptions {
    pub fn segment_options(&self) -> SegmentOptions {
        SegmentOptions {
            code_language: self.code_language.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    pub cells: Vec<NotebookCell>,
    pub metadata: NotebookMetadata,
    pub nbformat: u32,
    pub nbformat_minor: u32,
}

impl Notebook {
    pub fn from_cells(cells: &[Cell], options: &NotebookOptions) -> Self {
        Self {
            cells: cells.iter().map(NotebookCell::from).collect(),
            metadata: NotebookMetadata {
                kernelspec: options.kernel.clone(),
                language_info: LanguageInfo {
                    name: options.kernel.language.clone(),
                },
            },
            nbformat: NBFORMAT,
            nbformat_minor: NBFORMAT_MINOR,
        }
    }

    /// Pretty-printed JSON, as Jupyter writes it.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn code_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_code()).count()
    }

    pub fn markdown_cell_count(&self) -> usize {
        self.cells.len() - self.code_cell_count()
    }
}

/// Segments `markdown` and wraps the cells in a notebook.
pub fn convert(markdown: &str, options: &NotebookOptions) -> Notebook {
    let cells = segment_with(markdown, &options.segment_options());
    Notebook::from_cells(&cells, options)
}
