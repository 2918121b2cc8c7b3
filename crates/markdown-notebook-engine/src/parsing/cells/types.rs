use crate::parsing::rope::span::Span;

/// Fence tag that marks a block as executable unless configured otherwise.
pub const DEFAULT_CODE_LANGUAGE: &str = "python";

/// The kind of a notebook cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellKind {
    /// Narrative content, including fenced blocks that are not executable.
    Prose,
    /// An executable fenced block.
    Code {
        /// The tag from the opening fence.
        language: String,
    },
}

/// A segmented cell with its kind, content lines and source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub kind: CellKind,
    /// Content lines, each keeping its original terminator.
    pub lines: Vec<String>,
    /// Byte span of the source the cell was built from, fence delimiters included.
    pub span: Span,
}

impl Cell {
    pub fn prose(lines: Vec<String>, span: Span) -> Self {
        Self {
            kind: CellKind::Prose,
            lines,
            span,
        }
    }

    pub fn code(language: impl Into<String>, lines: Vec<String>, span: Span) -> Self {
        Self {
            kind: CellKind::Code {
                language: language.into(),
            },
            lines,
            span,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self.kind, CellKind::Code { .. })
    }

    /// The fence language for code cells, `None` for prose.
    pub fn language(&self) -> Option<&str> {
        match &self.kind {
            CellKind::Prose => None,
            CellKind::Code { language } => Some(language),
        }
    }

    /// Concatenated content lines.
    pub fn text(&self) -> String {
        self.lines.concat()
    }
}

/// Options for [`crate::parsing::segment_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentOptions {
    /// Fence tag (case-sensitive) that turns a fenced block into a code cell.
    pub code_language: String,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            code_language: DEFAULT_CODE_LANGUAGE.to_string(),
        }
    }
}
