use crate::parsing::rope::{lines::LineRef, span::Span};

use super::kinds::{CodeFence, Header};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of segmentation: each line is classified independently
/// without reference to surrounding context. Whether a header or fence line
/// actually acts as a boundary depends on the scan state in the builder.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the rope.
    pub line: Span,
    /// The raw line text including its terminator.
    pub text: String,
    /// The line terminator (`"\n"`, `"\r\n"` or empty on the last line).
    pub terminator: String,
    /// Whether the line is whitespace only.
    pub is_blank: bool,
    /// Whether the line content starts with `#`.
    pub is_header: bool,
    /// Language tag if the line is a fence delimiter.
    pub fence_tag: Option<String>,
}

/// Classifies individual lines for the segmentation phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Fence and header detection look at the line with surrounding whitespace removed.
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let body = lr.text.trim_end_matches(['\r', '\n']);
        let terminator = lr.text[body.len()..].to_string();
        let content = body.trim();

        LineClass {
            line: lr.span,
            text: lr.text.clone(),
            terminator,
            is_blank: content.is_empty(),
            is_header: Header::is_header(content),
            fence_tag: CodeFence::tag(content).map(str::to_string),
        }
    }
}
