use crate::parsing::rope::span::Span;

use super::{
    classify::LineClass,
    kinds::CodeFence,
    types::{Cell, SegmentOptions},
};

#[derive(Debug, Clone)]
enum ScanMode {
    Outside,
    InFence {
        tag: String,
        /// Terminator of the opening delimiter, reused when the fence is rebuilt as prose.
        open_terminator: String,
    },
}

/// Lines gathered for the cell currently being built.
#[derive(Debug, Default)]
struct Pending {
    lines: Vec<String>,
    span: Option<Span>,
}

impl Pending {
    fn extend_span(&mut self, line: Span) {
        self.span = Some(match self.span {
            Some(sp) => Span {
                start: sp.start,
                end: line.end,
            },
            None => line,
        });
    }

    fn push(&mut self, c: &LineClass) {
        self.lines.push(c.text.clone());
        self.extend_span(c.line);
    }

    fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }

    fn take(&mut self) -> (Vec<String>, Span) {
        let prev = std::mem::take(self);
        (prev.lines, prev.span.unwrap_or_default())
    }
}

pub struct CellBuilder {
    code_language: String,
    mode: ScanMode,
    pending: Pending,
    out: Vec<Cell>,
}

impl CellBuilder {
    pub fn new(options: &SegmentOptions) -> Self {
        Self {
            code_language: options.code_language.clone(),
            mode: ScanMode::Outside,
            pending: Pending::default(),
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if self.in_fence() {
            if c.fence_tag.is_some() {
                self.close_fence(c);
            } else {
                self.pending.push(c);
            }
            return;
        }

        if let Some(tag) = &c.fence_tag {
            self.flush_prose();
            self.open_fence(tag, c);
            return;
        }

        if c.is_header {
            self.flush_prose();
        }

        self.pending.push(c);
    }

    pub fn finish(mut self) -> Vec<Cell> {
        // EOF flush
        match std::mem::replace(&mut self.mode, ScanMode::Outside) {
            ScanMode::Outside => self.flush_prose(),
            ScanMode::InFence {
                tag,
                open_terminator,
            } => {
                // Unterminated fence: keep the opener, never invent a closer.
                let (body, span) = self.pending.take();
                let mut lines = Vec::with_capacity(body.len() + 1);
                lines.push(CodeFence::opening_line(&tag, &open_terminator));
                lines.extend(body);
                self.out.push(Cell::prose(lines, span));
            }
        }
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.mode, ScanMode::InFence { .. })
    }

    fn open_fence(&mut self, tag: &str, c: &LineClass) {
        self.pending.extend_span(c.line);
        self.mode = ScanMode::InFence {
            tag: tag.to_string(),
            open_terminator: c.terminator.clone(),
        };
    }

    fn close_fence(&mut self, c: &LineClass) {
        let ScanMode::InFence {
            tag,
            open_terminator,
        } = std::mem::replace(&mut self.mode, ScanMode::Outside)
        else {
            return;
        };

        self.pending.extend_span(c.line);
        let (body, span) = self.pending.take();

        if tag == self.code_language {
            self.out.push(Cell::code(tag, body, span));
            return;
        }

        let mut lines = Vec::with_capacity(body.len() + 2);
        lines.push(CodeFence::opening_line(&tag, &open_terminator));
        lines.extend(body);
        lines.push(CodeFence::closing_line(&c.terminator));
        self.out.push(Cell::prose(lines, span));
    }

    fn flush_prose(&mut self) {
        let blank = self.pending.is_blank();
        let (lines, span) = self.pending.take();
        if !blank {
            self.out.push(Cell::prose(lines, span));
        }
    }
}

impl Default for CellBuilder {
    fn default() -> Self {
        Self::new(&SegmentOptions::default())
    }
}
