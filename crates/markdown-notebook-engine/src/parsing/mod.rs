pub mod cells;
pub mod rope;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use cells::{CellBuilder, LineClassifier};
use rope::lines_with_spans;

pub use cells::{Cell, CellKind, SegmentOptions};

/// Splits a Markdown document into prose and code cells, in source order.
///
/// Fenced blocks tagged `python` become code cells. Never fails: malformed
/// input (an unterminated fence, say) still yields a best-effort sequence.
pub fn segment(text: &str) -> Vec<Cell> {
    segment_with(text, &SegmentOptions::default())
}

/// Like [`segment`], with a configurable executable language tag.
pub fn segment_with(text: &str, options: &SegmentOptions) -> Vec<Cell> {
    let rope = Rope::from(text);
    let classifier = LineClassifier;
    let mut builder = CellBuilder::new(options);

    for lr in lines_with_spans(&rope) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    builder.finish()
}
