//! # Cell Segmentation
//!
//! Single-pass segmentation of a Markdown document into notebook cells.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (blank status, fence delimiter, header marker)
//!
//! 2. **Cell Construction** (`builder`): A `CellBuilder` runs the two-state scan
//!    (`Outside` / `InFence`) and emits `Cell`s as boundaries are recognized
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Cell`, `CellKind`, `SegmentOptions`)
//! - **`kinds`**: Line-level syntax with owned delimiters (CodeFence, Header)
//! - **`classify`**: `LineClassifier` produces `LineClass` for each line
//! - **`builder`**: `CellBuilder` state machine for cell construction
//!
//! ## Key Invariants
//!
//! - Cells come out in source order, with strictly increasing spans
//! - Fenced blocks are raw zones: header lines inside a fence are plain content
//! - Whether a fence becomes code is decided when it closes, from its opening tag
//! - Prose cells are never whitespace-only

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::CellBuilder;
pub use classify::{LineClass, LineClassifier};
pub use types::{Cell, CellKind, DEFAULT_CODE_LANGUAGE, SegmentOptions};
