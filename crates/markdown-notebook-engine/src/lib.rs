pub mod io;
pub mod notebook;
pub mod parsing;


// Re-export key types for easier usage
pub use io::*;
pub use notebook::*;
pub use parsing::{Cell, CellKind, SegmentOptions, segment, segment_with};
