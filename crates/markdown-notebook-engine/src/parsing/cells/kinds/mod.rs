pub mod code_fence;
pub mod header;

pub use code_fence::CodeFence;
pub use header::Header;
