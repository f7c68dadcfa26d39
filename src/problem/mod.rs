// Program wide top-level error reporting

mod format;
mod render;

// Re-export all public symbols
pub use format::*;
pub use render::*;
