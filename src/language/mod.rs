// Types representing an ERV campaign

mod error;
mod schedule;
mod types;

// Re-export all public symbols
pub use error::*;
pub use schedule::*;
pub use types::*;
