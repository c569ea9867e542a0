// Types representing single-file components and the ways handling them fails

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
