//! Formatting the template block of a component

pub mod attributes;
pub mod formatter;
mod renderer;
mod syntax;
pub mod tags;

// Re-export all public symbols
pub use attributes::*;
pub use formatter::*;
pub use renderer::*;
pub use syntax::*;
pub use tags::*;
