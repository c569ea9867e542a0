//! Highlighted output of formatted templates

mod terminal;

pub use terminal::Terminal;
