//! Compiled patterns, built once on first use

mod cache;
