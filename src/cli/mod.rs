//! CLI layer for comment-writer
//!
//! - [`app`] - Entry point: argument check, logging setup, rewrite

pub mod app;

// Re-export main entry point
pub use app::run;
