//! comment-writer - Rewrites the commit message file of an interactive rebase step
//!
//! Git hands the helper the path of the message file it is about to use. The
//! lines are read (from that file, or from the file named by
//! `COMMENT_FILE_NAME`), and written back to the given path separated by `\n`
//! with no terminator after the last line.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod comment_file;
pub mod config;
pub mod error;
pub mod rewrite;

pub use comment_file::{LineSequence, read_lines, write_lines};
pub use config::Invocation;
pub use error::CommentFileError;
pub use rewrite::{RewriteSummary, rewrite};
