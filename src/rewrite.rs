//! The rewrite pipeline: resolve, read, write

use std::path::PathBuf;

use log::debug;

use crate::comment_file::{read_lines, write_lines};
use crate::config::Invocation;
use crate::error::CommentFileError;

/// What a completed rewrite did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteSummary {
    /// File the lines were read from
    pub source: PathBuf,
    /// File that was replaced
    pub destination: PathBuf,
    /// Number of lines written
    pub lines: usize,
    /// Size of the destination afterwards
    pub bytes_written: usize,
}

/// Read the invocation's source and write the normalized lines to its
/// destination.
///
/// The source is read in full before the destination is opened, so a read
/// failure leaves the destination untouched.
pub fn rewrite(invocation: &Invocation) -> Result<RewriteSummary, CommentFileError> {
    let source = invocation.source();
    let destination = invocation.destination();

    debug!(
        "Rewriting {} from {}{}",
        destination.display(),
        source.display(),
        if invocation.has_override() { " (override)" } else { "" }
    );

    let lines = read_lines(source)?;
    debug!("Read {} line(s) from {}", lines.len(), source.display());

    let bytes_written = write_lines(destination, &lines)?;
    debug!("Wrote {bytes_written} byte(s) to {}", destination.display());

    Ok(RewriteSummary {
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
        lines: lines.len(),
        bytes_written,
    })
}
