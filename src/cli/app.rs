//! Entry point
//!
//! Git runs the helper as `comment-writer <file>`. There is no option
//! parsing: the single argument is always a path, whatever it looks like.

use anyhow::Context;
use log::info;

use comment_writer::config::{DEFAULT_LOG_FILTER, Invocation, LOG_FILTER};
use comment_writer::rewrite;

/// Run the CLI
///
/// Any argument count other than one returns `Ok` without touching a file or
/// printing anything.
pub fn run() -> anyhow::Result<()> {
    let Some(invocation) = Invocation::from_env() else {
        return Ok(());
    };

    init_logging();

    let summary = rewrite(&invocation).with_context(|| {
        format!("failed to rewrite comment file {}", invocation.destination().display())
    })?;

    info!(
        "Rewrote {} ({} line(s), {} byte(s))",
        summary.destination.display(),
        summary.lines,
        summary.bytes_written
    );

    Ok(())
}

fn init_logging() {
    // Ignored if a logger is already installed
    let _ = env_logger::Builder::from_env(
        env_logger::Env::new().filter_or(LOG_FILTER, DEFAULT_LOG_FILTER),
    )
    .format_timestamp(None)
    .try_init();
}
