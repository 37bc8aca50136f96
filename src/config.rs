//! Invocation resolution
//!
//! Turns the raw process arguments and environment into the pair of paths a
//! rewrite works on. Git calls the helper as its editor with exactly one
//! argument, the commit message file; anything else is ignored.
//!
//! ```text
//! comment-writer .git/COMMIT_EDITMSG
//!     source      = $COMMENT_FILE_NAME (if set and not blank)
//!                   else .git/COMMIT_EDITMSG
//!     destination = .git/COMMIT_EDITMSG
//! ```

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Environment variable naming a file to read the comment lines from
pub const COMMENT_FILE_NAME: &str = "COMMENT_FILE_NAME";

/// Environment variable holding the log filter (`env_logger` syntax)
pub const LOG_FILTER: &str = "COMMENT_WRITER_LOG";

/// Log filter used when [`LOG_FILTER`] is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// The resolved read and write targets of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    source: PathBuf,
    destination: PathBuf,
}

impl Invocation {
    /// Resolve from the current process arguments and environment.
    ///
    /// Returns `None` unless exactly one argument was passed.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::resolve(env::args_os().skip(1), |key| env::var_os(key))
    }

    /// Resolve from explicit arguments (program name excluded) and an
    /// environment lookup.
    ///
    /// The lookup is only consulted once the argument count is known to be
    /// exactly one.
    pub fn resolve<I, S, F>(args: I, lookup: F) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
        F: FnOnce(&str) -> Option<OsString>,
    {
        let mut args = args.into_iter();
        let destination = PathBuf::from(args.next()?.into());
        if args.next().is_some() {
            return None;
        }

        let source = lookup(COMMENT_FILE_NAME)
            .filter(|value| !is_blank(value))
            .map_or_else(|| destination.clone(), PathBuf::from);

        Some(Self {
            source,
            destination,
        })
    }

    /// Path the lines are read from
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Path the lines are written to (always the command argument)
    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Whether lines are read from a different path than they are written to
    #[must_use]
    pub fn has_override(&self) -> bool {
        self.source != self.destination
    }
}

/// Empty or whitespace-only. Values that are not valid Unicode are never blank.
fn is_blank(value: &OsStr) -> bool {
    value.to_str().is_some_and(|s| s.trim().is_empty())
}
