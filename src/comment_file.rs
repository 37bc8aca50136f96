//! Reading and writing commit message files line by line
//!
//! Lines are kept as raw bytes: `\r\n`, `\r` and `\n` all end a line on
//! read, and only `\n` is written back. A UTF-8 byte-order mark at the start
//! of the source is dropped. Nothing else about the content is touched.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::CommentFileError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Separator written between lines
pub const LINE_SEPARATOR: u8 = b'\n';

/// Ordered lines of a comment file, without their terminators
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSequence {
    lines: Vec<Vec<u8>>,
}

impl LineSequence {
    /// Build from already split lines
    #[must_use]
    pub const fn new(lines: Vec<Vec<u8>>) -> Self {
        Self { lines }
    }

    /// Split raw file content into lines
    #[must_use]
    pub fn parse(content: &[u8]) -> Self {
        let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
        Self::new(split_lines(content).map(<[u8]>::to_vec).collect())
    }

    /// Number of lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the source had no content at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over the lines
    pub fn lines(&self) -> impl Iterator<Item = &[u8]> {
        self.lines.iter().map(Vec::as_slice)
    }

    /// Size in bytes of the joined output
    #[must_use]
    pub fn byte_len(&self) -> usize {
        let content = self.lines.iter().map(Vec::len).sum::<usize>();
        content + self.lines.len().saturating_sub(1)
    }

    /// Lines joined by `\n` with no terminator after the last one
    #[must_use]
    pub fn join(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.byte_len());
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                out.push(LINE_SEPARATOR);
            }
            out.extend_from_slice(line);
        }
        out
    }

    /// Write the joined lines to `writer`
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                writer.write_all(&[LINE_SEPARATOR])?;
            }
            writer.write_all(line)?;
        }
        Ok(())
    }
}

/// Split `content` on `\r\n`, `\r` or `\n`.
///
/// A terminator at the very end does not start another line, so `"a\n"` and
/// `"a"` both give `["a"]`, and empty content gives no lines.
pub fn split_lines(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(end) => {
                let line = &rest[..end];
                let skip = if rest[end..].starts_with(b"\r\n") { 2 } else { 1 };
                rest = &rest[end + skip..];
                Some(line)
            },
            None => {
                let line = rest;
                rest = &[];
                Some(line)
            },
        }
    })
}

/// Read every line of the file at `path`
pub fn read_lines(path: &Path) -> Result<LineSequence, CommentFileError> {
    let content = fs::read(path).map_err(|source| CommentFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(LineSequence::parse(&content))
}

/// Replace the content of `path` with `lines`.
///
/// The file is created if missing and truncated otherwise. There is no
/// temporary file: an interrupted write leaves partial content behind.
/// Returns the number of bytes written.
pub fn write_lines(path: &Path, lines: &LineSequence) -> Result<usize, CommentFileError> {
    let to_write_error = |source: io::Error| CommentFileError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_write_error)?;
    let mut writer = BufWriter::new(file);
    lines.write_to(&mut writer).map_err(to_write_error)?;
    // BufWriter swallows errors on drop
    writer.flush().map_err(to_write_error)?;

    Ok(lines.byte_len())
}
