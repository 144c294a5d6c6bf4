//! Context types for rule execution.

use crate::syntax::Span;
use crate::types::Location;
use std::path::{Path, PathBuf};

/// Context provided to rules for one source file.
///
/// Carries the verbatim text the syntax tree was parsed from, so rules can
/// turn node spans into reportable locations.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Path to the file as given by the host.
    pub path: &'a Path,
    /// File contents.
    pub content: &'a str,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
    /// Byte offset of the start of each line.
    line_starts: Vec<usize>,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);

        Self {
            path,
            content,
            relative_path,
            line_starts: line_starts(content),
        }
    }

    /// Creates a context for in-memory source with no project root.
    #[must_use]
    pub fn from_source(path: &'a Path, content: &'a str) -> Self {
        Self::new(path, content, Path::new(""))
    }

    /// Returns the 1-indexed `(line, column)` of a byte offset.
    ///
    /// Offsets past the end clamp to the end of the text.
    #[must_use]
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.content.len());
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .max(1);
        let column = offset - self.line_starts[line - 1] + 1;
        (line, column)
    }

    /// Converts a node span into a reportable location.
    #[must_use]
    pub fn location(&self, span: Span) -> Location {
        let (line, column) = self.line_col(span.start);
        Location::new(self.relative_path.clone(), line, column).with_span(span.start, span.len())
    }

    /// Returns the verbatim text of `span`, or `""` if it is out of range.
    #[must_use]
    pub fn text(&self, span: Span) -> &'a str {
        span.source(self.content).unwrap_or("")
    }
}

fn line_starts(content: &str) -> Vec<usize> {
    std::iter::once(0)
        .chain(content.match_indices('\n').map(|(i, _)| i + 1))
        .collect()
}
