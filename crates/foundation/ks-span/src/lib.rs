//! Source file spans and locations

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// A unique identifier for an analysed file
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct FileId(pub u32);

impl FileId {
    /// Creates a file ID from its raw index
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// A byte offset span in a source file
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// Inclusive start offset
    pub start: u32,
    /// Exclusive end offset
    pub end: u32,
}

impl Span {
    /// Creates a span covering `start..end`
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Byte range suitable for slicing the source text
    pub fn range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }

    /// Length of the span in bytes
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no bytes
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Sub-span of `len` bytes starting at this span's start
    pub fn prefix(&self, len: u32) -> Self {
        Self::new(self.start, self.start + len.min(self.len()))
    }
}

/// A span with associated file
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct FileSpan {
    /// File the span points into
    pub file: FileId,
    /// Byte span within the file
    pub span: Span,
}

impl FileSpan {
    /// Pairs a span with its file
    pub fn new(file: FileId, span: Span) -> Self {
        Self { file, span }
    }

    /// Byte range of the underlying span
    pub fn range(&self) -> Range<usize> {
        self.span.range()
    }
}

/// Where a diagnostic points: always a file and line, a byte span when the
/// tree carried one
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// File the location belongs to
    pub file: FileId,
    /// 1-based line number
    pub line: u32,
    /// Byte span, if known
    pub span: Option<Span>,
}

impl Location {
    /// Creates a location without byte offsets
    pub fn new(file: FileId, line: u32) -> Self {
        Self {
            file,
            line,
            span: None,
        }
    }

    /// Attaches a byte span
    #[must_use]
    pub fn with_span(mut self, span: Option<Span>) -> Self {
        self.span = span;
        self
    }

    /// The location as a [`FileSpan`], when a byte span is known
    pub fn file_span(&self) -> Option<FileSpan> {
        self.span.map(|span| FileSpan::new(self.file, span))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.span {
            Some(span) => write!(
                formatter,
                "file#{}:{} [{}..{}]",
                self.file.0, self.line, span.start, span.end
            ),
            None => write!(formatter, "file#{}:{}", self.file.0, self.line),
        }
    }
}
