// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Byte spans into Tern source and line lookup for diagnostics.

/// A byte range in the original Tern source.
///
/// Spans come from the external parser. Nodes synthesized by a pass, or
/// decoded from JSON without position info, carry `Span::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Smallest span covering both `self` and `other`.
    pub fn to(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Line-start table for turning byte offsets into `line:col`.
#[derive(Debug, Clone)]
pub struct LineMap {
    /// line_starts[0] is always 0.
    line_starts: Vec<usize>,
}

impl LineMap {
    pub fn new(source: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        LineMap { line_starts }
    }

    /// 1-based `(line, col)` of a byte offset. Offsets past the end clamp to
    /// the last line.
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        let idx = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        (idx + 1, offset - self.line_starts[idx] + 1)
    }

    /// Text of a 1-based line, without its newline.
    pub fn line_text<'a>(&self, source: &'a str, line: usize) -> Option<&'a str> {
        let idx = line.checked_sub(1)?;
        let start = *self.line_starts.get(idx)?;
        let end = match self.line_starts.get(idx + 1) {
            Some(&next) => next.saturating_sub(1),
            None => source.len(),
        };
        source.get(start..end).map(|l| l.strip_suffix('\r').unwrap_or(l))
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
