//! Byte offset to line/column conversion.
//!
//! A [`LineIndex`] is built once per analyzed text and shared by every
//! consumer, so all diagnostics are positioned against the same snapshot.

use crate::{Location, Position, Span};

/// Pre-computed line starts for one source text.
///
/// `\n`, `\r\n` and a lone `\r` all terminate a line.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    source: &'a str,
    /// Byte offset of the first character of each line.
    line_starts: Vec<u32>,
}

impl<'a> LineIndex<'a> {
    /// Builds the index for `source`.
    pub fn new(source: &'a str) -> Self {
        let bytes = source.as_bytes();
        let mut line_starts = vec![0u32];
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'\n' => line_starts.push(i as u32 + 1),
                b'\r' => {
                    if bytes.get(i + 1) == Some(&b'\n') {
                        i += 1;
                    }
                    line_starts.push(i as u32 + 1);
                }
                _ => {}
            }
            i += 1;
        }

        Self {
            source,
            line_starts,
        }
    }

    /// Returns the indexed source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Returns the number of lines. An empty text has one (empty) line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Converts a byte offset to a position.
    ///
    /// Returns `None` when `offset` is past the end of the text. Offsets that
    /// fall inside a multi-byte character resolve to that character's start.
    pub fn position(&self, offset: u32) -> Option<Position> {
        let mut offset = offset as usize;
        if offset > self.source.len() {
            return None;
        }
        while !self.source.is_char_boundary(offset) {
            offset -= 1;
        }

        let line = self.line_of(offset as u32);
        let line_start = self.line_starts[line] as usize;
        let column = self.source[line_start..offset].encode_utf16().count();

        Some(Position::new(line as u32, column as u32))
    }

    /// Converts a position back to a byte offset.
    ///
    /// Columns past the end of the line clamp to the line end. Returns `None`
    /// for a line that does not exist.
    pub fn offset(&self, position: Position) -> Option<u32> {
        let line = position.line as usize;
        let start = *self.line_starts.get(line)? as usize;
        let end = self.line_content_end(line);

        let mut units = 0u32;
        for (idx, ch) in self.source[start..end].char_indices() {
            if units >= position.column {
                return Some((start + idx) as u32);
            }
            units += ch.len_utf16() as u32;
        }

        Some(end as u32)
    }

    /// Converts a span to a start/end location.
    pub fn location(&self, span: Span) -> Option<Location> {
        Some(Location::new(
            self.position(span.start)?,
            self.position(span.end)?,
        ))
    }

    /// Index of the line containing `offset`.
    fn line_of(&self, offset: u32) -> usize {
        self.line_starts.partition_point(|&start| start <= offset) - 1
    }

    /// Byte offset of the end of a line's content, excluding the terminator.
    fn line_content_end(&self, line: usize) -> usize {
        let Some(&next) = self.line_starts.get(line + 1) else {
            return self.source.len();
        };
        let bytes = self.source.as_bytes();
        let mut end = next as usize;
        if end > 0 && bytes[end - 1] == b'\n' {
            end -= 1;
        }
        if end > 0 && bytes[end - 1] == b'\r' {
            end -= 1;
        }
        end
    }
}
