//! Cursor: the recognizer's position as a plain value.
//!
//! A `Cursor` is `Copy`, so taking a snapshot is a copy and undoing a failed
//! alternative is an assignment. Advancing never mutates in place; it returns
//! the next cursor.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    offset: usize,
    row: u32,
    /// Offset of the first byte after the most recent line break.
    line_start: usize,
}

impl Cursor {
    pub const START: Cursor = Cursor {
        offset: 0,
        row: 1,
        line_start: 0,
    };

    #[inline]
    pub fn offset(self) -> usize {
        self.offset
    }

    #[inline]
    pub fn row(self) -> u32 {
        self.row
    }

    /// 1-based column counted in bytes, not codepoints.
    #[inline]
    pub fn column(self) -> u32 {
        (self.offset - self.line_start + 1) as u32
    }

    pub fn position(self) -> Position {
        Position {
            offset: self.offset,
            row: self.row,
            column: self.column(),
        }
    }

    /// Steps over one byte. Returns `None` at end of input.
    ///
    /// Every `\n` and every `\r` byte starts a new row, so a `\r\n` pair
    /// advances the row twice.
    pub fn advance(self, bytes: &[u8]) -> Option<Cursor> {
        let byte = *bytes.get(self.offset)?;
        let next = self.offset + 1;
        let cursor = match byte {
            b'\n' | b'\r' => Cursor {
                offset: next,
                row: self.row + 1,
                line_start: next,
            },
            _ => Cursor {
                offset: next,
                ..self
            },
        };
        Some(cursor)
    }

    /// Steps over `count` bytes, stopping early at end of input.
    pub fn advance_by(self, bytes: &[u8], count: usize) -> Cursor {
        let mut cursor = self;
        for _ in 0..count {
            match cursor.advance(bytes) {
                Some(next) => cursor = next,
                None => break,
            }
        }
        cursor
    }

    /// The cursor reached by walking from the start of `bytes` to `offset`.
    pub fn at(bytes: &[u8], offset: usize) -> Cursor {
        Cursor::START.advance_by(bytes, offset)
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::START
    }
}

/// A resolved location: byte offset plus 1-based row and byte column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub offset: usize,
    pub row: u32,
    pub column: u32,
}
