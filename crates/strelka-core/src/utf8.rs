//! Single-scalar UTF-8 decoding over raw bytes.
//!
//! The recognizer walks its input byte by byte, so it cannot lean on
//! `str::chars` at arbitrary offsets. Decoding never reads past the end of
//! the buffer: a sequence whose continuation bytes are missing or malformed
//! yields `None`.

/// A decoded scalar value and the number of bytes it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf8Char {
    pub codepoint: u32,
    pub len: usize,
}

#[inline]
fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Decodes the scalar starting at `index`.
///
/// Returns `None` at end of input, on a stray continuation byte, on an
/// invalid lead byte, and on truncated or malformed continuation bytes.
pub fn decode_utf8(bytes: &[u8], index: usize) -> Option<Utf8Char> {
    let lead = *bytes.get(index)?;

    let (len, initial) = match lead {
        b if b & 0x80 == 0 => {
            return Some(Utf8Char {
                codepoint: u32::from(b),
                len: 1,
            });
        }
        b if b & 0xE0 == 0xC0 => (2, u32::from(b & 0x1F)),
        b if b & 0xF0 == 0xE0 => (3, u32::from(b & 0x0F)),
        b if b & 0xF8 == 0xF0 => (4, u32::from(b & 0x07)),
        _ => return None,
    };

    let tail = bytes.get(index + 1..index + len)?;
    let mut codepoint = initial;
    for &byte in tail {
        if !is_continuation(byte) {
            return None;
        }
        codepoint = (codepoint << 6) | u32::from(byte & 0x3F);
    }

    Some(Utf8Char { codepoint, len })
}
