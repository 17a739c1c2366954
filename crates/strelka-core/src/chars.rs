//! Character classes of the strelka language.

/// Basic Cyrillic capital letters `А`..=`Я`.
const CYRILLIC_UPPER: std::ops::RangeInclusive<u32> = 0x0410..=0x042F;
/// Basic Cyrillic small letters `а`..=`я`.
const CYRILLIC_LOWER: std::ops::RangeInclusive<u32> = 0x0430..=0x044F;

#[inline]
pub fn is_ascii_letter(codepoint: u32) -> bool {
    matches!(codepoint, 0x41..=0x5A | 0x61..=0x7A)
}

#[inline]
pub fn is_ascii_digit(codepoint: u32) -> bool {
    matches!(codepoint, 0x30..=0x39)
}

#[inline]
pub fn is_cyrillic_letter(codepoint: u32) -> bool {
    CYRILLIC_UPPER.contains(&codepoint) || CYRILLIC_LOWER.contains(&codepoint)
}

/// ASCII letter, ASCII digit, `_`, or a basic Cyrillic letter.
///
/// Identifiers, keyword boundaries, and the bodies of char and string
/// literals all use this one predicate.
#[inline]
pub fn is_identifier_constituent(codepoint: u32) -> bool {
    is_ascii_letter(codepoint)
        || is_ascii_digit(codepoint)
        || codepoint == u32::from(b'_')
        || is_cyrillic_letter(codepoint)
}
