//! ANSI palette for `strelka trace` output and span listings.
//!
//! A trace line is `KIND @row:col 'text'`; each of the three parts gets
//! its own color so long listings stay scannable.

/// Escape sequences for one trace line, or empty strings when disabled.
///
/// Standard 16-color codes only, so the palette follows the terminal theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    /// Span kind label (`REPR_FUNC`, `ARROW_OP`).
    pub blue: &'static str,
    /// Quoted source text of a span.
    pub green: &'static str,
    /// `@row:col` position marker.
    pub dim: &'static str,
    /// Ends any of the above.
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Plain output: every field is empty, so formatting is unchanged.
    pub const OFF: Self = Self {
        blue: "",
        green: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
