//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::core::Recognizer;

impl Recognizer<'_> {
    #[inline]
    pub(super) fn assert_char_boundary(&self, offset: usize) {
        assert!(
            self.source.is_char_boundary(offset),
            "broken recognizer invariant: offset {offset} splits a codepoint"
        );
    }
}
