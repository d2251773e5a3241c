// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// Code point addressing for the text wrapped by an [`AttributedText`].
///
/// Attribution offsets count Unicode scalar values, while Rust strings are indexed by UTF-8
/// bytes. This trait bridges the two.
///
/// [`AttributedText`]: crate::AttributedText
pub trait TextStorage {
    /// The number of code points in the text.
    fn char_len(&self) -> usize;

    /// The byte index at which the code point at `char_offset` starts.
    ///
    /// Offsets at or past the end map to the byte length of the text.
    fn byte_index(&self, char_offset: usize) -> usize;

    /// Borrow the code points in `range`.
    ///
    /// Endpoints past the end are treated as the end.
    fn char_slice(&self, range: Range<usize>) -> &str;
}

impl TextStorage for str {
    fn char_len(&self) -> usize {
        self.chars().count()
    }

    fn byte_index(&self, char_offset: usize) -> usize {
        self.char_indices()
            .nth(char_offset)
            .map_or(self.len(), |(byte_index, _)| byte_index)
    }

    fn char_slice(&self, range: Range<usize>) -> &str {
        let start = self.byte_index(range.start);
        let end = self.byte_index(range.end).max(start);
        &self[start..end]
    }
}
