// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A caret offset was beyond the end of the text.
///
/// Offsets are never clamped; a caller asking to move from a position that doesn't exist has a
/// bug somewhere upstream, and this error reports it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OffsetOutOfRange {
    offset: usize,
    len: usize,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`len` is the content length context; an `is_empty` would be misleading."
)]
impl OffsetOutOfRange {
    pub(crate) fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// The offending code point offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The length of the text, in code points, at the time of the error.
    pub fn len(&self) -> usize {
        self.len
    }
}

impl core::fmt::Display for OffsetOutOfRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "offset {} out of range for text of {} code points",
            self.offset, self.len
        )
    }
}

impl core::error::Error for OffsetOutOfRange {}
