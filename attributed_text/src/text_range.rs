// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::{Range, RangeInclusive};

use crate::Error;

/// A validated, **inclusive** code point range into attributed content.
///
/// Attribution spans cover both of their endpoints: a span from `5` to `9` covers five
/// positions, and a span from `3` to `3` covers exactly one. `TextRange` carries the invariants
/// the span engine relies on:
///
/// - `start <= end`
/// - `end < len` for the content it was validated against
///
/// A `TextRange` is never empty.
///
/// ## Important
///
/// `TextRange` does not encode which content it was validated against. It is the caller's
/// responsibility to only reuse a `TextRange` with content of the same length.
///
/// ## Example
///
/// ```
/// use attributed_text::TextRange;
///
/// let range = TextRange::new(10, 5..=9).unwrap();
/// assert_eq!(range.len(), 5);
/// assert!(TextRange::new(10, 5..=10).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextRange {
    start: usize,
    end: usize,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "A `TextRange` always covers at least one offset."
)]
impl TextRange {
    /// Returns a validated `TextRange` for content of `len` code points.
    #[inline]
    pub fn new(len: usize, range: RangeInclusive<usize>) -> Result<Self, Error> {
        let (start, end) = range.into_inner();
        if start > end {
            return Err(Error::invalid_range(start, end, len));
        }
        if end >= len {
            return Err(Error::out_of_range(start, end, len));
        }
        Ok(Self { start, end })
    }

    /// Creates a `TextRange` without validation.
    ///
    /// This is intended for internal callers that already maintain range invariants.
    #[must_use]
    #[inline]
    pub const fn new_unchecked(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The first covered offset.
    #[must_use]
    #[inline]
    pub const fn start(self) -> usize {
        self.start
    }

    /// The last covered offset (inclusive).
    #[must_use]
    #[inline]
    pub const fn end(self) -> usize {
        self.end
    }

    /// The number of covered offsets.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start + 1
    }

    /// Returns `true` if `offset` lies within this range.
    #[must_use]
    #[inline]
    pub const fn contains(self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }

    /// Returns this range as a `RangeInclusive<usize>`.
    #[must_use]
    #[inline]
    pub fn as_range_inclusive(self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    /// Returns the equivalent exclusive range, `start..end + 1`.
    #[must_use]
    #[inline]
    pub fn to_exclusive(self) -> Range<usize> {
        self.start..self.end + 1
    }
}

impl From<TextRange> for RangeInclusive<usize> {
    #[inline]
    fn from(value: TextRange) -> Self {
        value.as_range_inclusive()
    }
}

/// Checks that `offset` addresses a content position in `0..len`.
#[inline]
pub(crate) fn validate_offset(len: usize, offset: usize) -> Result<(), Error> {
    if offset >= len {
        return Err(Error::offset_out_of_range(offset, len));
    }
    Ok(())
}

/// Checks an exclusive `start..end` range of boundary positions against `0..=len`.
#[inline]
pub(crate) fn validate_boundaries(len: usize, start: usize, end: usize) -> Result<(), Error> {
    if start > end {
        return Err(Error::invalid_boundary_range(start, end, len));
    }
    if end > len {
        return Err(Error::boundary_out_of_range(start, end, len));
    }
    Ok(())
}
