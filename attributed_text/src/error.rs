// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Rich error type for attributed text operations.
///
/// Carries a non-exhaustive [`ErrorKind`] plus contextual information about the attempted
/// range and the content length at the time of failure. Offsets are code point indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The start offset of the caller-provided range (or the offending offset).
    start: usize,

    /// The end offset of the caller-provided range (or the offending offset).
    end: usize,

    /// Whether `end` was given as an inclusive content offset or an exclusive boundary.
    bounds: Bounds,

    /// The length in code points of the content at the time of failure.
    len: usize,

    /// Which invariant failed, for [`ErrorKind::InvariantViolation`].
    detail: Option<&'static str>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Bounds {
    Inclusive,
    Exclusive,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` is the content length context; an `is_empty` would be misleading."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The start offset of the range provided by the caller.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The end offset of the range provided by the caller.
    ///
    /// Whether this is inclusive depends on the operation: span operations take inclusive
    /// ranges, text slicing operations take exclusive ends.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The length in code points of the content at the time of the error.
    pub fn len(&self) -> usize {
        self.len
    }

    /// A short description of the failed invariant, for [`ErrorKind::InvariantViolation`].
    pub fn detail(&self) -> Option<&'static str> {
        self.detail
    }

    fn new(kind: ErrorKind, start: usize, end: usize, bounds: Bounds, len: usize) -> Self {
        Self {
            kind,
            start,
            end,
            bounds,
            len,
            detail: None,
        }
    }

    /// A single content offset outside `0..len`.
    pub(crate) fn offset_out_of_range(offset: usize, len: usize) -> Self {
        Self::new(ErrorKind::OutOfRange, offset, offset, Bounds::Inclusive, len)
    }

    /// An inclusive content range reaching outside `0..len`.
    pub(crate) fn out_of_range(start: usize, end: usize, len: usize) -> Self {
        Self::new(ErrorKind::OutOfRange, start, end, Bounds::Inclusive, len)
    }

    /// An exclusive boundary range reaching outside `0..=len`.
    pub(crate) fn boundary_out_of_range(start: usize, end: usize, len: usize) -> Self {
        Self::new(ErrorKind::OutOfRange, start, end, Bounds::Exclusive, len)
    }

    pub(crate) fn invalid_range(start: usize, end: usize, len: usize) -> Self {
        Self::new(ErrorKind::InvalidRange, start, end, Bounds::Inclusive, len)
    }

    pub(crate) fn invalid_boundary_range(start: usize, end: usize, len: usize) -> Self {
        Self::new(ErrorKind::InvalidRange, start, end, Bounds::Exclusive, len)
    }

    pub(crate) fn attribution_conflict(start: usize, end: usize, len: usize) -> Self {
        Self::new(
            ErrorKind::AttributionConflict,
            start,
            end,
            Bounds::Inclusive,
            len,
        )
    }

    /// `spans_len` is reported through `start`/`end`, `text_len` through `len`.
    pub(crate) fn length_mismatch(spans_len: usize, text_len: usize) -> Self {
        Self::new(
            ErrorKind::LengthMismatch,
            spans_len,
            spans_len,
            Bounds::Exclusive,
            text_len,
        )
    }

    pub(crate) fn invariant_violation(offset: usize, len: usize, detail: &'static str) -> Self {
        Self {
            detail: Some(detail),
            ..Self::new(
                ErrorKind::InvariantViolation,
                offset,
                offset,
                Bounds::Inclusive,
                len,
            )
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let separator = match self.bounds {
            Bounds::Inclusive => "..=",
            Bounds::Exclusive => "..",
        };
        match self.kind {
            ErrorKind::OutOfRange if self.start == self.end && self.bounds == Bounds::Inclusive => {
                write!(f, "offset {} out of bounds for len {}", self.start, self.len)
            }
            ErrorKind::OutOfRange => write!(
                f,
                "range {}{}{} out of bounds for len {}",
                self.start, separator, self.end, self.len
            ),
            ErrorKind::InvalidRange => write!(
                f,
                "invalid range {}{}{}: start > end",
                self.start, separator, self.end
            ),
            ErrorKind::AttributionConflict => write!(
                f,
                "range {}{}{} overlaps a conflicting attribution",
                self.start, separator, self.end
            ),
            ErrorKind::LengthMismatch => write!(
                f,
                "spans bound to len {} cannot be paired with text of len {}",
                self.start, self.len
            ),
            ErrorKind::InvariantViolation => write!(
                f,
                "span invariant violated at offset {} (len {}): {}",
                self.start,
                self.len,
                self.detail.unwrap_or("unknown")
            ),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An offset or range endpoint was outside the content.
    ///
    /// Content offsets must be in `0..len`; boundary offsets (insertion points, exclusive
    /// ends) must be in `0..=len`. Offsets are never clamped.
    OutOfRange,

    /// The provided range had `start > end`.
    InvalidRange,

    /// The attribution would overlap an existing run of an attribution it conflicts with.
    AttributionConflict,

    /// A pre-populated span store was bound to a different length than its text.
    LengthMismatch,

    /// Markers failed the ordering, pairing, bounds or merge invariants.
    ///
    /// Only reported for caller-supplied markers; the engine panics if its own mutations ever
    /// produce this.
    InvariantViolation,
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};
    use alloc::format;

    #[test]
    fn single_offset_message() {
        let err = Error::offset_out_of_range(10, 10);
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(format!("{err}"), "offset 10 out of bounds for len 10");
    }

    #[test]
    fn range_messages_use_matching_separator() {
        let inclusive = Error::out_of_range(3, 12, 10);
        assert!(format!("{inclusive}").contains("3..=12"));
        let exclusive = Error::boundary_out_of_range(3, 12, 10);
        assert!(format!("{exclusive}").contains("3..12"));
        let reversed = Error::invalid_boundary_range(5, 2, 10);
        assert_eq!(reversed.kind(), ErrorKind::InvalidRange);
        assert!(format!("{reversed}").contains("start > end"));
    }

    #[test]
    fn invariant_violation_carries_detail() {
        let err = Error::invariant_violation(4, 8, "end marker without start");
        assert_eq!(err.kind(), ErrorKind::InvariantViolation);
        assert_eq!(err.detail(), Some("end marker without start"));
        assert!(format!("{err}").contains("offset 4"));
    }

    #[test]
    fn length_mismatch_reports_both_lengths() {
        let err = Error::length_mismatch(3, 5);
        assert_eq!(err.kind(), ErrorKind::LengthMismatch);
        assert_eq!(err.start(), 3);
        assert_eq!(err.len(), 5);
        assert!(format!("{err}").contains("len 3"));
    }
}
