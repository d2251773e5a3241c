// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::RangeInclusive;

use crate::{Attribution, AttributionSet};

/// Whether a [`SpanMarker`] opens or closes a run.
///
/// `Start` orders before `End`, so a one-position run at offset `n` stores its `Start` marker
/// ahead of its `End` marker.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpanMarkerKind {
    /// The first offset covered by a run.
    Start,
    /// The last offset covered by a run (inclusive).
    End,
}

/// The primitive record stored by [`AttributedSpans`]: one end of one attribution run.
///
/// [`AttributedSpans`]: crate::AttributedSpans
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpanMarker<A> {
    attribution: A,
    offset: usize,
    kind: SpanMarkerKind,
}

impl<A> SpanMarker<A> {
    /// Creates a marker.
    pub fn new(attribution: A, offset: usize, kind: SpanMarkerKind) -> Self {
        Self {
            attribution,
            offset,
            kind,
        }
    }

    /// Creates a marker opening a run at `offset`.
    pub fn start(attribution: A, offset: usize) -> Self {
        Self::new(attribution, offset, SpanMarkerKind::Start)
    }

    /// Creates a marker closing a run at `offset` (inclusive).
    pub fn end(attribution: A, offset: usize) -> Self {
        Self::new(attribution, offset, SpanMarkerKind::End)
    }

    /// The attribution this marker belongs to.
    pub fn attribution(&self) -> &A {
        &self.attribution
    }

    /// The code point offset of this marker.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Whether this marker opens or closes a run.
    pub fn kind(&self) -> SpanMarkerKind {
        self.kind
    }

    /// Returns `true` for a `Start` marker.
    pub fn is_start(&self) -> bool {
        self.kind == SpanMarkerKind::Start
    }

    /// Returns `true` for an `End` marker.
    pub fn is_end(&self) -> bool {
        self.kind == SpanMarkerKind::End
    }

    /// The key markers are stored sorted by.
    pub(crate) fn sort_key(&self) -> (usize, SpanMarkerKind) {
        (self.offset, self.kind)
    }
}

/// One maximal run of a single attribution, with inclusive ends.
///
/// Produced on demand by queries; never stored.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AttributionSpan<A> {
    /// The attribution covering the run.
    pub attribution: A,
    /// The first covered offset.
    pub start: usize,
    /// The last covered offset (inclusive).
    pub end: usize,
}

impl<A> AttributionSpan<A> {
    /// Creates a span covering `start..=end`.
    pub fn new(attribution: A, start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span {start}..={end} is reversed");
        Self {
            attribution,
            start,
            end,
        }
    }

    /// The covered offsets.
    pub fn range(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    /// Returns `true` if the span covers `offset`.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }

    /// Returns `true` if the span covers at least one offset of `start..=end`.
    pub fn intersects(&self, start: usize, end: usize) -> bool {
        self.start <= end && self.end >= start
    }

    /// Returns `true` if the span covers every offset of `start..=end`.
    pub fn covers(&self, start: usize, end: usize) -> bool {
        self.start <= start && self.end >= end
    }

    pub(crate) fn shifted(self, by: usize) -> Self {
        Self::new(self.attribution, self.start + by, self.end + by)
    }
}

/// One run of a collapsed partition: the exact set of attributions active over `start..=end`.
///
/// See [`AttributedSpans::collapse_spans`].
///
/// [`AttributedSpans::collapse_spans`]: crate::AttributedSpans::collapse_spans
#[derive(Clone, Debug)]
pub struct MultiAttributionSpan<A: Attribution> {
    /// Every attribution active throughout the run. May be empty.
    pub attributions: AttributionSet<A>,
    /// The first covered offset.
    pub start: usize,
    /// The last covered offset (inclusive).
    pub end: usize,
}

impl<A: Attribution> MultiAttributionSpan<A> {
    /// Creates a collapsed run covering `start..=end`.
    pub fn new(attributions: AttributionSet<A>, start: usize, end: usize) -> Self {
        Self {
            attributions,
            start,
            end,
        }
    }

    /// The covered offsets.
    pub fn range(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

impl<A: Attribution> PartialEq for MultiAttributionSpan<A> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.end == other.end
            && self.attributions == other.attributions
    }
}

impl<A: Attribution> Eq for MultiAttributionSpan<A> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_sorts_before_end_at_same_offset() {
        let start = SpanMarker::start('a', 3);
        let end = SpanMarker::end('a', 3);
        assert!(start.sort_key() < end.sort_key());
        assert!(start.is_start());
        assert!(end.is_end());
        assert!(SpanMarker::end('a', 2).sort_key() < start.sort_key());
    }

    #[test]
    fn span_geometry_is_inclusive() {
        let span = AttributionSpan::new('b', 5, 9);
        assert!(span.contains(5));
        assert!(span.contains(9));
        assert!(!span.contains(10));
        assert!(span.intersects(9, 12));
        assert!(!span.intersects(10, 12));
        assert!(span.covers(6, 9));
        assert!(!span.covers(4, 9));
        assert_eq!(span.clone().shifted(2).range(), 7..=11);
    }
}
