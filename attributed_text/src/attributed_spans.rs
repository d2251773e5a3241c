// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::cmp::max;
use core::hash::{BuildHasher, Hash, Hasher};
use core::ops::RangeInclusive;

use foldhash::fast::FixedState;

use crate::collapse::collapse_runs;
use crate::listeners::ChangeListeners;
use crate::text_range::validate_offset;
use crate::{
    Attribution, AttributionSet, AttributionSpan, Error, ListenerId, MultiAttributionSpan,
    SpanMarker, SpanMarkerKind, TextRange,
};

/// Seed for the order-independent hash of a store's runs.
const RUN_HASH_SEED: u64 = 0x5eed_a77e_0000_0001;

/// The sorted set of attribution markers for content of a fixed length.
///
/// Every attribution is stored as maximal runs with **inclusive** ends, each run encoded as a
/// `Start` and an `End` [`SpanMarker`]. After every mutation:
///
/// 1. Markers are sorted by offset (`Start` before `End` at the same offset), and the markers
///    of any one attribution alternate `Start`, `End`, `Start`, `End`...
/// 2. There are no duplicate markers.
/// 3. Runs of equivalent attributions (see [`Attribution::can_merge_with`]) never touch or
///    overlap: they are always fused into one run.
/// 4. Every marker lies in `0..content_len`.
///
/// Merging on touch is what makes [`has_attributions_throughout`] and
/// [`collapse_spans`] correct, so it is done eagerly by every mutation.
///
/// ```
/// use attributed_text::{AttributedSpans, StyleAttribution::Bold};
///
/// let mut spans = AttributedSpans::new(10);
/// spans.add_attribution(Bold, 0..=4).unwrap();
/// spans.add_attribution(Bold, 5..=9).unwrap();
///
/// let runs = spans.attribution_spans();
/// assert_eq!(runs.len(), 1);
/// assert_eq!(runs[0].range(), 0..=9);
/// ```
///
/// [`has_attributions_throughout`]: AttributedSpans::has_attributions_throughout
/// [`collapse_spans`]: AttributedSpans::collapse_spans
pub struct AttributedSpans<A: Attribution> {
    len: usize,
    markers: Vec<SpanMarker<A>>,
    listeners: ChangeListeners,
}

impl<A: Attribution> AttributedSpans<A> {
    /// Creates an empty store for content of `len` code points.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            markers: Vec::new(),
            listeners: ChangeListeners::default(),
        }
    }

    /// Creates a pre-populated store from raw markers.
    ///
    /// Markers may be given in any order and may describe fragmented runs; touching runs of
    /// equivalent attributions are merged. Fails with
    /// [`ErrorKind::InvariantViolation`] if markers don't pair up, or
    /// [`ErrorKind::OutOfRange`] if a marker lies outside `0..len`.
    ///
    /// [`ErrorKind::InvariantViolation`]: crate::ErrorKind::InvariantViolation
    /// [`ErrorKind::OutOfRange`]: crate::ErrorKind::OutOfRange
    pub fn from_markers(
        len: usize,
        markers: impl IntoIterator<Item = SpanMarker<A>>,
    ) -> Result<Self, Error> {
        let mut markers: Vec<_> = markers.into_iter().collect();
        if let Some(marker) = markers.iter().find(|marker| marker.offset() >= len) {
            return Err(Error::offset_out_of_range(marker.offset(), len));
        }
        markers.sort_by_key(SpanMarker::sort_key);

        let runs = pair_markers(&markers, len)?;
        let mut spans = Self::new(len);
        spans.replace_runs(runs);
        Ok(spans)
    }

    /// The length of the content, in code points, this store is bound to.
    pub fn content_len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no attribution covers any offset.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// The stored markers, in sorted order.
    pub fn markers(&self) -> &[SpanMarker<A>] {
        &self.markers
    }

    /// Every maximal run, ordered by start then end.
    pub fn attribution_spans(&self) -> Vec<AttributionSpan<A>> {
        pair_markers(&self.markers, self.len).unwrap_or_else(|err| invariant_violated(&err))
    }

    /// Checks every store invariant.
    ///
    /// The engine keeps these invariants itself; this is useful for stores assembled from
    /// outside data.
    pub fn validate(&self) -> Result<(), Error> {
        for pair in self.markers.windows(2) {
            if pair[0].sort_key() > pair[1].sort_key() {
                return Err(Error::invariant_violation(
                    pair[1].offset(),
                    self.len,
                    "markers out of order",
                ));
            }
        }
        let runs = pair_markers(&self.markers, self.len)?;
        for (index, run) in runs.iter().enumerate() {
            // Runs are sorted by start, so any run that could touch `run` comes later.
            let unmerged = runs[index + 1..].iter().find(|other| {
                other.start <= run.end.saturating_add(1)
                    && run.attribution.can_merge_with(&other.attribution)
            });
            if let Some(other) = unmerged {
                return Err(Error::invariant_violation(
                    other.start,
                    self.len,
                    "touching runs of equivalent attributions were not merged",
                ));
            }
        }
        Ok(())
    }
}

/// # Queries
impl<A: Attribution> AttributedSpans<A> {
    /// Returns `true` if `attribution` covers `offset`, or with `None`, if any attribution does.
    ///
    /// Like every query taking attributions, this matches stored runs by
    /// [`can_merge_with`](Attribution::can_merge_with): a run fused from equivalent values
    /// covers each of them.
    pub fn has_attribution_at(
        &self,
        offset: usize,
        attribution: Option<&A>,
    ) -> Result<bool, Error> {
        validate_offset(self.len, offset)?;
        Ok(self.attribution_spans().iter().any(|run| {
            run.contains(offset)
                && attribution.is_none_or(|wanted| run.attribution.can_merge_with(wanted))
        }))
    }

    /// Every attribution covering `offset`.
    pub fn attributions_at(&self, offset: usize) -> Result<AttributionSet<A>, Error> {
        validate_offset(self.len, offset)?;
        Ok(self
            .attribution_spans()
            .into_iter()
            .filter(|run| run.contains(offset))
            .map(|run| run.attribution)
            .collect())
    }

    /// Every attribution covering *each* offset of `range`.
    ///
    /// This is the intersection of [`attributions_at`](Self::attributions_at) over the range.
    /// Because runs of one attribution never touch, an attribution is present throughout the
    /// range exactly when a single run covers all of it.
    pub fn attributions_throughout(
        &self,
        range: RangeInclusive<usize>,
    ) -> Result<AttributionSet<A>, Error> {
        let range = TextRange::new(self.len, range)?;
        Ok(self
            .attribution_spans()
            .into_iter()
            .filter(|run| run.covers(range.start(), range.end()))
            .map(|run| run.attribution)
            .collect())
    }

    /// Returns `true` if every member of `attributions` covers every offset of `range`.
    ///
    /// Vacuously `true` for an empty `attributions`.
    pub fn has_attributions_throughout(
        &self,
        attributions: &[A],
        range: RangeInclusive<usize>,
    ) -> Result<bool, Error> {
        let range = TextRange::new(self.len, range)?;
        let runs = self.attribution_spans();
        Ok(attributions.iter().all(|attribution| {
            runs.iter().any(|run| {
                run.attribution.can_merge_with(attribution)
                    && run.covers(range.start(), range.end())
            })
        }))
    }

    /// Returns `true` if every member of `attributions` covers at least one offset of `range`.
    ///
    /// Different attributions may appear at different offsets. Vacuously `true` for an empty
    /// `attributions`.
    pub fn has_attributions_within(
        &self,
        attributions: &[A],
        range: RangeInclusive<usize>,
    ) -> Result<bool, Error> {
        let range = TextRange::new(self.len, range)?;
        let runs = self.attribution_spans();
        Ok(attributions.iter().all(|attribution| {
            runs.iter().any(|run| {
                run.attribution.can_merge_with(attribution)
                    && run.intersects(range.start(), range.end())
            })
        }))
    }

    /// Every maximal run whose attribution matches `filter` and which intersects `range`.
    ///
    /// `filter` sees the stored value of each run, which for a fused run is the value of the
    /// run that started first; compare with [`Attribution::can_merge_with`] to match any of
    /// the values fused into it.
    ///
    /// Runs report their full extent, including parts outside `range`, unless `resize_to_fit`
    /// is set, in which case they are clipped to `range`. Clipping only affects the returned
    /// values. Results are ordered by start then end.
    pub fn attribution_spans_in_range(
        &self,
        filter: impl Fn(&A) -> bool,
        range: RangeInclusive<usize>,
        resize_to_fit: bool,
    ) -> Result<Vec<AttributionSpan<A>>, Error> {
        let range = TextRange::new(self.len, range)?;
        Ok(self
            .attribution_spans()
            .into_iter()
            .filter(|run| {
                filter(&run.attribution) && run.intersects(range.start(), range.end())
            })
            .map(|run| {
                if resize_to_fit {
                    AttributionSpan::new(
                        run.attribution,
                        max(run.start, range.start()),
                        run.end.min(range.end()),
                    )
                } else {
                    run
                }
            })
            .collect())
    }

    /// The maximal range around `offset` over which every member of `attributions` is
    /// continuously present.
    ///
    /// Returns `None` if any of them is absent at `offset`, or if `attributions` is empty.
    pub fn attributed_range(
        &self,
        attributions: &[A],
        offset: usize,
    ) -> Result<Option<TextRange>, Error> {
        validate_offset(self.len, offset)?;
        if attributions.is_empty() {
            return Ok(None);
        }
        let runs = self.attribution_spans();
        let mut start = 0;
        let mut end = usize::MAX;
        for attribution in attributions {
            let Some(run) = runs
                .iter()
                .find(|run| run.attribution.can_merge_with(attribution) && run.contains(offset))
            else {
                return Ok(None);
            };
            start = max(start, run.start);
            end = end.min(run.end);
        }
        Ok(Some(TextRange::new_unchecked(start, end)))
    }

    /// Partitions `0..content_length` into maximal runs labeled with their attribution sets.
    ///
    /// Consecutive runs never carry identical sets. Offsets with no attribution form runs with
    /// an empty set. Fails with [`ErrorKind::OutOfRange`] if a stored run reaches
    /// `content_length` or beyond.
    ///
    /// [`ErrorKind::OutOfRange`]: crate::ErrorKind::OutOfRange
    pub fn collapse_spans(
        &self,
        content_length: usize,
    ) -> Result<Vec<MultiAttributionSpan<A>>, Error> {
        let runs = self.attribution_spans();
        if let Some(run) = runs.iter().find(|run| run.end >= content_length) {
            return Err(Error::out_of_range(run.start, run.end, content_length));
        }
        Ok(collapse_runs(&runs, content_length))
    }
}

/// # Mutations
///
/// Every successful mutation notifies this store's listeners exactly once. Arguments are
/// validated before anything changes, so a failed call leaves the store untouched.
impl<A: Attribution> AttributedSpans<A> {
    /// Applies `attribution` to every offset of `range`, merging with touching equivalent runs.
    ///
    /// Fails with [`ErrorKind::AttributionConflict`] if an existing run inside `range`
    /// [conflicts](Attribution::conflicts_with) with `attribution`.
    ///
    /// [`ErrorKind::AttributionConflict`]: crate::ErrorKind::AttributionConflict
    pub fn add_attribution(
        &mut self,
        attribution: A,
        range: RangeInclusive<usize>,
    ) -> Result<(), Error> {
        let range = TextRange::new(self.len, range)?;
        let mut runs = self.attribution_spans();
        if has_conflict(&runs, &attribution, range) {
            return Err(Error::attribution_conflict(
                range.start(),
                range.end(),
                self.len,
            ));
        }

        log::trace!("add {attribution:?} over {range:?}");
        runs.push(AttributionSpan::new(attribution, range.start(), range.end()));
        self.replace_runs(runs);
        self.listeners.notify();
        Ok(())
    }

    /// Like [`add_attribution`](Self::add_attribution), but first removes every conflicting
    /// attribution from `range` instead of failing.
    pub fn add_attribution_overwriting(
        &mut self,
        attribution: A,
        range: RangeInclusive<usize>,
    ) -> Result<(), Error> {
        let range = TextRange::new(self.len, range)?;
        let runs = self.attribution_spans();
        if has_conflict(&runs, &attribution, range) {
            log::debug!("{attribution:?} over {range:?} evicts conflicting runs");
        }
        let mut runs = carve_runs(runs, range, |existing| existing.conflicts_with(&attribution));

        log::trace!("add {attribution:?} over {range:?}, overwriting conflicts");
        runs.push(AttributionSpan::new(attribution, range.start(), range.end()));
        self.replace_runs(runs);
        self.listeners.notify();
        Ok(())
    }

    /// Removes `attribution` from every offset of `range`.
    ///
    /// Runs of any equivalent attribution are cut too. Runs straddling a boundary of `range`
    /// keep their part outside it. Removing an attribution that isn't present is not an error.
    pub fn remove_attribution(
        &mut self,
        attribution: &A,
        range: RangeInclusive<usize>,
    ) -> Result<(), Error> {
        let range = TextRange::new(self.len, range)?;
        log::trace!("remove {attribution:?} over {range:?}");
        let runs = carve_runs(self.attribution_spans(), range, |existing| {
            existing.can_merge_with(attribution)
        });
        self.replace_runs(runs);
        self.listeners.notify();
        Ok(())
    }

    /// Removes every attribution from every offset of `range`.
    pub fn clear_attributions(&mut self, range: RangeInclusive<usize>) -> Result<(), Error> {
        let range = TextRange::new(self.len, range)?;
        log::trace!("clear attributions over {range:?}");
        let runs = carve_runs(self.attribution_spans(), range, |_| true);
        self.replace_runs(runs);
        self.listeners.notify();
        Ok(())
    }

    /// Removes `attribution` from `range` if it already covers all of it; otherwise applies it
    /// to the whole range.
    ///
    /// Any gap in coverage means "apply everywhere", the way bold or italic toggles behave in
    /// editors.
    pub fn toggle_attribution(
        &mut self,
        attribution: A,
        range: RangeInclusive<usize>,
    ) -> Result<(), Error> {
        let (start, end) = (*range.start(), *range.end());
        if self.has_attributions_throughout(core::slice::from_ref(&attribution), start..=end)? {
            self.remove_attribution(&attribution, start..=end)
        } else {
            self.add_attribution(attribution, start..=end)
        }
    }

    /// Extracts the runs within `range` into a new store whose offset `0` is `range.start()`.
    ///
    /// Runs straddling a boundary are truncated to the range. The new store has no listeners.
    pub fn copy_attribution_region(&self, range: RangeInclusive<usize>) -> Result<Self, Error> {
        let range = TextRange::new(self.len, range)?;
        let runs = self
            .attribution_spans()
            .into_iter()
            .filter(|run| run.intersects(range.start(), range.end()))
            .map(|run| {
                AttributionSpan::new(
                    run.attribution,
                    max(run.start, range.start()) - range.start(),
                    run.end.min(range.end()) - range.start(),
                )
            })
            .collect();
        let mut region = Self::new(range.len());
        region.replace_runs(runs);
        Ok(region)
    }

    /// Splices `other`'s runs into this store, shifted right by `index`.
    ///
    /// `index` must be in `0..=content_len()`; the store grows to cover `other` if needed.
    /// Runs already here are not moved, so with `index < content_len()` the incoming runs are
    /// laid over the existing ones and equivalent runs that overlap or touch are fused. A run
    /// ending at `index - 1` here and an equivalent run starting at `0` in `other` are fused
    /// across the seam.
    ///
    /// Fails with [`ErrorKind::AttributionConflict`] if an incoming run would overlap a
    /// conflicting run already here.
    ///
    /// [`ErrorKind::AttributionConflict`]: crate::ErrorKind::AttributionConflict
    pub fn add_at(&mut self, other: &Self, index: usize) -> Result<(), Error> {
        if index > self.len {
            return Err(Error::boundary_out_of_range(index, index, self.len));
        }
        let existing = self.attribution_spans();
        for run in other.attribution_spans() {
            let shifted = TextRange::new_unchecked(run.start + index, run.end + index);
            if has_conflict(&existing, &run.attribution, shifted) {
                return Err(Error::attribution_conflict(
                    shifted.start(),
                    shifted.end(),
                    self.len,
                ));
            }
        }
        self.splice(other, index);
        self.listeners.notify();
        Ok(())
    }

    /// Removes `count` offsets starting at `start`, as if that much text were deleted.
    ///
    /// Runs entirely inside the removed region disappear, runs after it shift left by `count`,
    /// and runs that end up touching across the gap are merged.
    pub fn contract_attributions(&mut self, start: usize, count: usize) -> Result<(), Error> {
        let removed_end = start
            .checked_add(count)
            .filter(|&end| end <= self.len)
            .ok_or_else(|| {
                Error::boundary_out_of_range(start, start.saturating_add(count), self.len)
            })?;
        log::trace!("contract {count} offsets at {start}");

        let mut runs = Vec::new();
        for run in self.attribution_spans() {
            let left = (run.start < start)
                .then(|| (run.start, run.end.min(start.saturating_sub(1))));
            let right = (run.end >= removed_end)
                .then(|| (max(run.start, removed_end) - count, run.end - count));
            let kept = match (left, right) {
                (Some((first, _)), Some((_, last))) => Some((first, last)),
                (Some(part), None) | (None, Some(part)) => Some(part),
                (None, None) => None,
            };
            if let Some((first, last)) = kept {
                runs.push(AttributionSpan::new(run.attribution, first, last));
            }
        }
        self.len -= count;
        self.replace_runs(runs);
        self.listeners.notify();
        Ok(())
    }
}

/// # Listeners
impl<A: Attribution> AttributedSpans<A> {
    /// Registers a callback run after every successful mutation.
    pub fn add_listener(&mut self, listener: impl FnMut() + 'static) -> ListenerId {
        self.listeners.add(listener)
    }

    /// Unregisters a callback. Returns `false` if `id` wasn't registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Drops every callback; no callback will be run again.
    pub fn dispose(&mut self) {
        self.listeners.dispose();
    }
}

impl<A: Attribution> AttributedSpans<A> {
    /// Splices without validating `index` or notifying.
    pub(crate) fn splice(&mut self, other: &Self, index: usize) {
        let mut runs = self.attribution_spans();
        let incoming = other.attribution_spans();
        if log::log_enabled!(log::Level::Debug) {
            let seam = runs.iter().any(|run| {
                run.end + 1 == index
                    && incoming.iter().any(|next| {
                        next.start == 0 && run.attribution.can_merge_with(&next.attribution)
                    })
            });
            if seam {
                log::debug!("merging runs across seam at {index}");
            }
        }
        runs.extend(incoming.into_iter().map(|run| run.shifted(index)));
        self.len = max(self.len, index + other.len);
        self.replace_runs(runs);
    }

    /// Rebuilds the marker list from arbitrary (possibly fragmented) runs.
    fn replace_runs(&mut self, runs: Vec<AttributionSpan<A>>) {
        let runs = merge_runs(runs);
        let mut markers = Vec::with_capacity(runs.len() * 2);
        for run in runs {
            markers.push(SpanMarker::start(run.attribution.clone(), run.start));
            markers.push(SpanMarker::end(run.attribution, run.end));
        }
        markers.sort_by_key(SpanMarker::sort_key);
        log::trace!("{} markers over {} offsets", markers.len(), self.len);
        self.markers = markers;

        #[cfg(debug_assertions)]
        if let Err(err) = self.validate() {
            invariant_violated(&err);
        }
    }
}

/// Pairs `Start`/`End` markers per attribution, returning runs ordered by start then end.
fn pair_markers<A: Attribution>(
    markers: &[SpanMarker<A>],
    len: usize,
) -> Result<Vec<AttributionSpan<A>>, Error> {
    let mut open: Vec<(&A, usize)> = Vec::new();
    let mut runs = Vec::with_capacity(markers.len() / 2);
    for marker in markers {
        if marker.offset() >= len {
            return Err(Error::invariant_violation(
                marker.offset(),
                len,
                "marker beyond content",
            ));
        }
        match marker.kind() {
            SpanMarkerKind::Start => {
                if open.iter().any(|(attribution, _)| *attribution == marker.attribution()) {
                    return Err(Error::invariant_violation(
                        marker.offset(),
                        len,
                        "attribution opened twice",
                    ));
                }
                open.push((marker.attribution(), marker.offset()));
            }
            SpanMarkerKind::End => {
                let Some(ix) = open
                    .iter()
                    .rposition(|(attribution, _)| *attribution == marker.attribution())
                else {
                    return Err(Error::invariant_violation(
                        marker.offset(),
                        len,
                        "end marker without start",
                    ));
                };
                let (attribution, start) = open.remove(ix);
                if start > marker.offset() {
                    return Err(Error::invariant_violation(
                        marker.offset(),
                        len,
                        "end marker before its start",
                    ));
                }
                runs.push(AttributionSpan::new(attribution.clone(), start, marker.offset()));
            }
        }
    }
    if let Some((_, start)) = open.first() {
        return Err(Error::invariant_violation(*start, len, "start marker without end"));
    }
    runs.sort_by_key(|run| (run.start, run.end));
    Ok(runs)
}

/// Fuses runs of equivalent attributions that touch or overlap.
///
/// A fused run keeps the attribution of the run that starts first.
fn merge_runs<A: Attribution>(mut runs: Vec<AttributionSpan<A>>) -> Vec<AttributionSpan<A>> {
    runs.sort_by_key(|run| (run.start, run.end));
    let mut merged: Vec<AttributionSpan<A>> = Vec::with_capacity(runs.len());
    for run in runs {
        // With runs visited by start, only the latest equivalent run can reach this one.
        let touching = merged.iter_mut().rev().find(|existing| {
            existing.attribution.can_merge_with(&run.attribution)
                && existing.end.saturating_add(1) >= run.start
        });
        match touching {
            Some(existing) => existing.end = max(existing.end, run.end),
            None => merged.push(run),
        }
    }
    merged
}

/// Returns `true` if a run in `runs` overlapping `range` conflicts with `attribution`.
fn has_conflict<A: Attribution>(
    runs: &[AttributionSpan<A>],
    attribution: &A,
    range: TextRange,
) -> bool {
    runs.iter().any(|run| {
        run.intersects(range.start(), range.end()) && run.attribution.conflicts_with(attribution)
    })
}

/// Cuts `range` out of every run whose attribution matches `predicate`.
fn carve_runs<A: Attribution>(
    runs: Vec<AttributionSpan<A>>,
    range: TextRange,
    mut predicate: impl FnMut(&A) -> bool,
) -> Vec<AttributionSpan<A>> {
    let mut carved = Vec::with_capacity(runs.len() + 1);
    for run in runs {
        if !run.intersects(range.start(), range.end()) || !predicate(&run.attribution) {
            carved.push(run);
            continue;
        }
        if run.start < range.start() {
            carved.push(AttributionSpan::new(
                run.attribution.clone(),
                run.start,
                range.start() - 1,
            ));
        }
        if run.end > range.end() {
            carved.push(AttributionSpan::new(run.attribution, range.end() + 1, run.end));
        }
    }
    carved
}

fn invariant_violated(err: &Error) -> ! {
    panic!("attributed spans corrupted: {err}");
}

impl<A: Attribution> Default for AttributedSpans<A> {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Clones the markers; listeners are not carried over.
impl<A: Attribution> Clone for AttributedSpans<A> {
    fn clone(&self) -> Self {
        Self {
            len: self.len,
            markers: self.markers.clone(),
            listeners: ChangeListeners::default(),
        }
    }
}

/// Two stores are equal when they are bound to the same length and hold the same set of
/// maximal runs.
impl<A: Attribution> PartialEq for AttributedSpans<A> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        let ours = self.attribution_spans();
        let theirs = other.attribution_spans();
        ours.len() == theirs.len() && ours.iter().all(|run| theirs.contains(run))
    }
}

impl<A: Attribution> Eq for AttributedSpans<A> {}

impl<A: Attribution> Hash for AttributedSpans<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Order independent, to agree with `PartialEq`.
        let hasher = FixedState::with_seed(RUN_HASH_SEED);
        let runs = self.attribution_spans();
        let combined = runs
            .iter()
            .fold(0_u64, |acc, run| acc.wrapping_add(hasher.hash_one(run)));
        self.len.hash(state);
        runs.len().hash(state);
        combined.hash(state);
    }
}

impl<A: Attribution> core::fmt::Debug for AttributedSpans<A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AttributedSpans")
            .field("len", &self.len)
            .field("markers", &self.markers)
            .field("listeners", &self.listeners)
            .finish()
    }
}
