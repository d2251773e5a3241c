// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collapsing overlapping attribution runs into a flat partition.
//!
//! Given the maximal runs stored by [`AttributedSpans`], this produces the non-overlapping,
//! gap-free sequence of runs over `0..content_length`, each labeled with the exact set of
//! attributions active over it.
//!
//! [`AttributedSpans`]: crate::AttributedSpans

use alloc::vec;
use alloc::vec::Vec;

use crate::{Attribution, AttributionSet, AttributionSpan, MultiAttributionSpan};

/// Prefix sums of per-boundary event counts, so that the events for boundary `i` live in
/// `events[offsets[i]..offsets[i + 1]]`.
fn event_offsets(counts: &[usize]) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(counts.len() + 1);
    let mut cursor = 0;
    offsets.push(cursor);
    for count in counts {
        cursor += count;
        offsets.push(cursor);
    }
    offsets
}

/// Sweeps `runs` left to right and emits one collapsed run per distinct attribution set.
///
/// Every run must end before `content_length`.
pub(crate) fn collapse_runs<A: Attribution>(
    runs: &[AttributionSpan<A>],
    content_length: usize,
) -> Vec<MultiAttributionSpan<A>> {
    if content_length == 0 {
        return Vec::new();
    }

    // Boundaries are exclusive-end positions: a run covering `start..=end` opens at `start`
    // and closes at `end + 1`.
    let mut boundaries = Vec::with_capacity(2 + runs.len().saturating_mul(2));
    boundaries.push(0);
    boundaries.push(content_length);
    for run in runs {
        debug_assert!(
            run.end < content_length,
            "run {}..={} exceeds content length {content_length}",
            run.start,
            run.end
        );
        boundaries.push(run.start);
        boundaries.push(run.end + 1);
    }
    boundaries.sort_unstable();
    boundaries.dedup();

    let boundary_count = boundaries.len();
    let mut start_counts = vec![0_usize; boundary_count];
    let mut end_counts = vec![0_usize; boundary_count];
    let mut span_build = Vec::with_capacity(runs.len());

    for (run_index, run) in runs.iter().enumerate() {
        let (Ok(start_boundary), Ok(end_boundary)) = (
            boundaries.binary_search(&run.start),
            boundaries.binary_search(&(run.end + 1)),
        ) else {
            continue;
        };
        span_build.push((run_index, start_boundary, end_boundary));
        start_counts[start_boundary] += 1;
        end_counts[end_boundary] += 1;
    }

    let start_offsets = event_offsets(&start_counts);
    let end_offsets = event_offsets(&end_counts);
    let mut start_events = vec![0_usize; start_offsets[boundary_count]];
    let mut end_events = vec![0_usize; end_offsets[boundary_count]];

    // Reuse counts as per-boundary write cursors.
    start_counts.fill(0);
    end_counts.fill(0);
    for &(run_index, start_boundary, end_boundary) in &span_build {
        start_events[start_offsets[start_boundary] + start_counts[start_boundary]] = run_index;
        start_counts[start_boundary] += 1;
        end_events[end_offsets[end_boundary] + end_counts[end_boundary]] = run_index;
        end_counts[end_boundary] += 1;
    }

    let mut active: Vec<usize> = Vec::with_capacity(runs.len());
    let mut collapsed: Vec<MultiAttributionSpan<A>> = Vec::new();
    for (boundary_index, pair) in boundaries.windows(2).enumerate() {
        for &id in &end_events[end_offsets[boundary_index]..end_offsets[boundary_index + 1]] {
            if let Ok(ix) = active.binary_search(&id) {
                active.remove(ix);
            }
        }
        for &id in &start_events[start_offsets[boundary_index]..start_offsets[boundary_index + 1]]
        {
            if let Err(ix) = active.binary_search(&id) {
                active.insert(ix, id);
            }
        }

        let attributions: AttributionSet<A> = active
            .iter()
            .map(|&id| runs[id].attribution.clone())
            .collect();
        let (start, end) = (pair[0], pair[1] - 1);
        match collapsed.last_mut() {
            Some(last) if last.attributions == attributions => last.end = end,
            _ => collapsed.push(MultiAttributionSpan::new(attributions, start, end)),
        }
    }
    collapsed
}
