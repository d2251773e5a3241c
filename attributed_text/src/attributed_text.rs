// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::hash::{Hash, Hasher};
use core::ops::RangeInclusive;

use crate::collapse::collapse_runs;
use crate::listeners::ChangeListeners;
use crate::text_range::validate_boundaries;
use crate::{
    AttributedSpans, Attribution, AttributionSet, AttributionSpan, Error, ListenerId,
    MultiAttributionSpan, TextRange, TextStorage,
};

/// Whether a [`visit_attributions`](AttributedText::visit_attributions) callback reports the
/// start or the end of a run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttributionVisitEvent {
    /// Attributions that begin at the reported offset.
    Start,
    /// Attributions that end at the reported offset (inclusive).
    End,
}

/// A block of immutable text paired with the attributions applied to it.
///
/// The API is split in two:
///
/// - **Structural** operations ([`copy_text`], [`copy_and_append`], [`insert`],
///   [`insert_string`], [`remove_region`], [`replace_region`]) take `&self` and return a new
///   `AttributedText`. The text is never edited in place.
/// - **Style** operations ([`add_attribution`], [`remove_attribution`],
///   [`toggle_attribution`], ...) take `&mut self`, update the attributions in place and
///   notify this buffer's listeners.
///
/// Offsets are code point indices, not byte indices.
///
/// ```
/// use attributed_text::{AttributedText, StyleAttribution::Bold};
///
/// let text = AttributedText::<_>::new("abcdefghij");
/// let edited = text.insert_string("X", 5, &[Bold]).unwrap();
///
/// assert_eq!(edited.text(), "abcdeXfghij");
/// assert!(edited.has_attribution_at(5, Some(&Bold)).unwrap());
/// assert!(!edited.has_attribution_at(6, Some(&Bold)).unwrap());
/// ```
///
/// [`copy_text`]: AttributedText::copy_text
/// [`copy_and_append`]: AttributedText::copy_and_append
/// [`insert`]: AttributedText::insert
/// [`insert_string`]: AttributedText::insert_string
/// [`remove_region`]: AttributedText::remove_region
/// [`replace_region`]: AttributedText::replace_region
/// [`add_attribution`]: AttributedText::add_attribution
/// [`remove_attribution`]: AttributedText::remove_attribution
/// [`toggle_attribution`]: AttributedText::toggle_attribution
pub struct AttributedText<A: Attribution> {
    text: Arc<str>,
    /// Length of `text` in code points.
    len: usize,
    spans: AttributedSpans<A>,
    listeners: ChangeListeners,
}

impl<A: Attribution> AttributedText<A> {
    /// Create an `AttributedText` with no attributions applied.
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        let text = text.into();
        let len = text.char_len();
        Self {
            text,
            len,
            spans: AttributedSpans::new(len),
            listeners: ChangeListeners::default(),
        }
    }

    /// Create an `AttributedText` from text and a pre-populated span store.
    ///
    /// Fails with [`ErrorKind::LengthMismatch`] if `spans` is bound to a different length
    /// than `text`.
    ///
    /// [`ErrorKind::LengthMismatch`]: crate::ErrorKind::LengthMismatch
    pub fn with_spans(text: impl Into<Arc<str>>, spans: AttributedSpans<A>) -> Result<Self, Error> {
        let text = text.into();
        let len = text.char_len();
        if spans.content_len() != len {
            return Err(Error::length_mismatch(spans.content_len(), len));
        }
        Ok(Self {
            text,
            len,
            spans,
            listeners: ChangeListeners::default(),
        })
    }

    /// Borrow the underlying text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the length of the text, in code points.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Borrow the attribution store.
    pub fn spans(&self) -> &AttributedSpans<A> {
        &self.spans
    }
}

/// # Queries
///
/// These forward to the [`AttributedSpans`] store; see there for details.
impl<A: Attribution> AttributedText<A> {
    /// See [`AttributedSpans::has_attribution_at`].
    pub fn has_attribution_at(
        &self,
        offset: usize,
        attribution: Option<&A>,
    ) -> Result<bool, Error> {
        self.spans.has_attribution_at(offset, attribution)
    }

    /// See [`AttributedSpans::attributions_at`].
    pub fn attributions_at(&self, offset: usize) -> Result<AttributionSet<A>, Error> {
        self.spans.attributions_at(offset)
    }

    /// See [`AttributedSpans::attributions_throughout`].
    pub fn attributions_throughout(
        &self,
        range: RangeInclusive<usize>,
    ) -> Result<AttributionSet<A>, Error> {
        self.spans.attributions_throughout(range)
    }

    /// See [`AttributedSpans::has_attributions_throughout`].
    pub fn has_attributions_throughout(
        &self,
        attributions: &[A],
        range: RangeInclusive<usize>,
    ) -> Result<bool, Error> {
        self.spans.has_attributions_throughout(attributions, range)
    }

    /// See [`AttributedSpans::has_attributions_within`].
    pub fn has_attributions_within(
        &self,
        attributions: &[A],
        range: RangeInclusive<usize>,
    ) -> Result<bool, Error> {
        self.spans.has_attributions_within(attributions, range)
    }

    /// See [`AttributedSpans::attribution_spans_in_range`].
    pub fn attribution_spans_in_range(
        &self,
        filter: impl Fn(&A) -> bool,
        range: RangeInclusive<usize>,
        resize_to_fit: bool,
    ) -> Result<Vec<AttributionSpan<A>>, Error> {
        self.spans.attribution_spans_in_range(filter, range, resize_to_fit)
    }

    /// See [`AttributedSpans::attributed_range`].
    pub fn attributed_range(
        &self,
        attributions: &[A],
        offset: usize,
    ) -> Result<Option<TextRange>, Error> {
        self.spans.attributed_range(attributions, offset)
    }

    /// The whole text partitioned into maximal runs labeled with their attribution sets.
    pub fn collapse_spans(&self) -> Vec<MultiAttributionSpan<A>> {
        collapse_runs(&self.spans.attribution_spans(), self.len)
    }

    /// Walks the collapsed runs left to right, reporting only the attributions that actually
    /// open or close at each run boundary.
    ///
    /// For every run, `visitor` is called with the run's first offset and the attributions not
    /// active in the preceding run ([`AttributionVisitEvent::Start`]), then with the run's last
    /// offset and the attributions not active in the following run
    /// ([`AttributionVisitEvent::End`]). Both offsets are inclusive. An attribution spanning
    /// several runs is therefore opened and closed exactly once.
    pub fn visit_attributions(
        &self,
        mut visitor: impl FnMut(&Self, usize, &AttributionSet<A>, AttributionVisitEvent),
    ) {
        let runs = self.collapse_spans();
        for (index, run) in runs.iter().enumerate() {
            let previous = index.checked_sub(1).map(|ix| &runs[ix].attributions);
            let next = runs.get(index + 1).map(|next| &next.attributions);

            let starting = newly_present(&run.attributions, previous);
            visitor(self, run.start, &starting, AttributionVisitEvent::Start);
            let ending = newly_present(&run.attributions, next);
            visitor(self, run.end, &ending, AttributionVisitEvent::End);
        }
    }
}

/// The members of `run` that are absent from the touching `neighbor` run.
fn newly_present<A: Attribution>(
    run: &AttributionSet<A>,
    neighbor: Option<&AttributionSet<A>>,
) -> AttributionSet<A> {
    match neighbor {
        Some(neighbor) => run.difference(neighbor).cloned().collect(),
        None => run.clone(),
    }
}

/// # Style operations
///
/// These mutate the attributions in place and notify this buffer's listeners once on success.
impl<A: Attribution> AttributedText<A> {
    /// See [`AttributedSpans::add_attribution`].
    pub fn add_attribution(
        &mut self,
        attribution: A,
        range: RangeInclusive<usize>,
    ) -> Result<(), Error> {
        self.spans.add_attribution(attribution, range)?;
        self.listeners.notify();
        Ok(())
    }

    /// See [`AttributedSpans::add_attribution_overwriting`].
    pub fn add_attribution_overwriting(
        &mut self,
        attribution: A,
        range: RangeInclusive<usize>,
    ) -> Result<(), Error> {
        self.spans.add_attribution_overwriting(attribution, range)?;
        self.listeners.notify();
        Ok(())
    }

    /// See [`AttributedSpans::remove_attribution`].
    pub fn remove_attribution(
        &mut self,
        attribution: &A,
        range: RangeInclusive<usize>,
    ) -> Result<(), Error> {
        self.spans.remove_attribution(attribution, range)?;
        self.listeners.notify();
        Ok(())
    }

    /// See [`AttributedSpans::toggle_attribution`].
    pub fn toggle_attribution(
        &mut self,
        attribution: A,
        range: RangeInclusive<usize>,
    ) -> Result<(), Error> {
        self.spans.toggle_attribution(attribution, range)?;
        self.listeners.notify();
        Ok(())
    }

    /// See [`AttributedSpans::clear_attributions`].
    pub fn clear_attributions(&mut self, range: RangeInclusive<usize>) -> Result<(), Error> {
        self.spans.clear_attributions(range)?;
        self.listeners.notify();
        Ok(())
    }

    /// Registers a callback run after every successful style operation.
    pub fn add_listener(&mut self, listener: impl FnMut() + 'static) -> ListenerId {
        self.listeners.add(listener)
    }

    /// Unregisters a callback. Returns `false` if `id` wasn't registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Drops every callback, including those registered on the store; nothing is notified
    /// afterwards.
    pub fn dispose(&mut self) {
        self.listeners.dispose();
        self.spans.dispose();
    }
}

/// # Structural operations
///
/// These leave `self` untouched and return a new `AttributedText` without listeners.
impl<A: Attribution> AttributedText<A> {
    /// Copies the text in `start..end` along with its attributions, rebased to offset `0`.
    ///
    /// With `end` of `None`, copies to the end of the text. An empty range yields an empty
    /// buffer.
    pub fn copy_text(&self, start: usize, end: Option<usize>) -> Result<Self, Error> {
        let end = end.unwrap_or(self.len);
        validate_boundaries(self.len, start, end)?;
        if start == end {
            return Ok(Self::new(""));
        }
        let text: Arc<str> = Arc::from(self.text.char_slice(start..end));
        let spans = self.spans.copy_attribution_region(start..=end - 1)?;
        Self::with_spans(text, spans)
    }

    /// Returns `self` followed by `other`.
    ///
    /// Equivalent runs touching across the seam are merged.
    pub fn copy_and_append(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        let mut text = String::with_capacity(self.text.len() + other.text.len());
        text.push_str(&self.text);
        text.push_str(&other.text);

        let mut spans = self.spans.clone();
        spans.splice(&other.spans, self.len);
        Self {
            text: Arc::from(text),
            len: self.len + other.len,
            spans,
            listeners: ChangeListeners::default(),
        }
    }

    /// Returns a copy with `other` inserted at boundary `start`, keeping `other`'s attributions.
    pub fn insert(&self, other: &Self, start: usize) -> Result<Self, Error> {
        let head = self.copy_text(0, Some(start))?;
        let tail = self.copy_text(start, None)?;
        Ok(head.copy_and_append(other).copy_and_append(&tail))
    }

    /// Returns a copy with `text` inserted at boundary `start` and every one of
    /// `attributions` applied over the whole inserted text.
    ///
    /// The inserted attributions merge with touching equivalent runs on either side.
    pub fn insert_string(
        &self,
        text: &str,
        start: usize,
        attributions: &[A],
    ) -> Result<Self, Error> {
        validate_boundaries(self.len, start, start)?;
        let mut inserted = Self::new(text);
        if !inserted.is_empty() {
            let last = inserted.len - 1;
            for attribution in attributions {
                inserted.spans.add_attribution(attribution.clone(), 0..=last)?;
            }
        }
        self.insert(&inserted, start)
    }

    /// Returns a copy with the text in `start..end` deleted.
    ///
    /// Attributions after the region shift left, and equivalent runs that end up touching are
    /// merged.
    pub fn remove_region(&self, start: usize, end: usize) -> Result<Self, Error> {
        validate_boundaries(self.len, start, end)?;
        let mut text = String::with_capacity(self.text.len());
        text.push_str(self.text.char_slice(0..start));
        text.push_str(self.text.char_slice(end..self.len));

        let mut spans = self.spans.clone();
        spans.contract_attributions(start, end - start)?;
        Self::with_spans(text, spans)
    }

    /// Returns a copy with the text in `start..end` replaced by `other`.
    pub fn replace_region(&self, start: usize, end: usize, other: &Self) -> Result<Self, Error> {
        self.remove_region(start, end)?.insert(other, start)
    }
}

impl<A: Attribution> Default for AttributedText<A> {
    fn default() -> Self {
        Self::new("")
    }
}

/// Clones the text and attributions; listeners are not carried over.
impl<A: Attribution> Clone for AttributedText<A> {
    fn clone(&self) -> Self {
        Self {
            text: self.text.clone(),
            len: self.len,
            spans: self.spans.clone(),
            listeners: ChangeListeners::default(),
        }
    }
}

impl<A: Attribution> PartialEq for AttributedText<A> {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.spans == other.spans
    }
}

impl<A: Attribution> Eq for AttributedText<A> {}

impl<A: Attribution> Hash for AttributedText<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
        self.spans.hash(state);
    }
}

impl<A: Attribution> core::fmt::Debug for AttributedText<A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AttributedText")
            .field("text", &self.text)
            .field("len", &self.len)
            .field("spans", &self.spans)
            .field("listeners", &self.listeners)
            .finish()
    }
}

/// Writes the plain text.
impl<A: Attribution> core::fmt::Display for AttributedText<A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.text)
    }
}
