// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::StyleAttribution::{self, Bold, Italic, Strikethrough, Underline};
use crate::{AttributedSpans, AttributedText, AttributionSpan};
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

type Text = AttributedText<StyleAttribution>;

/// Per-offset bitmask of which attributions are present. This is the reference model.
type Mask = Vec<u8>;

const ATTRIBUTION_COUNT: usize = 4;

fn attribution(bit: usize) -> StyleAttribution {
    match bit {
        0 => Bold,
        1 => Italic,
        2 => Underline,
        _ => Strikethrough,
    }
}

fn bit_of(attribution: &StyleAttribution) -> usize {
    match attribution {
        Bold => 0,
        Italic => 1,
        Underline => 2,
        _ => 3,
    }
}

struct Lcg(u64);

impl Lcg {
    fn next_u32(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn next_usize(&mut self, max: usize) -> usize {
        if max == 0 {
            0
        } else {
            (self.next_u32() as usize) % max
        }
    }

    /// A random inclusive range inside `0..len`. `len` must be non-zero.
    fn next_range(&mut self, len: usize) -> (usize, usize) {
        let mut start = self.next_usize(len);
        let mut end = self.next_usize(len);
        if start > end {
            core::mem::swap(&mut start, &mut end);
        }
        (start, end)
    }
}

fn mask_of(spans: &AttributedSpans<StyleAttribution>) -> Mask {
    (0..spans.content_len())
        .map(|offset| {
            spans
                .attributions_at(offset)
                .unwrap()
                .iter()
                .fold(0_u8, |mask, attribution| mask | (1 << bit_of(attribution)))
        })
        .collect()
}

/// The maximal runs implied by a mask.
fn reference_runs(mask: &[u8]) -> Vec<AttributionSpan<StyleAttribution>> {
    let mut runs = Vec::new();
    for bit in 0..ATTRIBUTION_COUNT {
        let flag = 1_u8 << bit;
        let mut offset = 0;
        while offset < mask.len() {
            if mask[offset] & flag == 0 {
                offset += 1;
                continue;
            }
            let start = offset;
            while offset < mask.len() && mask[offset] & flag != 0 {
                offset += 1;
            }
            runs.push(AttributionSpan::new(attribution(bit), start, offset - 1));
        }
    }
    runs
}

fn assert_same_runs(
    mut actual: Vec<AttributionSpan<StyleAttribution>>,
    mut expected: Vec<AttributionSpan<StyleAttribution>>,
) {
    let key = |run: &AttributionSpan<StyleAttribution>| {
        (run.start, run.end, bit_of(&run.attribution))
    };
    actual.sort_by_key(key);
    expected.sort_by_key(key);
    assert_eq!(actual, expected);
}

fn apply_random_op(
    rng: &mut Lcg,
    spans: &mut AttributedSpans<StyleAttribution>,
    mask: &mut Mask,
) {
    let (start, end) = rng.next_range(mask.len());
    let bit = rng.next_usize(ATTRIBUTION_COUNT);
    let flag = 1_u8 << bit;
    let region = &mut mask[start..=end];
    match rng.next_usize(4) {
        0 => {
            spans.add_attribution(attribution(bit), start..=end).unwrap();
            region.iter_mut().for_each(|m| *m |= flag);
        }
        1 => {
            spans.remove_attribution(&attribution(bit), start..=end).unwrap();
            region.iter_mut().for_each(|m| *m &= !flag);
        }
        2 => {
            spans.toggle_attribution(attribution(bit), start..=end).unwrap();
            if region.iter().all(|m| m & flag != 0) {
                region.iter_mut().for_each(|m| *m &= !flag);
            } else {
                region.iter_mut().for_each(|m| *m |= flag);
            }
        }
        _ => {
            spans.clear_attributions(start..=end).unwrap();
            region.fill(0);
        }
    }
}

const ALPHABET: [char; 6] = ['a', 'b', ' ', '\u{e9}', '\u{1F600}', ','];

fn random_text(rng: &mut Lcg, max_len: usize) -> Text {
    let len = rng.next_usize(max_len + 1);
    let content: String = (0..len)
        .map(|_| ALPHABET[rng.next_usize(ALPHABET.len())])
        .collect();
    let mut text = Text::new(content);
    if len > 0 {
        for _ in 0..rng.next_usize(6) {
            let (start, end) = rng.next_range(len);
            let bit = rng.next_usize(ATTRIBUTION_COUNT);
            text.add_attribution(attribution(bit), start..=end).unwrap();
        }
    }
    text
}

#[test]
fn bold_tail_is_visible_at_each_offset() {
    let mut text = Text::new("abcdefghij");
    text.add_attribution(Bold, 5..=9).unwrap();
    assert!(text.attributions_at(0).unwrap().is_empty());
    assert_eq!(text.attributions_at(5).unwrap().len(), 1);
    assert!(text.attributions_at(5).unwrap().contains(&Bold));
    assert!(text.attributions_at(9).unwrap().contains(&Bold));
}

#[test]
fn adjacent_bold_runs_merge() {
    let mut text = Text::new("abcdefghij");
    text.add_attribution(Bold, 0..=4).unwrap();
    text.add_attribution(Bold, 5..=9).unwrap();
    let runs = text.attribution_spans_in_range(|_| true, 0..=9, false).unwrap();
    assert_eq!(runs, vec![AttributionSpan::new(Bold, 0, 9)]);
}

#[test]
fn toggle_clears_full_coverage() {
    let mut text = Text::new("abcdefghij");
    text.add_attribution(Bold, 5..=9).unwrap();
    text.toggle_attribution(Bold, 5..=9).unwrap();
    for offset in 0..10 {
        assert!(!text.has_attribution_at(offset, Some(&Bold)).unwrap());
    }
}

#[test]
fn insert_string_marks_only_inserted_text() {
    let text = Text::new("abcdefghij");
    let edited = text.insert_string("X", 5, &[Bold]).unwrap();
    assert_eq!(edited.text(), "abcdeXfghij");
    assert!(!edited.has_attribution_at(4, Some(&Bold)).unwrap());
    assert!(edited.has_attribution_at(5, Some(&Bold)).unwrap());
    assert!(!edited.has_attribution_at(6, Some(&Bold)).unwrap());
}

#[test]
fn remove_region_shifts_and_contracts() {
    let mut text = Text::new("abcdef");
    text.add_attribution(Bold, 1..=4).unwrap();
    let edited = text.remove_region(2, 4).unwrap();
    assert_eq!(edited.text(), "abef");
    assert_eq!(
        edited.spans().attribution_spans(),
        vec![AttributionSpan::new(Bold, 1, 2)]
    );
}

#[test]
fn mutations_match_reference_model() {
    let mut rng = Lcg(0x1234_5678_9abc_def0);
    for _case in 0..200 {
        let len = 1 + rng.next_usize(24);
        let mut spans = AttributedSpans::new(len);
        let mut mask = vec![0_u8; len];
        for _ in 0..rng.next_usize(20) {
            apply_random_op(&mut rng, &mut spans, &mut mask);
            assert_eq!(mask_of(&spans), mask);
            // Merge closure: stored runs are exactly the maximal runs of the coverage.
            assert_same_runs(spans.attribution_spans(), reference_runs(&mask));
            assert!(spans.validate().is_ok());
        }
    }
}

#[test]
fn toggling_twice_restores_all_or_nothing_coverage() {
    let mut rng = Lcg(0x0bad_cafe_f00d_d00d);
    let mut partial_cases = 0;
    for _case in 0..200 {
        let len = 1 + rng.next_usize(24);
        let mut spans = AttributedSpans::new(len);
        let mut mask = vec![0_u8; len];
        for _ in 0..rng.next_usize(10) {
            apply_random_op(&mut rng, &mut spans, &mut mask);
        }
        let before = spans.clone();
        let (start, end) = rng.next_range(len);
        let bit = rng.next_usize(ATTRIBUTION_COUNT);
        let flag = 1_u8 << bit;
        let covered = mask[start..=end].iter().filter(|&&m| m & flag != 0).count();

        spans.toggle_attribution(attribution(bit), start..=end).unwrap();
        spans.toggle_attribution(attribution(bit), start..=end).unwrap();

        if covered == 0 || covered == end - start + 1 {
            assert_eq!(mask_of(&spans), mask);
            assert_eq!(spans, before);
        } else {
            // A gap means the first toggle applies everywhere, so the second clears the range.
            partial_cases += 1;
            let mut expected = mask.clone();
            expected[start..=end].iter_mut().for_each(|m| *m &= !flag);
            assert_eq!(mask_of(&spans), expected);
        }
        assert!(spans.validate().is_ok());
    }
    assert!(partial_cases > 0);
}

#[test]
fn copy_region_matches_reference_slice() {
    let mut rng = Lcg(0x5151_0000_aaaa_7777);
    for _case in 0..200 {
        let text = random_text(&mut rng, 20);
        let mask = mask_of(text.spans());
        let start = rng.next_usize(text.len() + 1);
        let end = start + rng.next_usize(text.len() - start + 1);
        let copy = text.copy_text(start, Some(end)).unwrap();
        assert_eq!(copy.len(), end - start);
        assert_eq!(mask_of(copy.spans()), mask[start..end]);
        assert!(copy.spans().validate().is_ok());
    }
}

#[test]
fn full_copy_is_identity() {
    let mut rng = Lcg(0x1111_2222_3333_4444);
    for _case in 0..100 {
        let text = random_text(&mut rng, 20);
        assert_eq!(text.copy_text(0, Some(text.len())).unwrap(), text);
    }
}

#[test]
fn concatenation_is_associative() {
    let mut rng = Lcg(0xdead_beef_0000_0001);
    for _case in 0..200 {
        let a = random_text(&mut rng, 8);
        let b = random_text(&mut rng, 8);
        let c = random_text(&mut rng, 8);

        let left = a.copy_and_append(&b).copy_and_append(&c);
        let right = a.copy_and_append(&b.copy_and_append(&c));
        assert_eq!(left.text(), right.text());
        assert_eq!(mask_of(left.spans()), mask_of(right.spans()));
        assert_eq!(left, right);

        let expected: Mask = [mask_of(a.spans()), mask_of(b.spans()), mask_of(c.spans())].concat();
        assert_eq!(mask_of(left.spans()), expected);
        assert!(left.spans().validate().is_ok());
    }
}

#[test]
fn deleting_then_reinserting_restores_buffer() {
    let mut rng = Lcg(0x7e57_7e57_7e57_7e57);
    for _case in 0..200 {
        let text = random_text(&mut rng, 20);
        let mask = mask_of(text.spans());
        let start = rng.next_usize(text.len() + 1);
        let end = start + rng.next_usize(text.len() - start + 1);

        let removed = text.remove_region(start, end).unwrap();
        let expected: Mask = [&mask[..start], &mask[end..]].concat();
        assert_eq!(mask_of(removed.spans()), expected);

        let piece = text.copy_text(start, Some(end)).unwrap();
        let restored = removed.insert(&piece, start).unwrap();
        assert_eq!(restored, text);
    }
}

#[test]
fn reinserting_plain_text_keeps_coverage_outside_region() {
    let mut rng = Lcg(0x00c0_ffee_00c0_ffee);
    for _case in 0..200 {
        let text = random_text(&mut rng, 20);
        let mask = mask_of(text.spans());
        let start = rng.next_usize(text.len() + 1);
        let end = start + rng.next_usize(text.len() - start + 1);

        let removed = text.remove_region(start, end).unwrap();
        let piece = text.copy_text(start, Some(end)).unwrap();
        let restored = removed.insert_string(piece.text(), start, &[]).unwrap();
        let restored_mask = mask_of(restored.spans());
        assert_eq!(restored.text(), text.text());
        assert_eq!(restored_mask[..start], mask[..start]);
        assert_eq!(restored_mask[end..], mask[end..]);
    }
}

#[test]
fn collapse_matches_reference_partition() {
    let mut rng = Lcg(0xfeed_face_1234_4321);
    for _case in 0..200 {
        let text = random_text(&mut rng, 20);
        let mask = mask_of(text.spans());
        let collapsed = text.collapse_spans();

        let mut next = 0;
        let mut previous: Option<u8> = None;
        for run in &collapsed {
            assert_eq!(run.start, next);
            let run_mask = run
                .attributions
                .iter()
                .fold(0_u8, |m, attribution| m | (1 << bit_of(attribution)));
            assert!(mask[run.start..=run.end].iter().all(|&m| m == run_mask));
            assert_ne!(previous, Some(run_mask));
            previous = Some(run_mask);
            next = run.end + 1;
        }
        assert_eq!(next, text.len());
    }
}

#[test]
fn visitor_events_nest_and_balance() {
    let mut rng = Lcg(0x0123_4567_89ab_cdef);
    for _case in 0..100 {
        let text = random_text(&mut rng, 20);
        let mut open = [0_usize; ATTRIBUTION_COUNT];
        let mut opened = 0;
        text.visit_attributions(|_, _, attributions, event| {
            for attribution in attributions {
                let slot = &mut open[bit_of(attribution)];
                match event {
                    crate::AttributionVisitEvent::Start => {
                        assert_eq!(*slot, 0);
                        *slot = 1;
                        opened += 1;
                    }
                    crate::AttributionVisitEvent::End => {
                        assert_eq!(*slot, 1);
                        *slot = 0;
                    }
                }
            }
        });
        assert_eq!(open, [0; ATTRIBUTION_COUNT]);
        assert_eq!(opened, reference_runs(&mask_of(text.spans())).len());
    }
}
