// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use icu_segmenter::GraphemeClusterSegmenter;

use crate::{OffsetOutOfRange, checked_len};

/// Returns the code point offsets of every grapheme cluster boundary in `text`.
///
/// The result is sorted, starts with `0` and ends with the code point length of `text`, so an
/// empty string yields `[0]`.
pub fn grapheme_boundaries(text: &str) -> Vec<usize> {
    let segmenter = GraphemeClusterSegmenter::new();
    let mut boundaries = Vec::new();
    boundaries.push(0);

    // The segmenter reports byte offsets; translate them to code point offsets incrementally.
    let mut byte_cursor = 0;
    let mut char_cursor = 0;
    for byte_boundary in segmenter.segment_str(text) {
        if byte_boundary <= byte_cursor {
            continue;
        }
        char_cursor += text[byte_cursor..byte_boundary].chars().count();
        byte_cursor = byte_boundary;
        boundaries.push(char_cursor);
    }

    if byte_cursor < text.len() {
        char_cursor += text[byte_cursor..].chars().count();
        boundaries.push(char_cursor);
    }
    boundaries
}

/// Returns the offset `character_count` grapheme clusters upstream of `text_offset`.
///
/// A user-perceived character made of several code points (an emoji with a skin tone
/// modifier, a letter followed by combining marks) counts as one step. If `text_offset` sits
/// inside a cluster, the first step lands on that cluster's start.
///
/// Returns `Ok(None)` at the start of the text, or when fewer than `character_count` clusters
/// lie upstream. A `character_count` of zero returns `text_offset` unchanged.
///
/// ```
/// use text_movement::move_offset_upstream_by_character;
///
/// // "a", then a thumbs-up with a skin tone modifier (two code points), then "b".
/// let text = "a\u{1F44D}\u{1F3FD}b";
/// assert_eq!(move_offset_upstream_by_character(text, 3, 1), Ok(Some(1)));
/// assert_eq!(move_offset_upstream_by_character(text, 3, 2), Ok(Some(0)));
/// assert_eq!(move_offset_upstream_by_character(text, 3, 3), Ok(None));
/// ```
pub fn move_offset_upstream_by_character(
    text: &str,
    text_offset: usize,
    character_count: usize,
) -> Result<Option<usize>, OffsetOutOfRange> {
    checked_len(text, text_offset)?;
    if character_count == 0 {
        return Ok(Some(text_offset));
    }
    if text_offset == 0 {
        return Ok(None);
    }

    let boundaries = grapheme_boundaries(text);
    let upstream = boundaries.partition_point(|&boundary| boundary < text_offset);
    if character_count > upstream {
        return Ok(None);
    }
    Ok(Some(boundaries[upstream - character_count]))
}

/// Returns the offset `character_count` grapheme clusters downstream of `text_offset`.
///
/// The mirror image of [`move_offset_upstream_by_character`]: returns `Ok(None)` at the end of
/// the text, or when fewer than `character_count` clusters remain.
pub fn move_offset_downstream_by_character(
    text: &str,
    text_offset: usize,
    character_count: usize,
) -> Result<Option<usize>, OffsetOutOfRange> {
    let len = checked_len(text, text_offset)?;
    if character_count == 0 {
        return Ok(Some(text_offset));
    }
    if text_offset == len {
        return Ok(None);
    }

    let boundaries = grapheme_boundaries(text);
    let consumed = boundaries.partition_point(|&boundary| boundary <= text_offset);
    let remaining = boundaries.len() - consumed;
    if character_count > remaining {
        return Ok(None);
    }
    Ok(Some(boundaries[consumed + character_count - 1]))
}
