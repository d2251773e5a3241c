// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use icu_properties::CodePointMapData;
use icu_properties::props::{GeneralCategory, GeneralCategoryGroup};

use crate::{OffsetOutOfRange, checked_len};

/// Returns `true` if `ch` separates words: any Unicode punctuation (`P*`) or separator (`Z*`).
pub fn is_word_separator(ch: char) -> bool {
    let category = CodePointMapData::<GeneralCategory>::new().get(ch);
    GeneralCategoryGroup::Punctuation.contains(category)
        || GeneralCategoryGroup::Separator.contains(category)
}

/// Returns the start of the word upstream of `text_offset`.
///
/// Separators directly upstream of the offset are skipped first, then the word before them, so
/// repeated calls walk back one word at a time. Returns `Ok(None)` at offset `0`.
pub fn move_offset_upstream_by_word(
    text: &str,
    text_offset: usize,
) -> Result<Option<usize>, OffsetOutOfRange> {
    checked_len(text, text_offset)?;
    if text_offset == 0 {
        return Ok(None);
    }

    let chars: Vec<char> = text.chars().take(text_offset).collect();
    let mut offset = text_offset;
    while offset > 0 && is_word_separator(chars[offset - 1]) {
        offset -= 1;
    }
    while offset > 0 && !is_word_separator(chars[offset - 1]) {
        offset -= 1;
    }
    Ok(Some(offset))
}

/// Returns the end of the word downstream of `text_offset`.
///
/// Separators directly downstream of the offset are skipped first, then the word after them.
/// Returns `Ok(None)` at the end of the text.
pub fn move_offset_downstream_by_word(
    text: &str,
    text_offset: usize,
) -> Result<Option<usize>, OffsetOutOfRange> {
    let len = checked_len(text, text_offset)?;
    if text_offset == len {
        return Ok(None);
    }

    let chars: Vec<char> = text.chars().collect();
    let mut offset = text_offset;
    while offset < len && is_word_separator(chars[offset]) {
        offset += 1;
    }
    while offset < len && !is_word_separator(chars[offset]) {
        offset += 1;
    }
    Ok(Some(offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators() {
        assert!(is_word_separator(' '));
        assert!(is_word_separator(','));
        assert!(is_word_separator('-'));
        assert!(is_word_separator('\u{00A0}'));
        assert!(is_word_separator('\u{3001}'));
        assert!(!is_word_separator('a'));
        assert!(!is_word_separator('7'));
        assert!(!is_word_separator('\u{00E9}'));
    }

    #[test]
    fn upstream_from_end_lands_on_last_word() {
        assert_eq!(move_offset_upstream_by_word("word up", 7), Ok(Some(5)));
    }

    #[test]
    fn upstream_at_start_is_none() {
        assert_eq!(move_offset_upstream_by_word("word up", 0), Ok(None));
        assert_eq!(move_offset_upstream_by_word("", 0), Ok(None));
    }

    #[test]
    fn upstream_skips_separator_run() {
        assert_eq!(move_offset_upstream_by_word("word up", 5), Ok(Some(0)));
        assert_eq!(move_offset_upstream_by_word("one, two", 5), Ok(Some(0)));
        assert_eq!(move_offset_upstream_by_word("one, two", 4), Ok(Some(0)));
    }

    #[test]
    fn upstream_from_mid_word() {
        assert_eq!(move_offset_upstream_by_word("word up", 2), Ok(Some(0)));
        assert_eq!(move_offset_upstream_by_word("word up", 6), Ok(Some(5)));
    }

    #[test]
    fn downstream_walks_word_by_word() {
        assert_eq!(move_offset_downstream_by_word("word up", 0), Ok(Some(4)));
        assert_eq!(move_offset_downstream_by_word("word up", 4), Ok(Some(7)));
        assert_eq!(move_offset_downstream_by_word("word up", 2), Ok(Some(4)));
    }

    #[test]
    fn downstream_at_end_is_none() {
        assert_eq!(move_offset_downstream_by_word("word up", 7), Ok(None));
        assert_eq!(move_offset_downstream_by_word("", 0), Ok(None));
    }

    #[test]
    fn only_separators() {
        assert_eq!(move_offset_upstream_by_word(" ,. ", 4), Ok(Some(0)));
        assert_eq!(move_offset_downstream_by_word(" ,. ", 0), Ok(Some(4)));
    }

    #[test]
    fn offsets_are_code_points() {
        // "é" is two bytes but one code point.
        assert_eq!(move_offset_upstream_by_word("caf\u{00E9} ol\u{00E9}", 8), Ok(Some(5)));
        assert_eq!(move_offset_downstream_by_word("caf\u{00E9} ol\u{00E9}", 0), Ok(Some(4)));
    }

    #[test]
    fn offset_past_end_is_rejected() {
        assert!(move_offset_upstream_by_word("word", 5).is_err());
        assert!(move_offset_downstream_by_word("word", 5).is_err());
    }
}
