// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text Movement computes where a caret lands when it moves by one user-perceived character or
//! by one word, given only a string and a starting offset.
//!
//! All offsets are **code point** indices (not bytes, not grapheme clusters). A caret offset
//! ranges over `0..=len`, where `len` is the number of code points in the text.
//!
//! Every function is pure: there is no shared state, so they can be called from anywhere,
//! concurrently with any other read of the same text.
//!
//! ```
//! use text_movement::{move_offset_downstream_by_word, move_offset_upstream_by_word};
//!
//! let text = "word up";
//! assert_eq!(move_offset_upstream_by_word(text, 7), Ok(Some(5)));
//! assert_eq!(move_offset_upstream_by_word(text, 0), Ok(None));
//! assert_eq!(move_offset_downstream_by_word(text, 0), Ok(Some(4)));
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward
//!   compatibility.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod error;
mod grapheme;
mod word;

pub use crate::error::OffsetOutOfRange;
pub use crate::grapheme::{
    grapheme_boundaries, move_offset_downstream_by_character, move_offset_upstream_by_character,
};
pub use crate::word::{
    is_word_separator, move_offset_downstream_by_word, move_offset_upstream_by_word,
};

/// Counts the code points in `text` and checks that `offset` is a valid caret position.
fn checked_len(text: &str, offset: usize) -> Result<usize, OffsetOutOfRange> {
    let len = text.chars().count();
    if offset > len {
        return Err(OffsetOutOfRange::new(offset, len));
    }
    Ok(len)
}
