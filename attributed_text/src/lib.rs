// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attributed Text associates overlapping attributions (styles, links, semantic tags) with
//! ranges of a text buffer and keeps them consistent as the text is sliced, joined and edited.
//!
//! The two main types are:
//!
//! - [`AttributedSpans`], the span store. It holds sorted `Start`/`End` [`SpanMarker`]s with
//!   inclusive ends, and fuses touching runs of equivalent attributions after every mutation.
//! - [`AttributedText`], which pairs immutable text with a store. Structural edits return new
//!   buffers; style edits mutate in place and notify listeners.
//!
//! Attributions are any type implementing [`Attribution`]; [`StyleAttribution`] is a
//! ready-made set of common rich text tags. All offsets count Unicode code points.
//!
//! ```
//! use attributed_text::{AttributedText, StyleAttribution::Bold};
//!
//! let mut text = AttributedText::new("abcdef");
//! text.add_attribution(Bold, 1..=4).unwrap();
//!
//! let edited = text.remove_region(2, 4).unwrap();
//! assert_eq!(edited.text(), "abef");
//! let runs = edited.spans().attribution_spans();
//! assert_eq!(runs[0].range(), 1..=2);
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

mod attributed_spans;
mod attributed_text;
mod attribution;
mod collapse;
mod error;
mod listeners;
mod span_marker;
mod text_range;
mod text_storage;

#[cfg(test)]
mod tests;

pub use crate::attributed_spans::AttributedSpans;
pub use crate::attributed_text::{AttributedText, AttributionVisitEvent};
pub use crate::attribution::{Attribution, StyleAttribution};
pub use crate::error::{Error, ErrorKind};
pub use crate::listeners::ListenerId;
pub use crate::span_marker::{AttributionSpan, MultiAttributionSpan, SpanMarker, SpanMarkerKind};
pub use crate::text_range::TextRange;
pub use crate::text_storage::TextStorage;

/// The set of attributions active at an offset or over a run.
pub type AttributionSet<A> = hashbrown::HashSet<A>;
