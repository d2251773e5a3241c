// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use core::fmt::Debug;
use core::hash::Hash;

/// A tag that can be applied to ranges of text: a style, a link, a semantic marker.
///
/// The span engine never interprets an attribution. It relies on three relations:
///
/// - **Equality** (`Eq`): two equal attributions are the same tag. Runs of one attribution
///   never overlap or touch; they are always stored as a single run.
/// - **Equivalency** ([`can_merge_with`]): whether two runs that touch or overlap should be
///   fused, even though the values differ. Defaults to equality.
/// - **Conflict** ([`conflicts_with`]): whether two attributions may not cover the same offset,
///   such as two links with different targets. Defaults to never.
///
/// `can_merge_with` must be symmetric and transitive.
///
/// [`can_merge_with`]: Attribution::can_merge_with
/// [`conflicts_with`]: Attribution::conflicts_with
pub trait Attribution: Clone + Debug + Eq + Hash {
    /// Returns `true` if a run of `self` touching or overlapping a run of `other` should be
    /// fused into one run.
    ///
    /// The fused run keeps the value of whichever run starts first.
    fn can_merge_with(&self, other: &Self) -> bool {
        self == other
    }

    /// Returns `true` if `self` and `other` must never cover the same offset.
    fn conflicts_with(&self, other: &Self) -> bool {
        let _ = other;
        false
    }
}

/// A ready-made set of rich text attributions.
///
/// Links and colors are exclusive: two different link targets (or two different colors)
/// cannot cover the same offset.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum StyleAttribution {
    /// Bold weight.
    Bold,
    /// Italic style.
    Italic,
    /// Underline decoration.
    Underline,
    /// Strikethrough decoration.
    Strikethrough,
    /// A hyperlink to the given URL.
    Link(Arc<str>),
    /// A text color, as packed `0xRRGGBBAA`.
    Color(u32),
    /// An application-defined tag.
    Custom(Arc<str>),
}

impl StyleAttribution {
    /// Creates a link attribution.
    pub fn link(url: &str) -> Self {
        Self::Link(Arc::from(url))
    }

    /// Creates an application-defined attribution.
    pub fn custom(name: &str) -> Self {
        Self::Custom(Arc::from(name))
    }
}

impl Attribution for StyleAttribution {
    fn conflicts_with(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Link(a), Self::Link(b)) => a != b,
            (Self::Color(a), Self::Color(b)) => a != b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Attribution, StyleAttribution};

    #[test]
    fn merging_defaults_to_equality() {
        assert!(StyleAttribution::Bold.can_merge_with(&StyleAttribution::Bold));
        assert!(!StyleAttribution::Bold.can_merge_with(&StyleAttribution::Italic));
        assert!(StyleAttribution::link("a").can_merge_with(&StyleAttribution::link("a")));
        assert!(!StyleAttribution::link("a").can_merge_with(&StyleAttribution::link("b")));
    }

    #[test]
    fn links_and_colors_conflict() {
        let a = StyleAttribution::link("https://a.example");
        let b = StyleAttribution::link("https://b.example");
        assert!(a.conflicts_with(&b));
        assert!(!a.conflicts_with(&a.clone()));
        let red = StyleAttribution::Color(0xff0000ff);
        let green = StyleAttribution::Color(0x00ff00ff);
        assert!(red.conflicts_with(&green));
        assert!(!StyleAttribution::Bold.conflicts_with(&StyleAttribution::Italic));
        assert!(!a.conflicts_with(&StyleAttribution::Bold));
    }
}
