// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation intents encoded in markup.
//!
//! Arrows and pagination dots carry their navigation intent as attributes.
//! This is the only protocol between rendered markup and the click
//! dispatcher, so any renderer that regenerates the markup must keep it
//! bit-exact:
//!
//! | Control | Marker class            | Attribute          | Value                 |
//! |---------|-------------------------|--------------------|-----------------------|
//! | Arrow   | `slider-arrow`          | `data-slide-to`    | signed step (`-1`/`1`) |
//! | Dot     | `slider-pagination-dot` | `data-slide-index` | absolute index        |
//!
//! A click is resolved by closest-ancestor lookup for each marker class. The
//! backend copies whatever attribute values it finds into a [`ClickTarget`];
//! arrow and dot are checked independently.

use alloc::string::String;
use alloc::string::ToString as _;

use crate::error::IntentError;

/// Class of the strip holding all slides.
pub const TRACK_CLASS: &str = "slider-track";
/// Class of each slide.
pub const ITEM_CLASS: &str = "slider-item";
/// Class shared by both arrows.
pub const ARROW_CLASS: &str = "slider-arrow";
/// Class of the previous-slide arrow.
pub const LEFT_ARROW_CLASS: &str = "slider-left-arrow";
/// Class of the next-slide arrow.
pub const RIGHT_ARROW_CLASS: &str = "slider-right-arrow";
/// Attribute carrying an arrow's signed step.
pub const STEP_ATTR: &str = "data-slide-to";
/// Class of the list holding pagination dots.
pub const PAGINATION_CLASS: &str = "slider-pagination-container";
/// Class of each pagination dot.
pub const DOT_CLASS: &str = "slider-pagination-dot";
/// Attribute carrying a dot's absolute slide index.
pub const INDEX_ATTR: &str = "data-slide-index";
/// Class toggled on the active dot.
pub const ACTIVE_CLASS: &str = "active";

/// Selector for arrows, used with `Element::closest`.
pub const ARROW_SELECTOR: &str = ".slider-arrow";
/// Selector matching a pagination dot.
pub const DOT_SELECTOR: &str = ".slider-pagination-dot";
/// Selector matching slides inside a container.
pub const ITEM_SELECTOR: &str = ".slider-item";

/// What a control asks the slider to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavIntent {
    /// Move by a signed number of slides relative to the current one.
    Step(isize),
    /// Jump to an absolute slide index.
    Jump(usize),
}

impl NavIntent {
    /// The previous-slide arrow.
    pub const PREV: Self = Self::Step(-1);
    /// The next-slide arrow.
    pub const NEXT: Self = Self::Step(1);

    /// Parses an arrow's `data-slide-to` value.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError::Malformed`] if the value is not an integer.
    pub fn parse_step(raw: &str) -> Result<Self, IntentError> {
        raw.trim()
            .parse::<isize>()
            .map(Self::Step)
            .map_err(|_| IntentError::Malformed {
                attribute: STEP_ATTR,
            })
    }

    /// Parses a dot's `data-slide-index` value.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError::Malformed`] if the value is not a non-negative
    /// integer.
    pub fn parse_index(raw: &str) -> Result<Self, IntentError> {
        raw.trim()
            .parse::<usize>()
            .map(Self::Jump)
            .map_err(|_| IntentError::Malformed {
                attribute: INDEX_ATTR,
            })
    }

    /// Encodes the intent as the `(attribute, value)` pair markup carries.
    #[must_use]
    pub fn to_attribute(self) -> (&'static str, String) {
        match self {
            Self::Step(step) => (STEP_ATTR, step.to_string()),
            Self::Jump(index) => (INDEX_ATTR, index.to_string()),
        }
    }
}

/// Attribute values found on the nearest arrow and dot above a click target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickTarget<'a> {
    /// `data-slide-to` of the closest `.slider-arrow`, if any.
    pub arrow_step: Option<&'a str>,
    /// `data-slide-index` of the closest `.slider-pagination-dot`, if any.
    pub dot_index: Option<&'a str>,
}

impl<'a> ClickTarget<'a> {
    /// A click that landed on an arrow.
    #[must_use]
    pub const fn arrow(step: &'a str) -> Self {
        Self {
            arrow_step: Some(step),
            dot_index: None,
        }
    }

    /// A click that landed on a pagination dot.
    #[must_use]
    pub const fn dot(index: &'a str) -> Self {
        Self {
            arrow_step: None,
            dot_index: Some(index),
        }
    }

    /// Returns `true` if the click hit neither control.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.arrow_step.is_none() && self.dot_index.is_none()
    }

    /// Parsed intents, arrow first, then dot.
    pub fn intents(&self) -> impl Iterator<Item = Result<NavIntent, IntentError>> + '_ {
        let arrow = self.arrow_step.map(NavIntent::parse_step);
        let dot = self.dot_index.map(NavIntent::parse_index);
        arrow.into_iter().chain(dot)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn parses_arrow_steps() {
        assert_eq!(NavIntent::parse_step("-1"), Ok(NavIntent::PREV));
        assert_eq!(NavIntent::parse_step("1"), Ok(NavIntent::NEXT));
        assert_eq!(NavIntent::parse_step(" 1 "), Ok(NavIntent::NEXT));
        assert_eq!(
            NavIntent::parse_step("left"),
            Err(IntentError::Malformed {
                attribute: STEP_ATTR
            })
        );
    }

    #[test]
    fn parses_dot_indices() {
        assert_eq!(NavIntent::parse_index("3"), Ok(NavIntent::Jump(3)));
        assert_eq!(
            NavIntent::parse_index("-2"),
            Err(IntentError::Malformed {
                attribute: INDEX_ATTR
            })
        );
        assert!(NavIntent::parse_index("").is_err(), "empty is malformed");
    }

    #[test]
    fn encoding_matches_markup() {
        assert_eq!(
            NavIntent::PREV.to_attribute(),
            ("data-slide-to", String::from("-1"))
        );
        assert_eq!(
            NavIntent::NEXT.to_attribute(),
            ("data-slide-to", String::from("1"))
        );
        assert_eq!(
            NavIntent::Jump(4).to_attribute(),
            ("data-slide-index", String::from("4"))
        );
    }

    #[test]
    fn click_target_checks_both_controls() {
        let both = ClickTarget {
            arrow_step: Some("1"),
            dot_index: Some("2"),
        };
        let intents: Vec<_> = both.intents().collect();
        assert_eq!(intents, [Ok(NavIntent::NEXT), Ok(NavIntent::Jump(2))]);

        assert!(ClickTarget::default().is_empty(), "no controls hit");
        assert_eq!(ClickTarget::default().intents().count(), 0);
        assert_eq!(ClickTarget::dot("1").intents().count(), 1);
    }
}
