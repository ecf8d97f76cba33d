// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.
//!
//! Only construction can fail. Navigation never returns [`SliderError`];
//! malformed or out-of-range click intents surface as [`IntentError`] and are
//! dropped at the dispatch boundary without touching slider state.

use core::fmt;

/// Errors from [`SliderController`](crate::controller::SliderController)
/// construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderError {
    /// The container held no slides.
    NoSlides,
    /// Autoplay was enabled with a zero-length interval.
    ZeroInterval,
}

impl fmt::Display for SliderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSlides => f.write_str("slider container has no slides"),
            Self::ZeroInterval => f.write_str("autoplay interval must be non-zero"),
        }
    }
}

impl core::error::Error for SliderError {}

/// A navigation intent that cannot be honored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntentError {
    /// The attribute value did not parse as an integer.
    Malformed {
        /// Attribute that carried the value.
        attribute: &'static str,
    },
    /// A pagination index at or past the slide count.
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of slides.
        count: usize,
    },
    /// An arrow step landing more than one position outside the slide range.
    StepOutOfRange {
        /// Signed step.
        step: isize,
        /// Index the step was taken from.
        current: usize,
        /// Number of slides.
        count: usize,
    },
}

impl fmt::Display for IntentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { attribute } => {
                write!(f, "`{attribute}` is not an integer")
            }
            Self::IndexOutOfRange { index, count } => {
                write!(f, "slide index {index} out of range for {count} slides")
            }
            Self::StepOutOfRange {
                step,
                current,
                count,
            } => write!(
                f,
                "step {step} from slide {current} overshoots {count} slides"
            ),
        }
    }
}

impl core::error::Error for IntentError {}

/// An option attribute that could not be applied to a
/// [`SliderConfig`](crate::config::SliderConfig).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Expected `true`, `false`, or an empty value.
    InvalidBool {
        /// Attribute name.
        attribute: &'static str,
    },
    /// Expected a non-negative whole number of milliseconds.
    InvalidMillis {
        /// Attribute name.
        attribute: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBool { attribute } => {
                write!(f, "`{attribute}` must be `true` or `false`")
            }
            Self::InvalidMillis { attribute } => {
                write!(f, "`{attribute}` must be a whole number of milliseconds")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
