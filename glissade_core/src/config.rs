// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-slider construction options.
//!
//! [`SliderConfig`] is fixed for the lifetime of a slider. Hosts build it in
//! code, or start from a preset and layer per-container overrides on top with
//! [`SliderConfig::apply_attribute`].

use crate::error::{ConfigError, SliderError};
use crate::time::Millis;

/// Attribute toggling the prev/next arrows.
pub const ARROWS_ATTR: &str = "data-arrows";
/// Attribute toggling pagination dots.
pub const PAGINATION_ATTR: &str = "data-pagination";
/// Attribute toggling autoplay.
pub const AUTOPLAY_ATTR: &str = "data-autoplay";
/// Attribute setting the autoplay interval in milliseconds.
pub const AUTOPLAY_TIME_ATTR: &str = "data-autoplay-time";
/// Attribute setting the slide transition duration in milliseconds.
pub const ANIMATION_TIME_ATTR: &str = "data-animation-time";

/// Every attribute [`SliderConfig::apply_attribute`] understands.
pub const OPTION_ATTRS: [&str; 5] = [
    ARROWS_ATTR,
    PAGINATION_ATTR,
    AUTOPLAY_ATTR,
    AUTOPLAY_TIME_ATTR,
    ANIMATION_TIME_ATTR,
];

/// Options for one slider instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliderConfig {
    /// Render prev/next arrows.
    pub arrows: bool,
    /// Render one pagination marker per slide.
    pub pagination: bool,
    /// Advance automatically every [`autoplay_interval`](Self::autoplay_interval).
    pub autoplay: bool,
    /// Autoplay tick interval.
    pub autoplay_interval: Millis,
    /// Track transition duration. Passed through to the renderer only.
    pub animation_time: Millis,
}

impl SliderConfig {
    /// Library defaults: arrows on, no pagination, no autoplay, 4000 ms
    /// interval, 700 ms transition.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            arrows: true,
            pagination: false,
            autoplay: false,
            autoplay_interval: Millis(4000),
            animation_time: Millis(700),
        }
    }

    /// Page-level defaults used by the bootstrap: everything on, 3000 ms
    /// interval, 1000 ms transition.
    #[must_use]
    pub const fn page() -> Self {
        Self {
            arrows: true,
            pagination: true,
            autoplay: true,
            autoplay_interval: Millis(3000),
            animation_time: Millis(1000),
        }
    }

    /// Applies one `data-*` option attribute.
    ///
    /// Returns `Ok(false)` for attributes this config does not know, leaving
    /// `self` untouched. Boolean attributes accept `true`, `false`, or an
    /// empty value (present means on).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a known attribute has an unusable value.
    pub fn apply_attribute(&mut self, name: &str, value: &str) -> Result<bool, ConfigError> {
        let value = value.trim();
        match name {
            ARROWS_ATTR => self.arrows = parse_bool(ARROWS_ATTR, value)?,
            PAGINATION_ATTR => self.pagination = parse_bool(PAGINATION_ATTR, value)?,
            AUTOPLAY_ATTR => self.autoplay = parse_bool(AUTOPLAY_ATTR, value)?,
            AUTOPLAY_TIME_ATTR => {
                self.autoplay_interval = parse_millis(AUTOPLAY_TIME_ATTR, value)?;
            }
            ANIMATION_TIME_ATTR => {
                self.animation_time = parse_millis(ANIMATION_TIME_ATTR, value)?;
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Checks the options a slider cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`SliderError::ZeroInterval`] when autoplay is on with a zero
    /// interval.
    pub const fn validate(&self) -> Result<(), SliderError> {
        if self.autoplay && self.autoplay_interval.is_zero() {
            return Err(SliderError::ZeroInterval);
        }
        Ok(())
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_bool(attribute: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "" | "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidBool { attribute }),
    }
}

fn parse_millis(attribute: &'static str, value: &str) -> Result<Millis, ConfigError> {
    value
        .parse::<u32>()
        .map(Millis)
        .map_err(|_| ConfigError::InvalidMillis { attribute })
}
