// Copyright 2025 the Hscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How a wheel tick moves the strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WheelMode {
    /// Move by one slide width per tick, in the direction of the vertical delta.
    #[default]
    Slide,
    /// Move continuously by the vertical delta, scaled by sensitivity.
    Pixel,
}

/// Controller configuration.
///
/// ```
/// use hscroll::{ScrollConfig, WheelMode};
///
/// let config = ScrollConfig::default()
///     .with_sensitivity(-1.0)
///     .with_wheel_mode(WheelMode::Pixel);
/// assert_eq!(config.sensitivity, -1.0);
/// assert!(config.notify);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollConfig {
    /// Multiplier for wheel and programmatic slides. Negative values invert direction.
    ///
    /// Drag movement is always 1:1 and ignores this.
    pub sensitivity: f64,
    /// Wheel translation mode.
    pub wheel_mode: WheelMode,
    /// Pixels per line for line-based wheel deltas.
    pub line_height: f64,
    /// Pixels per page for page-based wheel deltas.
    pub page_height: f64,
    /// Whether notifications are dispatched at all.
    pub notify: bool,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            sensitivity: 1.0,
            wheel_mode: WheelMode::Slide,
            line_height: 16.0,
            page_height: 800.0,
            notify: true,
        }
    }
}

impl ScrollConfig {
    /// Set the slide sensitivity.
    #[must_use]
    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Set the wheel translation mode.
    #[must_use]
    pub fn with_wheel_mode(mut self, mode: WheelMode) -> Self {
        self.wheel_mode = mode;
        self
    }

    /// Set the pixel sizes used to resolve line and page wheel deltas.
    #[must_use]
    pub fn with_wheel_units(mut self, line_height: f64, page_height: f64) -> Self {
        self.line_height = line_height;
        self.page_height = page_height;
        self
    }

    /// Enable or disable notification dispatch.
    #[must_use]
    pub fn with_notify(mut self, notify: bool) -> Self {
        self.notify = notify;
        self
    }
}
