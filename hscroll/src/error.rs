// Copyright 2025 the Hscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Recoverable failures of the controller.
///
/// Every error is also logged where it is detected; callers that do not care
/// may drop the `Result`, and the controller's state is left as it was.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollError {
    /// No container element was supplied at construction.
    MissingContainer,
    /// A replacement slides reference was not an element.
    InvalidSlides,
    /// A slide was requested with a count of zero.
    ZeroSlide,
    /// The effective sensitivity was NaN or infinite.
    InvalidSensitivity(f64),
    /// The controller was called while it was already handling an event,
    /// for example from a notification subscriber.
    Reentrant,
}

impl fmt::Display for ScrollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingContainer => f.write_str("container element not in DOM"),
            Self::InvalidSlides => f.write_str("slides must be an element"),
            Self::ZeroSlide => f.write_str("slide must be a non-zero value"),
            Self::InvalidSensitivity(s) => write!(f, "sensitivity must be finite, got {s}"),
            Self::Reentrant => f.write_str("controller is busy handling another event"),
        }
    }
}

impl core::error::Error for ScrollError {}
