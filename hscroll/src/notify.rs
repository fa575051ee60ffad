// Copyright 2025 the Hscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Semantic notifications published by the controller.

use core::fmt;
use core::str::FromStr;

/// Name of the bubbling host event that carries a [`Message`].
pub const EVENT_NAME: &str = "HorizontalScroll";

/// What interaction just occurred.
///
/// Each variant has a fixed lowercase wire tag (see [`Message::as_str`]) which
/// is the payload hosts publish to subscribers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Message {
    /// A pointer went down on the container.
    Held,
    /// A pointer went up anywhere.
    Release,
    /// A drag moved at or left of its start.
    ScrollLeft,
    /// A drag moved right of its start.
    ScrollRight,
    /// The wheel turned up (non-positive vertical delta).
    WheelUp,
    /// The wheel turned down (positive vertical delta).
    WheelDown,
}

impl Message {
    /// All messages, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Held,
        Self::Release,
        Self::ScrollLeft,
        Self::ScrollRight,
        Self::WheelUp,
        Self::WheelDown,
    ];

    /// The wire tag for this message.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Held => "held",
            Self::Release => "release",
            Self::ScrollLeft => "scrollleft",
            Self::ScrollRight => "scrollright",
            Self::WheelUp => "wheelup",
            Self::WheelDown => "wheeldown",
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown wire tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownMessage;

impl fmt::Display for UnknownMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown horizontal scroll message")
    }
}

impl core::error::Error for UnknownMessage {}

impl FromStr for Message {
    type Err = UnknownMessage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or(UnknownMessage)
    }
}
