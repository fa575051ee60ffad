// Copyright 2025 the Hscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session: the bounded interval between a pointer-down and the next pointer-up.
//!
//! ## Usage
//!
//! 1) Start a session with [`DragSession::start`], passing the pointer coordinate and the
//!    container's scroll offset at that moment.
//! 2) On each move, call [`DragSession::track`] with the new coordinate.
//! 3) Read [`DragSession::scroll_offset`] for the offset the container should show and
//!    [`DragSession::direction`] for the notification to emit.
//! 4) End the session with [`DragSession::end`].
//!
//! ## Minimal example
//!
//! ```
//! use hscroll::session::{Direction, DragSession};
//!
//! let mut session = DragSession::default();
//!
//! // Press at x = 100 while the strip is scrolled to 40.
//! session.start(Some(100.0), 40.0);
//! assert!(session.is_active());
//!
//! // Drag 30px to the left: content scrolls 30px further.
//! session.track(Some(70.0));
//! assert_eq!(session.scroll_offset(), 70.0);
//! assert_eq!(session.direction(), Direction::Left);
//! ```

/// Horizontal direction of a drag relative to where it started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// The pointer is at or to the left of where it went down.
    Left,
    /// The pointer is strictly to the right of where it went down.
    Right,
}

/// Tracks one pointer-down to pointer-up gesture.
///
/// Coordinates are plain horizontal positions in the host's pixel space. A
/// missing coordinate (input from an unrecognized source) leaves the previous
/// value in place.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DragSession {
    /// Whether a gesture is in progress.
    pub active: bool,
    /// Horizontal pointer coordinate at gesture start.
    pub pointer_start: f64,
    /// Container scroll offset at gesture start.
    pub scroll_start: f64,
    /// Most recent horizontal pointer coordinate during the gesture.
    pub pointer_last: f64,
}

impl DragSession {
    /// Begin a gesture, replacing any session already in progress.
    pub fn start(&mut self, pointer: Option<f64>, scroll_offset: f64) {
        self.active = true;
        if let Some(x) = pointer {
            self.pointer_start = x;
            self.pointer_last = x;
        }
        self.scroll_start = scroll_offset;
    }

    /// Record a pointer move. Returns `false` and records nothing when idle.
    pub fn track(&mut self, pointer: Option<f64>) -> bool {
        if !self.active {
            return false;
        }
        if let Some(x) = pointer {
            self.pointer_last = x;
        }
        true
    }

    /// Scroll offset that keeps the content pinned under the pointer, 1:1 in pixels.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_start + self.pointer_start - self.pointer_last
    }

    /// Direction of the latest move relative to the gesture start.
    ///
    /// Ties resolve to [`Direction::Left`].
    #[must_use]
    pub fn direction(&self) -> Direction {
        if self.pointer_last > self.pointer_start {
            Direction::Right
        } else {
            Direction::Left
        }
    }

    /// End the gesture. Safe to call when no gesture is active.
    pub fn end(&mut self) {
        self.active = false;
    }

    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}
