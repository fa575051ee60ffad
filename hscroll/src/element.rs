// Copyright 2025 the Hscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::notify::Message;

/// Host element the controller reads and writes.
///
/// Implementations are cheap shared handles (a DOM element reference, or an
/// `Rc` around test state), so every method takes `&self`. The controller
/// never owns the element; it only keeps a handle to it.
pub trait ScrollElement: Clone {
    /// Current horizontal scroll offset in pixels.
    fn scroll_offset(&self) -> f64;

    /// Write the horizontal scroll offset.
    ///
    /// Hosts may clamp or round the value the way their scroll model does.
    fn set_scroll_offset(&self, offset: f64);

    /// Pixel width of the first child, which defines one slide.
    ///
    /// Returns `None` when the element has no children.
    fn first_child_width(&self) -> Option<f64>;

    /// Publish a bubbling notification from this element.
    fn dispatch(&self, message: Message);
}
