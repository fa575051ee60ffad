// Copyright 2025 the Hscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Target-neutral pieces of the DOM binding.

use hscroll::ScrollConfig;
use hscroll::binding::ListenerKind;

/// `WheelEvent.DOM_DELTA_PIXEL`.
pub const DOM_DELTA_PIXEL: u32 = 0;
/// `WheelEvent.DOM_DELTA_LINE`.
pub const DOM_DELTA_LINE: u32 = 1;
/// `WheelEvent.DOM_DELTA_PAGE`.
pub const DOM_DELTA_PAGE: u32 = 2;

/// DOM event type registered for a listener kind.
#[must_use]
pub const fn dom_event_type(kind: ListenerKind) -> &'static str {
    match kind {
        ListenerKind::MouseDown => "mousedown",
        ListenerKind::MouseMove => "mousemove",
        ListenerKind::MouseUp => "mouseup",
        ListenerKind::TouchStart => "touchstart",
        ListenerKind::TouchMove => "touchmove",
        ListenerKind::TouchEnd => "touchend",
        ListenerKind::Wheel => "wheel",
    }
}

/// Resolve a `WheelEvent.deltaY` to pixels according to its `deltaMode`.
///
/// Unknown modes are treated as pixels.
#[must_use]
pub fn wheel_delta_pixels(delta_y: f64, delta_mode: u32, config: &ScrollConfig) -> f64 {
    match delta_mode {
        DOM_DELTA_LINE => delta_y * config.line_height,
        DOM_DELTA_PAGE => delta_y * config.page_height,
        _ => delta_y,
    }
}
