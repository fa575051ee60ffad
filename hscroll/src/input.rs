// Copyright 2025 the Hscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input boundary: raw host events are tagged once, here, and the controller
//! only ever switches on [`PointerInput`].
//!
//! Hosts with their own event types build [`PointerInput`] directly. With the
//! `ui_events_adapter` feature, [`PointerInput::from_ui_event`] converts
//! `ui_events::pointer::PointerEvent`.

/// Which device produced a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    /// Mouse (and pen, which hosts deliver as mouse-compatible events).
    Mouse,
    /// Touch contact. Drag moves from touch do not write the scroll offset.
    Touch,
    /// Unrecognized source. Carries no coordinate.
    Unknown,
}

/// One input event, tagged by kind and source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    /// Pointer pressed on the container.
    Down {
        /// Originating device.
        source: InputSource,
        /// Horizontal coordinate, absent for [`InputSource::Unknown`].
        x: Option<f64>,
    },
    /// Pointer moved over the container.
    Move {
        /// Originating device.
        source: InputSource,
        /// Horizontal coordinate, absent for [`InputSource::Unknown`].
        x: Option<f64>,
    },
    /// Pointer released anywhere.
    Up {
        /// Originating device.
        source: InputSource,
    },
    /// Wheel turned over the container.
    Wheel {
        /// Vertical delta in pixels; positive is scrolling down.
        delta_y: f64,
    },
}

impl PointerInput {
    /// Mouse press at `x`.
    #[must_use]
    pub fn mouse_down(x: f64) -> Self {
        Self::Down {
            source: InputSource::Mouse,
            x: Some(x),
        }
    }

    /// Mouse move to `x`.
    #[must_use]
    pub fn mouse_move(x: f64) -> Self {
        Self::Move {
            source: InputSource::Mouse,
            x: Some(x),
        }
    }

    /// Touch start at `x`, the first touch point's coordinate.
    #[must_use]
    pub fn touch_start(x: f64) -> Self {
        Self::Down {
            source: InputSource::Touch,
            x: Some(x),
        }
    }

    /// Touch move to `x`, the first touch point's coordinate.
    #[must_use]
    pub fn touch_move(x: f64) -> Self {
        Self::Move {
            source: InputSource::Touch,
            x: Some(x),
        }
    }

    /// Tag a horizontal coordinate with its source, dropping it for unknown sources.
    #[must_use]
    pub fn coordinate(source: InputSource, x: f64) -> Option<f64> {
        match source {
            InputSource::Mouse | InputSource::Touch => Some(x),
            InputSource::Unknown => None,
        }
    }
}

#[cfg(feature = "ui_events_adapter")]
mod adapter {
    use kurbo::Point;
    use ui_events::ScrollDelta;
    use ui_events::pointer::{PointerEvent, PointerInfo, PointerScrollEvent, PointerType};

    use super::{InputSource, PointerInput};
    use crate::ScrollConfig;

    fn source_of(info: &PointerInfo) -> InputSource {
        match info.pointer_type {
            PointerType::Mouse | PointerType::Pen => InputSource::Mouse,
            PointerType::Touch => InputSource::Touch,
            _ => InputSource::Unknown,
        }
    }

    fn horizontal(source: InputSource, point: Point) -> Option<f64> {
        PointerInput::coordinate(source, point.x)
    }

    fn resolve_delta_y(event: &PointerScrollEvent, config: &ScrollConfig) -> f64 {
        match &event.delta {
            ScrollDelta::PixelDelta(pos) => pos.to_logical::<f64>(event.state.scale_factor).y,
            ScrollDelta::LineDelta(_, y) => f64::from(*y) * config.line_height,
            ScrollDelta::PageDelta(_, y) => f64::from(*y) * config.page_height,
        }
    }

    impl PointerInput {
        /// Convert a `ui-events` pointer event.
        ///
        /// - `Down`, `Move`, `Up` map directly; pen counts as mouse.
        /// - `Cancel` maps to `Up` so an interrupted gesture still ends.
        /// - `Scroll` becomes `Wheel`, with line and page deltas resolved to
        ///   pixels through `config`.
        /// - `Enter`, `Leave` and `Gesture` are not consumed and return `None`.
        #[must_use]
        pub fn from_ui_event(event: &PointerEvent, config: &ScrollConfig) -> Option<Self> {
            match event {
                PointerEvent::Down(e) => {
                    let source = source_of(&e.pointer);
                    Some(Self::Down {
                        source,
                        x: horizontal(source, e.state.logical_point()),
                    })
                }
                PointerEvent::Move(e) => {
                    let source = source_of(&e.pointer);
                    Some(Self::Move {
                        source,
                        x: horizontal(source, e.current.logical_point()),
                    })
                }
                PointerEvent::Up(e) => Some(Self::Up {
                    source: source_of(&e.pointer),
                }),
                PointerEvent::Cancel(info) => Some(Self::Up {
                    source: source_of(info),
                }),
                PointerEvent::Scroll(e) => Some(Self::Wheel {
                    delta_y: resolve_delta_y(e, config),
                }),
                PointerEvent::Enter(_) | PointerEvent::Leave(_) | PointerEvent::Gesture(_) => None,
            }
        }
    }
}
