// Copyright 2025 the Hscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The listener table a host registers when it binds a controller.
//!
//! Releases are listened for on the top-level scope so a drag ends even when
//! the pointer leaves the container before it is lifted.

use crate::input::InputSource;

/// Where a listener is registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerTarget {
    /// The container element.
    Container,
    /// The ambient top-level scope (the window, in a browser).
    Window,
}

/// Which raw input a listener receives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerKind {
    /// Mouse button pressed.
    MouseDown,
    /// Mouse moved.
    MouseMove,
    /// Mouse button released.
    MouseUp,
    /// Touch contact started.
    TouchStart,
    /// Touch contact moved.
    TouchMove,
    /// Touch contact ended.
    TouchEnd,
    /// Wheel turned.
    Wheel,
}

impl ListenerKind {
    /// Device the listener receives input from; `None` for the wheel.
    #[must_use]
    pub const fn source(self) -> Option<InputSource> {
        match self {
            Self::MouseDown | Self::MouseMove | Self::MouseUp => Some(InputSource::Mouse),
            Self::TouchStart | Self::TouchMove | Self::TouchEnd => Some(InputSource::Touch),
            Self::Wheel => None,
        }
    }
}

/// One entry of the listener table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Binding {
    /// Where to listen.
    pub target: ListenerTarget,
    /// What to listen for.
    pub kind: ListenerKind,
}

impl Binding {
    const fn new(target: ListenerTarget, kind: ListenerKind) -> Self {
        Self { target, kind }
    }
}

/// Every listener a bound controller needs, in registration order.
pub const BINDINGS: [Binding; 7] = [
    Binding::new(ListenerTarget::Container, ListenerKind::MouseDown),
    Binding::new(ListenerTarget::Container, ListenerKind::MouseMove),
    Binding::new(ListenerTarget::Window, ListenerKind::MouseUp),
    Binding::new(ListenerTarget::Container, ListenerKind::TouchStart),
    Binding::new(ListenerTarget::Container, ListenerKind::TouchMove),
    Binding::new(ListenerTarget::Window, ListenerKind::TouchEnd),
    Binding::new(ListenerTarget::Container, ListenerKind::Wheel),
];
