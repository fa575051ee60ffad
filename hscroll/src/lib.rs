// Copyright 2025 the Hscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hscroll: a headless controller for horizontally overflowing strips.
//!
//! A [`Controller`] is bound to a container element. It lets the user drag
//! the strip with a mouse or touch, turns each wheel tick into a one-slide
//! step, and republishes every interaction as a semantic [`Message`]
//! (`held`, `release`, `scrollleft`, `scrollright`, `wheelup`, `wheeldown`)
//! so subscribers do not need to re-derive gestures from raw pointer events.
//!
//! The crate does not talk to any windowing system or DOM itself. Hosts:
//!
//! - Implement [`ScrollElement`] for their element handle (scroll offset,
//!   first-child width, notification dispatch).
//! - Register the listeners listed in [`binding::BINDINGS`].
//! - Convert raw events into [`PointerInput`] once, at the boundary, and feed
//!   them to [`Controller::handle`].
//!
//! `hscroll_web` does all three for `web-sys` elements.
//!
//! ## Interaction model
//!
//! - **Drag**: pointer-down starts a [`session::DragSession`]; mouse moves
//!   write `scroll_start + pointer_start - pointer_now` to the container
//!   (1:1, sensitivity does not apply). Touch moves leave the offset to the
//!   host's native touch scrolling. Every move emits `scrollright` if the
//!   pointer is right of its start and `scrollleft` otherwise.
//! - **Release**: pointer-up anywhere ends the session and emits `release`,
//!   even without a preceding press.
//! - **Wheel**: a positive vertical delta slides one slide forward and emits
//!   `wheeldown`; anything else slides back and emits `wheelup`.
//!   [`WheelMode::Pixel`] scrolls by the raw delta instead.
//! - **Slide**: [`Controller::slide`] moves by `width × n × sensitivity`,
//!   where `width` is the first child of the slides element.
//!
//! ## Features
//!
//! - `ui_events_adapter` (default): [`PointerInput::from_ui_event`] for
//!   `ui-events` pointer events.
//! - `serde`: (de)serialize [`ScrollConfig`] and [`Message`].
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod binding;
mod config;
mod controller;
mod element;
mod error;
pub mod input;
mod notify;
pub mod session;

pub use config::{ScrollConfig, WheelMode};
pub use controller::{Controller, PendingSlide};
pub use element::ScrollElement;
pub use error::ScrollError;
pub use input::{InputSource, PointerInput};
pub use notify::{EVENT_NAME, Message, UnknownMessage};
