// Copyright 2025 the Hscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM binding for the `hscroll` horizontal scroll controller.
//!
//! On `wasm32` this crate provides `HorizontalScroll`, which binds a
//! [`hscroll::Controller`] to an `HtmlElement`:
//!
//! - mouse down/move and touch start/move listeners on the container,
//! - mouse up and touch end listeners on the window, so a drag ends even when
//!   the pointer is released outside the strip,
//! - a wheel listener on the container.
//!
//! Notifications are dispatched from the container as bubbling
//! `CustomEvent`s named `HorizontalScroll`, with `detail.message` set to one of
//! `held`, `release`, `scrollleft`, `scrollright`, `wheelup`, `wheeldown`.
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn bind(strip: web_sys::HtmlElement) -> Option<hscroll_web::HorizontalScroll> {
//!     let config = hscroll::ScrollConfig::default().with_sensitivity(1.0);
//!     let scroll = hscroll_web::HorizontalScroll::new(Some(strip), config, None).ok()?;
//!     assert_eq!(scroll.listener_count(), hscroll::binding::BINDINGS.len());
//!     // Page forward by two slides.
//!     let _ = scroll.slide(2, None);
//!     Some(scroll)
//! }
//! ```
//!
//! Dropping the `HorizontalScroll` handle unregisters every listener.
//!
//! On other targets only the target-neutral helpers in [`events`] are built.

pub mod events;

#[cfg(target_arch = "wasm32")]
mod binder;
#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use binder::HorizontalScroll;
#[cfg(target_arch = "wasm32")]
pub use dom::DomElement;
