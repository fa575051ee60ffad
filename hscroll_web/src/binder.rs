// Copyright 2025 the Hscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use hscroll::binding::{BINDINGS, ListenerTarget};
use hscroll::{Controller, ScrollConfig, ScrollError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget, HtmlElement};

use crate::dom::{DomElement, pointer_input};
use crate::events::dom_event_type;

type Shared = Rc<RefCell<Controller<DomElement>>>;

/// A controller bound to a live DOM container.
///
/// Owns its event listeners: dropping the handle unregisters all of them.
#[derive(Debug)]
pub struct HorizontalScroll {
    controller: Shared,
    listeners: Vec<EventListener>,
}

impl HorizontalScroll {
    /// Bind to `container`, measuring slides on `slides` or on the container itself.
    ///
    /// With no container, logs a warning and registers nothing.
    pub fn new(
        container: Option<HtmlElement>,
        config: ScrollConfig,
        slides: Option<HtmlElement>,
    ) -> Result<Self, ScrollError> {
        let container = container.map(DomElement);
        let controller = Controller::attach(container, config, slides.map(DomElement))?;
        let controller = Rc::new(RefCell::new(controller));
        let listeners = register(&controller);
        tracing::debug!(listeners = listeners.len(), "horizontal scroll attached");
        Ok(Self {
            controller,
            listeners,
        })
    }

    /// Look the container up with `document.querySelector(query)`.
    pub fn from_selector(query: &str, config: ScrollConfig) -> Result<Self, ScrollError> {
        let container = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(query).ok().flatten())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if container.is_none() {
            tracing::warn!("\"{query}\" not in DOM.");
        }
        Self::new(container, config, None)
    }

    /// Move by `n` slide widths; see [`Controller::slide`].
    pub fn slide(&self, n: i32, sensitivity: Option<f64>) -> Result<f64, ScrollError> {
        self.with_controller(|controller| controller.slide(n, sensitivity))?
    }

    /// Replace the slides element. Values that are not `HTMLElement`s are logged and ignored.
    pub fn set_slides(&self, slides: &JsValue) -> Result<(), ScrollError> {
        let slides = DomElement::from_js(slides);
        self.with_controller(|controller| controller.set_slides(slides))?
    }

    /// Change the default slide sensitivity.
    ///
    /// Fails with [`ScrollError::Reentrant`] if the controller is busy.
    pub fn set_sensitivity(&self, sensitivity: f64) -> Result<(), ScrollError> {
        self.with_controller(|controller| controller.set_sensitivity(sensitivity))
    }

    /// The bound container.
    pub fn container(&self) -> HtmlElement {
        self.controller.borrow().container().0.clone()
    }

    fn with_controller<R>(
        &self,
        f: impl FnOnce(&mut Controller<DomElement>) -> R,
    ) -> Result<R, ScrollError> {
        match self.controller.try_borrow_mut() {
            Ok(mut controller) => Ok(f(&mut controller)),
            Err(_) => {
                tracing::error!("controller called while it is handling an event");
                Err(ScrollError::Reentrant)
            }
        }
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

fn register(controller: &Shared) -> Vec<EventListener> {
    let container: EventTarget = controller.borrow().container().0.clone().into();
    let window: Option<EventTarget> = web_sys::window().map(Into::into);
    if window.is_none() {
        tracing::warn!("no window; releases outside the container will not end a drag");
    }

    BINDINGS
        .iter()
        .filter_map(|binding| {
            let target = match binding.target {
                ListenerTarget::Container => &container,
                ListenerTarget::Window => window.as_ref()?,
            };
            let kind = binding.kind;
            let controller = Rc::clone(controller);
            Some(EventListener::new(
                target,
                dom_event_type(kind),
                move |event: &Event| {
                    let Ok(config) = controller.try_borrow().map(|c| *c.config()) else {
                        tracing::warn!(?kind, "re-entrant input dropped");
                        return;
                    };
                    if let Some(input) = pointer_input(kind, event, &config) {
                        // The borrow is released before subscribers run; failures are logged.
                        let _ = Controller::handle_shared(&controller, input);
                    }
                },
            ))
        })
        .collect()
}
