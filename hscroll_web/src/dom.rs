// Copyright 2025 the Hscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hscroll::binding::ListenerKind;
use hscroll::{EVENT_NAME, InputSource, Message, PointerInput, ScrollConfig, ScrollElement};
use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, CustomEventInit, Event, HtmlElement, MouseEvent, TouchEvent, WheelEvent};

use crate::events::wheel_delta_pixels;

/// A DOM element handle usable as a container or slides element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomElement(pub HtmlElement);

impl DomElement {
    /// Downcast an arbitrary JS value, returning `None` if it is not an `HTMLElement`.
    #[must_use]
    pub fn from_js(value: &JsValue) -> Option<Self> {
        value.dyn_ref::<HtmlElement>().cloned().map(Self)
    }
}

impl From<HtmlElement> for DomElement {
    fn from(element: HtmlElement) -> Self {
        Self(element)
    }
}

fn scroll_left_key() -> JsValue {
    JsValue::from_str("scrollLeft")
}

impl ScrollElement for DomElement {
    // `scrollLeft` is fractional on scaled displays; go through the property
    // rather than the integer accessors.
    fn scroll_offset(&self) -> f64 {
        Reflect::get(&self.0, &scroll_left_key())
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    fn set_scroll_offset(&self, offset: f64) {
        if let Err(err) = Reflect::set(&self.0, &scroll_left_key(), &JsValue::from_f64(offset)) {
            tracing::error!(?err, "failed to write scrollLeft");
        }
    }

    fn first_child_width(&self) -> Option<f64> {
        self.0
            .first_element_child()
            .map(|child| f64::from(child.client_width()))
    }

    fn dispatch(&self, message: Message) {
        let event = match notification_event(message) {
            Ok(event) => event,
            Err(err) => {
                tracing::error!(?err, %message, "failed to build notification event");
                return;
            }
        };
        if let Err(err) = self.0.dispatch_event(&event) {
            tracing::error!(?err, %message, "failed to dispatch notification");
        }
    }
}

/// Build the bubbling `CustomEvent` carrying `{ message }` as its detail.
fn notification_event(message: Message) -> Result<CustomEvent, JsValue> {
    let detail = Object::new();
    Reflect::set(
        &detail,
        &JsValue::from_str("message"),
        &JsValue::from_str(message.as_str()),
    )?;
    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_detail(&detail);
    CustomEvent::new_with_event_init_dict(EVENT_NAME, &init)
}

fn mouse_x(event: &Event) -> Option<f64> {
    event
        .dyn_ref::<MouseEvent>()
        .map(|e| f64::from(e.client_x()))
}

fn touch_x(event: &Event) -> Option<f64> {
    event
        .dyn_ref::<TouchEvent>()
        .and_then(|e| e.touches().get(0))
        .map(|touch| f64::from(touch.client_x()))
}

/// Tag a raw DOM event received by a listener of `kind`.
///
/// A mouse or touch listener that receives an event of another type yields
/// input without a coordinate. A wheel listener that receives a non-wheel
/// event yields nothing.
pub(crate) fn pointer_input(
    kind: ListenerKind,
    event: &Event,
    config: &ScrollConfig,
) -> Option<PointerInput> {
    let Some(source) = kind.source() else {
        let wheel = event.dyn_ref::<WheelEvent>()?;
        return Some(PointerInput::Wheel {
            delta_y: wheel_delta_pixels(wheel.delta_y(), wheel.delta_mode(), config),
        });
    };
    let x = || match source {
        InputSource::Touch => touch_x(event),
        _ => mouse_x(event),
    };
    let input = match kind {
        ListenerKind::MouseDown | ListenerKind::TouchStart => PointerInput::Down { source, x: x() },
        ListenerKind::MouseMove | ListenerKind::TouchMove => PointerInput::Move { source, x: x() },
        _ => PointerInput::Up { source },
    };
    Some(input)
}
