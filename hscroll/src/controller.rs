// Copyright 2025 the Hscroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The controller: routes tagged input to the drag session or the wheel
//! translator, performs slides, and publishes notifications.
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use hscroll::{Controller, Message, PointerInput, ScrollConfig, ScrollElement};
//!
//! #[derive(Clone, Default)]
//! struct Strip(Rc<Cell<f64>>);
//!
//! impl ScrollElement for Strip {
//!     fn scroll_offset(&self) -> f64 { self.0.get() }
//!     fn set_scroll_offset(&self, offset: f64) { self.0.set(offset) }
//!     fn first_child_width(&self) -> Option<f64> { Some(120.0) }
//!     fn dispatch(&self, _message: Message) {}
//! }
//!
//! let strip = Strip::default();
//! let mut controller = Controller::attach(Some(strip.clone()), ScrollConfig::default(), None).unwrap();
//!
//! // Drag 50px left: the strip scrolls 50px.
//! controller.handle(PointerInput::mouse_down(300.0));
//! controller.handle(PointerInput::mouse_move(250.0));
//! controller.handle(PointerInput::Up { source: hscroll::InputSource::Mouse });
//! assert_eq!(strip.scroll_offset(), 50.0);
//!
//! // One wheel tick down moves one slide forward.
//! controller.handle(PointerInput::Wheel { delta_y: 3.0 });
//! assert_eq!(strip.scroll_offset(), 170.0);
//! ```

use core::cell::RefCell;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use crate::config::{ScrollConfig, WheelMode};
use crate::element::ScrollElement;
use crate::error::ScrollError;
use crate::input::{InputSource, PointerInput};
use crate::notify::Message;
use crate::session::{Direction, DragSession};

/// Horizontal scroll controller bound to one container.
///
/// The controller never owns the host elements; it keeps handles to the
/// container (whose scroll offset it moves and from which it publishes
/// notifications) and to the slides element (whose first child measures one
/// slide).
#[derive(Debug)]
pub struct Controller<E> {
    container: E,
    slides: E,
    config: ScrollConfig,
    session: DragSession,
}

impl<E: ScrollElement> Controller<E> {
    /// Bind to `container`, measuring slides on `slides` or, if absent, on the container.
    ///
    /// A missing container is logged and returned as
    /// [`ScrollError::MissingContainer`]; hosts must not register listeners then.
    pub fn attach(
        container: Option<E>,
        config: ScrollConfig,
        slides: Option<E>,
    ) -> Result<Self, ScrollError> {
        let Some(container) = container else {
            tracing::warn!("container element not in DOM; horizontal scroll not attached");
            return Err(ScrollError::MissingContainer);
        };
        let slides = slides.unwrap_or_else(|| container.clone());
        Ok(Self {
            container,
            slides,
            config,
            session: DragSession::default(),
        })
    }

    /// The container handle.
    pub fn container(&self) -> &E {
        &self.container
    }

    /// The element whose first child defines one slide.
    pub fn slides(&self) -> &E {
        &self.slides
    }

    /// Replace the element used to measure slide width.
    ///
    /// `None` stands for a reference that is not an element; it is logged and
    /// leaves the current slides element in place.
    pub fn set_slides(&mut self, slides: Option<E>) -> Result<(), ScrollError> {
        match slides {
            Some(slides) => {
                self.slides = slides;
                Ok(())
            }
            None => {
                tracing::error!("slides must be an element; keeping the current one");
                Err(ScrollError::InvalidSlides)
            }
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Change the default sensitivity for wheel and programmatic slides.
    pub fn set_sensitivity(&mut self, sensitivity: f64) {
        self.config.sensitivity = sensitivity;
    }

    /// The drag session state.
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// Process one input event and publish the resulting notification from the container.
    pub fn handle(&mut self, input: PointerInput) {
        if let Some(message) = self.process(input) {
            self.publish(message);
        }
    }

    /// Apply one input event and return the notification it produced, without publishing it.
    ///
    /// Returns `None` for ignored input (a move while idle) and when notifications
    /// are turned off. Hosts that let subscribers call back into the controller
    /// publish after releasing their borrow; see [`Controller::handle_shared`].
    pub fn process(&mut self, input: PointerInput) -> Option<Message> {
        let message = match input {
            PointerInput::Down { x, .. } => Some(self.pointer_down(x)),
            PointerInput::Move { source, x } => self.pointer_move(source, x),
            PointerInput::Up { .. } => Some(self.pointer_up()),
            PointerInput::Wheel { delta_y } => Some(self.wheel(delta_y)),
        };
        message.filter(|_| self.config.notify)
    }

    /// Handle `input` on a shared controller, releasing the borrow before publishing.
    ///
    /// Subscribers run while nothing is borrowed, so they may call back into
    /// `shared`, for example to [`slide`](Controller::slide) on `release`.
    /// Fails with [`ScrollError::Reentrant`] only when the controller is
    /// already borrowed by the caller.
    pub fn handle_shared(
        shared: &RefCell<Self>,
        input: PointerInput,
    ) -> Result<Option<Message>, ScrollError> {
        let (message, container) = {
            let Ok(mut controller) = shared.try_borrow_mut() else {
                tracing::warn!(?input, "re-entrant input dropped");
                return Err(ScrollError::Reentrant);
            };
            (controller.process(input), controller.container.clone())
        };
        if let Some(message) = message {
            tracing::trace!(%message, "notify");
            container.dispatch(message);
        }
        Ok(message)
    }

    fn pointer_down(&mut self, x: Option<f64>) -> Message {
        self.session.start(x, self.container.scroll_offset());
        tracing::debug!(
            pointer = self.session.pointer_start,
            offset = self.session.scroll_start,
            "drag session started"
        );
        Message::Held
    }

    fn pointer_move(&mut self, source: InputSource, x: Option<f64>) -> Option<Message> {
        if !self.session.track(x) {
            return None;
        }
        // Touch moves are scrolled natively by the host.
        if source != InputSource::Touch {
            let offset = self.session.scroll_offset();
            tracing::trace!(offset, "drag move");
            self.container.set_scroll_offset(offset);
        }
        Some(match self.session.direction() {
            Direction::Right => Message::ScrollRight,
            Direction::Left => Message::ScrollLeft,
        })
    }

    fn pointer_up(&mut self) -> Message {
        if self.session.is_active() {
            tracing::debug!("drag session ended");
        }
        self.session.end();
        Message::Release
    }

    fn wheel(&mut self, delta_y: f64) -> Message {
        let forward = delta_y > 0.0;
        match self.config.wheel_mode {
            WheelMode::Slide => {
                // Both failure modes are already logged by `slide`.
                let _ = self.slide(if forward { 1 } else { -1 }, None);
            }
            WheelMode::Pixel => {
                let offset = self.container.scroll_offset();
                self.container
                    .set_scroll_offset(offset + delta_y * self.config.sensitivity);
            }
        }
        if forward {
            Message::WheelDown
        } else {
            Message::WheelUp
        }
    }

    /// Move the content by `n` slide widths, scaled by `sensitivity` (or the
    /// configured sensitivity when `None`).
    ///
    /// The offset is adjusted relative to its current value, and the applied
    /// pixel delta is returned. A zero `n` or a non-finite sensitivity is
    /// logged and leaves the offset untouched.
    pub fn slide(&mut self, n: i32, sensitivity: Option<f64>) -> Result<f64, ScrollError> {
        if n == 0 {
            tracing::warn!("slide must be a non-zero value");
            return Err(ScrollError::ZeroSlide);
        }
        let sensitivity = sensitivity.unwrap_or(self.config.sensitivity);
        if !sensitivity.is_finite() {
            tracing::warn!(sensitivity, "slide sensitivity must be finite");
            return Err(ScrollError::InvalidSensitivity(sensitivity));
        }
        let width = self.slides.first_child_width().unwrap_or_else(|| {
            tracing::debug!("slides element has no children; slide width is zero");
            0.0
        });
        let delta = width * f64::from(n) * sensitivity;
        let offset = self.container.scroll_offset();
        self.container.set_scroll_offset(offset + delta);
        Ok(delta)
    }

    /// Like [`Controller::slide`], but deferred until the returned future is polled.
    ///
    /// Dropping the future before it is polled cancels the slide.
    pub fn slide_deferred(&mut self, n: i32, sensitivity: Option<f64>) -> PendingSlide<'_, E> {
        PendingSlide {
            controller: Some(self),
            n,
            sensitivity,
        }
    }

    fn publish(&self, message: Message) {
        tracing::trace!(%message, "notify");
        self.container.dispatch(message);
    }
}

/// A slide that has been requested but not yet applied.
///
/// Resolves on first poll with the result of [`Controller::slide`]. Polling
/// again after completion resolves to a zero delta.
#[derive(Debug)]
#[must_use = "a pending slide does nothing unless awaited or polled"]
pub struct PendingSlide<'a, E> {
    controller: Option<&'a mut Controller<E>>,
    n: i32,
    sensitivity: Option<f64>,
}

impl<E: ScrollElement> Future for PendingSlide<'_, E> {
    type Output = Result<f64, ScrollError>;

    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match this.controller.take() {
            Some(controller) => Poll::Ready(controller.slide(this.n, this.sensitivity)),
            None => Poll::Ready(Ok(0.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use super::*;

    type Subscriber = Rc<dyn Fn(Message)>;

    #[derive(Default)]
    struct Recorded {
        offset: f64,
        child_width: Option<f64>,
        writes: usize,
        messages: Vec<Message>,
        subscriber: Option<Subscriber>,
    }

    #[derive(Clone, Default)]
    struct MockElement(Rc<RefCell<Recorded>>);

    impl MockElement {
        fn with_child(width: f64) -> Self {
            let el = Self::default();
            el.0.borrow_mut().child_width = Some(width);
            el
        }

        fn offset(&self) -> f64 {
            self.0.borrow().offset
        }

        fn writes(&self) -> usize {
            self.0.borrow().writes
        }

        fn take_messages(&self) -> Vec<Message> {
            core::mem::take(&mut self.0.borrow_mut().messages)
        }

        fn subscribe(&self, subscriber: impl Fn(Message) + 'static) {
            self.0.borrow_mut().subscriber = Some(Rc::new(subscriber));
        }
    }

    impl ScrollElement for MockElement {
        fn scroll_offset(&self) -> f64 {
            self.0.borrow().offset
        }

        fn set_scroll_offset(&self, offset: f64) {
            let mut state = self.0.borrow_mut();
            state.offset = offset;
            state.writes += 1;
        }

        fn first_child_width(&self) -> Option<f64> {
            self.0.borrow().child_width
        }

        fn dispatch(&self, message: Message) {
            let subscriber = {
                let mut state = self.0.borrow_mut();
                state.messages.push(message);
                state.subscriber.clone()
            };
            if let Some(subscriber) = subscriber {
                subscriber(message);
            }
        }
    }

    fn attached(container: &MockElement, config: ScrollConfig) -> Controller<MockElement> {
        Controller::attach(Some(container.clone()), config, None).unwrap()
    }

    #[test]
    fn mouse_drag_writes_start_plus_delta() {
        let strip = MockElement::with_child(100.0);
        strip.set_scroll_offset(40.0);
        let mut controller = attached(&strip, ScrollConfig::default().with_sensitivity(7.0));

        controller.handle(PointerInput::mouse_down(300.0));
        controller.handle(PointerInput::mouse_move(220.0));
        assert_eq!(strip.offset(), 120.0);

        controller.handle(PointerInput::mouse_move(330.0));
        assert_eq!(strip.offset(), 10.0);
    }

    #[test]
    fn touch_drag_does_not_write_offset() {
        let strip = MockElement::with_child(100.0);
        strip.set_scroll_offset(25.0);
        let writes_before = strip.writes();
        let mut controller = attached(&strip, ScrollConfig::default());

        controller.handle(PointerInput::touch_start(200.0));
        controller.handle(PointerInput::touch_move(120.0));
        controller.handle(PointerInput::touch_move(260.0));

        assert_eq!(strip.offset(), 25.0);
        assert_eq!(strip.writes(), writes_before);
        assert_eq!(
            strip.take_messages(),
            vec![Message::Held, Message::ScrollLeft, Message::ScrollRight]
        );
    }

    #[test]
    fn direction_notifications_with_tie_left() {
        let strip = MockElement::with_child(100.0);
        let mut controller = attached(&strip, ScrollConfig::default());

        controller.handle(PointerInput::mouse_down(50.0));
        controller.handle(PointerInput::mouse_move(60.0));
        controller.handle(PointerInput::mouse_move(40.0));
        controller.handle(PointerInput::mouse_move(50.0));

        assert_eq!(
            strip.take_messages(),
            vec![
                Message::Held,
                Message::ScrollRight,
                Message::ScrollLeft,
                Message::ScrollLeft,
            ]
        );
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let strip = MockElement::with_child(100.0);
        let mut controller = attached(&strip, ScrollConfig::default());

        controller.handle(PointerInput::mouse_move(80.0));

        assert_eq!(strip.writes(), 0);
        assert!(strip.take_messages().is_empty());
    }

    #[test]
    fn wheel_down_slides_forward() {
        let strip = MockElement::with_child(120.0);
        let mut controller = attached(&strip, ScrollConfig::default().with_sensitivity(0.5));

        controller.handle(PointerInput::Wheel { delta_y: 4.0 });

        assert_eq!(strip.offset(), 60.0);
        assert_eq!(strip.take_messages(), vec![Message::WheelDown]);
    }

    #[test]
    fn wheel_zero_and_negative_slide_backward() {
        let strip = MockElement::with_child(120.0);
        strip.set_scroll_offset(500.0);
        let mut controller = attached(&strip, ScrollConfig::default());

        controller.handle(PointerInput::Wheel { delta_y: -2.0 });
        controller.handle(PointerInput::Wheel { delta_y: 0.0 });

        assert_eq!(strip.offset(), 260.0);
        assert_eq!(
            strip.take_messages(),
            vec![Message::WheelUp, Message::WheelUp]
        );
    }

    #[test]
    fn wheel_does_not_touch_drag_session() {
        let strip = MockElement::with_child(10.0);
        let mut controller = attached(&strip, ScrollConfig::default());

        controller.handle(PointerInput::Wheel { delta_y: 1.0 });
        assert!(!controller.session().is_active());

        controller.handle(PointerInput::mouse_down(0.0));
        controller.handle(PointerInput::Wheel { delta_y: 1.0 });
        assert!(controller.session().is_active());
    }

    #[test]
    fn pixel_wheel_mode_scrolls_by_delta() {
        let strip = MockElement::with_child(120.0);
        let config = ScrollConfig::default()
            .with_wheel_mode(WheelMode::Pixel)
            .with_sensitivity(2.0);
        let mut controller = attached(&strip, config);

        controller.handle(PointerInput::Wheel { delta_y: 15.0 });
        controller.handle(PointerInput::Wheel { delta_y: -5.0 });

        assert_eq!(strip.offset(), 20.0);
        assert_eq!(
            strip.take_messages(),
            vec![Message::WheelDown, Message::WheelUp]
        );
    }

    #[test]
    fn zero_slide_is_a_noop() {
        let strip = MockElement::with_child(100.0);
        strip.set_scroll_offset(33.0);
        let writes_before = strip.writes();
        let mut controller = attached(&strip, ScrollConfig::default());

        assert_eq!(controller.slide(0, None), Err(ScrollError::ZeroSlide));

        assert_eq!(strip.offset(), 33.0);
        assert_eq!(strip.writes(), writes_before);
        assert!(strip.take_messages().is_empty());
    }

    #[test]
    fn slide_is_linear() {
        let strip = MockElement::with_child(90.0);
        let mut controller = attached(&strip, ScrollConfig::default());

        assert_eq!(controller.slide(3, Some(-0.5)), Ok(-135.0));
        assert_eq!(strip.offset(), -135.0);

        let twice = MockElement::with_child(90.0);
        let mut a = attached(&twice, ScrollConfig::default());
        a.slide(1, Some(1.0)).unwrap();
        a.slide(1, Some(1.0)).unwrap();

        let once = MockElement::with_child(90.0);
        let mut b = attached(&once, ScrollConfig::default());
        b.slide(2, Some(1.0)).unwrap();

        assert_eq!(twice.offset(), once.offset());
    }

    #[test]
    fn slide_is_relative_to_current_offset() {
        let strip = MockElement::with_child(50.0);
        let mut controller = attached(&strip, ScrollConfig::default());

        controller.slide(1, None).unwrap();
        // Something else scrolled the strip in between.
        strip.set_scroll_offset(strip.offset() + 7.0);
        controller.slide(1, None).unwrap();

        assert_eq!(strip.offset(), 107.0);
    }

    #[test]
    fn slide_rejects_non_finite_sensitivity() {
        let strip = MockElement::with_child(50.0);
        let mut controller = attached(&strip, ScrollConfig::default());

        assert!(matches!(
            controller.slide(1, Some(f64::NAN)),
            Err(ScrollError::InvalidSensitivity(_))
        ));
        assert_eq!(strip.writes(), 0);
    }

    #[test]
    fn slide_without_children_moves_nothing() {
        let strip = MockElement::default();
        let mut controller = attached(&strip, ScrollConfig::default());

        assert_eq!(controller.slide(2, None), Ok(0.0));
        assert_eq!(strip.offset(), 0.0);
    }

    #[test]
    fn separate_slides_element_measures_width() {
        let strip = MockElement::with_child(999.0);
        let slides = MockElement::with_child(40.0);
        let mut controller =
            Controller::attach(Some(strip.clone()), ScrollConfig::default(), Some(slides))
                .unwrap();

        controller.slide(1, None).unwrap();
        assert_eq!(strip.offset(), 40.0);

        assert_eq!(controller.set_slides(None), Err(ScrollError::InvalidSlides));
        controller.slide(1, None).unwrap();
        assert_eq!(strip.offset(), 80.0);

        controller.set_slides(Some(MockElement::with_child(5.0))).unwrap();
        controller.slide(1, None).unwrap();
        assert_eq!(strip.offset(), 85.0);
    }

    #[test]
    fn release_without_press_is_harmless() {
        let strip = MockElement::with_child(100.0);
        let mut controller = attached(&strip, ScrollConfig::default());

        controller.handle(PointerInput::Up {
            source: InputSource::Mouse,
        });

        assert!(!controller.session().is_active());
        assert_eq!(strip.take_messages(), vec![Message::Release]);
    }

    #[test]
    fn release_ends_session() {
        let strip = MockElement::with_child(100.0);
        let mut controller = attached(&strip, ScrollConfig::default());

        controller.handle(PointerInput::touch_start(10.0));
        controller.handle(PointerInput::Up {
            source: InputSource::Touch,
        });
        controller.handle(PointerInput::mouse_move(90.0));

        assert_eq!(strip.writes(), 0);
        assert_eq!(
            strip.take_messages(),
            vec![Message::Held, Message::Release]
        );
    }

    #[test]
    fn missing_container_refuses_to_attach() {
        let result = Controller::<MockElement>::attach(None, ScrollConfig::default(), None);
        assert!(matches!(result, Err(ScrollError::MissingContainer)));

        // Slides alone do not stand in for a container.
        let slides = MockElement::with_child(10.0);
        let result =
            Controller::attach(None, ScrollConfig::default(), Some(slides.clone()));
        assert!(result.is_err());
        assert!(slides.take_messages().is_empty());
    }

    #[test]
    fn unknown_source_keeps_stale_coordinates() {
        let strip = MockElement::with_child(100.0);
        let mut controller = attached(&strip, ScrollConfig::default());

        controller.handle(PointerInput::mouse_down(100.0));
        controller.handle(PointerInput::mouse_move(60.0));
        controller.handle(PointerInput::Up {
            source: InputSource::Mouse,
        });
        assert_eq!(strip.offset(), 40.0);

        controller.handle(PointerInput::Down {
            source: InputSource::Unknown,
            x: None,
        });
        controller.handle(PointerInput::Move {
            source: InputSource::Unknown,
            x: None,
        });

        // Start and last coordinates are both stale from the previous gesture.
        assert_eq!(strip.offset(), 80.0);
    }

    #[test]
    fn notify_off_silences_dispatch() {
        let strip = MockElement::with_child(100.0);
        let mut controller = attached(&strip, ScrollConfig::default().with_notify(false));

        controller.handle(PointerInput::mouse_down(10.0));
        controller.handle(PointerInput::mouse_move(0.0));
        controller.handle(PointerInput::Wheel { delta_y: 1.0 });

        assert_eq!(strip.offset(), 110.0);
        assert!(strip.take_messages().is_empty());
    }

    #[test]
    fn process_returns_message_without_dispatching() {
        let strip = MockElement::with_child(100.0);
        let mut controller = attached(&strip, ScrollConfig::default());

        assert_eq!(controller.process(PointerInput::mouse_move(3.0)), None);
        assert_eq!(
            controller.process(PointerInput::mouse_down(10.0)),
            Some(Message::Held)
        );
        assert_eq!(
            controller.process(PointerInput::mouse_move(4.0)),
            Some(Message::ScrollLeft)
        );
        assert_eq!(strip.offset(), 6.0);
        assert!(strip.take_messages().is_empty());

        let quiet = MockElement::with_child(100.0);
        let mut controller = attached(&quiet, ScrollConfig::default().with_notify(false));
        assert_eq!(controller.process(PointerInput::Wheel { delta_y: 1.0 }), None);
        assert_eq!(quiet.offset(), 100.0);
    }

    #[test]
    fn subscriber_can_slide_from_notification() {
        let strip = MockElement::with_child(100.0);
        let shared = Rc::new(RefCell::new(attached(&strip, ScrollConfig::default())));
        let weak = Rc::downgrade(&shared);
        // Snap forward one slide whenever a drag is released.
        strip.subscribe(move |message| {
            if message == Message::Release {
                let controller = weak.upgrade().unwrap();
                controller.borrow_mut().slide(1, None).unwrap();
            }
        });

        Controller::handle_shared(&shared, PointerInput::mouse_down(50.0)).unwrap();
        Controller::handle_shared(&shared, PointerInput::mouse_move(20.0)).unwrap();
        assert_eq!(strip.offset(), 30.0);

        let released = Controller::handle_shared(
            &shared,
            PointerInput::Up {
                source: InputSource::Mouse,
            },
        );

        assert_eq!(released, Ok(Some(Message::Release)));
        assert_eq!(strip.offset(), 130.0);
        assert_eq!(
            strip.take_messages(),
            vec![Message::Held, Message::ScrollLeft, Message::Release]
        );
    }

    #[test]
    fn handle_shared_refuses_while_borrowed() {
        let strip = MockElement::with_child(100.0);
        let shared = RefCell::new(attached(&strip, ScrollConfig::default()));

        let guard = shared.borrow();
        assert_eq!(
            Controller::handle_shared(&shared, PointerInput::mouse_down(5.0)),
            Err(ScrollError::Reentrant)
        );
        drop(guard);

        assert!(!shared.borrow().session().is_active());
        assert!(strip.take_messages().is_empty());
    }

    #[test]
    fn slides_default_to_container() {
        let strip = MockElement::with_child(100.0);
        let controller = attached(&strip, ScrollConfig::default());

        assert!(Rc::ptr_eq(&controller.slides().0, &strip.0));
        assert!(Rc::ptr_eq(&controller.container().0, &strip.0));
    }

    #[test]
    fn deferred_slide_applies_when_awaited() {
        let strip = MockElement::with_child(30.0);
        let mut controller = attached(&strip, ScrollConfig::default());

        let applied = pollster::block_on(controller.slide_deferred(2, None));

        assert_eq!(applied, Ok(60.0));
        assert_eq!(strip.offset(), 60.0);
    }

    #[test]
    fn dropped_deferred_slide_is_cancelled() {
        let strip = MockElement::with_child(30.0);
        let mut controller = attached(&strip, ScrollConfig::default());

        drop(controller.slide_deferred(1, None));

        assert_eq!(strip.writes(), 0);
    }
}
