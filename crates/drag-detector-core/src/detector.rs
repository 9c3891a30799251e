//! Drag detector: threshold gate, move/release handling and the global listener lifecycle.
//!
//! A detector tracks at most one gesture. A qualifying press subscribes the detector to the
//! four global [`Channel`]s of its [`InputSource`]; release or [`DragDetector::destroy`] drops
//! those subscriptions again. Handlers are created once per detector and reused for every
//! subscription, so a subscription always refers to the same handler identity.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, trace};

use crate::event::DragEvent;
use crate::input::{Channel, DragTarget, InputHandler, InputSource, PointerInput};
use crate::options::{DragOptions, Thresholds};
use crate::session::Session;

/// Handlers for attaching a detector to an element declaratively.
///
/// Created once per detector; every call to [`DragDetector::bindings`] returns the same record.
pub struct DragBindings<N> {
    /// Registers the element as the detector's target.
    pub on_register: Rc<dyn Fn(N)>,
    pub on_mouse_down: InputHandler,
    pub on_touch_start: InputHandler,
}

impl<N> Clone for DragBindings<N> {
    fn clone(&self) -> Self {
        Self {
            on_register: Rc::clone(&self.on_register),
            on_mouse_down: Rc::clone(&self.on_mouse_down),
            on_touch_start: Rc::clone(&self.on_touch_start),
        }
    }
}

struct State<N, Sub> {
    target: Option<N>,
    options: DragOptions<N>,
    session: Session,
    subscriptions: Vec<Sub>,
}

struct Shared<N, S: InputSource> {
    source: S,
    state: RefCell<State<N, S::Subscription>>,
    move_handler: InputHandler,
    release_handler: InputHandler,
    bindings: DragBindings<N>,
}

/// Detects mouse and touch driven drags on a registered target.
///
/// Cloning yields another handle to the same detector. The global listeners are released when
/// the gesture ends, on [`destroy`](Self::destroy), or when the last handle is dropped.
pub struct DragDetector<N, S: InputSource> {
    shared: Rc<Shared<N, S>>,
}

impl<N, S: InputSource> Clone for DragDetector<N, S> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<N, S: InputSource> PartialEq for DragDetector<N, S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }
}

impl<N, S: InputSource> fmt::Debug for DragDetector<N, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.borrow();
        f.debug_struct("DragDetector")
            .field("session", &state.session)
            .field("thresholds", &state.options.thresholds)
            .field("registered", &state.target.is_some())
            .field("subscriptions", &state.subscriptions.len())
            .finish()
    }
}

impl<N, S> DragDetector<N, S>
where
    N: DragTarget + Clone + 'static,
    S: InputSource + 'static,
{
    pub fn new(options: DragOptions<N>, source: S) -> Self {
        let shared = Rc::new_cyclic(|weak: &Weak<Shared<N, S>>| {
            let move_handler: InputHandler = {
                let weak = weak.clone();
                Rc::new(move |input: &PointerInput| {
                    if let Some(shared) = weak.upgrade() {
                        shared.handle_move(input);
                    }
                })
            };
            let release_handler: InputHandler = {
                let weak = weak.clone();
                Rc::new(move |_: &PointerInput| {
                    if let Some(shared) = weak.upgrade() {
                        shared.handle_release();
                    }
                })
            };
            let on_press: InputHandler = {
                let weak = weak.clone();
                Rc::new(move |input: &PointerInput| {
                    if let Some(shared) = weak.upgrade() {
                        shared.handle_press(input);
                    }
                })
            };
            let on_register: Rc<dyn Fn(N)> = {
                let weak = weak.clone();
                Rc::new(move |node: N| {
                    if let Some(shared) = weak.upgrade() {
                        shared.register(node);
                    }
                })
            };

            Shared {
                source,
                state: RefCell::new(State {
                    target: None,
                    options,
                    session: Session::default(),
                    subscriptions: Vec::new(),
                }),
                move_handler,
                release_handler,
                bindings: DragBindings {
                    on_register,
                    on_mouse_down: Rc::clone(&on_press),
                    on_touch_start: on_press,
                },
            }
        });
        Self { shared }
    }

    /// Binds the element whose geometry anchors relative coordinates, replacing any previous one.
    ///
    /// An in-progress gesture keeps its cached bounds.
    pub fn register(&self, target: N) {
        self.shared.register(target);
    }

    /// Replaces thresholds and callback. An in-progress gesture continues unaffected.
    pub fn set_options(&self, options: DragOptions<N>) {
        self.shared.state.borrow_mut().options = options;
    }

    /// Press-class entry point (mouse down / touch start on the target).
    pub fn on_press(&self, input: &PointerInput) {
        self.shared.handle_press(input);
    }

    /// Move sample from the global source. Ignored unless a gesture is active.
    pub fn on_move(&self, input: &PointerInput) {
        self.shared.handle_move(input);
    }

    /// Release from the global source: emits the terminal event and tears the gesture down.
    pub fn on_release(&self) {
        self.shared.handle_release();
    }

    /// Forces teardown without emitting a terminal event. Safe to call repeatedly.
    pub fn destroy(&self) {
        self.shared.teardown();
    }

    pub fn bindings(&self) -> &DragBindings<N> {
        &self.shared.bindings
    }

    pub fn is_active(&self) -> bool {
        self.shared.state.borrow().session.active
    }

    /// Whether global listeners are currently attached.
    pub fn is_listening(&self) -> bool {
        !self.shared.state.borrow().subscriptions.is_empty()
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.shared.state.borrow().session
    }

    pub fn thresholds(&self) -> Thresholds {
        self.shared.state.borrow().options.thresholds
    }

    pub fn options(&self) -> DragOptions<N> {
        self.shared.state.borrow().options.clone()
    }

    pub fn target(&self) -> Option<N> {
        self.shared.state.borrow().target.clone()
    }
}

impl<N, S> Shared<N, S>
where
    N: DragTarget + Clone + 'static,
    S: InputSource + 'static,
{
    fn register(&self, target: N) {
        self.state.borrow_mut().target = Some(target);
        debug!("drag target registered");
    }

    fn handle_press(&self, input: &PointerInput) {
        let (target, cached, thresholds) = {
            let mut state = self.state.borrow_mut();
            state.session.reset_residuals();
            let Some(target) = state.target.clone() else {
                trace!("press ignored: no target registered");
                return;
            };
            (target, state.session.bounds, state.options.thresholds)
        };
        let Some(client) = input.client_position() else {
            trace!("press ignored: no pointer position");
            return;
        };

        let rect = cached.unwrap_or_else(|| target.bounding_rect());
        let press = rect.relative(client);
        if !thresholds.admits(press) {
            debug!(
                x = press.x,
                y = press.y,
                x_threshold = thresholds.x,
                y_threshold = thresholds.y,
                "press rejected by threshold"
            );
            return;
        }

        self.state.borrow_mut().session.begin(press);
        debug!(x = press.x, y = press.y, "drag started");
        self.listen();
    }

    fn handle_move(&self, input: &PointerInput) {
        let Some(client) = input.client_position() else {
            return;
        };
        let (event, callback) = {
            let mut state = self.state.borrow_mut();
            if !state.session.active {
                return;
            }
            let Some(target) = state.target.clone() else {
                return;
            };
            let rect = match state.session.bounds {
                Some(rect) => rect,
                None => {
                    let rect = target.bounding_rect();
                    state.session.bounds = Some(rect);
                    rect
                }
            };
            let sample = state.session.advance(rect.relative(client));
            trace!(
                x = sample.x,
                y = sample.y,
                dx = sample.x_delta,
                dy = sample.y_delta,
                "drag move"
            );
            (
                DragEvent::from_sample(sample, rect, target, false),
                Rc::clone(&state.options.callback),
            )
        };
        callback(&event);
    }

    fn handle_release(&self) {
        let terminal = {
            let state = self.state.borrow();
            match (&state.target, state.session.active) {
                (Some(target), true) => {
                    // No move yet means nothing was cached; read the geometry once.
                    let rect = state
                        .session
                        .bounds
                        .unwrap_or_else(|| target.bounding_rect());
                    let event =
                        DragEvent::from_sample(state.session.terminal(), rect, target.clone(), true);
                    Some((event, Rc::clone(&state.options.callback)))
                }
                _ => None,
            }
        };

        if let Some((event, callback)) = terminal {
            debug!(
                x_distance = event.x_distance,
                y_distance = event.y_distance,
                "drag ended"
            );
            callback(&event);
        }
        self.teardown();
    }

    fn listen(&self) {
        // A press while already listening replaces the previous subscriptions.
        let previous = std::mem::take(&mut self.state.borrow_mut().subscriptions);
        drop(previous);

        let subscriptions: Vec<_> = Channel::ALL
            .into_iter()
            .map(|channel| {
                let handler = if channel.is_release() {
                    Rc::clone(&self.release_handler)
                } else {
                    Rc::clone(&self.move_handler)
                };
                self.source.subscribe(channel, handler)
            })
            .collect();
        self.state.borrow_mut().subscriptions = subscriptions;
    }

    fn teardown(&self) {
        let subscriptions = {
            let mut state = self.state.borrow_mut();
            state.session.end();
            std::mem::take(&mut state.subscriptions)
        };
        if !subscriptions.is_empty() {
            debug!(count = subscriptions.len(), "detaching global listeners");
        }
        drop(subscriptions);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::geometry::{Point, Rect};

    #[derive(Debug, Clone)]
    struct FakeTarget {
        rect: Rc<Cell<Rect>>,
        queries: Rc<Cell<usize>>,
    }

    impl FakeTarget {
        fn new(rect: Rect) -> Self {
            Self {
                rect: Rc::new(Cell::new(rect)),
                queries: Rc::new(Cell::new(0)),
            }
        }
    }

    impl PartialEq for FakeTarget {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.rect, &other.rect)
        }
    }

    impl DragTarget for FakeTarget {
        fn bounding_rect(&self) -> Rect {
            self.queries.set(self.queries.get() + 1);
            self.rect.get()
        }
    }

    type Listeners = Rc<RefCell<Vec<(usize, Channel, InputHandler)>>>;

    #[derive(Clone, Default)]
    struct FakeSource {
        listeners: Listeners,
        next_id: Rc<Cell<usize>>,
    }

    struct FakeSubscription {
        id: usize,
        listeners: Weak<RefCell<Vec<(usize, Channel, InputHandler)>>>,
    }

    impl Drop for FakeSubscription {
        fn drop(&mut self) {
            if let Some(listeners) = self.listeners.upgrade() {
                listeners.borrow_mut().retain(|(id, _, _)| *id != self.id);
            }
        }
    }

    impl InputSource for FakeSource {
        type Subscription = FakeSubscription;

        fn subscribe(&self, channel: Channel, handler: InputHandler) -> FakeSubscription {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.listeners.borrow_mut().push((id, channel, handler));
            FakeSubscription {
                id,
                listeners: Rc::downgrade(&self.listeners),
            }
        }
    }

    impl FakeSource {
        fn channels(&self) -> Vec<Channel> {
            self.listeners.borrow().iter().map(|(_, c, _)| *c).collect()
        }

        fn dispatch(&self, channel: Channel, input: &PointerInput) {
            let handlers: Vec<InputHandler> = self
                .listeners
                .borrow()
                .iter()
                .filter(|(_, c, _)| *c == channel)
                .map(|(_, _, h)| Rc::clone(h))
                .collect();
            for handler in handlers {
                handler(input);
            }
        }
    }

    type Events = Rc<RefCell<Vec<DragEvent<FakeTarget>>>>;
    type TestDetector = DragDetector<FakeTarget, FakeSource>;

    const ORIGIN_X: f64 = 100.0;
    const ORIGIN_Y: f64 = 50.0;

    fn recording_options(events: &Events) -> DragOptions<FakeTarget> {
        let events = Rc::clone(events);
        DragOptions::new(move |e: &DragEvent<FakeTarget>| events.borrow_mut().push(e.clone()))
    }

    fn setup(thresholds: Thresholds) -> (TestDetector, FakeSource, FakeTarget, Events) {
        let events: Events = Rc::default();
        let source = FakeSource::default();
        let target = FakeTarget::new(Rect::new(ORIGIN_X, ORIGIN_Y, 200.0, 100.0));
        let detector = DragDetector::new(
            recording_options(&events).with_thresholds(thresholds),
            source.clone(),
        );
        detector.register(target.clone());
        (detector, source, target, events)
    }

    /// Mouse sample at an element-relative position.
    fn at(x: f64, y: f64) -> PointerInput {
        PointerInput::mouse(ORIGIN_X + x, ORIGIN_Y + y)
    }

    #[test]
    fn test_admitted_press_starts_session_and_listens() {
        let (detector, source, _, events) = setup(Thresholds::default());

        detector.on_press(&at(10.0, 20.0));

        let session = detector.session();
        assert!(session.active);
        assert_eq!(session.start, Point::new(10.0, 20.0));
        assert_eq!(session.current, Point::new(10.0, 20.0));
        assert_eq!(source.channels(), Channel::ALL.to_vec());
        assert!(detector.is_listening());
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_threshold_gate_scenario() {
        let (detector, source, _, events) = setup(Thresholds::new(50.0, 50.0));

        detector.on_press(&at(60.0, 10.0));
        assert!(!detector.is_active());
        assert!(source.channels().is_empty());
        assert!(events.borrow().is_empty());

        detector.on_press(&at(40.0, 10.0));
        assert!(detector.is_active());
        assert_eq!(detector.session().start.x, 40.0);
        assert_eq!(source.channels().len(), 4);
    }

    #[test]
    fn test_rejected_on_y_axis() {
        let (detector, source, _, _) = setup(Thresholds::new(f64::INFINITY, 5.0));

        detector.on_press(&at(0.0, 6.0));

        assert!(!detector.is_active());
        assert!(source.channels().is_empty());
    }

    #[test]
    fn test_default_thresholds_admit_any_coordinate() {
        let (detector, _, _, _) = setup(Thresholds::default());

        detector.on_press(&at(-250.0, -40.0));
        assert!(detector.is_active());
        assert_eq!(detector.session().start, Point::new(-250.0, -40.0));

        detector.destroy();
        detector.on_press(&at(1e9, 1e9));
        assert!(detector.is_active());
    }

    #[test]
    fn test_moves_report_deltas_and_distances() {
        let (detector, source, target, events) = setup(Thresholds::default());

        detector.on_press(&at(10.0, 10.0));
        source.dispatch(Channel::MouseMove, &at(15.0, 12.0));
        source.dispatch(Channel::MouseMove, &at(15.0, 20.0));

        let events = events.borrow();
        assert_eq!(events.len(), 2);

        let second = &events[1];
        assert_eq!((second.x, second.y), (15.0, 20.0));
        assert_eq!(second.x_delta, 0.0);
        assert_eq!(second.y_delta, 8.0);
        assert_eq!(second.x_distance, 5.0);
        assert_eq!(second.y_distance, 10.0);
        assert!(!second.exit);
        assert_eq!(second.node, target);
        assert_eq!(second.rect, Rect::new(ORIGIN_X, ORIGIN_Y, 200.0, 100.0));
    }

    #[test]
    fn test_release_emits_single_swapped_terminal_event() {
        let (detector, source, _, events) = setup(Thresholds::default());

        detector.on_press(&at(10.0, 10.0));
        source.dispatch(Channel::MouseMove, &at(13.0, 17.0));
        source.dispatch(Channel::MouseUp, &at(99.0, 99.0));

        let events = events.borrow();
        assert_eq!(events.len(), 2);
        let last = &events[1];
        assert!(last.exit);
        assert_eq!((last.x, last.y), (13.0, 17.0));
        assert_eq!(last.x_delta, 7.0);
        assert_eq!(last.y_delta, 3.0);
        assert_eq!((last.x_distance, last.y_distance), (3.0, 7.0));

        assert!(!detector.is_active());
        assert!(!detector.is_listening());
        assert!(source.channels().is_empty());
        assert!(detector.session().bounds.is_none());
    }

    #[test]
    fn test_release_without_move_reads_geometry_once() {
        let (detector, source, target, events) = setup(Thresholds::default());

        detector.on_press(&at(4.0, 4.0));
        let before = target.queries.get();
        source.dispatch(Channel::TouchEnd, &PointerInput::Touch { touches: vec![] });

        assert_eq!(target.queries.get(), before + 1);
        let events = events.borrow();
        assert_eq!(events.len(), 1);
        assert!(events[0].exit);
        assert_eq!((events[0].x_delta, events[0].y_delta), (0.0, 0.0));
        assert_eq!((events[0].x, events[0].y), (4.0, 4.0));
    }

    #[test]
    fn test_release_while_inactive_only_cleans_up() {
        let (detector, source, _, events) = setup(Thresholds::default());

        detector.on_release();
        detector.on_release();

        assert!(events.borrow().is_empty());
        assert!(!detector.is_active());
        assert!(source.channels().is_empty());
    }

    #[test]
    fn test_destroy_is_idempotent_and_silent() {
        let (detector, source, _, events) = setup(Thresholds::default());

        detector.destroy();
        assert!(!detector.is_active());

        detector.on_press(&at(1.0, 1.0));
        source.dispatch(Channel::MouseMove, &at(2.0, 2.0));
        detector.destroy();
        let once = (detector.session(), source.channels());
        detector.destroy();

        assert_eq!((detector.session(), source.channels()), once);
        assert!(!detector.is_active());
        assert!(source.channels().is_empty());
        assert_eq!(events.borrow().len(), 1);
        assert!(events.borrow().iter().all(|e| !e.exit));
    }

    #[test]
    fn test_set_options_mid_gesture_keeps_session() {
        let (detector, source, _, events) = setup(Thresholds::default());
        detector.on_press(&at(30.0, 30.0));

        let late: Events = Rc::default();
        let replacement = recording_options(&late)
            .with_x_threshold(1.0)
            .with_y_threshold(2.0);
        detector.set_options(replacement.clone());

        assert!(detector.is_active());
        assert_eq!(detector.session().start, Point::new(30.0, 30.0));
        assert_eq!(detector.options(), replacement);
        assert_eq!(detector.thresholds(), Thresholds::new(1.0, 2.0));

        source.dispatch(Channel::MouseMove, &at(31.0, 30.0));
        assert!(events.borrow().is_empty());
        assert_eq!(late.borrow().len(), 1);
        assert_eq!(late.borrow()[0].x_distance, 1.0);
    }

    #[test]
    fn test_moves_ignored_without_session_or_target() {
        let (detector, _, _, events) = setup(Thresholds::default());
        detector.on_move(&at(5.0, 5.0));
        assert!(events.borrow().is_empty());

        let events: Events = Rc::default();
        let source = FakeSource::default();
        let unbound: TestDetector = DragDetector::new(recording_options(&events), source.clone());
        unbound.on_press(&at(1.0, 1.0));
        unbound.on_move(&at(2.0, 2.0));

        assert!(!unbound.is_active());
        assert!(source.channels().is_empty());
        assert!(events.borrow().is_empty());
        assert!(unbound.target().is_none());
    }

    #[test]
    fn test_bounds_cached_for_the_session() {
        let (detector, source, target, events) = setup(Thresholds::default());

        detector.on_press(&at(0.0, 0.0));
        source.dispatch(Channel::MouseMove, &at(1.0, 1.0));
        let queries = target.queries.get();

        target.rect.set(Rect::new(0.0, 0.0, 10.0, 10.0));
        source.dispatch(Channel::MouseMove, &at(2.0, 2.0));
        source.dispatch(Channel::MouseUp, &at(2.0, 2.0));

        assert_eq!(target.queries.get(), queries);
        let events = events.borrow();
        assert!(events.iter().all(|e| e.rect.left == ORIGIN_X));
        assert_eq!((events[1].x, events[1].y), (2.0, 2.0));
    }

    #[test]
    fn test_fresh_press_resets_residual_deltas() {
        let (detector, source, _, _) = setup(Thresholds::new(50.0, 50.0));

        detector.on_press(&at(10.0, 10.0));
        source.dispatch(Channel::MouseMove, &at(20.0, 25.0));
        source.dispatch(Channel::MouseUp, &at(20.0, 25.0));

        detector.on_press(&at(80.0, 80.0));
        let session = detector.session();
        assert!(!session.active);
        assert_eq!(session.current, Point::ORIGIN);
        assert_eq!(session.last_delta, (0.0, 0.0));
    }

    #[test]
    fn test_touch_drives_the_same_session() {
        let (detector, source, _, events) = setup(Thresholds::default());

        let on_touch_start = Rc::clone(&detector.bindings().on_touch_start);
        on_touch_start(&PointerInput::touch(ORIGIN_X + 5.0, ORIGIN_Y + 5.0));
        source.dispatch(
            Channel::TouchMove,
            &PointerInput::Touch {
                touches: vec![
                    Point::new(ORIGIN_X + 9.0, ORIGIN_Y + 6.0),
                    Point::new(0.0, 0.0),
                ],
            },
        );
        source.dispatch(Channel::MouseMove, &at(10.0, 6.0));
        source.dispatch(Channel::TouchEnd, &PointerInput::Touch { touches: vec![] });

        let events = events.borrow();
        assert_eq!(events.len(), 3);
        assert_eq!((events[0].x_delta, events[0].y_delta), (4.0, 1.0));
        assert_eq!((events[1].x_delta, events[1].y_delta), (1.0, 0.0));
        assert!(events[2].exit);
        assert!(source.channels().is_empty());
    }

    #[test]
    fn test_repeated_press_does_not_stack_listeners() {
        let (detector, source, _, _) = setup(Thresholds::default());

        detector.on_press(&at(1.0, 1.0));
        detector.on_press(&at(2.0, 2.0));

        assert_eq!(source.channels().len(), 4);
        assert_eq!(detector.session().start, Point::new(2.0, 2.0));
    }

    #[test]
    fn test_callback_may_reenter_detector() {
        let events: Events = Rc::default();
        let source = FakeSource::default();
        let slot: Rc<RefCell<Option<TestDetector>>> = Rc::default();

        let detector = DragDetector::new(recording_options(&events), source.clone());
        detector.register(FakeTarget::new(Rect::new(ORIGIN_X, ORIGIN_Y, 50.0, 50.0)));
        *slot.borrow_mut() = Some(detector.clone());

        let reentrant = {
            let slot = Rc::clone(&slot);
            DragOptions::new(move |_: &DragEvent<FakeTarget>| {
                if let Some(detector) = slot.borrow().as_ref() {
                    detector.set_options(DragOptions::new(|_| {}));
                    detector.destroy();
                }
            })
        };
        detector.set_options(reentrant);

        detector.on_press(&at(1.0, 1.0));
        source.dispatch(Channel::MouseMove, &at(2.0, 2.0));

        assert!(!detector.is_active());
        assert!(source.channels().is_empty());
        slot.borrow_mut().take();
    }

    #[test]
    fn test_bindings_are_stable() {
        let (detector, _, _, _) = setup(Thresholds::default());

        let first = detector.bindings().clone();
        let second = detector.bindings();
        assert!(Rc::ptr_eq(&first.on_mouse_down, &second.on_mouse_down));
        assert!(Rc::ptr_eq(&first.on_mouse_down, &first.on_touch_start));
        assert!(Rc::ptr_eq(&first.on_register, &second.on_register));

        let other = FakeTarget::new(Rect::new(0.0, 0.0, 1.0, 1.0));
        (first.on_register)(other.clone());
        assert_eq!(detector.target(), Some(other));
    }

    #[test]
    fn test_dropping_detector_detaches_listeners() {
        let (detector, source, _, _) = setup(Thresholds::default());
        detector.on_press(&at(1.0, 1.0));
        let bindings = detector.bindings().clone();
        assert_eq!(source.channels().len(), 4);

        drop(detector);

        assert!(source.channels().is_empty());
        // Handlers outliving the detector are inert.
        (bindings.on_mouse_down)(&at(1.0, 1.0));
        assert!(source.channels().is_empty());
    }

    #[test]
    fn test_detectors_are_isolated() {
        let (first, first_source, _, first_events) = setup(Thresholds::default());
        let (second, second_source, _, second_events) = setup(Thresholds::default());

        first.on_press(&at(1.0, 1.0));
        first_source.dispatch(Channel::MouseMove, &at(3.0, 1.0));

        assert!(!second.is_active());
        assert!(second_source.channels().is_empty());
        assert!(second_events.borrow().is_empty());
        assert_eq!(first_events.borrow().len(), 1);
    }
}
