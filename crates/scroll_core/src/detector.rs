//! Lifecycle-bound scroll tracking for a host view.

use std::cell::Cell;
use std::rc::Rc;

use log::{debug, trace};

use crate::{ScrollError, ScrollListener, ScrollSource, ScrollState};

type ChangeCallback = Rc<dyn Fn(ScrollState)>;

/// Turns a stream of scroll notifications into a shrink signal.
///
/// The detector is created detached. [`attach`](Self::attach) subscribes to
/// the source and [`detach`](Self::detach) releases the subscription; the
/// subscription is also released when the detector is dropped, so tearing
/// down the host view on any path never leaves a listener behind.
pub struct ScrollShrinkDetector<S: ScrollSource> {
    source: S,
    state: Rc<Cell<ScrollState>>,
    on_change: Option<ChangeCallback>,
    subscription: Option<S::Subscription>,
}

impl<S: ScrollSource> ScrollShrinkDetector<S> {
    /// Create a detached detector over `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: Rc::new(Cell::new(ScrollState::default())),
            on_change: None,
            subscription: None,
        }
    }

    /// Create a detached detector that reports every state update to `on_change`.
    pub fn with_callback(source: S, on_change: impl Fn(ScrollState) + 'static) -> Self {
        Self {
            source,
            state: Rc::new(Cell::new(ScrollState::default())),
            on_change: Some(Rc::new(on_change)),
            subscription: None,
        }
    }

    /// Subscribe to the scroll source.
    ///
    /// Does nothing if the detector is already attached.
    pub fn attach(&mut self) -> Result<(), ScrollError> {
        if self.subscription.is_some() {
            debug!("scroll detector already attached");
            return Ok(());
        }

        let state = self.state.clone();
        let on_change = self.on_change.clone();
        let listener: ScrollListener =
            Box::new(move |offset| apply(&state, on_change.as_deref(), offset));

        self.subscription = Some(self.source.subscribe(listener)?);
        debug!("scroll detector attached");
        Ok(())
    }

    /// Release the subscription made by [`attach`](Self::attach), if any.
    pub fn detach(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.source.unsubscribe(subscription);
            debug!("scroll detector detached");
        }
    }

    /// Handle one scroll notification carrying the raw vertical offset.
    pub fn on_scroll_notification(&self, offset: i32) {
        apply(&self.state, self.on_change.as_deref(), offset);
    }

    /// Current scroll state.
    pub fn state(&self) -> ScrollState {
        self.state.get()
    }

    pub fn is_shrunk(&self) -> bool {
        self.state.get().is_shrunk
    }

    pub fn last_offset(&self) -> u32 {
        self.state.get().last_offset
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }
}

impl<S: ScrollSource> Drop for ScrollShrinkDetector<S> {
    fn drop(&mut self) {
        self.detach();
    }
}

fn apply(state: &Cell<ScrollState>, on_change: Option<&dyn Fn(ScrollState)>, offset: i32) {
    let next = state.get().observe(offset);
    state.set(next);
    trace!(
        "scroll offset {offset} -> last_offset={} shrunk={}",
        next.last_offset,
        next.is_shrunk
    );

    if let Some(on_change) = on_change {
        on_change(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ManualScrollSource;
    use proptest::prelude::*;
    use std::cell::RefCell;

    /// Source whose window never exists, like running outside a browser.
    struct Unavailable;

    impl ScrollSource for Unavailable {
        type Subscription = ();

        fn subscribe(&self, _listener: ScrollListener) -> Result<(), ScrollError> {
            Err(ScrollError::SourceUnavailable("no window".to_string()))
        }

        fn unsubscribe(&self, _subscription: ()) {}
    }

    fn attached() -> (ManualScrollSource, ScrollShrinkDetector<ManualScrollSource>) {
        let source = ManualScrollSource::new();
        let mut detector = ScrollShrinkDetector::new(source.clone());
        detector.attach().unwrap();
        (source, detector)
    }

    #[test]
    fn test_starts_detached_with_default_state() {
        let detector = ScrollShrinkDetector::new(ManualScrollSource::new());
        assert!(!detector.is_attached());
        assert_eq!(detector.state(), ScrollState::default());
    }

    #[test]
    fn test_scenarios_from_scroll_notifications() {
        let (source, detector) = attached();

        source.emit(50);
        assert_eq!(detector.last_offset(), 50);
        assert!(detector.is_shrunk());

        source.emit(30);
        assert_eq!(detector.last_offset(), 30);
        assert!(!detector.is_shrunk());

        source.emit(50);
        source.emit(50);
        assert_eq!(detector.last_offset(), 50);
        assert!(!detector.is_shrunk());

        source.emit(10);
        source.emit(-5);
        assert_eq!(detector.last_offset(), 0);
        assert!(!detector.is_shrunk());
    }

    #[test]
    fn test_direct_notification_without_attach() {
        let detector = ScrollShrinkDetector::new(ManualScrollSource::new());
        detector.on_scroll_notification(120);
        assert_eq!(
            detector.state(),
            ScrollState {
                last_offset: 120,
                is_shrunk: true
            }
        );
    }

    #[test]
    fn test_callback_sees_every_update() {
        let source = ManualScrollSource::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut detector =
            ScrollShrinkDetector::with_callback(source.clone(), move |s| sink.borrow_mut().push(s));
        detector.attach().unwrap();

        source.emit(20);
        source.emit(20);
        source.emit(5);

        let shrunk: Vec<bool> = seen.borrow().iter().map(|s| s.is_shrunk).collect();
        assert_eq!(shrunk, vec![true, false, false]);
        assert_eq!(seen.borrow().last().map(|s| s.last_offset), Some(5));
    }

    #[test]
    fn test_attach_twice_keeps_one_subscription() {
        let (source, mut detector) = attached();
        detector.attach().unwrap();
        assert_eq!(source.listener_count(), 1);
    }

    #[test]
    fn test_detach_stops_updates() {
        let (source, mut detector) = attached();
        source.emit(40);

        detector.detach();
        assert!(!detector.is_attached());
        assert_eq!(source.listener_count(), 0);

        source.emit(500);
        assert_eq!(detector.last_offset(), 40);
        assert!(detector.is_shrunk());
    }

    #[test]
    fn test_detach_twice_is_noop() {
        let (source, mut detector) = attached();
        source.emit(75);
        let before = detector.state();

        detector.detach();
        detector.detach();

        assert_eq!(detector.state(), before);
        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn test_detach_without_attach() {
        let source = ManualScrollSource::new();
        let mut detector = ScrollShrinkDetector::new(source.clone());
        detector.detach();
        assert_eq!(source.listener_count(), 0);
        assert_eq!(detector.state(), ScrollState::default());
    }

    #[test]
    fn test_reattach_continues_from_last_offset() {
        let (source, mut detector) = attached();
        source.emit(60);
        detector.detach();

        detector.attach().unwrap();
        source.emit(55);
        assert_eq!(detector.last_offset(), 55);
        assert!(!detector.is_shrunk());
    }

    #[test]
    fn test_drop_releases_subscription() {
        let source = ManualScrollSource::new();
        {
            let mut detector = ScrollShrinkDetector::new(source.clone());
            detector.attach().unwrap();
            assert_eq!(source.listener_count(), 1);
        }
        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn test_drop_releases_subscription_on_unwind() {
        let source = ManualScrollSource::new();
        let handle = source.clone();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let mut detector = ScrollShrinkDetector::new(handle);
            detector.attach().unwrap();
            panic!("view teardown failed");
        }));

        assert!(result.is_err());
        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn test_detach_from_inside_callback() {
        let source = ManualScrollSource::new();
        let slot: Rc<RefCell<Option<ScrollShrinkDetector<ManualScrollSource>>>> =
            Rc::new(RefCell::new(None));

        let owner = slot.clone();
        let mut detector = ScrollShrinkDetector::with_callback(source.clone(), move |_| {
            let taken = owner.borrow_mut().take();
            if let Some(mut detector) = taken {
                detector.detach();
            }
        });
        detector.attach().unwrap();
        *slot.borrow_mut() = Some(detector);

        source.emit(10);
        assert!(slot.borrow().is_none());
        assert_eq!(source.listener_count(), 0);

        source.emit(20);
        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn test_drop_from_inside_callback() {
        let source = ManualScrollSource::new();
        let slot: Rc<RefCell<Option<ScrollShrinkDetector<ManualScrollSource>>>> =
            Rc::new(RefCell::new(None));

        let owner = slot.clone();
        let mut detector = ScrollShrinkDetector::with_callback(source.clone(), move |state| {
            if state.is_shrunk {
                let taken = owner.borrow_mut().take();
                drop(taken);
            }
        });
        detector.attach().unwrap();
        *slot.borrow_mut() = Some(detector);

        source.emit(0);
        assert!(slot.borrow().is_some());

        source.emit(30);
        assert!(slot.borrow().is_none());
        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn test_attach_error_leaves_detector_detached() {
        let mut detector = ScrollShrinkDetector::new(Unavailable);
        let err = detector.attach().unwrap_err();

        assert_eq!(err, ScrollError::SourceUnavailable("no window".to_string()));
        assert!(!detector.is_attached());

        detector.on_scroll_notification(10);
        assert!(detector.is_shrunk());
    }

    proptest! {
        /// Property: a detector attached to a source ends in the same state
        /// as folding the emitted offsets through `ScrollState::observe`.
        #[test]
        fn attached_detector_matches_observe(
            offsets in prop::collection::vec(any::<i32>(), 0..64)
        ) {
            let (source, detector) = attached();
            let mut expected = ScrollState::new();
            for offset in offsets {
                source.emit(offset);
                expected = expected.observe(offset);
                prop_assert_eq!(detector.state(), expected);
            }
        }
    }
}
