//! The seam between the detector and whatever emits scroll notifications.

use std::cell::RefCell;
use std::rc::Rc;

use crate::ScrollError;

/// Callback receiving the raw vertical offset of each scroll notification.
pub type ScrollListener = Box<dyn FnMut(i32)>;

/// A source of viewport scroll-position notifications.
///
/// Implementations hand out a subscription token from [`subscribe`] that
/// owns the registration. Passing it back to [`unsubscribe`] guarantees the
/// listener is never called again.
///
/// [`subscribe`]: ScrollSource::subscribe
/// [`unsubscribe`]: ScrollSource::unsubscribe
pub trait ScrollSource {
    /// Token representing one live registration.
    type Subscription;

    /// Register a listener for scroll notifications.
    fn subscribe(&self, listener: ScrollListener) -> Result<Self::Subscription, ScrollError>;

    /// Remove a registration made by [`ScrollSource::subscribe`].
    fn unsubscribe(&self, subscription: Self::Subscription);
}

/// In-memory scroll source driven by explicit [`emit`](Self::emit) calls.
///
/// Clones share the same listener registry, so a host can keep one handle
/// to emit offsets while a detector owns another.
#[derive(Clone, Default)]
pub struct ManualScrollSource {
    registry: Rc<RefCell<Registry>>,
}

type SharedListener = Rc<RefCell<ScrollListener>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, SharedListener)>,
}

impl Registry {
    fn contains(&self, id: u64) -> bool {
        self.listeners.iter().any(|(live, _)| *live == id)
    }
}

/// Subscription token handed out by [`ManualScrollSource`].
#[derive(Debug, PartialEq, Eq)]
pub struct ManualSubscription {
    id: u64,
}

impl ManualScrollSource {
    /// Create a source with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a scroll notification to every listener, in subscription order.
    ///
    /// Listeners may subscribe or unsubscribe from inside the callback. A
    /// listener removed during dispatch is skipped; one added during dispatch
    /// first hears the next notification. A listener must not emit on the
    /// source that is currently calling it.
    pub fn emit(&self, offset: i32) {
        let snapshot: Vec<(u64, SharedListener)> = self.registry.borrow().listeners.clone();

        for (id, listener) in snapshot {
            if !self.registry.borrow().contains(id) {
                continue;
            }
            (*listener.borrow_mut())(offset);
        }
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

impl ScrollSource for ManualScrollSource {
    type Subscription = ManualSubscription;

    fn subscribe(&self, listener: ScrollListener) -> Result<ManualSubscription, ScrollError> {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Rc::new(RefCell::new(listener))));
        Ok(ManualSubscription { id })
    }

    fn unsubscribe(&self, subscription: ManualSubscription) {
        self.registry
            .borrow_mut()
            .listeners
            .retain(|(id, _)| *id != subscription.id);
    }
}
