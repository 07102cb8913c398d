//! The payload-less change signal and its scoped subscriptions.
//!
//! Observers register a callback and re-read state when it fires; the
//! signal itself carries nothing. Delivery is synchronous and
//! fire-and-forget, in subscription order, with no queuing, no retry,
//! and no delivery to observers that are not currently subscribed --
//! they simply read current state at their next explicit query.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A registered observer callback.
type Callback = Rc<RefCell<dyn FnMut()>>;

/// Registry shared between the signal and its subscription guards.
#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<(u64, Callback)>,
}

// ---------------------------------------------------------------------------
// ChangeSignal
// ---------------------------------------------------------------------------

/// Broadcast signal notifying observers that persisted state changed.
///
/// Cloning the signal clones a handle to the same subscriber registry.
#[derive(Clone, Default)]
pub struct ChangeSignal {
    registry: Rc<RefCell<Registry>>,
}

impl ChangeSignal {
    /// Create a signal with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` to run on every emission.
    ///
    /// The returned [`Subscription`] unregisters the callback when
    /// dropped; keep it alive for as long as the observer should stay
    /// subscribed.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl FnMut() + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id = id.saturating_add(1);
        registry.entries.push((id, Rc::new(RefCell::new(callback))));
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Invoke every subscribed callback, in subscription order.
    ///
    /// The subscriber list is snapshotted before the first call, so a
    /// callback may subscribe or unsubscribe without affecting this
    /// emission.
    pub fn emit(&self) {
        let callbacks: Vec<Callback> = self
            .registry
            .borrow()
            .entries
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in callbacks {
            let mut callback = callback.borrow_mut();
            (*callback)();
        }
    }

    /// Number of currently registered observers.
    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().entries.len()
    }
}

// ---------------------------------------------------------------------------
// Subscription
// ---------------------------------------------------------------------------

/// RAII handle for a registered observer; unregisters on drop.
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Explicitly unregister the callback. Equivalent to dropping the
    /// handle; provided for call sites where the intent should be
    /// spelled out.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().entries.retain(|(id, _)| *id != self.id);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
