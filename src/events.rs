//! Typed publish/subscribe primitive for intra-graph notifications.
//!
//! Single-threaded by design: the whole editor runs on the UI dispatch
//! thread, so handlers are plain `FnMut` closures and `emit` runs them
//! synchronously, in subscription order, before returning.

use std::cell::RefCell;

/// Token returned by [`EventChannel::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Handler<E> = Box<dyn FnMut(&E)>;

/// A minimal typed event channel.
///
/// Handlers live behind a `RefCell` so emitting only needs `&self`;
/// subscribing or unsubscribing from inside a running handler is not
/// supported and will panic.
pub struct EventChannel<E> {
    handlers: RefCell<Vec<(Subscription, Handler<E>)>>,
    next_token: std::cell::Cell<u64>,
}

impl<E> Default for EventChannel<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EventChannel<E> {
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
            next_token: std::cell::Cell::new(0),
        }
    }

    /// Register a handler; it will be called for every subsequent emit,
    /// after all handlers subscribed before it.
    pub fn subscribe(&self, handler: impl FnMut(&E) + 'static) -> Subscription {
        let token = Subscription(self.next_token.get());
        self.next_token.set(token.0 + 1);
        self.handlers.borrow_mut().push((token, Box::new(handler)));
        token
    }

    /// Remove a previously registered handler. No-op if already removed.
    pub fn unsubscribe(&self, token: Subscription) {
        self.handlers.borrow_mut().retain(|(t, _)| *t != token);
    }

    /// Synchronously invoke every handler, in subscription order.
    pub fn emit(&self, event: &E) {
        for (_, handler) in self.handlers.borrow_mut().iter_mut() {
            handler(event);
        }
    }

    /// Drop all handlers.
    pub fn clear(&self) {
        self.handlers.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.handlers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.borrow().is_empty()
    }
}
