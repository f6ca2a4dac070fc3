//! A single-threaded keyboard event source with scoped listeners

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;

/// Identifies a listener registered on a [`KeyboardBus`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<E> = Box<dyn FnMut(&E)>;

/// Fans key events out to registered listeners in registration order
///
/// Listeners may add or remove listeners (including themselves) while an
/// event is being delivered; those changes take effect once that event has
/// reached every listener. A listener removed mid-delivery is not called
/// again. An event emitted from inside a listener is queued and delivered to
/// all listeners after the current one.
pub struct KeyboardBus<E> {
    listeners: RefCell<Vec<(ListenerId, Listener<E>)>>,
    next_id: Cell<u64>,
    emitting: Cell<bool>,
    queued_events: RefCell<VecDeque<E>>,
    pending_additions: RefCell<Vec<(ListenerId, Listener<E>)>>,
    pending_removals: RefCell<Vec<ListenerId>>,
}

impl<E> KeyboardBus<E> {
    pub fn new() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
            emitting: Cell::new(false),
            queued_events: RefCell::new(VecDeque::new()),
            pending_additions: RefCell::new(Vec::new()),
            pending_removals: RefCell::new(Vec::new()),
        }
    }

    fn is_emitting(&self) -> bool {
        self.emitting.get()
    }

    pub fn add_listener(&self, listener: impl FnMut(&E) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let entry = (id, Box::new(listener) as Listener<E>);
        if self.is_emitting() {
            self.pending_additions.borrow_mut().push(entry);
        } else {
            self.listeners.borrow_mut().push(entry);
        }
        id
    }

    pub fn remove_listener(&self, id: ListenerId) {
        if self.is_emitting() {
            self.pending_additions
                .borrow_mut()
                .retain(|(pending, _)| *pending != id);
            self.pending_removals.borrow_mut().push(id);
        } else {
            self.listeners.borrow_mut().retain(|(existing, _)| *existing != id);
        }
    }

    /// Register a listener that is removed when the returned guard drops
    pub fn subscribe(&self, listener: impl FnMut(&E) + 'static) -> Subscription<'_, E> {
        Subscription {
            bus: self,
            id: Some(self.add_listener(listener)),
        }
    }

    /// Deliver `event` to every listener
    ///
    /// Called from inside a listener, the event is queued and delivered once
    /// the event in progress has reached every listener.
    pub fn emit(&self, event: &E)
    where
        E: Clone,
    {
        if self.is_emitting() {
            self.queued_events.borrow_mut().push_back(event.clone());
            return;
        }

        // Listeners run outside the borrow so they can call back into the bus
        let mut listeners = self.listeners.take();
        self.emitting.set(true);

        self.deliver(&mut listeners, event);
        while let Some(queued) = self.next_queued_event() {
            self.deliver(&mut listeners, &queued);
        }

        self.emitting.set(false);
        *self.listeners.borrow_mut() = listeners;
    }

    fn next_queued_event(&self) -> Option<E> {
        self.queued_events.borrow_mut().pop_front()
    }

    fn deliver(&self, listeners: &mut Vec<(ListenerId, Listener<E>)>, event: &E) {
        for (id, listener) in listeners.iter_mut() {
            if self.pending_removals.borrow().contains(id) {
                continue;
            }
            listener(event);
        }

        let removed = self.pending_removals.take();
        listeners.retain(|(id, _)| !removed.contains(id));
        listeners.append(&mut self.pending_additions.borrow_mut());
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len() + self.pending_additions.borrow().len()
    }
}

impl<E> Default for KeyboardBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for KeyboardBus<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyboardBus")
            .field("listeners", &self.listener_count())
            .field("emitting", &self.is_emitting())
            .finish()
    }
}

/// Keeps a listener registered for as long as it is alive
#[must_use = "dropping a Subscription removes its listener immediately"]
pub struct Subscription<'a, E> {
    bus: &'a KeyboardBus<E>,
    id: Option<ListenerId>,
}

impl<E> Subscription<'_, E> {
    pub fn id(&self) -> Option<ListenerId> {
        self.id
    }

    /// Remove the listener now
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(id) = self.id.take() {
            self.bus.remove_listener(id);
        }
    }
}

impl<E> Drop for Subscription<'_, E> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<E> fmt::Debug for Subscription<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
