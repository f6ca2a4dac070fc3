//! Registry of accelerator patterns and the callbacks they trigger

use std::fmt;

use crate::accelerator::{key_match, InvalidAccelerator, KeyEvent, PlatformDetector};

use super::bus::{KeyboardBus, Subscription};

type Callback<E> = Box<dyn FnMut(&E)>;

/// Ordered set of `accelerator → callback` registrations
///
/// Patterns are kept as written and matched with [`key_match`] on every
/// event, so the platform is asked afresh each time.
pub struct Shortcuts<E> {
    entries: Vec<(String, Callback<E>)>,
    platform: Box<dyn PlatformDetector>,
}

impl<E: KeyEvent> Shortcuts<E> {
    pub fn new(platform: impl PlatformDetector + 'static) -> Self {
        Self {
            entries: Vec::new(),
            platform: Box::new(platform),
        }
    }

    /// Register a callback for `pattern`
    ///
    /// Registering a pattern that is already present replaces its callback
    /// and keeps its position.
    pub fn register(
        &mut self,
        pattern: impl Into<String>,
        callback: impl FnMut(&E) + 'static,
    ) -> &mut Self {
        let pattern = pattern.into();
        let callback: Callback<E> = Box::new(callback);

        match self.entries.iter_mut().find(|(existing, _)| *existing == pattern) {
            Some(entry) => entry.1 = callback,
            None => self.entries.push((pattern, callback)),
        }
        self
    }

    /// Remove a pattern. Returns whether it was registered.
    pub fn unregister(&mut self, pattern: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(existing, _)| existing != pattern);
        self.entries.len() != before
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(pattern, _)| pattern.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The registered patterns `event` satisfies, in registration order
    pub fn matching(&self, event: &E) -> Result<Vec<&str>, InvalidAccelerator> {
        let mut matched = Vec::new();
        for (pattern, _) in &self.entries {
            if key_match(event, pattern, self.platform.as_ref())? {
                matched.push(pattern.as_str());
            }
        }
        Ok(matched)
    }

    /// Invoke the callback of every pattern `event` satisfies
    ///
    /// Every pattern is checked before any callback runs, so an invalid
    /// pattern fails the whole dispatch without side effects. Returns the
    /// number of callbacks invoked.
    pub fn dispatch(&mut self, event: &E) -> Result<usize, InvalidAccelerator> {
        let mut hits = Vec::new();
        for (idx, (pattern, _)) in self.entries.iter().enumerate() {
            if key_match(event, pattern, self.platform.as_ref())? {
                hits.push(idx);
            }
        }

        for &idx in &hits {
            let (pattern, callback) = &mut self.entries[idx];
            tracing::trace!(pattern = %pattern, "shortcut fired");
            callback(event);
        }
        Ok(hits.len())
    }
}

impl<E: KeyEvent + 'static> Shortcuts<E> {
    /// Attach to `bus` until the returned guard drops
    ///
    /// An invalid pattern cannot be reported back through the bus, so it is
    /// logged and the event is skipped.
    pub fn subscribe(mut self, bus: &KeyboardBus<E>) -> Subscription<'_, E> {
        bus.subscribe(move |event: &E| {
            if let Err(e) = self.dispatch(event) {
                tracing::warn!("Shortcut dispatch failed: {}", e);
            }
        })
    }
}

impl<E> fmt::Debug for Shortcuts<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shortcuts")
            .field(
                "patterns",
                &self.entries.iter().map(|(p, _)| p).collect::<Vec<_>>(),
            )
            .finish()
    }
}
