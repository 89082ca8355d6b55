//! Frame and resize subscriptions.
//!
//! The host owns a [`SignalHub`] and only delivers a signal kind while the
//! hub has listeners for it. Components hold the [`Subscription`] handles
//! they were given; dropping out is done by handing the handle back.

use std::collections::BTreeMap;

/// The two signal sources a background animation listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SignalKind {
    /// Once per display refresh.
    Frame,
    /// Whenever the viewport changes size.
    Resize,
}

/// Handle for one live registration with a [`SignalHub`].
///
/// Not `Clone`: cancelling consumes the handle, so a registration can only
/// be cancelled once.
#[derive(Debug, PartialEq, Eq)]
pub struct Subscription {
    id: u64,
    kind: SignalKind,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Host-side registry of frame and resize listeners.
#[derive(Debug, Default)]
pub struct SignalHub {
    next_id: u64,
    live: BTreeMap<u64, SignalKind>,
}

impl SignalHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for `kind`.
    pub fn subscribe(&mut self, kind: SignalKind) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.live.insert(id, kind);
        Subscription { id, kind }
    }

    /// Cancel a registration. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.live.remove(&subscription.id).is_some()
    }

    /// Whether `subscription` is still registered with this hub.
    pub fn is_live(&self, subscription: &Subscription) -> bool {
        self.live.get(&subscription.id) == Some(&subscription.kind)
    }

    /// Whether anyone is listening for `kind`.
    pub fn has_listeners(&self, kind: SignalKind) -> bool {
        self.listeners(kind) > 0
    }

    /// Number of live registrations for `kind`.
    pub fn listeners(&self, kind: SignalKind) -> usize {
        self.live.values().filter(|k| **k == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_and_cancel() {
        let mut hub = SignalHub::new();
        let frame = hub.subscribe(SignalKind::Frame);
        let resize = hub.subscribe(SignalKind::Resize);
        assert_ne!(frame.id(), resize.id());
        assert!(hub.is_live(&frame));
        assert!(hub.has_listeners(SignalKind::Frame));
        assert_eq!(hub.listeners(SignalKind::Resize), 1);

        assert!(hub.unsubscribe(frame));
        assert!(!hub.has_listeners(SignalKind::Frame));
        assert!(hub.is_live(&resize));
    }

    #[test]
    fn test_handles_are_hub_specific() {
        let mut hub = SignalHub::new();
        let mut other = SignalHub::new();
        let sub = hub.subscribe(SignalKind::Frame);
        let _ = other.subscribe(SignalKind::Resize);
        // Same id, different kind: not live in the other hub.
        assert!(!other.is_live(&sub));
        assert!(!other.unsubscribe(Subscription {
            id: 7,
            kind: SignalKind::Frame
        }));
    }
}
