//! Handles to DOM observers and event listeners.

/// A live observer or listener that must be released on teardown.
///
/// `unsubscribe` may be called more than once; only the first call has an
/// effect.
pub trait Subscription {
    fn unsubscribe(&mut self);
}

/// Owns a set of subscriptions and releases them together
#[derive(Default)]
pub struct SubscriptionSet {
    active: Vec<Box<dyn Subscription>>,
}

impl SubscriptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, subscription: Box<dyn Subscription>) {
        self.active.push(subscription);
    }

    /// Unsubscribe and drop every held subscription
    pub fn release_all(&mut self) {
        for mut sub in self.active.drain(..) {
            sub.unsubscribe();
        }
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

impl Drop for SubscriptionSet {
    fn drop(&mut self) {
        self.release_all();
    }
}

impl std::fmt::Debug for SubscriptionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriptionSet")
            .field("active", &self.active.len())
            .finish()
    }
}
