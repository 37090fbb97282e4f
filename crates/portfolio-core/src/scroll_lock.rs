//! Page-level scroll lock shared by the modal and the lightbox.
//!
//! Each holder claims the lock at most once; the page stays locked while any
//! holder remains. Acquiring twice or releasing an unheld claim is a no-op.

/// Components that may lock page scrolling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockHolder {
    Modal,
    Lightbox,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollLock {
    holders: Vec<LockHolder>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the lock. Returns true if the page went from unlocked to locked.
    pub fn acquire(&mut self, holder: LockHolder) -> bool {
        let was_locked = self.is_locked();
        if !self.holds(holder) {
            self.holders.push(holder);
        }
        !was_locked
    }

    /// Drop a claim. Returns true if the page went from locked to unlocked.
    pub fn release(&mut self, holder: LockHolder) -> bool {
        let was_locked = self.is_locked();
        self.holders.retain(|h| *h != holder);
        was_locked && !self.is_locked()
    }

    pub fn holds(&self, holder: LockHolder) -> bool {
        self.holders.contains(&holder)
    }

    pub fn is_locked(&self) -> bool {
        !self.holders.is_empty()
    }

    /// Value for the body's `overflow` style property
    pub fn overflow(&self) -> &'static str {
        if self.is_locked() {
            "hidden"
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_is_idempotent_per_holder() {
        let mut lock = ScrollLock::new();
        assert!(lock.acquire(LockHolder::Modal));
        assert!(!lock.acquire(LockHolder::Modal));

        assert!(lock.release(LockHolder::Modal));
        assert!(!lock.is_locked());
        assert_eq!(lock.overflow(), "");
    }

    #[test]
    fn stays_locked_until_last_holder_releases() {
        let mut lock = ScrollLock::new();
        lock.acquire(LockHolder::Modal);
        lock.acquire(LockHolder::Lightbox);

        assert!(!lock.release(LockHolder::Modal));
        assert!(lock.is_locked());
        assert_eq!(lock.overflow(), "hidden");

        assert!(lock.release(LockHolder::Lightbox));
        assert!(!lock.is_locked());
    }

    #[test]
    fn releasing_unheld_claim_is_noop() {
        let mut lock = ScrollLock::new();
        lock.acquire(LockHolder::Lightbox);
        assert!(!lock.release(LockHolder::Modal));
        assert!(lock.holds(LockHolder::Lightbox));
    }
}
