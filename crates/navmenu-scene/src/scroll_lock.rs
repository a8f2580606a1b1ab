//! Background-scroll lock held by the mobile sheet.
//!
//! `ScrollLock` tracks whether it currently holds the lock, so acquiring twice
//! or releasing when not held are harmless. Dropping the lock releases it.

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

/// The page surface whose scrolling gets frozen.
pub trait ScrollLockTarget {
    fn set_scroll_locked(&mut self, locked: bool);
}

/// In-memory target whose state can be observed through clones.
#[derive(Debug, Clone, Default)]
pub struct ScrollLockFlag {
    locked: Rc<Cell<bool>>,
    changes: Rc<Cell<u32>>,
}

impl ScrollLockFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.locked.get()
    }

    /// Number of times the target's state actually flipped.
    pub fn change_count(&self) -> u32 {
        self.changes.get()
    }
}

impl ScrollLockTarget for ScrollLockFlag {
    fn set_scroll_locked(&mut self, locked: bool) {
        if self.locked.get() != locked {
            self.locked.set(locked);
            self.changes.set(self.changes.get() + 1);
        }
    }
}

pub struct ScrollLock {
    target: Box<dyn ScrollLockTarget>,
    held: bool,
}

impl ScrollLock {
    pub fn new(target: impl ScrollLockTarget + 'static) -> Self {
        Self {
            target: Box::new(target),
            held: false,
        }
    }

    pub fn acquire(&mut self) {
        if !self.held {
            debug!("background scroll locked");
            self.target.set_scroll_locked(true);
            self.held = true;
        }
    }

    pub fn release(&mut self) {
        if self.held {
            debug!("background scroll released");
            self.target.set_scroll_locked(false);
            self.held = false;
        }
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_and_release_are_idempotent() {
        let flag = ScrollLockFlag::new();
        let mut lock = ScrollLock::new(flag.clone());

        lock.release();
        assert_eq!(flag.change_count(), 0);

        lock.acquire();
        lock.acquire();
        assert!(flag.is_locked());
        assert_eq!(flag.change_count(), 1);

        lock.release();
        lock.release();
        assert!(!flag.is_locked());
        assert_eq!(flag.change_count(), 2);
    }

    #[test]
    fn dropping_releases() {
        let flag = ScrollLockFlag::new();
        {
            let mut lock = ScrollLock::new(flag.clone());
            lock.acquire();
            assert!(flag.is_locked());
        }
        assert!(!flag.is_locked());
    }
}
