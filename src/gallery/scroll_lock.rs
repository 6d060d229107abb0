/// Something whose scrolling can be switched off, normally the page body.
pub trait ScrollTarget {
    fn set_scroll_locked(&self, locked: bool);
}

/// Holds background scrolling off for as long as it lives.
///
/// Unlocking happens on [`ScrollLock::release`] or on drop, whichever comes
/// first, and only once.
#[derive(Debug)]
pub struct ScrollLock<T: ScrollTarget> {
    target: T,
    held: bool,
}

impl<T: ScrollTarget> ScrollLock<T> {
    pub fn acquire(target: T) -> Self {
        target.set_scroll_locked(true);
        Self { target, held: true }
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn release(&mut self) {
        if self.held {
            self.held = false;
            self.target.set_scroll_locked(false);
        }
    }
}

impl<T: ScrollTarget> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Default)]
    struct FakeBody {
        calls: Rc<RefCell<Vec<bool>>>,
    }

    impl ScrollTarget for FakeBody {
        fn set_scroll_locked(&self, locked: bool) {
            self.calls.borrow_mut().push(locked);
        }
    }

    #[test]
    fn test_drop_unlocks() {
        let body = FakeBody::default();
        {
            let lock = ScrollLock::acquire(body.clone());
            assert!(lock.is_held());
        }
        assert_eq!(*body.calls.borrow(), vec![true, false]);
    }

    #[test]
    fn test_release_is_idempotent() {
        let body = FakeBody::default();
        let mut lock = ScrollLock::acquire(body.clone());
        lock.release();
        lock.release();
        assert!(!lock.is_held());
        drop(lock);
        assert_eq!(*body.calls.borrow(), vec![true, false]);
    }
}
