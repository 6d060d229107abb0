use std::collections::HashMap;
use std::hash::Hash;

/// A scheduled callback that can be stopped. Cancelling consumes the handle.
pub trait Cancel {
    fn cancel(self);
}

/// Owned timers keyed by whatever they animate.
///
/// Every handle handed to [`TimerRegistry::start`] is cancelled exactly once:
/// when it is replaced, when its key is cancelled, or when the registry is
/// cleared or dropped.
#[derive(Debug)]
pub struct TimerRegistry<K, H>
where
    K: Eq + Hash,
    H: Cancel,
{
    active: HashMap<K, H>,
}

impl<K, H> Default for TimerRegistry<K, H>
where
    K: Eq + Hash,
    H: Cancel,
{
    fn default() -> Self {
        Self {
            active: HashMap::new(),
        }
    }
}

impl<K, H> TimerRegistry<K, H>
where
    K: Eq + Hash,
    H: Cancel,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, key: K, handle: H) {
        if let Some(old) = self.active.insert(key, handle) {
            old.cancel();
        }
    }

    /// Returns false if nothing was running for `key`.
    pub fn cancel(&mut self, key: &K) -> bool {
        match self.active.remove(key) {
            Some(handle) => {
                handle.cancel();
                true
            }
            None => false,
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.active.drain() {
            handle.cancel();
        }
    }

    pub fn is_running(&self, key: &K) -> bool {
        self.active.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

impl<K, H> Drop for TimerRegistry<K, H>
where
    K: Eq + Hash,
    H: Cancel,
{
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Debug)]
    struct FakeTimer {
        id: u32,
        log: Rc<RefCell<Vec<u32>>>,
    }

    impl Cancel for FakeTimer {
        fn cancel(self) {
            self.log.borrow_mut().push(self.id);
        }
    }

    fn timer(id: u32, log: &Rc<RefCell<Vec<u32>>>) -> FakeTimer {
        FakeTimer {
            id,
            log: Rc::clone(log),
        }
    }

    #[test]
    fn test_cancel_by_key() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut reg = TimerRegistry::new();
        reg.start("a", timer(1, &log));
        reg.start("b", timer(2, &log));
        assert!(reg.is_running(&"a"));

        assert!(reg.cancel(&"a"));
        assert!(!reg.cancel(&"a"));
        assert_eq!(*log.borrow(), vec![1]);
        assert!(!reg.is_running(&"a"));
        assert!(reg.is_running(&"b"));
    }

    #[test]
    fn test_restart_cancels_previous() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut reg = TimerRegistry::new();
        reg.start(0, timer(1, &log));
        reg.start(0, timer(2, &log));
        assert_eq!(reg.len(), 1);
        assert_eq!(*log.borrow(), vec![1]);
    }

    #[test]
    fn test_drop_cancels_everything_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let mut reg = TimerRegistry::new();
            reg.start(0, timer(1, &log));
            reg.start(1, timer(2, &log));
            reg.start(2, timer(3, &log));
            reg.cancel(&1);
        }
        let mut cancelled = log.borrow().clone();
        cancelled.sort();
        assert_eq!(cancelled, vec![1, 2, 3]);
    }

    #[test]
    fn test_cancel_all_empties_registry() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut reg = TimerRegistry::new();
        reg.start(0, timer(1, &log));
        reg.cancel_all();
        assert!(reg.is_empty());
        drop(reg);
        assert_eq!(*log.borrow(), vec![1]);
    }
}
