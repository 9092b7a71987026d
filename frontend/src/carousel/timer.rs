use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;

/// Owns a running timer.
///
/// Dropping the guard cancels the timer and disarms its callback, so a tick the
/// browser had already queued when the view was torn down does nothing.
pub struct TimerGuard<H> {
    handle: Option<H>,
    armed: Rc<Cell<bool>>,
}

impl<H> TimerGuard<H> {
    /// Wraps `callback` behind the guard's arm flag and hands it to `schedule`,
    /// which starts the underlying timer and returns its handle.
    pub fn start<F, S>(mut callback: F, schedule: S) -> Self
    where
        F: FnMut() + 'static,
        S: FnOnce(Box<dyn FnMut()>) -> H,
    {
        let armed = Rc::new(Cell::new(true));
        let gate = armed.clone();
        let handle = schedule(Box::new(move || {
            if gate.get() {
                callback();
            }
        }));

        TimerGuard {
            handle: Some(handle),
            armed,
        }
    }

    fn disarm(&mut self) {
        self.armed.set(false);
        drop(self.handle.take());
    }
}

impl<H> Drop for TimerGuard<H> {
    fn drop(&mut self) {
        self.disarm();
    }
}

/// Runs `callback` every `period_ms` until the returned guard is dropped.
pub fn every<F>(period_ms: u32, callback: F) -> TimerGuard<Interval>
where
    F: FnMut() + 'static,
{
    TimerGuard::start(callback, |tick| Interval::new(period_ms, tick))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::RefCell;

    type Slot = Rc<RefCell<Option<Box<dyn FnMut()>>>>;

    /// A timer the test fires by hand. The callback outlives the guard, like a
    /// browser tick that was already queued at teardown.
    fn manual(counter: Rc<Cell<usize>>) -> (TimerGuard<()>, Slot) {
        let slot: Slot = Rc::new(RefCell::new(None));
        let stash = slot.clone();
        let guard = TimerGuard::start(
            move || counter.set(counter.get() + 1),
            move |tick| {
                *stash.borrow_mut() = Some(tick);
            },
        );
        (guard, slot)
    }

    fn fire(slot: &Slot) {
        if let Some(tick) = slot.borrow_mut().as_mut() {
            tick();
        }
    }

    #[test]
    fn fires_while_guard_is_alive() {
        let counter = Rc::new(Cell::new(0));
        let (guard, slot) = manual(counter.clone());
        fire(&slot);
        fire(&slot);
        assert_eq!(counter.get(), 2);
        drop(guard);
    }

    #[test]
    fn dropping_guard_silences_late_ticks() {
        let counter = Rc::new(Cell::new(0));
        let (guard, slot) = manual(counter.clone());
        fire(&slot);
        drop(guard);
        fire(&slot);
        fire(&slot);
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn dropping_guard_releases_the_handle() {
        struct Handle(Rc<Cell<bool>>);
        impl Drop for Handle {
            fn drop(&mut self) {
                self.0.set(true);
            }
        }

        let released = Rc::new(Cell::new(false));
        let flag = released.clone();
        let guard = TimerGuard::start(|| {}, move |_tick| Handle(flag));
        assert!(!released.get());
        drop(guard);
        assert!(released.get());
    }

    proptest! {
        #[test]
        fn prop_no_ticks_counted_after_teardown(before in 0usize..20, after in 0usize..20) {
            let counter = Rc::new(Cell::new(0));
            let (guard, slot) = manual(counter.clone());
            for _ in 0..before {
                fire(&slot);
            }
            drop(guard);
            for _ in 0..after {
                fire(&slot);
            }
            prop_assert_eq!(counter.get(), before);
        }
    }
}
