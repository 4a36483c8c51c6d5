use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Trailing-edge debounce slot.
///
/// Holds the one scheduled call. Arming hands back the previous handle so the
/// caller drops it, which cancels it; only the last trigger of a burst is
/// still scheduled when the window closes.
#[derive(Debug)]
pub struct TrailingDebounce<H> {
    pending: Option<H>,
}

impl<H> Default for TrailingDebounce<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H> TrailingDebounce<H> {
    pub fn arm(&mut self, handle: H) -> Option<H> {
        self.pending.replace(handle)
    }
}

/// Wraps `f` so it runs `wait_ms` after the last call in a burst.
pub fn debounce<F>(wait_ms: u32, f: F) -> impl Fn()
where
    F: Fn() + 'static,
{
    let slot = Rc::new(RefCell::new(TrailingDebounce::<Timeout>::default()));
    let f = Rc::new(f);
    move || {
        let f = f.clone();
        let timeout = Timeout::new(wait_ms, move || f());
        // Dropping a gloo `Timeout` clears it.
        let previous = slot.borrow_mut().arm(timeout);
        drop(previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;

    struct Handle {
        cancelled: Rc<Cell<usize>>,
    }

    impl Drop for Handle {
        fn drop(&mut self) {
            self.cancelled.set(self.cancelled.get() + 1);
        }
    }

    fn handle(cancelled: &Rc<Cell<usize>>) -> Handle {
        Handle { cancelled: cancelled.clone() }
    }

    #[test]
    fn rearming_cancels_previous_call() {
        let cancelled = Rc::new(Cell::new(0));
        let mut slot = TrailingDebounce::default();
        assert!(slot.arm(handle(&cancelled)).is_none());
        drop(slot.arm(handle(&cancelled)));
        assert_eq!(cancelled.get(), 1);
        assert!(slot.pending.is_some());
    }

    #[test]
    fn dropping_the_slot_cancels_the_pending_call() {
        let cancelled = Rc::new(Cell::new(0));
        let mut slot = TrailingDebounce::default();
        drop(slot.arm(handle(&cancelled)));
        drop(slot);
        assert_eq!(cancelled.get(), 1);
    }

    proptest! {
        #[test]
        fn one_call_survives_a_burst(burst in 1usize..50) {
            let cancelled = Rc::new(Cell::new(0));
            let mut slot = TrailingDebounce::default();
            for _ in 0..burst {
                drop(slot.arm(handle(&cancelled)));
            }
            prop_assert_eq!(cancelled.get(), burst - 1);
            prop_assert!(slot.pending.is_some());
        }
    }
}
