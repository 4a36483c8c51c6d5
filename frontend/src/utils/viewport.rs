use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::Callback;

use crate::error::SiteError;
use crate::state::reveal::{RevealOutcome, RevealTracker, REVEAL_ID_ATTR};

#[derive(Default)]
struct WatcherState {
    tracker: RevealTracker,
    listeners: HashMap<String, Callback<()>>,
}

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// One-shot viewport-intersection watcher.
///
/// Elements are keyed by their `data-reveal-id`. Each id fires at most once:
/// on its first intersection the element is unobserved and its listener is
/// emitted and dropped.
pub struct ViewportWatcher {
    observer: IntersectionObserver,
    state: Rc<RefCell<WatcherState>>,
    _callback: EntriesCallback,
}

impl ViewportWatcher {
    pub fn new(threshold: f64, root_margin: &str) -> Result<Self, SiteError> {
        let state = Rc::new(RefCell::new(WatcherState::default()));

        let callback = {
            let state = state.clone();
            Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                let mut fired = Vec::new();
                {
                    let mut state = state.borrow_mut();
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        let target = entry.target();
                        let Some(id) = target.get_attribute(REVEAL_ID_ATTR) else {
                            observer.unobserve(&target);
                            continue;
                        };
                        match state.tracker.observe(&id, entry.is_intersecting()) {
                            RevealOutcome::Reveal => {
                                observer.unobserve(&target);
                                log::debug!("Revealed {} ({} so far)", id, state.tracker.len());
                                if let Some(listener) = state.listeners.remove(&id) {
                                    fired.push(listener);
                                }
                            }
                            RevealOutcome::AlreadyRevealed => observer.unobserve(&target),
                            RevealOutcome::NotVisible => {}
                        }
                    }
                }
                for listener in fired {
                    listener.emit(());
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            observer,
            state,
            _callback: callback,
        })
    }

    /// Starts watching `element` under `id`. An id that already fired emits
    /// `on_enter` right away instead of being observed again.
    pub fn watch(&self, id: &str, element: &Element, on_enter: Callback<()>) {
        if self.state.borrow().tracker.is_revealed(id) {
            on_enter.emit(());
            return;
        }
        if let Err(e) = element.set_attribute(REVEAL_ID_ATTR, id) {
            log::warn!("Cannot tag {} for reveal: {:?}", id, e);
            return;
        }
        self.state
            .borrow_mut()
            .listeners
            .insert(id.to_string(), on_enter);
        self.observer.observe(element);
    }

    pub fn unwatch(&self, id: &str, element: &Element) {
        self.state.borrow_mut().listeners.remove(id);
        self.observer.unobserve(element);
    }
}

impl Drop for ViewportWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
