//! Reveal-on-view: one-shot entrance animations for content elements.
//!
//! An `IntersectionObserver` watches a fixed set of content selectors and
//! applies the `revealed` class the first time each element becomes
//! sufficiently visible, then stops observing it. The transition is
//! irreversible for the rest of the page load.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::set_timeout;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::prelude::Closure;

/// Share of an element that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Negative bottom margin: an element reveals only once it is within 50px
/// of fully entering the viewport, for an early-reveal feel.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Content elements that get the entrance animation.
pub const REVEAL_SELECTOR: &str = ".section-title, .skill-item, .hobby-item, .contact-item, .update-item, .recommendation-item";

const REVEAL_KEY_ATTR: &str = "data-reveal-key";

/// Tracks which watched elements have not yet been revealed.
///
/// Membership is one-way: once a key is revealed it can never be watched
/// or revealed again.
#[derive(Debug, Default)]
pub struct RevealSet {
    pending: HashSet<String>,
    revealed: HashSet<String>,
}

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts watching `key`. Already-revealed keys are ignored.
    pub fn watch(&mut self, key: impl Into<String>) {
        let key = key.into();
        if !self.revealed.contains(&key) {
            self.pending.insert(key);
        }
    }

    /// Marks `key` revealed. Returns true only on the first qualifying
    /// call for that key.
    pub fn reveal(&mut self, key: &str) -> bool {
        if self.pending.remove(key) {
            self.revealed.insert(key.to_owned());
            true
        } else {
            false
        }
    }

    /// Number of elements still waiting to reveal.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

/// Observes every element matching [`REVEAL_SELECTOR`] and applies the
/// `revealed` class on first qualifying intersection.
///
/// Call once after the page content is mounted. A missing document or a
/// failed observer construction is a no-op.
pub fn mount_reveal_observer() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let set = Rc::new(RefCell::new(RevealSet::new()));

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new({
        let set = Rc::clone(&set);
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let key = target.get_attribute(REVEAL_KEY_ATTR).unwrap_or_default();
                // The observer may deliver queued entries after unobserve;
                // the set keeps the transition one-shot regardless.
                if set.borrow_mut().reveal(&key) {
                    let _ = target.class_list().add_1("revealed");
                }
                observer.unobserve(&target);
            }
        }
    });

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) else {
        return;
    };

    // Leak the closure to keep it alive
    callback.forget();

    let Ok(nodes) = document.query_selector_all(REVEAL_SELECTOR) else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<web_sys::Element>() else {
            continue;
        };
        let key = i.to_string();
        let _ = element.set_attribute(REVEAL_KEY_ATTR, &key);
        set.borrow_mut().watch(key);
        observer.observe(&element);
    }
}

/// Applies the `revealed` class to the first match of `selector` after a
/// delay. Used for the hero avatar entrance; a missing element is a no-op.
pub fn reveal_after(selector: &'static str, delay: Duration) {
    set_timeout(
        move || {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Ok(Some(element)) = document.query_selector(selector) {
                let _ = element.class_list().add_1("revealed");
            }
        },
        delay,
    );
}
