//! Debounce and throttle wrappers for high-frequency DOM events.
//!
//! Each wrapper owns its own timer/timestamp state; distinct wrapped
//! callbacks share nothing. The pending timer is always cleared before a
//! new one is armed, so at most one timer per wrapper is live at a time.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::{TimeoutHandle, set_timeout_with_handle};

/// Leading-edge throttle bookkeeping: the timestamp of the last accepted
/// call, in milliseconds.
#[derive(Debug, Default)]
pub struct ThrottleState {
    last_fired: Option<f64>,
}

impl ThrottleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a call arriving at `now_ms`. Returns true when the wrapped
    /// callback should run: on the first call, or once `limit_ms` has
    /// elapsed since the last accepted call.
    pub fn try_fire(&mut self, now_ms: f64, limit_ms: f64) -> bool {
        match self.last_fired {
            Some(last) if now_ms - last < limit_ms => false,
            _ => {
                self.last_fired = Some(now_ms);
                true
            }
        }
    }
}

/// Leading-edge throttled callback: the first call runs immediately,
/// later calls are dropped until the limit window has elapsed.
pub struct Throttled<T> {
    limit_ms: f64,
    state: Rc<RefCell<ThrottleState>>,
    callback: Rc<dyn Fn(T)>,
}

impl<T> Clone for Throttled<T> {
    fn clone(&self) -> Self {
        Self {
            limit_ms: self.limit_ms,
            state: Rc::clone(&self.state),
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<T: 'static> Throttled<T> {
    pub fn new(limit_ms: f64, callback: impl Fn(T) + 'static) -> Self {
        Self {
            limit_ms,
            state: Rc::new(RefCell::new(ThrottleState::new())),
            callback: Rc::new(callback),
        }
    }

    /// Invokes the callback unless a call was accepted within the limit
    /// window.
    pub fn call(&self, arg: T) {
        let now = js_sys::Date::now();
        if self.state.borrow_mut().try_fire(now, self.limit_ms) {
            (self.callback)(arg);
        }
    }
}

/// Debounced callback: runs only after the wait period passes with no
/// further calls, with the most recent call's argument.
pub struct Debounced<T> {
    wait: Duration,
    pending: Rc<RefCell<Option<TimeoutHandle>>>,
    callback: Rc<dyn Fn(T)>,
}

impl<T> Clone for Debounced<T> {
    fn clone(&self) -> Self {
        Self {
            wait: self.wait,
            pending: Rc::clone(&self.pending),
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<T: 'static> Debounced<T> {
    pub fn new(wait: Duration, callback: impl Fn(T) + 'static) -> Self {
        Self {
            wait,
            pending: Rc::new(RefCell::new(None)),
            callback: Rc::new(callback),
        }
    }

    /// Resets the wait window. Any pending timer is cleared before a new
    /// one is armed.
    pub fn call(&self, arg: T) {
        if let Some(handle) = self.pending.borrow_mut().take() {
            handle.clear();
        }
        let callback = Rc::clone(&self.callback);
        let pending = Rc::clone(&self.pending);
        let armed = set_timeout_with_handle(
            move || {
                pending.borrow_mut().take();
                callback(arg);
            },
            self.wait,
        );
        if let Ok(handle) = armed {
            *self.pending.borrow_mut() = Some(handle);
        }
    }

    /// Drops the pending invocation, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.borrow_mut().take() {
            handle.clear();
        }
    }

    /// True while an invocation is waiting for the quiet period to end.
    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}
