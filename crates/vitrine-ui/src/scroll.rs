//! Scroll-driven visual state: navbar background and visibility, the
//! progress bar, and the back-to-top control.
//!
//! All of it derives from a pure function over one scroll sample, so the
//! same `(offset, previous, heights)` input always yields the same visual
//! state. A single throttled listener is the only writer of the shared
//! signal; the components here only read it.

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

use crate::rate_limit::Throttled;

/// Offset past which the navbar gains its solid background.
pub const NAVBAR_SCROLLED_AT: f64 = 50.0;

/// Offset past which downward scrolling hides the navbar.
pub const NAVBAR_HIDE_AT: f64 = 100.0;

/// Offset past which the back-to-top control is shown.
pub const BACK_TO_TOP_AT: f64 = 300.0;

/// Minimum interval between scroll evaluations (leading-edge throttle).
pub const SCROLL_THROTTLE_MS: f64 = 100.0;

/// One scroll sample: current and previous offsets plus the page and
/// viewport heights at sample time. All values in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollInput {
    pub offset: f64,
    pub previous: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

/// Visual state derived from a scroll sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollEffectState {
    /// Navbar shows its solid background.
    pub navbar_scrolled: bool,

    /// Navbar is translated off-screen.
    pub navbar_hidden: bool,

    /// Progress bar width, percent in `[0, 100]`.
    pub progress: f64,

    /// Back-to-top control is visible.
    pub back_to_top: bool,
}

/// Derives the visual state for one scroll sample.
pub fn evaluate(input: ScrollInput) -> ScrollEffectState {
    let scrollable = input.scroll_height - input.viewport_height;
    let progress = if scrollable > 0.0 {
        (input.offset / scrollable * 100.0).clamp(0.0, 100.0)
    } else {
        // content shorter than the viewport: nothing to make progress on
        0.0
    };
    ScrollEffectState {
        navbar_scrolled: input.offset > NAVBAR_SCROLLED_AT,
        navbar_hidden: input.offset > input.previous && input.offset > NAVBAR_HIDE_AT,
        progress,
        back_to_top: input.offset > BACK_TO_TOP_AT,
    }
}

/// The previous-offset value to carry into the next sample. Negative
/// offsets (overscroll bounce) clamp to zero so they never read as an
/// upward move.
pub fn next_previous(offset: f64) -> f64 {
    offset.max(0.0)
}

/// Registers the page scroll listener and returns the signal it writes.
///
/// The listener is throttled to one evaluation per [`SCROLL_THROTTLE_MS`]
/// and is the single writer of the returned signal. It stays registered
/// for the page lifetime.
pub fn use_scroll_effects() -> RwSignal<ScrollEffectState> {
    let state = RwSignal::new(ScrollEffectState::default());

    Effect::new(move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(root) = window.document().and_then(|d| d.document_element()) else {
            return;
        };

        let previous = Rc::new(Cell::new(0.0_f64));
        let sample = {
            let window = window.clone();
            Throttled::new(SCROLL_THROTTLE_MS, move |_: ()| {
                let offset = window.scroll_y().unwrap_or_default();
                let input = ScrollInput {
                    offset,
                    previous: previous.get(),
                    scroll_height: f64::from(root.scroll_height()),
                    viewport_height: f64::from(root.client_height()),
                };
                previous.set(next_previous(offset));
                state.set(evaluate(input));
            })
        };

        let handler = Closure::<dyn FnMut()>::new(move || sample.call(()));
        let _ = window.add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref());

        // Leak the closure to keep it alive
        handler.forget();
    });

    state
}

/// Fixed scroll-progress indicator bar.
#[component]
pub fn ScrollProgress(
    /// Progress percentage in `[0, 100]`.
    progress: Signal<f64>,
) -> impl IntoView {
    view! {
      <div
        class="scroll-progress"
        role="presentation"
        style:width=move || format!("{}%", progress.get())
      ></div>
    }
}

/// Back-to-top control. Shown and hidden via the `visible` class so the
/// opacity/visibility transition animates.
#[component]
pub fn BackToTop(
    /// Whether the control is currently shown.
    visible: Signal<bool>,
) -> impl IntoView {
    view! {
      <button
        class="back-to-top"
        class:visible=move || visible.get()
        aria-label="Back to top"
        on:click=move |_| scroll_to_top()
      >
        "\u{2191}"
      </button>
    }
}

/// Smooth-scrolls the viewport back to the top of the page.
pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(offset: f64, previous: f64) -> ScrollInput {
        ScrollInput {
            offset,
            previous,
            scroll_height: 2000.0,
            viewport_height: 800.0,
        }
    }

    #[test]
    fn test_navbar_background_threshold() {
        assert!(!evaluate(input(50.0, 0.0)).navbar_scrolled);
        assert!(evaluate(input(51.0, 0.0)).navbar_scrolled);
    }

    #[test]
    fn test_navbar_hides_scrolling_down_past_threshold() {
        assert!(evaluate(input(150.0, 120.0)).navbar_hidden);
    }

    #[test]
    fn test_navbar_shown_scrolling_up() {
        assert!(!evaluate(input(150.0, 200.0)).navbar_hidden);
    }

    #[test]
    fn test_navbar_shown_near_top_even_scrolling_down() {
        assert!(!evaluate(input(100.0, 80.0)).navbar_hidden);
    }

    #[test]
    fn test_navbar_shown_when_offset_resets_to_zero() {
        assert!(!evaluate(input(0.0, 500.0)).navbar_hidden);
    }

    #[test]
    fn test_progress_ratio() {
        let state = evaluate(ScrollInput {
            offset: 250.0,
            previous: 0.0,
            scroll_height: 1000.0,
            viewport_height: 0.0,
        });
        assert!((state.progress - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_zero_when_content_fits_viewport() {
        let state = evaluate(ScrollInput {
            offset: 40.0,
            previous: 0.0,
            scroll_height: 600.0,
            viewport_height: 800.0,
        });
        assert_eq!(state.progress, 0.0);
    }

    #[test]
    fn test_progress_is_clamped() {
        let state = evaluate(ScrollInput {
            offset: 5000.0,
            previous: 0.0,
            scroll_height: 1000.0,
            viewport_height: 500.0,
        });
        assert_eq!(state.progress, 100.0);
    }

    #[test]
    fn test_back_to_top_threshold() {
        assert!(!evaluate(input(300.0, 0.0)).back_to_top);
        assert!(evaluate(input(301.0, 0.0)).back_to_top);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let sample = input(140.0, 90.0);
        assert_eq!(evaluate(sample), evaluate(sample));
    }

    #[test]
    fn test_next_previous_clamps_overscroll() {
        assert_eq!(next_previous(-12.0), 0.0);
        assert_eq!(next_previous(42.0), 42.0);
    }
}
