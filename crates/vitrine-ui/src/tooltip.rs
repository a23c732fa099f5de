//! Transient click feedback: the tooltip overlay and the pressed-state
//! animation.

use std::time::Duration;

use leptos::prelude::set_timeout;

/// How long a tooltip stays fully visible by default.
pub const TOOLTIP_DURATION_MS: u64 = 2000;

/// Length of the tooltip fade-out transition.
pub const TOOLTIP_FADE_MS: u64 = 300;

const PRESS_FEEDBACK_MS: u64 = 150;
const TOOLTIP_SELECTOR: &str = ".tooltip";

/// Shows a tooltip for the default duration. See [`show_tooltip_for`].
pub fn show_tooltip(message: &str) {
    show_tooltip_for(message, Duration::from_millis(TOOLTIP_DURATION_MS));
}

/// Shows a centered overlay tooltip with `message`.
///
/// At most one tooltip exists at a time: any currently displayed tooltip
/// node is removed before the new one is inserted, so rapid calls preempt
/// each other safely. The node fades in, fades out after `duration`, and
/// is removed once the fade-out transition has run.
pub fn show_tooltip_for(message: &str, duration: Duration) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };

    if let Ok(Some(existing)) = document.query_selector(TOOLTIP_SELECTOR) {
        existing.remove();
    }

    let Ok(tooltip) = document.create_element("div") else {
        return;
    };
    tooltip.set_class_name("tooltip");
    tooltip.set_text_content(Some(message));
    if body.append_child(&tooltip).is_err() {
        return;
    }

    // Class changes are timer-deferred so the CSS transitions run.
    {
        let tooltip = tooltip.clone();
        set_timeout(
            move || {
                let _ = tooltip.class_list().add_1("visible");
            },
            Duration::from_millis(10),
        );
    }
    {
        let tooltip = tooltip.clone();
        set_timeout(
            move || {
                let _ = tooltip.class_list().remove_1("visible");
            },
            duration,
        );
    }
    // The node may already be detached if a later tooltip preempted this
    // one; removing it again is harmless.
    set_timeout(
        move || tooltip.remove(),
        duration + Duration::from_millis(TOOLTIP_FADE_MS),
    );
}

/// Briefly applies the `pressed` class to a clicked element.
pub fn press_feedback(element: &web_sys::Element) {
    let _ = element.class_list().add_1("pressed");
    let element = element.clone();
    set_timeout(
        move || {
            let _ = element.class_list().remove_1("pressed");
        },
        Duration::from_millis(PRESS_FEEDBACK_MS),
    );
}
