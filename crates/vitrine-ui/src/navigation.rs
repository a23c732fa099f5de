//! Site navigation: the fixed navbar, the mobile menu, anchored smooth
//! scrolling, and the keyboard shortcuts.
//!
//! The menu-open flag lives in one `RwSignal` owned by [`Navbar`]; every
//! way the menu can close (link activation, outside click, Escape,
//! viewport widening) goes through that signal.

use std::time::Duration;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

use crate::rate_limit::Debounced;

/// Viewport width above which the mobile menu is forced closed.
pub const MENU_BREAKPOINT_PX: f64 = 768.0;

/// Gap left above an anchored section so the fixed navbar does not cover it.
pub const ANCHOR_OFFSET_PX: f64 = 70.0;

/// Quiet period applied to resize events before re-evaluating the menu.
pub const RESIZE_DEBOUNCE_MS: u64 = 250;

/// A navigation link targeting a page section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavItem {
    /// Display label.
    pub label: String,

    /// Target section element id (fragment identifier without `#`).
    pub section: String,
}

impl NavItem {
    /// Create a new navigation item.
    pub fn new(label: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            section: section.into(),
        }
    }
}

/// True when a viewport of `width` pixels forces the mobile menu closed.
pub fn should_close_on_resize(width: f64) -> bool {
    width > MENU_BREAKPOINT_PX
}

/// Flips the menu-open flag.
pub fn toggle_menu(menu_open: RwSignal<bool>) {
    menu_open.update(|open| *open = !*open);
}

/// Maps a digit key (`"1"`–`"9"`) to a nav link index, if that link exists.
/// Everything else, including out-of-range digits, maps to `None`.
pub fn digit_link_index(key: &str, link_count: usize) -> Option<usize> {
    let digit = key.parse::<usize>().ok().filter(|d| (1..=9).contains(d))?;
    let index = digit - 1;
    (index < link_count).then_some(index)
}

/// Smooth-scrolls the viewport so the section's top sits
/// [`ANCHOR_OFFSET_PX`] below the viewport top. A missing section id is a
/// no-op.
pub fn scroll_to_section(section: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(element) = document.get_element_by_id(section) else {
        return;
    };
    let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(f64::from(element.offset_top()) - ANCHOR_OFFSET_PX);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Fixed navigation bar with a collapsible mobile menu.
///
/// Document-level listeners (outside click, Escape, digit shortcuts,
/// debounced resize) are registered once on mount and stay live for the
/// page lifetime.
#[component]
pub fn Navbar(
    /// Navigation links, in display order.
    items: Vec<NavItem>,
    /// Whether the page has scrolled past the background threshold.
    scrolled: Signal<bool>,
    /// Whether the navbar is currently slid off-screen.
    hidden: Signal<bool>,
) -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let nav_ref = NodeRef::<leptos::html::Nav>::new();
    let targets = StoredValue::new(
        items
            .iter()
            .map(|item| item.section.clone())
            .collect::<Vec<_>>(),
    );
    let items = StoredValue::new(items);

    let activate = move |section: &str| {
        menu_open.set(false);
        scroll_to_section(section);
    };

    Effect::new(move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        // Close the menu on clicks that land outside the nav container.
        let click =
            Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
                if !menu_open.get_untracked() {
                    return;
                }
                let inside = nav_ref
                    .get_untracked()
                    .zip(ev.target())
                    .is_some_and(|(nav, target)| {
                        target
                            .dyn_ref::<web_sys::Node>()
                            .is_some_and(|node| nav.contains(Some(node)))
                    });
                if !inside {
                    menu_open.set(false);
                }
            });
        let _ = document.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
        click.forget();

        // Escape closes the menu; digit keys jump to the matching link.
        let keydown =
            Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
                let key = ev.key();
                if key == "Escape" {
                    if menu_open.get_untracked() {
                        menu_open.set(false);
                    }
                    return;
                }
                if let Some(index) = digit_link_index(&key, targets.with_value(Vec::len)) {
                    let section = targets.with_value(|t| t[index].clone());
                    activate(&section);
                }
            });
        let _ =
            document.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
        keydown.forget();

        // Widening the viewport past the breakpoint closes the menu, after
        // a quiet period so continuous resizes do not thrash.
        let debounced = Debounced::new(Duration::from_millis(RESIZE_DEBOUNCE_MS), {
            let window = window.clone();
            move |_: ()| {
                let width = window
                    .inner_width()
                    .ok()
                    .and_then(|w| w.as_f64())
                    .unwrap_or_default();
                if should_close_on_resize(width) {
                    menu_open.set(false);
                }
            }
        });
        let resize = Closure::<dyn FnMut()>::new(move || debounced.call(()));
        let _ = window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
        resize.forget();
    });

    view! {
      <nav
        node_ref=nav_ref
        class="navbar"
        class:scrolled=move || scrolled.get()
        style:transform=move || {
          if hidden.get() { "translateY(-100%)" } else { "translateY(0)" }
        }
      >
        <button
          class="nav-toggle"
          class:active=move || menu_open.get()
          aria-label="Toggle menu"
          on:click=move |_| toggle_menu(menu_open)
        >
          <span class="nav-toggle-bar"></span>
          <span class="nav-toggle-bar"></span>
          <span class="nav-toggle-bar"></span>
        </button>
        <ul class="nav-menu" class:active=move || menu_open.get()>
          <For
            each=move || items.get_value()
            key=|item| item.section.clone()
            children=move |item| {
              let section = item.section.clone();
              let href = format!("#{}", item.section);
              view! {
                <li class="nav-item">
                  <a
                    href=href
                    class="nav-link"
                    on:click=move |ev: web_sys::MouseEvent| {
                      ev.prevent_default();
                      activate(&section);
                    }
                  >
                    {item.label.clone()}
                  </a>
                </li>
              }
            }
          />

        </ul>
      </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_item_creation() {
        let item = NavItem::new("Skills", "skills");
        assert_eq!(item.label, "Skills");
        assert_eq!(item.section, "skills");
    }

    #[test]
    fn test_nav_item_serialization() {
        let item = NavItem::new("Skills", "skills");
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"label\":\"Skills\""));
        assert!(json.contains("\"section\":\"skills\""));
    }

    #[test]
    fn test_menu_toggle_parity() {
        let menu_open = RwSignal::new(false);
        toggle_menu(menu_open);
        assert!(menu_open.get_untracked());
        toggle_menu(menu_open);
        assert!(!menu_open.get_untracked());
    }

    #[test]
    fn test_resize_breakpoint() {
        assert!(!should_close_on_resize(768.0));
        assert!(should_close_on_resize(769.0));
    }

    #[test]
    fn test_digit_key_maps_to_link_index() {
        assert_eq!(digit_link_index("1", 3), Some(0));
        assert_eq!(digit_link_index("3", 3), Some(2));
    }

    #[test]
    fn test_digit_key_out_of_range_is_none() {
        assert_eq!(digit_link_index("4", 3), None);
        assert_eq!(digit_link_index("9", 3), None);
    }

    #[test]
    fn test_non_digit_keys_are_none() {
        assert_eq!(digit_link_index("Escape", 3), None);
        assert_eq!(digit_link_index("0", 3), None);
        assert_eq!(digit_link_index("a", 3), None);
        assert_eq!(digit_link_index("10", 3), None);
    }
}
