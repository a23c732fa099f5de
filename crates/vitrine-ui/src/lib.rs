//! Vitrine UI
//!
//! Leptos components and DOM utilities for the Vitrine profile page.
//!
//! # Components
//! - [`Navbar`] - fixed navigation bar with mobile menu and keyboard shortcuts
//! - [`ScrollProgress`] - page scroll progress indicator
//! - [`BackToTop`] - animated scroll-to-top control
//!
//! # Utilities
//! - [`use_scroll_effects`] - the single scroll listener driving the components above
//! - [`mount_reveal_observer`] - one-shot reveal-on-view entrance animations
//! - [`show_tooltip`] - transient overlay messages
//! - [`Debounced`] / [`Throttled`] - rate limiting for resize and scroll events
//!
//! Every operation in this crate tolerates missing elements by degrading
//! to a no-op; nothing here can take down the rest of the page's
//! interactivity.

pub mod navigation;
pub mod rate_limit;
pub mod reveal;
pub mod scroll;
pub mod tooltip;

pub use navigation::{NavItem, Navbar, digit_link_index, scroll_to_section, toggle_menu};
pub use rate_limit::{Debounced, Throttled};
pub use reveal::{RevealSet, mount_reveal_observer, reveal_after};
pub use scroll::{
    BackToTop, ScrollEffectState, ScrollInput, ScrollProgress, scroll_to_top, use_scroll_effects,
};
pub use tooltip::{press_feedback, show_tooltip, show_tooltip_for};
