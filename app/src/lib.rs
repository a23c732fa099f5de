//! The Vitrine profile page.
//!
//! Assembles the page from the embedded profile content and wires up the
//! interactivity layer: one scroll listener feeding the navbar, progress
//! bar, and back-to-top control; reveal-on-view entrance animations; and
//! the tooltip/press feedback on the content sections.

use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use vitrine_core::Profile;
use vitrine_ui::{
    BackToTop, NavItem, Navbar, ScrollProgress, mount_reveal_observer, reveal_after,
    use_scroll_effects,
};

mod sections;

use sections::{
    ContactSection, HeroSection, HobbiesSection, RecommendationsSection, SkillsSection,
    UpdatesSection,
};

/// Embedded page content; edit `app/profile.json` to publish a different
/// profile.
const PROFILE_JSON: &str = include_str!("../profile.json");

/// Delay before the hero avatar's entrance animation.
const AVATAR_REVEAL_MS: u64 = 300;

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let profile = Profile::from_json(PROFILE_JSON).unwrap_or_else(|err| {
        log::error!("profile content is invalid: {err}");
        Profile::default()
    });

    let nav_items: Vec<NavItem> = profile
        .sections
        .iter()
        .map(|link| NavItem::new(link.label.clone(), link.section.clone()))
        .collect();

    let effects = use_scroll_effects();
    let scrolled = Signal::derive(move || effects.get().navbar_scrolled);
    let hidden = Signal::derive(move || effects.get().navbar_hidden);
    let progress = Signal::derive(move || effects.get().progress);
    let back_to_top = Signal::derive(move || effects.get().back_to_top);

    // Runs once the sections below are in the DOM.
    Effect::new(move |_| {
        mount_reveal_observer();
        reveal_after(".profile-image", Duration::from_millis(AVATAR_REVEAL_MS));
    });

    view! {
      <Title text=profile.name.clone() />

      <ScrollProgress progress=progress />
      <Navbar items=nav_items scrolled=scrolled hidden=hidden />

      <main>
        <HeroSection profile=profile.clone() />
        <SkillsSection skills=profile.skills.clone() />
        <HobbiesSection hobbies=profile.hobbies.clone() />
        <UpdatesSection updates=profile.updates.clone() />
        <RecommendationsSection recommendations=profile.recommendations.clone() />
        <ContactSection contacts=profile.contacts.clone() />
      </main>

      <BackToTop visible=back_to_top />
    }
}
