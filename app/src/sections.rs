//! Page sections rendered from the profile content.
//!
//! Section element ids match the `sections` entries in the profile JSON;
//! the navbar and digit shortcuts scroll to them by id.

use leptos::prelude::*;
use vitrine_core::{Contact, Hobby, Profile, Recommendation, Skill, Update};
use vitrine_ui::{press_feedback, show_tooltip};
use wasm_bindgen::JsCast;

fn event_element(ev: &web_sys::MouseEvent) -> Option<web_sys::Element> {
    ev.current_target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
}

#[component]
pub fn HeroSection(profile: Profile) -> impl IntoView {
    view! {
      <section id="hero" class="hero">
        {profile
          .avatar
          .map(|src| view! { <img class="profile-image" src=src alt="Profile avatar" /> })}
        <h1 class="profile-name">{profile.name}</h1>
        <p class="profile-slogan">{profile.slogan}</p>
      </section>
    }
}

#[component]
pub fn SkillsSection(skills: Vec<Skill>) -> impl IntoView {
    view! {
      <section id="skills" class="section">
        <h2 class="section-title">"Skills"</h2>
        <ul class="item-grid">
          {skills
            .into_iter()
            .map(|skill| {
              let name = skill.name.clone();
              view! {
                <li
                  class="skill-item"
                  on:click=move |ev: web_sys::MouseEvent| {
                    if let Some(element) = event_element(&ev) {
                      press_feedback(&element);
                    }
                    show_tooltip(&format!("Skill: {name}"));
                  }
                >
                  {skill.icon.map(|icon| view! { <span class="skill-icon">{icon}</span> })}
                  <span>{skill.name}</span>
                </li>
              }
            })
            .collect_view()}
        </ul>
      </section>
    }
}

#[component]
pub fn HobbiesSection(hobbies: Vec<Hobby>) -> impl IntoView {
    view! {
      <section id="hobbies" class="section">
        <h2 class="section-title">"Hobbies"</h2>
        <ul class="item-grid">
          {hobbies
            .into_iter()
            .map(|hobby| {
              let name = hobby.name.clone();
              view! {
                <li
                  class="hobby-item"
                  on:click=move |_| show_tooltip(&format!("Hobby: {name}"))
                >
                  <span class="hobby-name">{hobby.name}</span>
                  {hobby
                    .description
                    .map(|text| view! { <span class="hobby-description">{text}</span> })}
                </li>
              }
            })
            .collect_view()}
        </ul>
      </section>
    }
}

#[component]
pub fn UpdatesSection(updates: Vec<Update>) -> impl IntoView {
    view! {
      <section id="updates" class="section">
        <h2 class="section-title">"Updates"</h2>
        <ul class="update-list">
          {updates
            .into_iter()
            .map(|update| {
              view! {
                <li class="update-item">
                  <span class="update-date">{update.date.format("%Y-%m-%d").to_string()}</span>
                  <span class="update-text">{update.text}</span>
                </li>
              }
            })
            .collect_view()}
        </ul>
      </section>
    }
}

#[component]
pub fn RecommendationsSection(recommendations: Vec<Recommendation>) -> impl IntoView {
    view! {
      <section id="recommendations" class="section">
        <h2 class="section-title">"Recommended"</h2>
        <div class="link-list">
          {recommendations
            .into_iter()
            .map(|rec| {
              let label = rec.label.clone();
              view! {
                <a
                  class="recommendation-item"
                  href=rec.href
                  target="_blank"
                  rel="noreferrer"
                  on:click=move |_| log::info!("visited recommendation: {label}")
                >
                  <span>{rec.label}</span>
                </a>
              }
            })
            .collect_view()}
        </div>
      </section>
    }
}

#[component]
pub fn ContactSection(contacts: Vec<Contact>) -> impl IntoView {
    view! {
      <section id="contact" class="section">
        <h2 class="section-title">"Contact"</h2>
        <div class="link-list">
          {contacts
            .into_iter()
            .map(|contact| {
              let label = contact.label.clone();
              let is_mail = contact.is_mail();
              view! {
                <a
                  class="contact-item"
                  href=contact.href
                  on:click=move |_| {
                    if is_mail {
                      log::info!("mail contact activated: {label}");
                    } else {
                      log::info!("external contact activated: {label}");
                    }
                  }
                >
                  <span class="contact-text">{contact.label}</span>
                </a>
              }
            })
            .collect_view()}
        </div>
      </section>
    }
}
