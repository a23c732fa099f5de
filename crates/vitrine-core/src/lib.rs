//! Vitrine Core
//!
//! Content model and error types for the Vitrine profile site.
//!
//! The page itself is a single embedded JSON document describing the
//! profile: name, slogan, navigation sections, and the lists each section
//! renders (skills, hobbies, contacts, updates, recommendations). This
//! crate owns that model and its validation; it has no DOM dependencies
//! and is fully testable off the browser.

pub mod error;
pub mod profile;

pub use error::{CoreError, Result};
pub use profile::{Contact, Hobby, Profile, Recommendation, SectionLink, Skill, Update};
