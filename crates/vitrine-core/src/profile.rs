//! Profile content model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Top-level profile content for the page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Display name shown in the hero section and the page title.
    pub name: String,

    /// Short tagline under the name.
    #[serde(default)]
    pub slogan: String,

    /// Avatar image URL.
    #[serde(default)]
    pub avatar: Option<String>,

    /// Navigation sections, in display order.
    #[serde(default)]
    pub sections: Vec<SectionLink>,

    #[serde(default)]
    pub skills: Vec<Skill>,

    #[serde(default)]
    pub hobbies: Vec<Hobby>,

    #[serde(default)]
    pub contacts: Vec<Contact>,

    /// Dated update entries, newest first.
    #[serde(default)]
    pub updates: Vec<Update>,

    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

/// A navigation entry pointing at a page section by element id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionLink {
    /// Display label.
    pub label: String,

    /// Target section element id (fragment identifier without `#`).
    pub section: String,
}

/// A skill entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,

    /// Optional icon glyph or emoji.
    #[serde(default)]
    pub icon: Option<String>,
}

/// A hobby entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hobby {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}

/// A contact link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    pub label: String,

    /// Link target; `mailto:` links are tracked separately from external ones.
    pub href: String,
}

impl Contact {
    /// True when this contact is a `mailto:` link.
    pub fn is_mail(&self) -> bool {
        self.href.starts_with("mailto:")
    }
}

/// A dated update entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Update {
    pub date: NaiveDate,
    pub text: String,
}

/// A recommended external link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub label: String,
    pub href: String,
}

impl Profile {
    /// Parse profile content from a JSON document.
    pub fn from_json(input: &str) -> Result<Self> {
        let profile: Profile = serde_json::from_str(input)?;
        if profile.name.trim().is_empty() {
            return Err(CoreError::invalid("profile name must not be empty"));
        }
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "name": "Ada Example",
        "slogan": "Building small things well",
        "sections": [
            {"label": "Skills", "section": "skills"},
            {"label": "Hobbies", "section": "hobbies"}
        ],
        "skills": [{"name": "Rust", "icon": "🦀"}],
        "hobbies": [{"name": "Hiking"}],
        "contacts": [
            {"label": "Email", "href": "mailto:ada@example.com"},
            {"label": "GitHub", "href": "https://github.com/ada"}
        ],
        "updates": [{"date": "2025-06-01", "text": "Launched the site"}]
    }"#;

    #[test]
    fn test_parse_sample_profile() {
        let profile = Profile::from_json(SAMPLE).unwrap();
        assert_eq!(profile.name, "Ada Example");
        assert_eq!(profile.sections.len(), 2);
        assert_eq!(profile.skills[0].icon.as_deref(), Some("🦀"));
        assert!(profile.recommendations.is_empty());
    }

    #[test]
    fn test_empty_name_is_invalid() {
        let err = Profile::from_json(r#"{"name": "  "}"#).unwrap_err();
        assert!(err.to_string().contains("name must not be empty"));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Profile::from_json("{").unwrap_err();
        assert!(err.to_string().contains("Profile parse error"));
    }

    #[test]
    fn test_contact_mail_detection() {
        let profile = Profile::from_json(SAMPLE).unwrap();
        assert!(profile.contacts[0].is_mail());
        assert!(!profile.contacts[1].is_mail());
    }

    #[test]
    fn test_update_date_parses() {
        let profile = Profile::from_json(SAMPLE).unwrap();
        let date = profile.updates[0].date;
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    }
}
