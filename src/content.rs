//! Static page content, embedded at build time from `content/site.json`.

use serde::Deserialize;

use crate::components::icons::IconKind;
use crate::error::SiteError;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteContent {
    pub name: String,
    pub nav: Vec<NavLink>,
    pub hero: HeroContent,
    pub intro: IntroContent,
    pub about: AboutContent,
    pub work: WorkContent,
    pub footer: FooterContent,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavLink {
    pub label: String,
    /// Element id the link scrolls to.
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeroContent {
    pub background: String,
    pub title: String,
    pub highlight: String,
    pub tagline: String,
    pub scroll_label: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IntroContent {
    pub statement: String,
    pub highlight: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AboutContent {
    pub heading: String,
    pub portrait: Image,
    pub paragraphs: Vec<String>,
    pub social: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: IconKind,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorkContent {
    pub heading: String,
    pub subtitle: String,
    pub items: Vec<WorkItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorkItem {
    pub title: String,
    pub description: String,
    pub image: Image,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FooterContent {
    pub rights: String,
    pub links: Vec<FooterLink>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

impl SiteContent {
    /// Parses the content bundled into the binary.
    pub fn load() -> Result<Self, SiteError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::SectionId;

    #[test]
    fn bundled_content_parses() {
        let content = SiteContent::load().expect("bundled content should parse");
        assert_eq!(content.name, "Judith Suminwa");
        assert_eq!(content.work.items.len(), 3);
        assert_eq!(content.about.paragraphs.len(), 3);
    }

    #[test]
    fn nav_targets_are_known_sections() {
        let content = SiteContent::load().unwrap();
        let targets: Vec<SectionId> = content
            .nav
            .iter()
            .map(|link| link.target.parse().unwrap())
            .collect();
        assert_eq!(targets, vec![SectionId::About, SectionId::Work]);
    }

    #[test]
    fn social_icons_deserialize_from_lowercase_names() {
        let content = SiteContent::load().unwrap();
        let icons: Vec<IconKind> = content.about.social.iter().map(|s| s.icon).collect();
        assert_eq!(
            icons,
            vec![IconKind::Twitter, IconKind::Linkedin, IconKind::Mail]
        );
    }

    #[test]
    fn malformed_content_is_a_content_error() {
        let err = SiteContent::from_json("{ \"name\": 42 }").unwrap_err();
        assert!(matches!(err, SiteError::Content(_)));
        assert!(err.to_string().starts_with("failed to parse site content"));
    }
}
