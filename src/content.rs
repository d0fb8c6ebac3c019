use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub const CONTENT_FILE: &str = "portfolio.json";

static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> = LazyLock::new(load);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("content file {0} is not embedded")]
    Missing(String),
    #[error("couldn't parse portfolio content: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub photo: String,
    pub subtitle: String,
    pub summary: String,
    /// Document title.
    pub title: String,
    /// Document meta description.
    pub description: String,
}

/// A run of inline text, optionally emphasised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    #[serde(default)]
    pub bold: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    /// Display string, never parsed.
    pub dates: String,
    pub description: String,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub logo: String,
    pub title: String,
    pub company: String,
    pub period: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub label: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    Github,
    Linkedin,
    Document,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStyle {
    #[default]
    Plain,
    Primary,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub style: LinkStyle,
}

impl ContactLink {
    /// Everything except mail-to links opens in a new browsing context.
    pub fn opens_new_context(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub blurb: String,
    pub links: Vec<ContactLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub about: Vec<TextRun>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: Vec<SkillCategory>,
    pub contact: ContactDetails,
}

impl Portfolio {
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        serde_json::from_str(raw).map_err(|e| ContentError::Parse(e.to_string()))
    }

    pub fn contact_link(&self, kind: ContactKind) -> Option<&ContactLink> {
        self.contact.links.iter().find(|l| l.kind == kind)
    }
}

/// Parses the embedded content file.
pub fn load() -> Result<Portfolio, ContentError> {
    let file =
        Assets::get(CONTENT_FILE).ok_or_else(|| ContentError::Missing(CONTENT_FILE.to_string()))?;
    let raw = std::str::from_utf8(&file.data).map_err(|e| ContentError::Parse(e.to_string()))?;
    Portfolio::from_json(raw)
}

/// The process-wide portfolio, parsed on first use.
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    PORTFOLIO.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let portfolio = load().expect("embedded content should parse");
        assert_eq!(portfolio.profile.name, "Natasha Jha");
        assert_eq!(portfolio.education.len(), 2);
        assert_eq!(portfolio.experience.len(), 2);
        assert_eq!(portfolio.projects.len(), 3);
        assert_eq!(portfolio.skills.len(), 5);
        assert_eq!(portfolio.contact.links.len(), 5);
    }

    #[test]
    fn test_cached_portfolio_matches_fresh_load() {
        let cached = portfolio().expect("cached content should parse");
        assert_eq!(*cached, load().unwrap());
        // same allocation on every call
        assert!(std::ptr::eq(cached, portfolio().unwrap()));
    }

    #[test]
    fn test_bullet_order_preserved() {
        let portfolio = load().unwrap();
        let viatris = &portfolio.experience[0];
        assert_eq!(viatris.company, "Viatris");
        assert!(viatris.bullets[0].starts_with("Studied Operational Technology"));
        assert!(viatris.bullets[3].starts_with("Gained exposure"));
    }

    #[test]
    fn test_email_link() {
        let portfolio = load().unwrap();
        let email = portfolio
            .contact_link(ContactKind::Email)
            .expect("there should be an email link");
        assert_eq!(email.label, "Email");
        assert_eq!(email.href, "mailto:natashajha06@gmail.com");
        assert!(!email.opens_new_context());
    }

    #[test]
    fn test_external_links_open_new_context() {
        let portfolio = load().unwrap();
        let external = portfolio
            .contact
            .links
            .iter()
            .filter(|l| l.kind != ContactKind::Email);
        for link in external {
            assert!(link.opens_new_context(), "{} should open externally", link.label);
        }
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let raw = r#"{ "kind": "github", "label": "GitHub", "href": "https://github.com" }"#;
        let link: ContactLink = serde_json::from_str(raw).unwrap();
        assert_eq!(link.style, LinkStyle::Plain);

        let run: TextRun = serde_json::from_str(r#"{ "text": "plain" }"#).unwrap();
        assert!(!run.bold);
    }

    #[test]
    fn test_malformed_content_is_parse_error() {
        let res = Portfolio::from_json("{ \"profile\": ");
        assert!(matches!(res, Err(ContentError::Parse(_))));

        let res = Portfolio::from_json("{}");
        assert!(matches!(res, Err(ContentError::Parse(_))));
    }
}
