use chrono::{Datelike, Local};

use crate::content::{ContactKind, LinkStyle};

/// Skill category that gets the highlighted tag treatment.
pub const SECURITY_CATEGORY: &str = "Cybersecurity & Analysis";

/// Uppercases the first character and leaves the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagStyle {
    Default,
    Highlight,
}

impl TagStyle {
    pub fn for_category(label: &str) -> Self {
        if label == SECURITY_CATEGORY {
            TagStyle::Highlight
        } else {
            TagStyle::Default
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TagStyle::Default => "default",
            TagStyle::Highlight => "highlight",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            TagStyle::Default => {
                "bg-indigo-100 text-indigo-700 dark:bg-indigo-900 dark:text-indigo-200"
            }
            TagStyle::Highlight => {
                "bg-emerald-100 text-emerald-700 dark:bg-emerald-900 dark:text-emerald-200"
            }
        }
    }
}

pub fn button_class(style: LinkStyle) -> &'static str {
    match style {
        LinkStyle::Plain => "btn",
        LinkStyle::Primary => "btn-primary",
        LinkStyle::Secondary => "btn-secondary",
    }
}

pub fn icon_class(kind: ContactKind) -> &'static str {
    match kind {
        ContactKind::Email => "extra-email",
        ContactKind::Github => "devicon-github-plain",
        ContactKind::Linkedin => "devicon-linkedin-plain",
        ContactKind::Document => "extra-download",
    }
}

/// Year from the local clock.
pub fn current_year() -> i32 {
    Local::now().year()
}

pub fn copyright(year: i32, name: &str) -> String {
    format!("© {year} {name}. Built with Rust, Leptos, and Tailwind.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("about"), "About");
        assert_eq!(capitalize("education"), "Education");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize(""), "");
        // remainder is left as-is
        assert_eq!(capitalize("gitHub"), "GitHub");
        assert_eq!(capitalize("ßeta"), "SSeta");
    }

    #[test]
    fn test_tag_style_for_category() {
        assert_eq!(
            TagStyle::for_category("Cybersecurity & Analysis"),
            TagStyle::Highlight
        );
        assert_eq!(
            TagStyle::for_category("Programming Languages"),
            TagStyle::Default
        );
        // exact match only
        assert_eq!(
            TagStyle::for_category("cybersecurity & analysis"),
            TagStyle::Default
        );
        assert_ne!(TagStyle::Default.class(), TagStyle::Highlight.class());
    }

    #[test]
    fn test_tag_style_only_security_highlighted() {
        let portfolio = crate::content::load().unwrap();
        let highlighted = portfolio
            .skills
            .iter()
            .filter(|c| TagStyle::for_category(&c.label) == TagStyle::Highlight)
            .map(|c| c.label.as_str())
            .collect::<Vec<_>>();
        assert_eq!(highlighted, vec![SECURITY_CATEGORY]);
    }

    #[test]
    fn test_copyright_uses_current_year() {
        let year = Local::now().year();
        assert_eq!(current_year(), year);
        let line = copyright(current_year(), "Natasha Jha");
        assert_eq!(
            line,
            format!("© {year} Natasha Jha. Built with Rust, Leptos, and Tailwind.")
        );
        // stable across renders
        assert_eq!(line, copyright(current_year(), "Natasha Jha"));
    }

    #[test]
    fn test_button_and_icon_classes() {
        assert_eq!(button_class(LinkStyle::Primary), "btn-primary");
        assert_eq!(icon_class(ContactKind::Github), "devicon-github-plain");
    }
}
