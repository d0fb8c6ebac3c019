use std::fmt;

use crate::display::capitalize;

/// In-page sections. The nav bar links and the section wrappers are both
/// generated from this enum, so every link has exactly one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Education,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    /// Page order.
    pub const ALL: [SectionId; 6] = [
        SectionId::About,
        SectionId::Education,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Education => "education",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    /// Nav label.
    pub fn label(self) -> String {
        capitalize(self.anchor())
    }

    /// Section heading.
    pub fn title(self) -> &'static str {
        match self {
            SectionId::About => "About",
            SectionId::Education => "Education",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}
