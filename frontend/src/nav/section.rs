//! The fixed set of page sections that navigation can target.

use std::fmt;
use std::str::FromStr;

use super::error::NavError;

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SectionId {
    #[default]
    Home,
    Membership,
    Videos,
    Story,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::Membership,
        SectionId::Videos,
        SectionId::Story,
        SectionId::Contact,
    ];

    /// Element id of the section in the rendered page.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Membership => "membership",
            SectionId::Videos => "videos",
            SectionId::Story => "story",
            SectionId::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for SectionId {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|section| section.anchor() == s)
            .ok_or_else(|| NavError::UnknownSection(s.to_string()))
    }
}
