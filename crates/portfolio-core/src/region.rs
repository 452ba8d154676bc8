//! Scroll-addressable page regions
//!
//! The page is a fixed, ordered list of sections. Declaration order is
//! document order and is also the tie-break order when two regions are
//! equally visible.

use crate::error::PortfolioError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named section of the portfolio page
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    Home,
    About,
    Experience,
    Education,
    Projects,
    Skills,
    Leadership,
    Contact,
}

impl Region {
    /// Number of regions on the page
    pub const COUNT: usize = 8;

    /// All regions in document order
    pub const ALL: [Region; Region::COUNT] = [
        Region::Home,
        Region::About,
        Region::Experience,
        Region::Education,
        Region::Projects,
        Region::Skills,
        Region::Leadership,
        Region::Contact,
    ];

    /// DOM element id of the section
    pub fn id(self) -> &'static str {
        match self {
            Region::Home => "home",
            Region::About => "about",
            Region::Experience => "experience",
            Region::Education => "education",
            Region::Projects => "projects",
            Region::Skills => "skills",
            Region::Leadership => "leadership",
            Region::Contact => "contact",
        }
    }

    /// Text shown on the navigation button
    pub fn nav_label(self) -> &'static str {
        match self {
            Region::Home => "Home",
            Region::About => "About",
            Region::Experience => "Experience",
            Region::Education => "Education",
            Region::Projects => "Projects",
            Region::Skills => "Skills",
            Region::Leadership => "Leadership",
            Region::Contact => "Contact",
        }
    }

    /// Position in document order, used to index the score table
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Region::index`]
    pub fn from_index(index: usize) -> Option<Region> {
        Region::ALL.get(index).copied()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Region {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .iter()
            .copied()
            .find(|region| region.id() == s.trim())
            .ok_or_else(|| PortfolioError::UnknownRegion(s.to_string()))
    }
}
