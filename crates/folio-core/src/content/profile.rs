//! Static profile content for the hero, about, contact and footer sections

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub hero: Hero,
    pub about: About,
    pub contact: ContactInfo,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Hero {
    pub name: String,
    pub initials: String,
    pub headline: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct About {
    pub intro: String,
    #[serde(default)]
    pub story: Vec<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub timeline: Vec<Milestone>,
}

/// A skill with a proficiency percentage (0-100)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Milestone {
    pub year: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactInfo {
    pub intro: String,
    pub pitch: String,
    #[serde(default)]
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

/// A way to reach the owner (email, phone, location)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Channel {
    pub label: String,
    pub value: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Footer {
    pub blurb: String,
    #[serde(default)]
    pub quick_links: Vec<String>,
    #[serde(default)]
    pub services: Vec<String>,
    pub availability: String,
}

impl Footer {
    /// Copyright line for the given year
    pub fn copyright(owner: &str, year: i32) -> String {
        format!("© {year} {owner}. All rights reserved.")
    }
}
