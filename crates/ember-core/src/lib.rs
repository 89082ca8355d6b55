//! Core types for the ember terminal portfolio.
//!
//! Shared by the particle field, the page renderer and the configuration
//! crate: colors, the brand palette, page sections and portfolio content.

mod color;
mod portfolio;
mod section;
mod theme;

pub use color::{ParseColorError, Rgb, Rgba};
pub use portfolio::{
    About, Contact, Experience, Heading, Headings, Portfolio, Profile, Project, Skill,
    SkillCategory, SocialLink, Stat,
};
pub use section::Section;
pub use theme::Theme;
